use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    AnswerStore, ApiError, Assessment, ScoringService, Snapshot, assemble, interpret, validate,
};

/// One user's screening session.
///
/// Clones share the same store. Submitting holds the store lock from the
/// snapshot until the backend has answered, so a concurrent [`reset`] (e.g.
/// on sign-out) runs strictly before or strictly after a submission.
///
/// [`reset`]: Session::reset
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: Arc<Mutex<AnswerStore>>,
}

impl Session {
    pub fn new(store: AnswerStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub async fn update<R>(&self, f: impl FnOnce(&mut AnswerStore) -> R) -> R {
        let mut store = self.store.lock().await;
        f(&mut store)
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.store.lock().await.snapshot()
    }

    /// Clear every answer, waiting for any in-flight submission first.
    pub async fn reset(&self) {
        self.store.lock().await.reset();
        debug!("session reset");
    }

    /// Validate, assemble and submit the current answers.
    ///
    /// # Returns
    /// * `Ok(assessment)` if the backend scored the survey
    /// * `Err(ApiError::Validation)` if the answers are incomplete; the
    ///   service is not called
    /// * any error the service reports
    ///
    /// The store is left as it was in every case.
    pub async fn submit<S>(&self, service: &S, auth_token: &str) -> Result<Assessment, ApiError>
    where
        S: ScoringService,
    {
        let store = self.store.lock().await;
        let snapshot = store.snapshot();

        let valid = validate(&snapshot).map_err(|violations| {
            debug!(count = violations.len(), "answers failed validation");
            ApiError::Validation(violations)
        })?;
        let payload = assemble(&valid, valid.external_signal());

        let outcome = service.submit(&payload, auth_token).await;
        drop(store);

        match outcome {
            Ok(result) => {
                info!(survey_id = ?result.survey_id, "survey submitted");
                Ok(interpret(result))
            }
            Err(err) => {
                warn!(error = %err, "survey submission failed");
                Err(err)
            }
        }
    }
}
