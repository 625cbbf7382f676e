use reqwest::{Client, RequestBuilder, StatusCode, Url};
use screening::{
    ApiError, ApiResponse, AuthResponse, LoginRequest, ScoringService, SignUpRequest,
    SubmissionPayload, SubmissionResult, User,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classify::{Envelope, classify};
use crate::{ClientConfig, ConfigError};

/// HTTP client for the screening backend.
///
/// Cheap to clone; clones share one connection pool. Every call makes a
/// single attempt bounded by the configured timeouts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base: Url,
}

/// `GET /auth/verify` answers with the user under `user`; older deployments
/// wrap it in `data`.
#[derive(Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    data: Option<User>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl Envelope for VerifyResponse {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base: config.base()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `POST /survey/submit`.
    pub async fn submit_survey(
        &self,
        payload: &SubmissionPayload,
        auth_token: &str,
    ) -> Result<SubmissionResult, ApiError> {
        let request = self
            .post("survey/submit", payload)?
            .bearer_auth(auth_token);

        match self.execute::<SubmissionResult>(request).await {
            Ok(result) => {
                info!(survey_id = ?result.survey_id, "survey accepted by backend");
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, "survey submission rejected");
                Err(err)
            }
        }
    }

    /// `POST /auth/signup`.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        debug!(email = %request.email, "signing up");
        self.execute(self.post("auth/signup", request)?).await
    }

    /// `POST /auth/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        debug!(email, "logging in");
        self.execute(self.post("auth/login", &request)?).await
    }

    /// `POST /auth/logout`. Invalidates `auth_token` on the backend.
    pub async fn logout(&self, auth_token: &str) -> Result<(), ApiError> {
        let request = self.http.post(self.url("auth/logout")?).bearer_auth(auth_token);
        self.execute::<ApiResponse<serde_json::Value>>(request)
            .await
            .map(drop)
    }

    /// `GET /auth/verify`. The user `auth_token` belongs to.
    pub async fn verify_token(&self, auth_token: &str) -> Result<User, ApiError> {
        let request = self.http.get(self.url("auth/verify")?).bearer_auth(auth_token);
        let response: VerifyResponse = self.execute(request).await?;
        response
            .user
            .or(response.data)
            .ok_or_else(|| ApiError::Application("verify response carried no user".to_string()))
    }

    /// `GET /survey/get-latest`. `None` when the user has not submitted yet.
    pub async fn latest_survey(
        &self,
        auth_token: &str,
    ) -> Result<Option<SubmissionResult>, ApiError> {
        let request = self
            .http
            .get(self.url("survey/get-latest")?)
            .bearer_auth(auth_token);

        match self.execute::<ApiResponse<SubmissionResult>>(request).await {
            Ok(response) => Ok(response.data),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// `GET /health`. Any 2xx counts as healthy; the body is ignored.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url("health")?)
            .send()
            .await
            .map_err(ApiError::io)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let reason = status.canonical_reason().unwrap_or("unhealthy");
            Err(ApiError::transport(status.as_u16(), reason))
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::io)
    }

    fn post(&self, path: &str, body: &impl Serialize) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.post(self.url(path)?).json(body))
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Envelope,
    {
        let response = request.send().await.map_err(ApiError::io)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::io)?;
        debug!(status = status.as_u16(), bytes = body.len(), "backend responded");
        classify(status, &body)
    }
}

impl ScoringService for HttpClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
        auth_token: &str,
    ) -> Result<SubmissionResult, ApiError> {
        self.submit_survey(payload, auth_token).await
    }
}
