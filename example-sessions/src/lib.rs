pub mod high_risk;
pub mod results;
pub mod typical;
pub mod wearable;

// Re-export typical types
pub use typical::{
    typical_demographics, typical_medical_history, typical_store, typical_survey_responses,
};

// Re-export high_risk types
pub use high_risk::{high_risk_demographics, high_risk_store, high_risk_survey_responses};

// Re-export wearable types
pub use wearable::{WEARABLE_SYNC_TIME, wearable_signal, wearable_source};

// Re-export results types
pub use results::{high_risk_result, scored_result};
