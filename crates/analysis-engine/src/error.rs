//! Error types for the analysis pipeline

use std::any::Any;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A rule or the extractor panicked mid-analysis
    #[error("{0}")]
    Panicked(String),
}

impl AnalysisError {
    /// Recover the message carried by a panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown error".to_string()
        };
        AnalysisError::Panicked(message)
    }
}
