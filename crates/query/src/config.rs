use serde::{Deserialize, Serialize};

/// How a façade treats an empty required input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Answer with [`QueryOutcome::Skipped`](crate::QueryOutcome::Skipped)
    /// and do not touch the backend.
    Skip,
    /// Fail with [`QueryError::EmptyInput`](crate::QueryError::EmptyInput).
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacadeConfig {
    /// Treatment of empty required inputs.
    pub empty_input: EmptyInputPolicy,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Skip,
        }
    }
}

impl FacadeConfig {
    /// Config that rejects empty required inputs instead of skipping.
    pub fn strict() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Error,
        }
    }
}
