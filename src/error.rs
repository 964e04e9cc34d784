use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("region `{region}` not found")]
    NotFound { region: String },

    #[error("inventory item `{item}` not found in region `{region}`")]
    ItemNotFound { region: String, item: String },

    #[error("unknown capacity field `{0}`")]
    UnknownField(String),

    #[error("quantity adjustment of {delta} would take `{item}` below zero (current {current})")]
    InvalidQuantity { item: String, current: u64, delta: i64 },

    #[error("{collaborator} unavailable: {reason}")]
    Upstream {
        collaborator: &'static str,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl EngineError {
    pub fn not_found(region: impl Into<String>) -> Self {
        EngineError::NotFound {
            region: region.into(),
        }
    }

    pub fn upstream(collaborator: &'static str, reason: impl Into<String>) -> Self {
        EngineError::Upstream {
            collaborator,
            reason: reason.into(),
        }
    }

    /// True for failures the engine could not have resolved locally.
    pub fn is_upstream(&self) -> bool {
        matches!(self, EngineError::Upstream { .. })
    }
}
