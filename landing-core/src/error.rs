use thiserror::Error;

/// Errors surfaced while binding or driving page behaviors.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("invalid landing config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("failed to serialize form record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("preference storage unavailable: {0}")]
    Storage(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl LandingError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = LandingError::missing("#contactForm");
        assert_eq!(err.to_string(), "required element not found: #contactForm");
    }
}
