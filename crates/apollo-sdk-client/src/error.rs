//! Error types for the Apollo SDK transport

/// Errors surfaced by the Apollo Portal HTTP transport
#[derive(Debug, thiserror::Error)]
pub enum ApolloError {
    /// Network I/O failure, no usable response from the portal
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Portal answered with a non-2xx status; body is kept verbatim
    #[error("portal returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body does not match the expected JSON shape
    #[error("failed to decode portal response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApolloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApolloError::Http {
            status: 404,
            body: "namespace not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "portal returned status 404: namespace not found"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApolloError = json_err.into();
        assert!(matches!(err, ApolloError::Decode(_)));
    }
}
