//! Error types for the facade layer

use apollo_sdk_client::ApolloError;

/// A namespace target field was blank
#[derive(Debug, thiserror::Error)]
#[error("namespace target field `{field}` must not be empty")]
pub struct InvalidTarget {
    pub field: &'static str,
}

/// Failure of the two-step publish-single workflow.
///
/// The workflow is not atomic: a `Release` failure means the item write
/// already went through and is left in place as a pending change.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The item write failed; the namespace was not touched
    #[error("item write failed: {0}")]
    Write(#[source] ApolloError),

    /// The item was written but the release failed; the change stays pending
    #[error("release failed after item write: {0}")]
    Release(#[source] ApolloError),
}
