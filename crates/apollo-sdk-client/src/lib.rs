// apollo-sdk-client: HTTP transport for the Apollo Portal OpenAPI

pub mod error;
pub mod http;

pub use error::ApolloError;
pub use http::{ApolloHttpClient, ClientConfig};
