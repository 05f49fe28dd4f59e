// apollo-sdk-core: item and namespace-release facade over the Apollo Portal OpenAPI

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod service;

pub use apollo_sdk_client::{ApolloError, ApolloHttpClient, ClientConfig};
pub use config::ApolloSdkSettings;
pub use error::{InvalidTarget, PublishError};
pub use model::{NamespaceTarget, OpenItem, OpenRelease};
pub use service::{ApolloConfigService, ConfigServiceCore};
