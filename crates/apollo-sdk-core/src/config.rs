// Settings supplied by the embedding application

use serde::Deserialize;

use apollo_sdk_client::ClientConfig;

use crate::error::InvalidTarget;
use crate::model::NamespaceTarget;

/// Settings for the Apollo SDK, constructed explicitly by the embedding
/// application (or deserialized from its configuration file).
#[derive(Clone, Debug, Deserialize)]
pub struct ApolloSdkSettings {
    /// Base URL of the Apollo portal
    pub portal_url: String,
    /// OpenAPI access token; blank disables the Authorization header
    #[serde(default)]
    pub token: String,
    /// Application id the SDK operates on
    pub app_id: String,
    /// Environment name, e.g. DEV, TEST, PROD
    pub env: String,
    /// Cluster name (default: "default")
    #[serde(default = "default_cluster")]
    pub cluster: String,
    /// Namespace name (default: "application")
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Operator identity attributed to changes (default: "apollo")
    #[serde(default = "default_operator")]
    pub operator: String,
}

fn default_cluster() -> String {
    "default".to_string()
}

fn default_namespace() -> String {
    "application".to_string()
}

fn default_operator() -> String {
    "apollo".to_string()
}

impl Default for ApolloSdkSettings {
    fn default() -> Self {
        Self {
            portal_url: "http://127.0.0.1:8070".to_string(),
            token: String::new(),
            app_id: String::new(),
            env: String::new(),
            cluster: default_cluster(),
            namespace: default_namespace(),
            operator: default_operator(),
        }
    }
}

impl ApolloSdkSettings {
    /// Transport configuration derived from these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.portal_url).with_token(&self.token)
    }

    /// The namespace target these settings point at
    pub fn target(&self) -> Result<NamespaceTarget, InvalidTarget> {
        NamespaceTarget::new(&self.app_id, &self.env, &self.cluster, &self.namespace)
    }
}
