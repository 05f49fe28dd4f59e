//! Item and release operations over the portal transport
//!
//! [`ConfigServiceCore`] translates namespace/item intents into OpenAPI
//! calls; [`ApolloConfigService`] binds it to the settings-provided default
//! target and operator.

use tracing::{debug, info};

use apollo_sdk_client::{ApolloError, ApolloHttpClient};

use crate::config::ApolloSdkSettings;
use crate::constants::openapi_path;
use crate::error::PublishError;
use crate::model::{NamespaceTarget, OpenItem, OpenRelease};

/// Namespace/item facade over the Apollo Portal OpenAPI
pub struct ConfigServiceCore {
    client: ApolloHttpClient,
}

impl ConfigServiceCore {
    /// Create a facade over an existing transport
    pub fn new(client: ApolloHttpClient) -> Self {
        Self { client }
    }

    /// Fetch one item and return its value
    pub async fn get_item(
        &self,
        target: &NamespaceTarget,
        key: &str,
    ) -> Result<String, ApolloError> {
        let body = self.client.get(&openapi_path::item(target, key)).await?;
        let item: OpenItem = serde_json::from_str(&body)?;
        Ok(item.value)
    }

    /// Write one item into the namespace, attributing it to `operator`.
    ///
    /// The change stays pending until the namespace is released.
    pub async fn create_item(
        &self,
        target: &NamespaceTarget,
        key: &str,
        value: &str,
        comment: &str,
        operator: &str,
    ) -> Result<(), ApolloError> {
        let item = OpenItem {
            key: key.to_string(),
            value: value.to_string(),
            comment: Some(comment.to_string()),
            data_change_created_by: Some(operator.to_string()),
            data_change_last_modified_by: Some(operator.to_string()),
        };
        let body = serde_json::to_string(&item)?;
        self.client
            .post(&openapi_path::items(target), &body)
            .await?;
        Ok(())
    }

    /// Write one item and release the owning namespace, strictly in that
    /// order.
    ///
    /// Not atomic: if the release fails after the write succeeded, the item
    /// is left in place as a pending change and the error says so. The
    /// release is never attempted when the write fails.
    pub async fn publish_single(
        &self,
        target: &NamespaceTarget,
        key: &str,
        value: &str,
        comment: &str,
        operator: &str,
    ) -> Result<(), PublishError> {
        debug!(key, namespace = target.namespace(), "publishing single item");

        self.create_item(target, key, value, comment, operator)
            .await
            .map_err(PublishError::Write)?;

        let title = format!("{key}-release");
        self.publish_namespace(target, &title, comment, operator)
            .await
            .map_err(PublishError::Release)?;

        Ok(())
    }

    /// Delete one item. Does not release the namespace; the deletion stays
    /// pending until an explicit release.
    pub async fn delete_item(
        &self,
        target: &NamespaceTarget,
        key: &str,
        operator: &str,
    ) -> Result<(), ApolloError> {
        self.client
            .delete(&openapi_path::item_delete(target, key, operator))
            .await?;
        Ok(())
    }

    /// List the namespace's items in the order the portal returns them.
    /// An empty namespace yields an empty list.
    pub async fn list_namespace_items(
        &self,
        target: &NamespaceTarget,
    ) -> Result<Vec<OpenItem>, ApolloError> {
        let body = self.client.get(&openapi_path::items(target)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Release the namespace, making pending item changes visible
    pub async fn publish_namespace(
        &self,
        target: &NamespaceTarget,
        title: &str,
        comment: &str,
        operator: &str,
    ) -> Result<(), ApolloError> {
        let release = OpenRelease {
            release_title: title.to_string(),
            release_comment: comment.to_string(),
            released_by: operator.to_string(),
        };
        let body = serde_json::to_string(&release)?;
        self.client
            .post(&openapi_path::releases(target), &body)
            .await?;
        Ok(())
    }
}

/// Settings-bound facade: same operations against the configured default
/// target, attributed to the configured operator.
pub struct ApolloConfigService {
    core: ConfigServiceCore,
    target: NamespaceTarget,
    operator: String,
}

impl ApolloConfigService {
    /// Build the transport and facade from application settings
    pub fn from_settings(settings: &ApolloSdkSettings) -> anyhow::Result<Self> {
        let target = settings.target()?;
        let client = ApolloHttpClient::new(settings.client_config())?;
        Ok(Self {
            core: ConfigServiceCore::new(client),
            target,
            operator: settings.operator.clone(),
        })
    }

    /// Wrap an existing core with a fixed target and operator
    pub fn new(core: ConfigServiceCore, target: NamespaceTarget, operator: String) -> Self {
        Self {
            core,
            target,
            operator,
        }
    }

    pub fn target(&self) -> &NamespaceTarget {
        &self.target
    }

    pub async fn publish_single(
        &self,
        key: &str,
        value: &str,
        comment: &str,
    ) -> Result<(), PublishError> {
        info!(key, "publishing item");
        self.core
            .publish_single(&self.target, key, value, comment, &self.operator)
            .await
    }

    pub async fn get_item(&self, key: &str) -> Result<String, ApolloError> {
        self.core.get_item(&self.target, key).await
    }

    pub async fn delete_item(&self, key: &str) -> Result<(), ApolloError> {
        info!(key, "deleting item");
        self.core.delete_item(&self.target, key, &self.operator).await
    }

    pub async fn list_items(&self) -> Result<Vec<OpenItem>, ApolloError> {
        self.core.list_namespace_items(&self.target).await
    }

    pub async fn release(&self, title: &str, comment: &str) -> Result<(), ApolloError> {
        info!(title, "releasing namespace");
        self.core
            .publish_namespace(&self.target, title, comment, &self.operator)
            .await
    }
}
