//! Wire models for the Apollo Portal OpenAPI

use serde::{Deserialize, Serialize};

use crate::error::InvalidTarget;

/// Remote configuration scope: one namespace of one app/env/cluster.
///
/// All four fields are non-empty; the constructor rejects blank input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceTarget {
    app_id: String,
    env: String,
    cluster: String,
    namespace: String,
}

impl NamespaceTarget {
    pub fn new(
        app_id: &str,
        env: &str,
        cluster: &str,
        namespace: &str,
    ) -> Result<Self, InvalidTarget> {
        for (field, value) in [
            ("appId", app_id),
            ("env", env),
            ("cluster", cluster),
            ("namespace", namespace),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidTarget { field });
            }
        }

        Ok(Self {
            app_id: app_id.to_string(),
            env: env.to_string(),
            cluster: cluster.to_string(),
            namespace: namespace.to_string(),
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// One configuration entry as exchanged with the OpenAPI (camelCase wire form)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenItem {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_change_created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_change_last_modified_by: Option<String>,
}

/// Release action payload for POST .../releases; not a persisted entity
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRelease {
    pub release_title: String,
    pub release_comment: String,
    pub released_by: String,
}
