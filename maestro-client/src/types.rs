//! Domain types exposed by the client, plus the wire shapes they are decoded from.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Condition status string for a satisfied condition.
pub const CONDITION_TRUE: &str = "True";

// ============ Domain types ============

/// A named target to which work bundles are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    pub name: String,
}

/// One observed condition (`Applied`, `Available`, `Complete`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    pub message: String,
}

impl Condition {
    pub fn is_true(&self) -> bool {
        self.status == CONDITION_TRUE
    }
}

/// Aggregate health of a work bundle as shown in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkHealth {
    /// No conditions reported yet.
    Unknown,
    /// Both `Applied` and `Available` are `True`.
    Healthy,
    Degraded,
}

/// A work bundle as listed for one consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    pub id: String,
    pub name: String,
    pub consumer_name: String,
    pub conditions: Vec<Condition>,
}

impl WorkSummary {
    pub fn health(&self) -> WorkHealth {
        health_of(&self.conditions)
    }
}

/// Reference to one manifest carried by a work bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRef {
    pub kind: String,
    pub name: String,
    /// `None` for cluster-scoped resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Per-resource status reported by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub conditions: Vec<Condition>,
}

/// Full view of one work bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDetail {
    pub id: String,
    pub name: String,
    pub consumer_name: String,
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
    pub conditions: Vec<Condition>,
    pub manifests: Vec<ManifestRef>,
    pub resource_status: Vec<ResourceStatus>,
    /// The record as returned by the backend, used for the structured views.
    #[serde(skip)]
    pub raw: Value,
}

impl WorkDetail {
    pub fn health(&self) -> WorkHealth {
        health_of(&self.conditions)
    }

    /// Canonical pretty-printed JSON of the backend record.
    pub fn to_json(&self) -> ClientResult<String> {
        serde_json::to_string_pretty(&self.raw).map_err(|e| ClientError::Parse {
            detail: e.to_string(),
        })
    }

    /// Canonical YAML of the backend record.
    pub fn to_yaml(&self) -> ClientResult<String> {
        serde_yaml::to_string(&self.raw).map_err(|e| ClientError::Parse {
            detail: e.to_string(),
        })
    }
}

fn health_of(conditions: &[Condition]) -> WorkHealth {
    if conditions.is_empty() {
        return WorkHealth::Unknown;
    }
    let is_true = |t: &str| {
        conditions
            .iter()
            .any(|c| c.condition_type == t && c.is_true())
    };
    if is_true("Applied") && is_true("Available") {
        WorkHealth::Healthy
    } else {
        WorkHealth::Degraded
    }
}

// ============ Wire types ============

/// One page of a list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListPage<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireConsumer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<WireConsumer> for Consumer {
    fn from(c: WireConsumer) -> Self {
        // Consumers created without a name are addressed by id.
        let name = c.name.filter(|n| !n.is_empty()).unwrap_or_else(|| c.id.clone());
        Self { id: c.id, name }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResourceBundle {
    pub id: String,
    pub name: Option<String>,
    pub consumer_name: String,
    pub version: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub manifests: Vec<Value>,
    pub status: Option<BundleStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BundleStatus {
    #[serde(rename = "ReconcileStatus", alias = "reconcileStatus")]
    pub reconcile_status: Option<ReconcileStatus>,
    #[serde(rename = "ResourceStatus", alias = "resourceStatus")]
    pub resource_status: Vec<WireResourceStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ReconcileStatus {
    #[serde(rename = "Conditions", alias = "conditions")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireResourceStatus {
    #[serde(rename = "ResourceMeta", alias = "resourceMeta")]
    pub meta: ResourceMeta,
    #[serde(rename = "Conditions", alias = "conditions")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResourceMeta {
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

impl ResourceBundle {
    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.clone())
    }

    fn conditions(&self) -> Vec<Condition> {
        self.status
            .as_ref()
            .and_then(|s| s.reconcile_status.as_ref())
            .map(|r| r.conditions.clone())
            .unwrap_or_default()
    }

    pub fn into_summary(self, consumer_hint: &str) -> WorkSummary {
        WorkSummary {
            name: self.display_name(),
            conditions: self.conditions(),
            consumer_name: non_empty_or(self.consumer_name, consumer_hint),
            id: self.id,
        }
    }

    /// Builds the detail view; `raw` is the undecoded record it came from.
    pub fn into_detail(self, mut raw: Value) -> WorkDetail {
        if let Value::Object(map) = &mut raw {
            map.entry("consumer_name")
                .or_insert_with(|| Value::String(self.consumer_name.clone()));
        }

        let manifests = self.manifests.iter().map(manifest_ref).collect();
        let resource_status = self
            .status
            .as_ref()
            .map(|s| {
                s.resource_status
                    .iter()
                    .map(|rs| ResourceStatus {
                        kind: rs.meta.kind.clone(),
                        name: rs.meta.name.clone(),
                        namespace: none_if_empty(&rs.meta.namespace),
                        conditions: rs.conditions.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        WorkDetail {
            name: self.display_name(),
            conditions: self.conditions(),
            version: self.version,
            created_at: self.created_at.clone().unwrap_or_default(),
            updated_at: self.updated_at.clone().unwrap_or_default(),
            consumer_name: self.consumer_name,
            id: self.id,
            manifests,
            resource_status,
            raw,
        }
    }
}

fn manifest_ref(manifest: &Value) -> ManifestRef {
    let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();
    let metadata = manifest.get("metadata");
    ManifestRef {
        kind: text(manifest.get("kind")),
        name: text(metadata.and_then(|m| m.get("name"))),
        namespace: metadata
            .and_then(|m| m.get("namespace"))
            .and_then(Value::as_str)
            .and_then(none_if_empty),
    }
}

fn none_if_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
