use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawSystemId", into = "String")]
pub struct SystemId(pub String);

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SystemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SystemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for SystemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<SystemId> for String {
    fn from(value: SystemId) -> Self {
        value.0
    }
}

// Inventories written by hand tend to use `id = 1` as often as `id = "nas-01"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSystemId {
    Text(String),
    Number(i64),
}

impl From<RawSystemId> for SystemId {
    fn from(raw: RawSystemId) -> Self {
        match raw {
            RawSystemId::Text(s) => Self(s),
            RawSystemId::Number(n) => Self(n.to_string()),
        }
    }
}

/// Health reported for a storage system.
///
/// The set of statuses is nominally closed, but anything the data source sends
/// outside of it is kept as `Unrecognized` instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    Unrecognized(String),
}

impl HealthStatus {
    /// Exact match on the lowercase wire names. Any other spelling,
    /// including `"Healthy"` or `" warning"`, is kept as `Unrecognized`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "healthy" => Self::Healthy,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<HealthStatus> for String {
    fn from(value: HealthStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSystem {
    pub id: SystemId,
    pub name: String,
    pub status: HealthStatus,
}

impl StorageSystem {
    pub fn new(id: impl Into<SystemId>, name: impl Into<String>, status: HealthStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }
}
