use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::timestamp::Timestamp;

/// Evergreen reference document linked from projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePolicyId(pub String);

impl Display for DuplicatePolicyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate policy id: {}", self.0)
    }
}

impl std::error::Error for DuplicatePolicyId {}

/// Policies keyed by id, in source order. Ids are unique by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyCatalog {
    entries: IndexMap<String, Policy>,
}

impl PolicyCatalog {
    pub fn from_policies(
        policies: impl IntoIterator<Item = Policy>,
    ) -> Result<Self, DuplicatePolicyId> {
        let mut entries = IndexMap::new();
        for policy in policies {
            if entries.contains_key(&policy.id) {
                return Err(DuplicatePolicyId(policy.id));
            }
            entries.insert(policy.id.clone(), policy);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Policy> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.entries.values()
    }
}

impl Serialize for PolicyCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de> Deserialize<'de> for PolicyCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let policies = Vec::<Policy>::deserialize(deserializer)?;
        Self::from_policies(policies).map_err(serde::de::Error::custom)
    }
}
