use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SiteError, SiteResult};
use crate::render::SiteHost;

use super::{EngineSnapshot, SiteEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SiteResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| SiteError::InvalidData(format!("snapshot contract v1 serialization: {e}")))
    }

    /// Parses a versioned contract payload, or a bare snapshot when the input
    /// carries no `schema_version` field.
    pub fn from_json_compat_str(input: &str) -> SiteResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SiteError::InvalidData(format!("snapshot json is malformed: {e}")))?;

        let Some(version) = value.get("schema_version") else {
            return serde_json::from_value(value)
                .map_err(|e| SiteError::InvalidData(format!("bare snapshot json: {e}")));
        };
        if version.as_u64() != Some(u64::from(ENGINE_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(SiteError::InvalidData(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| SiteError::InvalidData(format!("snapshot contract v1 payload: {e}")))?;
        Ok(payload.snapshot)
    }
}

impl<H: SiteHost> SiteEngine<H> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> SiteResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
