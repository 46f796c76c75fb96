use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartEngineConfig;

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

impl ChartEngineConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = EngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a versioned envelope or a bare config object, then validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: EngineConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
                })?;
            if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<ChartEngineConfig>(value)
                .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}
