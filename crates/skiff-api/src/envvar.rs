// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable messages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where a configuration-level variable is allowed to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum EnvironmentVariableAdmission {
    #[default]
    #[serde(rename = "ENVIRONMENT_VARIABLE_ADMISSION_UNSPECIFIED")]
    Unspecified,
    /// Prebuilds only; the value never reaches an interactive workspace.
    #[serde(rename = "ENVIRONMENT_VARIABLE_ADMISSION_PREBUILD")]
    Prebuild,
    #[serde(rename = "ENVIRONMENT_VARIABLE_ADMISSION_WORKSPACE_CONFIG")]
    WorkspaceConfig,
}

/// A name/value pair attached to a workspace at creation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

/// A user-scoped variable, applied to repositories matching the pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserEnvironmentVariable {
    pub id: String,
    pub name: String,
    pub value: String,
    pub repository_pattern: String,
}

/// A configuration-scoped variable. The value itself is never published.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationEnvironmentVariable {
    pub id: String,
    pub configuration_id: String,
    pub name: String,
    pub admission: EnvironmentVariableAdmission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_tokens() {
        let v = serde_json::to_value(EnvironmentVariableAdmission::Prebuild).unwrap();
        assert_eq!(v, "ENVIRONMENT_VARIABLE_ADMISSION_PREBUILD");
        let v = serde_json::to_value(EnvironmentVariableAdmission::WorkspaceConfig).unwrap();
        assert_eq!(v, "ENVIRONMENT_VARIABLE_ADMISSION_WORKSPACE_CONFIG");
    }

    #[test]
    fn configuration_variable_uses_camel_case() {
        let var = ConfigurationEnvironmentVariable {
            id: "1".into(),
            configuration_id: "1".into(),
            name: "FOO".into(),
            admission: EnvironmentVariableAdmission::Prebuild,
        };
        let v = serde_json::to_value(&var).unwrap();
        assert_eq!(v["configurationId"], "1");
        assert!(v.get("configuration_id").is_none());
    }
}
