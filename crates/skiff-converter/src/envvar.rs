// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable conversions.

use skiff_api::{
    ConfigurationEnvironmentVariable, EnvironmentVariable, EnvironmentVariableAdmission,
    UserEnvironmentVariable,
};
use skiff_protocol::{ProjectEnvVar, UserEnvVarValue, WorkspaceContext};

use crate::ApiConverter;

impl ApiConverter {
    /// Ephemeral name/value pairs attached to a workspace context.
    #[must_use]
    pub fn to_environment_variables(
        &self,
        context: &WorkspaceContext,
    ) -> Vec<EnvironmentVariable> {
        context
            .env_vars()
            .iter()
            .map(|var| EnvironmentVariable {
                name: var.name.clone(),
                value: var.value.clone(),
            })
            .collect()
    }

    /// A user-scoped environment variable.
    #[must_use]
    pub fn to_user_environment_variable(&self, var: &UserEnvVarValue) -> UserEnvironmentVariable {
        UserEnvironmentVariable {
            id: var.id.clone().unwrap_or_default(),
            name: var.name.clone(),
            value: var.value.clone(),
            repository_pattern: var.repository_pattern.clone(),
        }
    }

    /// A configuration-scoped environment variable.
    ///
    /// The stored value never crosses this boundary; only the admission
    /// level derived from the `censored` flag does.
    #[must_use]
    pub fn to_configuration_environment_variable(
        &self,
        var: &ProjectEnvVar,
    ) -> ConfigurationEnvironmentVariable {
        ConfigurationEnvironmentVariable {
            id: var.id.clone(),
            configuration_id: var.project_id.clone(),
            name: var.name.clone(),
            admission: if var.censored {
                EnvironmentVariableAdmission::Prebuild
            } else {
                EnvironmentVariableAdmission::WorkspaceConfig
            },
        }
    }
}
