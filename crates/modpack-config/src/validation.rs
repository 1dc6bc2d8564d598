//! Logical validation of loaded configuration.

use crate::error::{ConfigError, Result};
use crate::plugin::PluginConfig;
use crate::user::UserConfig;

/// Validate a global name follows JavaScript identifier rules.
pub fn validate_global_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(ConfigError::InvalidValue {
            field: "npm.umd.global".to_string(),
            hint: Some("Global name cannot be empty".to_string()),
        });
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(ConfigError::InvalidValue {
            field: "npm.umd.global".to_string(),
            hint: Some(format!(
                "Must start with letter, underscore, or dollar sign (got '{}')",
                first
            )),
        });
    }

    for c in name.chars() {
        if !c.is_alphanumeric() && c != '_' && c != '$' {
            return Err(ConfigError::InvalidValue {
                field: "npm.umd.global".to_string(),
                hint: Some(format!("Invalid character '{}' in identifier", c)),
            });
        }
    }

    Ok(())
}

impl UserConfig {
    pub fn validate(&self) -> Result<()> {
        let Some(umd) = self.npm.umd() else {
            return Ok(());
        };

        if let Some(global) = &umd.global {
            validate_global_name(global)?;
        }

        if let Some(entry) = &umd.entry {
            if entry.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "npm.umd.entry cannot be empty".to_string(),
                    hint: Some("Remove the field to use src/index.js".to_string()),
                });
            }
        }

        for (module, global) in &umd.externals {
            if module.trim().is_empty() || global.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("invalid external mapping '{}' = '{}'", module, global),
                    hint: Some(
                        "Externals map a module id to the global it is exposed as, e.g. react = \"React\""
                            .to_string(),
                    ),
                });
            }
        }

        Ok(())
    }
}

impl PluginConfig {
    pub fn validate(&self) -> Result<()> {
        for plugin in &self.plugins {
            if plugin.name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "plugin name cannot be empty".to_string(),
                    hint: Some("Give every [[plugins]] entry a name".to_string()),
                });
            }
            if !plugin.babel.is_null() && !plugin.babel.is_object() {
                return Err(ConfigError::InvalidValue {
                    field: format!("plugins.{}.babel", plugin.name),
                    hint: Some("Plugin transpile options must be a table".to_string()),
                });
            }
        }
        Ok(())
    }
}
