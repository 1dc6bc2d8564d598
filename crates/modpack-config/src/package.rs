//! The subset of `package.json` a build needs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl PackageMeta {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Read `package.json` from a project root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("package.json");
        if !path.exists() {
            return Err(ConfigError::PackageJsonNotFound(root.to_path_buf()));
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        })
    }

    /// Name usable as a file stem: `@scope/pkg` becomes `scope-pkg`.
    pub fn file_stem(&self) -> String {
        format_package_name(&self.name)
    }

    /// Global variable name derived from the package name: `@scope/my-lib`
    /// becomes `ScopeMyLib`.
    pub fn default_global(&self) -> String {
        self.file_stem()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect()
    }

    /// Header comment placed at the top of standalone bundles.
    pub fn banner(&self) -> String {
        let mut banner = format!("{} v{}", self.name, self.version);
        if let Some(homepage) = &self.homepage {
            banner.push_str(&format!(" - {}", homepage));
        }
        if let Some(license) = &self.license {
            banner.push_str(&format!("\n{} Licensed", license));
        }
        banner
    }
}

/// Strip the leading `@` of a scoped package and join scope and name with `-`.
pub fn format_package_name(name: &str) -> String {
    name.strip_prefix('@').unwrap_or(name).replacen('/', "-", 1)
}
