use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plugins active for a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub plugins: Vec<PluginOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub name: String,

    /// Transpile options contributed by the plugin, merged before the
    /// project's own overrides
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub babel: Value,
}

impl PluginConfig {
    /// Add plugins named on the command line that the config file does not
    /// already describe.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || self.plugins.iter().any(|p| p.name == name) {
                continue;
            }
            self.plugins.push(PluginOptions {
                name: name.to_string(),
                babel: Value::Null,
            });
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name.as_str())
    }

    /// Transpile fragments in declaration order.
    pub fn babel_fragments(&self) -> impl Iterator<Item = &Value> {
        self.plugins.iter().map(|p| &p.babel).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_names_skips_duplicates_and_blanks() {
        let config = PluginConfig {
            plugins: vec![PluginOptions {
                name: "sass".to_string(),
                babel: json!({"plugins": ["x"]}),
            }],
        }
        .with_names(["sass", " ", "less"]);

        assert_eq!(config.names().collect::<Vec<_>>(), vec!["sass", "less"]);
        assert_eq!(config.babel_fragments().count(), 1);
    }
}
