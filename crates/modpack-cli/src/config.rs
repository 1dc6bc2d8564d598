//! Project configuration from `modpack.toml` / `package.json`.

use std::path::{Path, PathBuf};

use modpack_build::ConfigLoader;
use modpack_config::{ConfigDiscovery, PackageMeta, PluginConfig, ProjectConfig, UserConfig};

/// Loads the project file once and serves the build its pieces.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    root: PathBuf,
    project: ProjectConfig,
    extra_plugins: Vec<String>,
}

impl FileConfigLoader {
    /// Discover and load the configuration for `root`.
    ///
    /// `config_file` replaces discovery; `extra_plugins` are enabled in
    /// addition to the plugins listed in the file.
    pub fn load(
        root: &Path,
        config_file: Option<&Path>,
        extra_plugins: &[String],
    ) -> modpack_config::Result<Self> {
        let mut discovery = ConfigDiscovery::new(root);
        if let Some(file) = config_file {
            discovery = discovery.with_file(file);
        }

        Ok(Self {
            root: root.to_path_buf(),
            project: discovery.load()?,
            extra_plugins: extra_plugins.to_vec(),
        })
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_plugin_config(&self) -> modpack_config::Result<PluginConfig> {
        self.project.plugin_config(&self.extra_plugins)
    }

    fn load_user_config(&self, plugins: &PluginConfig) -> modpack_config::Result<UserConfig> {
        self.project.user_config(plugins)
    }

    fn load_package(&self) -> modpack_config::Result<PackageMeta> {
        PackageMeta::load(&self.root)
    }
}
