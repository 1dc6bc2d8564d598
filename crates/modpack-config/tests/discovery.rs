//! Tests for loading project configuration from disk.

use modpack_config::{ConfigDiscovery, UmdConfig};
use serde_json::json;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn missing_config_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = ConfigDiscovery::new(dir.path()).load().expect("load");

    let plugins = config.plugin_config::<&str>(&[]).expect("plugins");
    let user = config.user_config(&plugins).expect("user config");
    assert!(user.npm.cjs_enabled());
    assert!(user.npm.es_modules_enabled());
    assert!(!user.umd_enabled());
}

#[test]
#[serial]
fn loads_toml_with_umd_and_build_fragments() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("modpack.toml"),
        r#"
terser = false

[npm]
esModules = false

[npm.umd]
global = "Widgets"
externals = { react = "React", "react-dom" = "ReactDOM" }

[build.base]
presets = ["env"]

[build.base.env]
loose = true

[build.prod.env]
loose = false
"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    let user = config
        .user_config(&config.plugin_config::<&str>(&[]).unwrap())
        .expect("user config");

    assert!(!user.minify_enabled());
    assert!(!user.npm.es_modules_enabled());
    let umd: UmdConfig = user.npm.umd().expect("umd enabled");
    assert_eq!(umd.global.as_deref(), Some("Widgets"));
    assert_eq!(
        umd.externals.keys().collect::<Vec<_>>(),
        vec!["react", "react-dom"]
    );

    assert_eq!(
        config.build.standalone_prod(),
        json!({"presets": ["env"], "env": {"loose": false}})
    );
}

#[test]
#[serial]
fn loads_package_json_field() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{"name": "widgets", "modpack": {"npm": {"cjs": false, "umd": "Widgets"}}}"#,
    )
    .expect("write package.json");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert!(!config.npm.cjs_enabled());
    assert_eq!(
        config.npm.umd().and_then(|u| u.global),
        Some("Widgets".to_string())
    );
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("modpack.toml"), "[npm]\ncjs = true\n").expect("write config");

    unsafe { env::set_var("MODPACK_NPM__CJS", "false") };
    let config = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("MODPACK_NPM__CJS") };

    assert!(!config.expect("load").npm.cjs_enabled());
}

#[test]
#[serial]
fn environment_overrides_camel_case_keys() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("modpack.toml"), "[npm]\nesModules = true\n").expect("write config");

    unsafe { env::set_var("MODPACK_NPM__ESMODULES", "false") };
    let config = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("MODPACK_NPM__ESMODULES") };

    let config = config.expect("load");
    assert_eq!(config.npm.es_modules, Some(false));
    assert!(!config.npm.es_modules_enabled());
}

#[test]
#[serial]
fn invalid_global_is_rejected_when_building_user_config() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("modpack.toml"), "[npm]\numd = \"my-lib\"\n").expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    let plugins = config.plugin_config::<&str>(&[]).unwrap();
    assert!(config.user_config(&plugins).is_err());
}

#[test]
#[serial]
fn wrong_field_type_is_a_load_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("modpack.toml"), "[npm]\ncjs = \"sometimes\"\n").expect("write config");

    assert!(ConfigDiscovery::new(dir.path()).load().is_err());
}
