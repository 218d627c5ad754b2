/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 04/09/2026
Last Modified: 14/10/2026
License: MIT
*/

use crate::environments::{EnvironmentSetting, EnvironmentSettings};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A structure to hold persistent settings. Backed by settings.json file in the current directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configs {
    pub verbose_mode: bool,
    pub working_directory: String,
    #[serde(default = "default_python")]
    pub python_executable: String,
    /// Default environment values, keyed by engine name.
    #[serde(default)]
    pub environments: BTreeMap<String, String>,
}

fn default_python() -> String {
    if cfg!(target_os = "windows") {
        "python.exe".to_string()
    } else {
        "python3".to_string()
    }
}

impl Configs {
    pub fn new() -> Configs {
        Configs {
            verbose_mode: false,
            working_directory: String::new(),
            python_executable: default_python(),
            environments: BTreeMap::new(),
        }
    }

    /// The environment values to apply; the working directory stands in
    /// for the workspace unless one is configured.
    pub fn environment_settings(&self) -> Result<EnvironmentSettings> {
        let mut settings = EnvironmentSettings::from_map(&self.environments)?;
        if !self.working_directory.is_empty() {
            settings.set_default(EnvironmentSetting::Workspace, &self.working_directory);
        }
        Ok(settings)
    }
}

impl Default for Configs {
    fn default() -> Configs {
        Configs::new()
    }
}

pub fn config_file() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join("settings.json"))
}

pub fn get_configs() -> Result<Configs> {
    read_configs(&config_file()?)
}

pub fn save_configs(configs: &Configs) -> Result<()> {
    write_configs(&config_file()?, configs)
}

/// Reads settings from `path`. A missing file gives the defaults.
pub fn read_configs(path: &Path) -> Result<Configs> {
    let configs = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)?,
        Err(_) => {
            debug!(path = %path.display(), "no settings file; using defaults");
            Configs::new()
        }
    };
    Ok(configs)
}

pub fn write_configs(path: &Path, configs: &Configs) -> Result<()> {
    let configs_json = serde_json::to_string_pretty(configs)?;
    fs::write(path, configs_json)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::GpError;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let configs = read_configs(&dir.path().join("settings.json")).unwrap();
        assert_eq!(configs, Configs::new());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut configs = Configs::new();
        configs.verbose_mode = true;
        configs.working_directory = "C:/data/".to_string();
        configs
            .environments
            .insert("referenceScale".to_string(), "50000".to_string());
        write_configs(&path, &configs).unwrap();
        assert_eq!(read_configs(&path).unwrap(), configs);
    }

    #[test]
    fn test_older_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"verbose_mode": false, "working_directory": "/tmp/"}"#).unwrap();
        let configs = read_configs(&path).unwrap();
        assert_eq!(configs.python_executable, default_python());
        assert!(configs.environments.is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_configs(&path), Err(GpError::Json(_))));
    }

    #[test]
    fn test_environment_settings() {
        let mut configs = Configs::new();
        configs.working_directory = "/data/".to_string();
        let envs = configs.environment_settings().unwrap();
        assert_eq!(envs.get(EnvironmentSetting::Workspace), Some("/data/"));

        configs
            .environments
            .insert("workspace".to_string(), "/gdb/city.gdb".to_string());
        let envs = configs.environment_settings().unwrap();
        assert_eq!(envs.get(EnvironmentSetting::Workspace), Some("/gdb/city.gdb"));
    }
}
