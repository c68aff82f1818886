//! Infrastructure implementation of the `SlotStore` port.

use anyhow::{Context, Result};
use deskcloud_common::CloudConfig;
use std::path::PathBuf;

use crate::application::ports::SlotStore;

/// Environment variable overriding the slot file location.
pub const CONFIG_ENV: &str = "DESKCLOUD_CONFIG";

/// Production implementation of `SlotStore` that uses a YAML file on disk.
///
/// Without an explicit path the file is taken from `DESKCLOUD_CONFIG`, then
/// `~/.deskcloud/slots.yaml`.
#[derive(Debug, Clone, Default)]
pub struct YamlSlotStore {
    path: Option<PathBuf>,
}

impl YamlSlotStore {
    /// Store bound to a fixed file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl SlotStore for YamlSlotStore {
    fn load(&self) -> Result<CloudConfig> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no slot file, starting empty");
            return Ok(CloudConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn save(&self, config: &CloudConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize slot file")?;
        std::fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".deskcloud").join("slots.yaml"))
    }
}
