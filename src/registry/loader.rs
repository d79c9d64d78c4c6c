// Fri Jan 16 2026 - Alex

use super::error::{RegistryError, RegistryResult};
use super::{ToolRegistry, ToolSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a registry: `{"tools": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    pub tools: Vec<ToolSpec>,
}

impl RegistryFile {
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RegistryError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => {
                let contents = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            _ => Err(RegistryError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RegistryResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        Ok(())
    }

    pub fn into_registry(self) -> RegistryResult<ToolRegistry> {
        ToolRegistry::new(self.tools)
    }
}

impl From<&ToolRegistry> for RegistryFile {
    fn from(registry: &ToolRegistry) -> Self {
        Self {
            tools: registry.tools().to_vec(),
        }
    }
}

/// Loads and validates a registry file.
pub fn load_registry<P: AsRef<Path>>(path: P) -> RegistryResult<ToolRegistry> {
    RegistryFile::load(path)?.into_registry()
}
