use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Optional TOML configuration file:
///
/// ```toml
/// [store]
/// base_url = "https://reservas.example.com"
///
/// [ui]
/// date = "2024-05-01"
/// tick_rate_ms = 100
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub store: Option<StoreSection>,
    pub ui: Option<UiSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub date: Option<String>,
    pub tick_rate_ms: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| AppError::InvalidConfigValue {
            field: "config".to_string(),
            value: path.to_string(),
            reason: format!("Invalid TOML: {}", e),
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.base_url.as_deref())
    }

    pub fn date(&self) -> Option<&str> {
        self.ui.as_ref().and_then(|u| u.date.as_deref())
    }

    pub fn tick_rate_ms(&self) -> Option<u64> {
        self.ui.as_ref().and_then(|u| u.tick_rate_ms)
    }
}
