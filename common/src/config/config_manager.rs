use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a validated config once and caches it. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfig, TProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TConfig: Clone + Default + Validate + Serialize + for<'de> Deserialize<'de>,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + Default + Validate + Serialize + for<'de> Deserialize<'de>,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfig, TProvider, TSerializer> ConfigManager<TConfig, TProvider, TSerializer>
where
    TConfig: Clone + Default + Validate + Serialize + for<'de> Deserialize<'de>,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}
