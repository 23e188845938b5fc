use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<T>: Send + 'static {
    fn serialize(&self, value: &T) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<T, String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<T> ConfigSerializer<T> for YamlConfigSerializer
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, value: &T) -> Result<String, String> {
        serde_yaml_ng::to_string(value).map_err(|e| format!("Failed to serialize: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<T, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize: {}", e))
    }
}
