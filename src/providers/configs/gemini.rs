use super::base::ProviderConfig;
use anyhow::Result;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_API_HOST: &str = "GEMINI_API_HOST";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";

pub const DEFAULT_HOST: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}

impl GeminiProviderConfig {
    pub fn new(api_key: String, host: String, model: String) -> Self {
        Self {
            host,
            api_key,
            model,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl ProviderConfig for GeminiProviderConfig {
    fn from_env() -> Result<Self> {
        let api_key = Self::get_env(GEMINI_API_KEY, true, None)?
            .ok_or_else(|| anyhow::anyhow!("Gemini API key should be present"))?;

        let host = Self::get_env(GEMINI_API_HOST, false, Some(DEFAULT_HOST.to_string()))?
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let model = Self::get_env(GEMINI_MODEL, false, Some(DEFAULT_MODEL.to_string()))?
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, host, model))
    }
}
