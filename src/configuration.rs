use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!("unknown output format: {} (expected json or text)", s)),
        }
    }
}

// Env overrides arrive in whatever case the operator typed.
impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub output: OutputFormat,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Defaults, then an optional `digitfy.{yaml,toml,json}` in the working
    // directory, then DIGITFY__* environment variables.
    let settings = config::Config::builder()
        .set_default("log_level", "warn")?
        .set_default("output", "text")?
        .add_source(config::File::with_name("digitfy").required(false))
        .add_source(
            config::Environment::with_prefix("DIGITFY")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_ignores_case() {
        for raw in ["\"json\"", "\"JSON\"", "\"Json\""] {
            let format: OutputFormat = serde_json::from_str(raw).unwrap();
            assert_eq!(format, OutputFormat::Json);
        }
        let format: OutputFormat = serde_json::from_str("\"TEXT\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_rejects_unknown_value() {
        let err = serde_json::from_str::<OutputFormat>("\"xml\"").unwrap_err();
        assert!(err.to_string().contains("unknown output format: xml"));
    }
}
