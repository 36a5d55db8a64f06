//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::{Language, Res};

// All environment variables carry the `KIOSK` prefix applied in `load`.

/// Default OpenAI triage agent model to use
fn default_openai_triage_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Default sampling temperature for the triage agent
fn default_openai_triage_temperature() -> f32 {
    0.2
}

/// Default max output tokens for the triage agent
fn default_openai_max_tokens() -> u32 {
    1024
}

/// Default Vietnamese triage directive.
fn default_triage_directive_vi() -> String {
    prompts::default_triage_directive(Language::Vi).to_string()
}

/// Default English triage directive.
fn default_triage_directive_en() -> String {
    prompts::default_triage_directive(Language::En).to_string()
}

/// Default kiosk identifier stamped on booking payloads.
fn default_kiosk_id() -> String {
    "KIOSK_01".to_string()
}

/// Default kiosk display language.
fn default_language() -> Language {
    Language::Vi
}

/// Default simulated document scan duration.
fn default_document_scan_delay_ms() -> u64 {
    2500
}

/// Default simulated face scan duration.
fn default_face_scan_delay_ms() -> u64 {
    2000
}

/// Configuration for the check-in kiosk application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared configuration values; cheap to clone.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The configuration values, loadable from `kiosk.toml` or `KIOSK_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// OpenAI API key (`KIOSK_OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// OpenAI triage agent model to use (`KIOSK_OPENAI_TRIAGE_MODEL`).
    #[serde(default = "default_openai_triage_model")]
    pub openai_triage_model: String,
    /// Sampling temperature for the triage agent (`KIOSK_OPENAI_TRIAGE_TEMPERATURE`).
    /// Value between 0 and 2. Triage should stay focused, so the default is low.
    #[serde(default = "default_openai_triage_temperature")]
    pub openai_triage_temperature: f32,
    /// Max output tokens for the triage agent (`KIOSK_OPENAI_MAX_TOKENS`).
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Optional custom Vietnamese triage directive to override the default (`KIOSK_TRIAGE_DIRECTIVE_VI`).
    #[serde(default = "default_triage_directive_vi")]
    pub triage_directive_vi: String,
    /// Optional custom English triage directive to override the default (`KIOSK_TRIAGE_DIRECTIVE_EN`).
    #[serde(default = "default_triage_directive_en")]
    pub triage_directive_en: String,
    /// Kiosk identifier stamped on outbound booking payloads (`KIOSK_KIOSK_ID`).
    #[serde(default = "default_kiosk_id")]
    pub kiosk_id: String,
    /// Language the kiosk starts in (`KIOSK_DEFAULT_LANGUAGE`). Patients can toggle per session.
    #[serde(default = "default_language")]
    pub default_language: Language,
    /// Simulated document scan duration in milliseconds (`KIOSK_DOCUMENT_SCAN_DELAY_MS`).
    #[serde(default = "default_document_scan_delay_ms")]
    pub document_scan_delay_ms: u64,
    /// Simulated face scan duration in milliseconds (`KIOSK_FACE_SCAN_DELAY_MS`).
    #[serde(default = "default_face_scan_delay_ms")]
    pub face_scan_delay_ms: u64,
}

impl ConfigInner {
    /// Triage directive for the requested language.
    pub fn triage_directive(&self, language: Language) -> &str {
        match language {
            Language::Vi => &self.triage_directive_vi,
            Language::En => &self.triage_directive_en,
        }
    }
}

impl Config {
    /// Load and validate configuration from the environment, plus an
    /// optional TOML file (`kiosk.toml` by default).
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("KIOSK"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new("kiosk.toml").exists() {
            cfg = cfg.add_source(config::File::with_name("kiosk.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.openai_triage_temperature < 0.0 || result.openai_triage_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI triage temperature must be between 0 and 2."));
        }

        if result.openai_max_tokens < 1 || result.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_lookup_follows_language() {
        let config = Config {
            inner: Arc::new(ConfigInner {
                triage_directive_vi: default_triage_directive_vi(),
                triage_directive_en: default_triage_directive_en(),
                ..Default::default()
            }),
        };

        assert_eq!(config.triage_directive(Language::Vi), prompts::TRIAGE_DIRECTIVE_VI);
        assert_eq!(config.triage_directive(Language::En), prompts::TRIAGE_DIRECTIVE_EN);
    }

    #[test]
    fn load_reads_kiosk_prefixed_environment_variables() {
        unsafe {
            std::env::set_var("KIOSK_OPENAI_API_KEY", "env_key");
            std::env::set_var("KIOSK_KIOSK_ID", "KIOSK_07");
        }

        let config = Config::load(None).unwrap();

        assert_eq!(config.openai_api_key, "env_key");
        assert_eq!(config.kiosk_id, "KIOSK_07");
        // Untouched fields keep their serde defaults.
        assert_eq!(config.openai_triage_model, default_openai_triage_model());
    }
}
