//! Runtime settings for the lookup engine and the HTTP server.
//!
//! Two sections, both required:
//!
//! ```toml
//! [suggest]
//! default_limit = 20   # used when a request asks for <= 0 suggestions
//! max_limit = 100      # hard cap on any request
//!
//! [server]
//! addr = "0.0.0.0:8080"
//! dict_path = "dictionary.wbk"
//! static_dir = "static"  # optional; "" disables the frontend
//! ```
//!
//! The embedded defaults come from `default_settings.toml`
//! (`wordtool settings-export` prints them). A replacement file passed to
//! `wordbook-server --config` is validated and installed through
//! [`init_custom`], which has to run before the first [`settings`] call.

use std::net::SocketAddr;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::suggest::SuggestLimits;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggest: SuggestSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl SuggestSettings {
    pub fn limits(&self) -> SuggestLimits {
        SuggestLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub addr: String,
    pub dict_path: String,
    /// Empty string disables static file serving.
    #[serde(default)]
    pub static_dir: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(suggest.default_limit);
    check_positive_usize!(suggest.max_limit);
    if s.suggest.default_limit > s.suggest.max_limit {
        return Err(SettingsError::InvalidValue {
            field: "suggest.default_limit".to_string(),
            reason: "must not exceed suggest.max_limit".to_string(),
        });
    }

    if s.server.addr.parse::<SocketAddr>().is_err() {
        return Err(SettingsError::InvalidValue {
            field: "server.addr".to_string(),
            reason: format!("{:?} is not a socket address", s.server.addr),
        });
    }
    if s.server.dict_path.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "server.dict_path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suggest.default_limit, 20);
        assert_eq!(s.suggest.max_limit, 100);
        assert_eq!(s.server.addr, "0.0.0.0:8080");
        assert_eq!(s.server.dict_path, "dictionary.wbk");
        assert_eq!(s.server.static_dir, "static");
    }

    #[test]
    fn empty_static_dir_disables_frontend() {
        let s = parse_settings_toml(
            r#"
[suggest]
default_limit = 5
max_limit = 10

[server]
addr = "127.0.0.1:3000"
dict_path = "words.wbk"
static_dir = ""
"#,
        )
        .unwrap();
        assert_eq!(s.suggest.limits().resolve(0), 5);
        assert!(s.server.static_dir.is_empty());
    }

    #[test]
    fn default_limits_match_suggest_defaults() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suggest.limits(), SuggestLimits::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[suggest]
default_limit = 5
max_limit = 10

[server]
addr = "127.0.0.1:3000"
dict_path = "/var/lib/wordbook/en.wbk"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.suggest.default_limit, 5);
        assert_eq!(s.suggest.max_limit, 10);
        assert_eq!(s.server.addr, "127.0.0.1:3000");
        assert_eq!(s.server.static_dir, "");
    }

    #[test]
    fn reject_missing_section() {
        let toml = r#"
[suggest]
default_limit = 5
max_limit = 10
"#;
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn reject_zero_limit() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_limit = 100", "max_limit = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("suggest.max_limit"), "{err}");
    }

    #[test]
    fn reject_default_above_max() {
        let toml = DEFAULT_SETTINGS_TOML.replace("default_limit = 20", "default_limit = 200");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("suggest.default_limit"), "{err}");
    }

    #[test]
    fn reject_negative_limit() {
        let toml = DEFAULT_SETTINGS_TOML.replace("default_limit = 20", "default_limit = -1");
        assert!(matches!(
            parse_settings_toml(&toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn reject_bad_addr() {
        let toml = DEFAULT_SETTINGS_TOML.replace("0.0.0.0:8080", ":8080");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("server.addr"), "{err}");
    }

    #[test]
    fn settings_singleton_uses_defaults() {
        let s = settings();
        assert_eq!(s.suggest.default_limit, 20);
    }
}
