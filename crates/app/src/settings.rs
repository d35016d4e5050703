use log::LevelFilter;
use serde::{Deserialize, Serialize};
use sportif_domain::ValidationPolicy;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Handling of questionnaire answers that do not fit their question.
    #[serde(with = "ValidationPolicyDef")]
    pub validation: ValidationPolicy,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::Ignore,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "ValidationPolicy", rename_all = "snake_case")]
enum ValidationPolicyDef {
    Ignore,
    Error,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "LevelFilter", rename_all = "snake_case")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        assert_eq!(
            Settings::default(),
            Settings {
                validation: ValidationPolicy::Ignore,
                log_level: LevelFilter::Info,
            }
        );
    }

    #[rstest]
    #[case::empty("{}", Settings::default())]
    #[case::strict(
        r#"{"validation":"error"}"#,
        Settings { validation: ValidationPolicy::Error, ..Settings::default() }
    )]
    #[case::complete(
        r#"{"validation":"ignore","log_level":"debug"}"#,
        Settings { validation: ValidationPolicy::Ignore, log_level: LevelFilter::Debug }
    )]
    fn test_settings_deserialize(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(serde_json::from_str::<Settings>(json).unwrap(), expected);
    }

    #[test]
    fn test_settings_serialize() {
        assert_eq!(
            serde_json::to_string(&Settings::default()).unwrap(),
            r#"{"validation":"ignore","log_level":"info"}"#
        );
    }

    #[test]
    fn test_settings_deserialize_invalid() {
        let json = r#"{"validation":"strict"}"#;

        assert!(serde_json::from_str::<Settings>(json).is_err());
    }
}
