//! Per-repository configuration loaded from `wildfly-bot.yml`.
//!
//! The loosely typed YAML document is deserialized here and then mapped into
//! checks by [`crate::engine::FormatEngine::from_config`], which is where
//! patterns get compiled and rejected.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{project_pattern, DEFAULT_PROJECT_KEY};
use crate::error::FormatError;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfigFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wildfly: WildFlyConfig,
}

impl BotConfigFile {
    /// Parse the configuration file contents.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Config`] if the document does not fit the model.
    pub fn from_yaml(contents: &str) -> Result<Self, FormatError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

/// Project level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildFlyConfig {
    /// Issue tracker project key (e.g., "WFLY")
    #[serde(default = "default_project_key")]
    pub project_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: FormatConfig,
}

impl Default for WildFlyConfig {
    fn default() -> Self {
        Self {
            project_key: default_project_key(),
            format: FormatConfig::default(),
        }
    }
}

impl WildFlyConfig {
    /// Issue key pattern derived from the project key.
    #[must_use]
    pub fn project_pattern(&self) -> String {
        project_pattern(&self.project_key)
    }
}

/// Format check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: FieldConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit: FieldConfig,
    /// Description rules. `None` disables the description check.
    #[serde(default)]
    pub description: Option<DescriptionConfig>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: FieldConfig::default(),
            commit: FieldConfig::default(),
            description: None,
        }
    }
}

/// Toggle and custom message for the title and commit checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message: None,
        }
    }
}

/// Description rule set as written in the configuration file.
///
/// `regexes` stays optional here so that a rule set without a rule list can
/// be told apart from an empty rule list; only the latter is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionConfig {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub regexes: Option<Vec<RegexConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexConfig {
    pub pattern: String,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_project_key() -> String {
    DEFAULT_PROJECT_KEY.to_string()
}

const fn enabled_by_default() -> bool {
    true
}

/// Treat an explicit YAML `null` (a key with no value) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_document() {
        let config = BotConfigFile::from_yaml("").unwrap();
        assert_eq!(config.wildfly.project_key, "WFLY");
        assert!(config.wildfly.format.enabled);
        assert!(config.wildfly.format.title.enabled);
        assert!(config.wildfly.format.commit.enabled);
        assert!(config.wildfly.format.description.is_none());
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
wildfly:
  projectKey: WFCORE
  format:
    enabled: true
    title:
      enabled: false
      message: "Title needs a key"
    commit:
      message: "Commits need a key"
    description:
      message: Default fail message
      regexes:
        - pattern: "https://issues.redhat.com/browse/WFCORE-\\d+"
          message: "The PR description must contain a link to the JIRA issue"
        - pattern: "JIRA"
"#;
        let config = BotConfigFile::from_yaml(yaml).unwrap().wildfly;
        assert_eq!(config.project_key, "WFCORE");
        assert_eq!(config.project_pattern(), r"WFCORE-\d+");
        assert!(!config.format.title.enabled);
        assert_eq!(config.format.title.message.as_deref(), Some("Title needs a key"));
        assert!(config.format.commit.enabled);

        let description = config.format.description.unwrap();
        assert_eq!(description.message.as_deref(), Some("Default fail message"));
        let regexes = description.regexes.unwrap();
        assert_eq!(regexes.len(), 2);
        assert_eq!(regexes[0].pattern, r"https://issues.redhat.com/browse/WFCORE-\d+");
        assert!(regexes[1].message.is_none());
    }

    #[test]
    fn test_null_description_disables_check() {
        let yaml = "wildfly:\n  format:\n    description:\n";
        let config = BotConfigFile::from_yaml(yaml).unwrap();
        assert!(config.wildfly.format.description.is_none());
    }

    #[test]
    fn test_null_sections_fall_back_to_defaults() {
        let yaml = "wildfly:\n  format:\n    title:\n";
        let config = BotConfigFile::from_yaml(yaml).unwrap();
        assert!(config.wildfly.format.enabled);
        assert!(config.wildfly.format.title.enabled);
    }

    #[test]
    fn test_description_without_regexes() {
        let yaml = "wildfly:\n  format:\n    description:\n      message: only a message\n";
        let description = BotConfigFile::from_yaml(yaml)
            .unwrap()
            .wildfly
            .format
            .description
            .unwrap();
        assert!(description.regexes.is_none());
    }

    #[test]
    fn test_malformed_document() {
        let err = BotConfigFile::from_yaml("wildfly:\n  format:\n    enabled: [nope").unwrap_err();
        assert!(matches!(err, FormatError::Config(_)));
    }
}
