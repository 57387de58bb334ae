use crate::config::DescriptionConfig;
use crate::constants::{DEFAULT_DESCRIPTION_MESSAGE, NULL_ARGUMENT_MESSAGE};
use crate::error::FormatError;
use crate::rule::RegexDefinition;

/// Ordered description rules plus the rule set default message.
#[derive(Debug, Clone, Default)]
pub struct DescriptionRuleSet {
    rules: Vec<RegexDefinition>,
    message: Option<String>,
}

impl DescriptionRuleSet {
    #[must_use]
    pub fn new(rules: Vec<RegexDefinition>, message: Option<String>) -> Self {
        Self { rules, message }
    }

    #[must_use]
    pub fn rules(&self) -> &[RegexDefinition] {
        &self.rules
    }
}

impl TryFrom<&DescriptionConfig> for DescriptionRuleSet {
    type Error = FormatError;

    fn try_from(config: &DescriptionConfig) -> Result<Self, Self::Error> {
        let regexes = config
            .regexes
            .as_ref()
            .ok_or_else(|| FormatError::InvalidArgument(NULL_ARGUMENT_MESSAGE.to_string()))?;

        let rules = regexes
            .iter()
            .map(|regex| RegexDefinition::new(&regex.pattern, regex.message.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(rules, config.message.clone()))
    }
}

/// Checks the description against every configured rule, in order.
///
/// The first rule that does not match decides the failure message: its own
/// message, else the rule set default, else [`DEFAULT_DESCRIPTION_MESSAGE`].
#[derive(Debug, Clone)]
pub struct DescriptionCheck {
    rule_set: DescriptionRuleSet,
}

impl DescriptionCheck {
    pub const NAME: &'static str = "description";

    #[must_use]
    pub fn new(rule_set: DescriptionRuleSet) -> Self {
        Self { rule_set }
    }

    /// Build the check from the configuration file section.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidArgument`] when `config` is absent or has
    /// no rule list, and [`FormatError::InvalidPattern`] for a bad pattern.
    pub fn from_config(config: Option<&DescriptionConfig>) -> Result<Self, FormatError> {
        let config =
            config.ok_or_else(|| FormatError::InvalidArgument(NULL_ARGUMENT_MESSAGE.to_string()))?;
        Ok(Self::new(DescriptionRuleSet::try_from(config)?))
    }

    #[must_use]
    pub fn evaluate(&self, body: Option<&str>) -> Option<String> {
        let body = body.unwrap_or_default();

        self.rule_set
            .rules
            .iter()
            .find(|rule| !rule.is_match(body))
            .map(|rule| {
                rule.message()
                    .or(self.rule_set.message.as_deref())
                    .unwrap_or(DEFAULT_DESCRIPTION_MESSAGE)
                    .to_string()
            })
    }
}
