use crate::constants::default_title_message;
use crate::rule::RegexDefinition;

/// Requires the title to reference an issue key.
#[derive(Debug, Clone)]
pub struct TitleCheck {
    rule: RegexDefinition,
}

impl TitleCheck {
    pub const NAME: &'static str = "title";

    #[must_use]
    pub fn new(rule: RegexDefinition) -> Self {
        Self { rule }
    }

    #[must_use]
    pub fn evaluate(&self, title: &str) -> Option<String> {
        if self.rule.is_match(title) {
            None
        } else {
            Some(self.rule.message_or_else(default_title_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(message: Option<&str>) -> TitleCheck {
        TitleCheck::new(RegexDefinition::new(r"WFLY-\d+", message.map(String::from)).unwrap())
    }

    #[test]
    fn test_title_with_issue_key_passes() {
        assert_eq!(check(None).evaluate("[WFLY-1234] Upgrade Undertow"), None);
        assert_eq!(check(None).evaluate("Upgrade Undertow (WFLY-1)"), None);
    }

    #[test]
    fn test_title_without_issue_key_fails_with_default_message() {
        assert_eq!(
            check(None).evaluate("Bump version"),
            Some(
                r"Wrong content of the title. It does not satisfy the following regex pattern: [WFLY-\d+]"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(check(None).evaluate("").is_some());
    }

    #[test]
    fn test_custom_message() {
        assert_eq!(
            check(Some("Title must reference a JIRA")).evaluate("WFLY 12"),
            Some("Title must reference a JIRA".to_string())
        );
    }
}
