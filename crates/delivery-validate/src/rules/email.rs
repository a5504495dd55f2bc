//! Email address rule.

use super::delegate_string_rule;
use crate::error::RuleError;
use crate::traits::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MAX_EMAIL_LENGTH: usize = 255;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_DOMAIN_LENGTH: usize = 253;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        super::builtin_regex(r"^[a-zA-Z0-9._+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
    })
}

/// Validates an email address.
///
/// On top of the character pattern, the local part must be 1 to 64
/// characters and the domain 1 to 253. Neither part may start or end with a
/// dot, and consecutive dots are rejected anywhere. Blank values are
/// treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRule {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EmailRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        super::reject(
            "email",
            self.message.as_ref(),
            || "Email deve ter um formato válido e não exceder 255 caracteres".to_string(),
            reason,
        )
    }
}

fn dotted_at_edges(part: &str) -> bool {
    part.starts_with('.') || part.ends_with('.')
}

impl ValidationRule<str> for EmailRule {
    fn validate(&self, value: &str) -> Result<(), RuleError> {
        if value.trim().is_empty() {
            return Ok(());
        }

        if value.chars().count() > MAX_EMAIL_LENGTH {
            return Err(self.fail("too_long"));
        }

        if !email_regex().is_match(value) {
            return Err(self.fail("bad_format"));
        }

        // The pattern guarantees exactly one '@'.
        let Some((local, domain)) = value.split_once('@') else {
            return Err(self.fail("bad_format"));
        };

        if local.is_empty() || local.len() > MAX_LOCAL_LENGTH {
            return Err(self.fail("bad_local_part"));
        }
        if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
            return Err(self.fail("bad_domain"));
        }
        if dotted_at_edges(local) {
            return Err(self.fail("bad_local_part"));
        }
        if dotted_at_edges(domain) {
            return Err(self.fail("bad_domain"));
        }
        if value.contains("..") {
            return Err(self.fail("consecutive_dots"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}

delegate_string_rule!(EmailRule, "email");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        let rule = EmailRule::new();
        for v in [
            "user@domain.com",
            "joao.silva@empresa.com.br",
            "maria+pedidos@delivery.tech",
            "a_b-c@sub.domain.org",
        ] {
            assert!(rule.validate(v).is_ok(), "{v} should be valid");
        }
    }

    #[test]
    fn rejects_malformed() {
        let rule = EmailRule::new();
        for v in [
            "plainaddress",
            "@domain.com",
            "user@",
            "user@domain",
            "user@domain.c",
            "user@domain.1",
            "user@domain@.com",
            "usér@domain.com",
            "user name@domain.com",
        ] {
            assert!(rule.validate(v).is_err(), "{v} should be invalid");
        }
    }

    #[test]
    fn rejects_dot_placement() {
        let rule = EmailRule::new();
        let cases = [
            ("a@b..com", "consecutive_dots"),
            ("user..name@domain.com", "consecutive_dots"),
            (".user@domain.com", "bad_local_part"),
            ("user.@domain.com", "bad_local_part"),
            ("user@.domain.com", "bad_domain"),
        ];
        for (v, reason) in cases {
            assert_eq!(rule.validate(v).unwrap_err().reason(), Some(reason), "{v}");
        }
    }

    #[test]
    fn enforces_part_lengths() {
        let rule = EmailRule::new();
        let local = "a".repeat(64);
        assert!(rule.validate(&format!("{local}@domain.com")).is_ok());
        let local = "a".repeat(65);
        assert_eq!(
            rule.validate(&format!("{local}@domain.com"))
                .unwrap_err()
                .reason(),
            Some("bad_local_part")
        );
    }

    #[test]
    fn enforces_total_length() {
        let rule = EmailRule::new();
        let domain = format!("{}.com", "d".repeat(250));
        let err = rule.validate(&format!("user@{domain}")).unwrap_err();
        assert_eq!(err.reason(), Some("too_long"));
    }

    #[test]
    fn blank_is_absent() {
        let rule = EmailRule::new();
        assert!(rule.validate("").is_ok());
        assert!(rule.validate(" ").is_ok());
        assert!(ValidationRule::<str>::is_valid(&rule, None));
    }
}
