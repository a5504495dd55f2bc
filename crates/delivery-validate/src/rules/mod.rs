//! Validation rules.
//!
//! Domain rules (one module each) plus the generic presence/length/range/
//! pattern rules used when validating request payloads.

mod category;
mod cep;
mod delivery_time;
mod email;
mod generic;
mod name;
mod opening_hours;
mod phone;
mod price;
mod rating;
mod state;

pub use category::{CategoryKind, CategoryRule};
pub use cep::CepRule;
pub use delivery_time::DeliveryTimeRule;
pub use email::EmailRule;
pub use generic::{LengthRule, RangeRule, RegexRule, RequiredRule};
pub use name::NameRule;
pub use opening_hours::OpeningHoursRule;
pub use phone::PhoneRule;
pub use price::PriceRule;
pub use rating::RatingRule;
pub use state::StateRule;

use crate::error::RuleError;
use regex::Regex;

/// Build the error for a rejected value.
///
/// Uses the rule's custom message when one was configured, otherwise the
/// default. `reason` identifies which check failed and is attached as a
/// param so callers and tests can tell the failures apart.
pub(crate) fn reject(
    code: &'static str,
    message: Option<&String>,
    default: impl FnOnce() -> String,
    reason: &'static str,
) -> RuleError {
    tracing::debug!(rule = code, reason, "value rejected");
    let message = message.cloned().unwrap_or_else(default);
    RuleError::new(code, message).param("reason", reason)
}

/// Strip leading and trailing ASCII whitespace and control characters.
///
/// Unicode spaces such as U+2003 are kept, so they still fail the rule's
/// format checks.
pub(crate) fn trim_ascii_blanks(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Compile one of the crate's built-in patterns.
pub(crate) fn builtin_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in validation pattern must compile")
}

/// Implement `ValidationRule<String>` by delegating to the `str` impl.
macro_rules! delegate_string_rule {
    ($rule:ty, $name:literal) => {
        impl $crate::traits::ValidationRule<String> for $rule {
            fn validate(&self, value: &String) -> Result<(), $crate::error::RuleError> {
                <Self as $crate::traits::ValidationRule<str>>::validate(self, value.as_str())
            }

            fn rule_name(&self) -> &'static str {
                $name
            }
        }
    };
}

pub(crate) use delegate_string_rule;
