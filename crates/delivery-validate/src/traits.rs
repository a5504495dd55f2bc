//! Core validation traits.

use crate::error::{RuleError, ValidationErrors};
use std::fmt::Debug;

/// Trait for validating a whole record (a request payload, a DTO).
///
/// Implementations run the field rules and collect every failure instead
/// of stopping at the first one.
///
/// ## Example
///
/// ```rust
/// use delivery_validate::prelude::*;
///
/// struct Contact {
///     phone: Option<String>,
///     cep: Option<String>,
/// }
///
/// impl Validate for Contact {
///     fn validate(&self) -> Result<(), ValidationErrors> {
///         let mut errors = ValidationErrors::new();
///         errors.check("telefone", &PhoneRule::new(), self.phone.as_deref());
///         errors.check("cep", &CepRule::new(), self.cep.as_deref());
///         errors.into_result()
///     }
/// }
///
/// let contact = Contact {
///     phone: Some("(11) 99999-9999".to_string()),
///     cep: Some("1310-100".to_string()),
/// };
/// let errors = contact.validate().unwrap_err();
/// assert!(errors.has("cep", "cep"));
/// ```
pub trait Validate {
    /// Validate the record.
    ///
    /// Returns `Ok(())` if validation passes, or `Err(ValidationErrors)` with all field errors.
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Validate and return the record if valid.
    fn validated(self) -> Result<Self, ValidationErrors>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(self)
    }
}

/// Trait for individual validation rules.
///
/// A rule holds its configuration (bounds, step, category kind, custom
/// message) and checks one candidate value against it. Rules never hold
/// state between calls and can be shared freely between threads.
///
/// Absent values are always valid: presence is a separate concern handled
/// by [`RequiredRule`](crate::rules::RequiredRule).
pub trait ValidationRule<T: ?Sized>: Debug + Send + Sync {
    /// Validate the value against this rule.
    fn validate(&self, value: &T) -> Result<(), RuleError>;

    /// Get the rule name/code for error reporting.
    fn rule_name(&self) -> &'static str;

    /// Validate a value that may be missing. `None` passes.
    fn check_optional(&self, value: Option<&T>) -> Result<(), RuleError> {
        match value {
            Some(v) => self.validate(v),
            None => Ok(()),
        }
    }

    /// Boolean verdict for a value that may be missing.
    fn is_valid(&self, value: Option<&T>) -> bool {
        self.check_optional(value).is_ok()
    }
}
