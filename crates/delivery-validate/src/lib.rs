//! # DeliveryTech Validation
//!
//! Domain validation rules for the DeliveryTech backend: monetary values,
//! ratings, delivery times, opening hours, categories and the Brazilian
//! formats for state codes, phone numbers, postal codes (CEP), emails and
//! proper names.
//!
//! Every rule is an immutable struct implementing [`ValidationRule`]. Rules
//! are pure: the same value and configuration always give the same verdict,
//! and an absent value is always valid.
//!
//! ## Example
//!
//! ```rust
//! use delivery_validate::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let price = PriceRule::default();
//! assert!(price.validate(&Decimal::new(1099, 2)).is_ok());
//!
//! let rating = RatingRule::default();
//! let err = rating.validate(&Decimal::new(32, 1)).unwrap_err();
//! assert_eq!(err.code, "rating");
//!
//! assert!(delivery_validate::is_valid_cep(Some("01310-100")));
//! assert!(delivery_validate::is_valid_state(None));
//! ```
//!
//! ## Rules
//!
//! - `price` - amount in reais, bounded in cents, at most two decimals
//! - `rating` - bounded score on a fixed increment grid
//! - `delivery_time` - minutes, bounded, on an interval, in a realistic bucket
//! - `opening_hours` - `HH:MM-HH:MM`, closing after opening
//! - `category` - restaurant/product vocabulary, case-insensitive
//! - `state` - two-letter UF code
//! - `phone` - Brazilian layouts with a real area code
//! - `cep` - `00000-000` or `00000000`
//! - `email` - address with structural checks
//! - `name` - letters, single spaces, hyphens and apostrophes
//!
//! Presence, length, range and pattern checks (`required`, `length`,
//! `range`, `regex`) back the request payloads in [`requests`].
//!
//! ## Error Format
//!
//! Collected errors render as the API envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Dados inválidos",
//!     "fields": [
//!       {"field": "cep", "code": "cep", "message": "CEP deve ter o formato 00000-000 ou 00000000"}
//!     ]
//!   }
//! }
//! ```

pub mod config;
pub mod error;
pub mod requests;
pub mod rules;
pub mod tables;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{AnyRule, CandidateValue, FieldRules, SerializableRule};
pub use error::{ApiValidationError, ConfigError, RuleError, ValidationErrors};
pub use traits::{Validate, ValidationRule};

use rules::{CepRule, EmailRule, OpeningHoursRule, PhoneRule, StateRule};

/// CEP check with the default rule. `None` is valid.
pub fn is_valid_cep(value: Option<&str>) -> bool {
    CepRule::new().is_valid(value)
}

/// State code check with the default rule. `None` is valid.
pub fn is_valid_state(value: Option<&str>) -> bool {
    StateRule::new().is_valid(value)
}

/// Phone check with the default rule. `None` is valid.
pub fn is_valid_phone(value: Option<&str>) -> bool {
    PhoneRule::new().is_valid(value)
}

/// Email check with the default rule. `None` is valid.
pub fn is_valid_email(value: Option<&str>) -> bool {
    EmailRule::new().is_valid(value)
}

/// Opening-hours check with the default rule. `None` is valid.
pub fn is_valid_opening_hours(value: Option<&str>) -> bool {
    OpeningHoursRule::new().is_valid(value)
}

/// Prelude module for validation
pub mod prelude {
    pub use crate::error::{ApiValidationError, ConfigError, RuleError, ValidationErrors};
    pub use crate::rules::{
        CategoryKind, CategoryRule, CepRule, DeliveryTimeRule, EmailRule, LengthRule, NameRule,
        OpeningHoursRule, PhoneRule, PriceRule, RangeRule, RatingRule, RegexRule, RequiredRule,
        StateRule,
    };
    pub use crate::traits::{Validate, ValidationRule};
}
