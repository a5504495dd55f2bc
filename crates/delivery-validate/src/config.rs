//! Rule definitions as data.
//!
//! [`SerializableRule`] is the serde form of every rule in the crate, tagged
//! by `type`:
//!
//! ```json
//! { "type": "price", "min_cents": 1, "max_cents": 50000 }
//! ```
//!
//! A definition is turned into a runnable [`AnyRule`] with
//! [`SerializableRule::try_into_rule`], which rejects misconfigured rules
//! up front. [`FieldRules`] does the same for a whole `field -> [rules]`
//! document and validates records given as field lookups.

use crate::error::{ConfigError, RuleError, ValidationErrors};
use crate::rules::{
    CategoryRule, CepRule, DeliveryTimeRule, EmailRule, LengthRule, NameRule, OpeningHoursRule,
    PhoneRule, PriceRule, RangeRule, RatingRule, RegexRule, RequiredRule, StateRule,
};
use crate::traits::ValidationRule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable rule definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SerializableRule {
    Price(PriceRule),
    Rating(RatingRule),
    DeliveryTime(DeliveryTimeRule),
    OpeningHours(OpeningHoursRule),
    Category(CategoryRule),
    State(StateRule),
    Phone(PhoneRule),
    Cep(CepRule),
    Email(EmailRule),
    Name(NameRule),
    Length(LengthRule),
    Range(RangeRule<Decimal>),
    Regex(RegexRule),
    Required(RequiredRule),
}

impl SerializableRule {
    /// Parse a single definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `type` tag of this definition.
    pub fn type_name(&self) -> &'static str {
        match self {
            SerializableRule::Price(_) => "price",
            SerializableRule::Rating(_) => "rating",
            SerializableRule::DeliveryTime(_) => "delivery_time",
            SerializableRule::OpeningHours(_) => "opening_hours",
            SerializableRule::Category(_) => "category",
            SerializableRule::State(_) => "state",
            SerializableRule::Phone(_) => "phone",
            SerializableRule::Cep(_) => "cep",
            SerializableRule::Email(_) => "email",
            SerializableRule::Name(_) => "name",
            SerializableRule::Length(_) => "length",
            SerializableRule::Range(_) => "range",
            SerializableRule::Regex(_) => "regex",
            SerializableRule::Required(_) => "required",
        }
    }

    /// Check the definition's parameters.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self {
            SerializableRule::Price(rule) => rule.check(),
            SerializableRule::Rating(rule) => rule.check(),
            SerializableRule::DeliveryTime(rule) => rule.check(),
            SerializableRule::Name(rule) => rule.check(),
            SerializableRule::Length(rule) => rule.check(),
            SerializableRule::Range(rule) => rule.check(),
            SerializableRule::Regex(rule) => rule.check(),
            SerializableRule::OpeningHours(_)
            | SerializableRule::Category(_)
            | SerializableRule::State(_)
            | SerializableRule::Phone(_)
            | SerializableRule::Cep(_)
            | SerializableRule::Email(_)
            | SerializableRule::Required(_) => Ok(()),
        }
    }

    /// Check the definition and build the runnable rule.
    pub fn try_into_rule(self) -> Result<AnyRule, ConfigError> {
        self.check()?;
        tracing::debug!(rule = self.type_name(), "rule built from definition");

        Ok(match self {
            SerializableRule::Price(rule) => AnyRule::Price(rule),
            SerializableRule::Rating(rule) => AnyRule::Rating(rule),
            SerializableRule::DeliveryTime(rule) => AnyRule::DeliveryTime(rule),
            SerializableRule::OpeningHours(rule) => AnyRule::OpeningHours(rule),
            SerializableRule::Category(rule) => AnyRule::Category(rule),
            SerializableRule::State(rule) => AnyRule::State(rule),
            SerializableRule::Phone(rule) => AnyRule::Phone(rule),
            SerializableRule::Cep(rule) => AnyRule::Cep(rule),
            SerializableRule::Email(rule) => AnyRule::Email(rule),
            SerializableRule::Name(rule) => AnyRule::Name(rule),
            SerializableRule::Length(rule) => AnyRule::Length(rule),
            SerializableRule::Range(rule) => AnyRule::Range(rule),
            SerializableRule::Regex(rule) => AnyRule::Regex(rule),
            SerializableRule::Required(rule) => AnyRule::Required(rule),
        })
    }

    /// Pretty print the rule definition in attribute form, e.g.
    /// `#[validate(price(min_cents = 1, max_cents = 50000))]`.
    pub fn pretty_print(&self) -> String {
        let mut parts = Vec::new();
        let message = match self {
            SerializableRule::Price(rule) => {
                parts.push(format!("min_cents = {}", rule.min_cents));
                parts.push(format!("max_cents = {}", rule.max_cents));
                &rule.message
            }
            SerializableRule::Rating(rule) => {
                parts.push(format!("min = {}", rule.min));
                parts.push(format!("max = {}", rule.max));
                parts.push(format!("increment = {}", rule.increment));
                &rule.message
            }
            SerializableRule::DeliveryTime(rule) => {
                parts.push(format!("min = {}", rule.min));
                parts.push(format!("max = {}", rule.max));
                parts.push(format!("interval = {}", rule.interval));
                &rule.message
            }
            SerializableRule::Category(rule) => {
                parts.push(format!("kind = \"{}\"", rule.kind.as_str()));
                &rule.message
            }
            SerializableRule::Name(rule) => {
                parts.push(format!("min_length = {}", rule.min_length));
                parts.push(format!("max_length = {}", rule.max_length));
                &rule.message
            }
            SerializableRule::Length(rule) => {
                if let Some(min) = rule.min {
                    parts.push(format!("min = {}", min));
                }
                if let Some(max) = rule.max {
                    parts.push(format!("max = {}", max));
                }
                &rule.message
            }
            SerializableRule::Range(rule) => {
                if let Some(min) = rule.min {
                    parts.push(format!("min = {}", min));
                }
                if let Some(max) = rule.max {
                    parts.push(format!("max = {}", max));
                }
                &rule.message
            }
            SerializableRule::Regex(rule) => {
                parts.push(format!("pattern = \"{}\"", rule.pattern));
                &rule.message
            }
            SerializableRule::OpeningHours(OpeningHoursRule { message })
            | SerializableRule::State(StateRule { message })
            | SerializableRule::Phone(PhoneRule { message })
            | SerializableRule::Cep(CepRule { message })
            | SerializableRule::Email(EmailRule { message })
            | SerializableRule::Required(RequiredRule { message }) => message,
        };

        if let Some(msg) = message {
            parts.push(format!("message = \"{}\"", msg));
        }

        if parts.is_empty() {
            format!("#[validate({})]", self.type_name())
        } else {
            format!("#[validate({}({}))]", self.type_name(), parts.join(", "))
        }
    }
}

impl TryFrom<SerializableRule> for AnyRule {
    type Error = ConfigError;

    fn try_from(definition: SerializableRule) -> Result<Self, Self::Error> {
        definition.try_into_rule()
    }
}

/// A value handed to a rule built from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateValue<'a> {
    Decimal(Decimal),
    Integer(i32),
    Text(&'a str),
}

impl CandidateValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            CandidateValue::Decimal(_) => "decimal",
            CandidateValue::Integer(_) => "integer",
            CandidateValue::Text(_) => "text",
        }
    }

    /// Integers widen to decimals; text never does.
    fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CandidateValue::Decimal(d) => Some(*d),
            CandidateValue::Integer(i) => Some(Decimal::from(*i)),
            CandidateValue::Text(_) => None,
        }
    }
}

impl From<Decimal> for CandidateValue<'_> {
    fn from(value: Decimal) -> Self {
        CandidateValue::Decimal(value)
    }
}

impl From<i32> for CandidateValue<'_> {
    fn from(value: i32) -> Self {
        CandidateValue::Integer(value)
    }
}

impl<'a> From<&'a str> for CandidateValue<'a> {
    fn from(value: &'a str) -> Self {
        CandidateValue::Text(value)
    }
}

/// A checked, runnable rule of any kind.
#[derive(Debug, Clone)]
pub enum AnyRule {
    Price(PriceRule),
    Rating(RatingRule),
    DeliveryTime(DeliveryTimeRule),
    OpeningHours(OpeningHoursRule),
    Category(CategoryRule),
    State(StateRule),
    Phone(PhoneRule),
    Cep(CepRule),
    Email(EmailRule),
    Name(NameRule),
    Length(LengthRule),
    Range(RangeRule<Decimal>),
    Regex(RegexRule),
    Required(RequiredRule),
}

impl AnyRule {
    fn text_rule(&self) -> Option<&dyn ValidationRule<str>> {
        let rule: &dyn ValidationRule<str> = match self {
            AnyRule::OpeningHours(rule) => rule,
            AnyRule::Category(rule) => rule,
            AnyRule::State(rule) => rule,
            AnyRule::Phone(rule) => rule,
            AnyRule::Cep(rule) => rule,
            AnyRule::Email(rule) => rule,
            AnyRule::Name(rule) => rule,
            AnyRule::Length(rule) => rule,
            AnyRule::Regex(rule) => rule,
            AnyRule::Required(rule) => rule,
            AnyRule::Price(_)
            | AnyRule::Rating(_)
            | AnyRule::DeliveryTime(_)
            | AnyRule::Range(_) => return None,
        };
        Some(rule)
    }

    fn type_mismatch(&self, value: &CandidateValue<'_>) -> RuleError {
        tracing::debug!(rule = self.rule_name(), got = value.kind(), "type mismatch");
        RuleError::new(
            "type_mismatch",
            format!("Tipo de valor incompatível com a regra '{}'", self.rule_name()),
        )
        .param("rule", self.rule_name())
        .param("got", value.kind())
    }
}

impl<'a> ValidationRule<CandidateValue<'a>> for AnyRule {
    fn validate(&self, value: &CandidateValue<'a>) -> Result<(), RuleError> {
        match (self, value) {
            (AnyRule::Price(rule), v) => match v.as_decimal() {
                Some(d) => rule.validate(&d),
                None => Err(self.type_mismatch(v)),
            },
            (AnyRule::Rating(rule), v) => match v.as_decimal() {
                Some(d) => rule.validate(&d),
                None => Err(self.type_mismatch(v)),
            },
            (AnyRule::Range(rule), v) => match v.as_decimal() {
                Some(d) => rule.validate(&d),
                None => Err(self.type_mismatch(v)),
            },
            (AnyRule::DeliveryTime(rule), CandidateValue::Integer(minutes)) => {
                rule.validate(minutes)
            }
            (AnyRule::Required(_), CandidateValue::Decimal(_) | CandidateValue::Integer(_)) => {
                Ok(())
            }
            (rule, CandidateValue::Text(text)) => match rule.text_rule() {
                Some(text_rule) => text_rule.validate(text),
                None => Err(self.type_mismatch(value)),
            },
            (_, v) => Err(self.type_mismatch(v)),
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            AnyRule::Price(rule) => rule.rule_name(),
            AnyRule::Rating(rule) => rule.rule_name(),
            AnyRule::DeliveryTime(rule) => rule.rule_name(),
            AnyRule::Range(rule) => rule.rule_name(),
            other => other
                .text_rule()
                .map(|rule| rule.rule_name())
                .unwrap_or("unknown"),
        }
    }

    fn check_optional(&self, value: Option<&CandidateValue<'a>>) -> Result<(), RuleError> {
        match (self, value) {
            (AnyRule::Required(rule), None) => ValidationRule::<str>::check_optional(rule, None),
            (_, Some(v)) => self.validate(v),
            (_, None) => Ok(()),
        }
    }
}

/// Rules for the fields of one record, loaded from configuration.
///
/// ## Example
///
/// ```rust
/// use delivery_validate::config::{CandidateValue, FieldRules};
///
/// let rules = FieldRules::from_json(r#"{
///     "cep": [{ "type": "required" }, { "type": "cep" }],
///     "estado": [{ "type": "state" }]
/// }"#).unwrap();
///
/// let errors = rules
///     .validate(|field| match field {
///         "estado" => Some(CandidateValue::Text("XX")),
///         _ => None,
///     })
///     .unwrap_err();
/// assert!(errors.has("cep", "required"));
/// assert!(errors.has("estado", "state"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    fields: BTreeMap<String, Vec<AnyRule>>,
}

impl FieldRules {
    /// Build from `field -> [definitions]`, checking every definition.
    pub fn from_definitions(
        definitions: BTreeMap<String, Vec<SerializableRule>>,
    ) -> Result<Self, ConfigError> {
        let mut fields = BTreeMap::new();
        for (field, defs) in definitions {
            let rules = defs
                .into_iter()
                .map(SerializableRule::try_into_rule)
                .collect::<Result<Vec<_>, _>>()?;
            fields.insert(field, rules);
        }
        tracing::debug!(fields = fields.len(), "field rules loaded");
        Ok(Self { fields })
    }

    /// Parse and build from a JSON object of `field -> [definitions]`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let definitions: BTreeMap<String, Vec<SerializableRule>> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Add a rule for a field.
    pub fn add(&mut self, field: impl Into<String>, rule: AnyRule) {
        self.fields.entry(field.into()).or_default().push(rule);
    }

    /// Rules configured for a field.
    pub fn rules_for(&self, field: &str) -> &[AnyRule] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Validate a record, looking up each configured field's value.
    ///
    /// Every rule of every field runs; all failures are collected.
    pub fn validate<'a, F>(&self, lookup: F) -> Result<(), ValidationErrors>
    where
        F: Fn(&str) -> Option<CandidateValue<'a>>,
    {
        let mut errors = ValidationErrors::new();
        for (field, rules) in &self.fields {
            let value = lookup(field);
            for rule in rules {
                errors.check(field, rule, value.as_ref());
            }
        }
        errors.into_result()
    }
}
