//! Error types for the validation engine.
//!
//! A failing rule produces a [`RuleError`]. Record-level validation collects
//! rule errors per field into [`ValidationErrors`], which can be rendered as
//! the JSON envelope the API layer returns. Misconfigured rules are reported
//! separately through [`ConfigError`] when they are checked at construction.

use crate::traits::ValidationRule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Error from a single validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleError {
    /// The validation rule code (e.g., "price", "phone", "cep")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional parameters for message interpolation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }

    /// The `reason` parameter set by the built-in rules, if any.
    pub fn reason(&self) -> Option<&str> {
        self.params.get("reason").and_then(|v| v.as_str())
    }

    /// Interpolate parameters into the message.
    ///
    /// Replaces `{param_name}` placeholders with actual values.
    pub fn interpolate_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            let placeholder = format!("{{{}}}", key);
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => value.to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }
        result
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.interpolate_message())
    }
}

impl std::error::Error for RuleError {}

/// Collection of validation errors for multiple fields.
///
/// Fields are kept in name order so that the rendered violation list is
/// stable between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Map of field name to list of errors for that field
    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<RuleError>>,
}

impl ValidationErrors {
    /// Create an empty validation errors collection.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add an error for a field.
    pub fn add(&mut self, field: impl Into<String>, error: RuleError) {
        self.fields.entry(field.into()).or_default().push(error);
    }

    /// Add multiple errors for a field.
    pub fn add_all(&mut self, field: impl Into<String>, errors: Vec<RuleError>) {
        let field = field.into();
        for error in errors {
            self.add(field.clone(), error);
        }
    }

    /// Run `rule` against an optional field value and record the failure.
    ///
    /// Absent values pass unless the rule itself demands presence (see
    /// `RequiredRule`). Returns `true` when the value passed.
    pub fn check<T, R>(&mut self, field: &str, rule: &R, value: Option<&T>) -> bool
    where
        T: ?Sized,
        R: ValidationRule<T> + ?Sized,
    {
        match rule.check_optional(value) {
            Ok(()) => true,
            Err(e) => {
                self.add(field, e);
                false
            }
        }
    }

    /// Merge another ValidationErrors into this one.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, errors) in other.fields {
            self.add_all(field, errors);
        }
    }

    /// Merge errors of a nested record, prefixing its field names.
    pub fn merge_nested(&mut self, prefix: &str, other: ValidationErrors) {
        for (field, errors) in other.fields {
            self.add_all(format!("{prefix}.{field}"), errors);
        }
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the total number of errors.
    pub fn len(&self) -> usize {
        self.fields.values().map(|v| v.len()).sum()
    }

    /// Get errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<RuleError>> {
        self.fields.get(field)
    }

    /// Check whether a field failed with the given rule code.
    pub fn has(&self, field: &str, code: &str) -> bool {
        self.get(field)
            .is_some_and(|errors| errors.iter().any(|e| e.code == code))
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Get all field names with errors.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Convert to the API error envelope.
    pub fn to_api_error(&self) -> ApiValidationError {
        let fields: Vec<FieldErrorResponse> = self
            .fields
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldErrorResponse {
                    field: field.clone(),
                    code: e.code.clone(),
                    message: e.interpolate_message(),
                    params: if e.params.is_empty() {
                        None
                    } else {
                        Some(e.params.clone())
                    },
                })
            })
            .collect();

        ApiValidationError {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: "Dados inválidos".to_string(),
                fields,
            },
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} error(s)", self.len())
    }
}

impl std::error::Error for ValidationErrors {}

/// API response format for validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiValidationError {
    pub error: ErrorBody,
}

/// Error body in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub fields: Vec<FieldErrorResponse>,
}

/// Single field error in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    pub field: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, serde_json::Value>>,
}

/// A rule was configured with parameters it cannot work with.
///
/// Returned by `check()` on the configurable rules and when building rules
/// from serialized definitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Lower bound is greater than the upper bound.
    #[error("{rule}: min ({min}) must not exceed max ({max})")]
    InvertedBounds {
        rule: &'static str,
        min: String,
        max: String,
    },

    /// A step/increment that must be strictly positive is not.
    #[error("{rule}: {param} must be greater than zero, got {value}")]
    NonPositiveStep {
        rule: &'static str,
        param: &'static str,
        value: String,
    },

    /// A regex pattern supplied in configuration does not compile.
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Serialized rule definition could not be decoded.
    #[error("malformed rule definition: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CepRule;

    #[test]
    fn rule_error_creation() {
        let error = RuleError::new("cep", "CEP inválido");
        assert_eq!(error.code, "cep");
        assert_eq!(error.message, "CEP inválido");
        assert!(error.params.is_empty());
        assert_eq!(error.reason(), None);
    }

    #[test]
    fn rule_error_with_params() {
        let error = RuleError::new("name", "Nome deve ter entre {min} e {max} caracteres")
            .param("min", 2)
            .param("max", 100);

        assert_eq!(
            error.interpolate_message(),
            "Nome deve ter entre 2 e 100 caracteres"
        );
        assert_eq!(error.to_string(), "[name] Nome deve ter entre 2 e 100 caracteres");
    }

    #[test]
    fn validation_errors_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add("email", RuleError::new("email", "Email inválido"));
        errors.add("email", RuleError::new("required", "Email é obrigatório"));
        errors.add("preco", RuleError::new("price", "Preço inválido"));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("email").unwrap().len(), 2);
        assert!(errors.has("preco", "price"));
        assert!(!errors.has("preco", "email"));
        assert_eq!(errors.field_names(), vec!["email", "preco"]);
    }

    #[test]
    fn validation_errors_into_result() {
        let errors = ValidationErrors::new();
        assert!(errors.into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("field", RuleError::new("code", "message"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn check_records_only_failures() {
        let mut errors = ValidationErrors::new();
        assert!(errors.check("cep", &CepRule::new(), Some("01310-100")));
        assert!(errors.check::<str, _>("cep", &CepRule::new(), None));
        assert!(!errors.check("cep", &CepRule::new(), Some("1310-100")));

        assert_eq!(errors.len(), 1);
        assert!(errors.has("cep", "cep"));
    }

    #[test]
    fn validation_errors_to_api_error() {
        let mut errors = ValidationErrors::new();
        errors.add("email", RuleError::new("email", "Email inválido"));

        let api_error = errors.to_api_error();
        assert_eq!(api_error.error.error_type, "validation_error");
        assert_eq!(api_error.error.fields.len(), 1);
        assert_eq!(api_error.error.fields[0].field, "email");

        let json = serde_json::to_value(&api_error).unwrap();
        assert_eq!(json["error"]["type"], "validation_error");
    }

    #[test]
    fn validation_errors_merge() {
        let mut first = ValidationErrors::new();
        first.add("cep", RuleError::new("required", "CEP é obrigatório"));

        let mut second = ValidationErrors::new();
        second.add("cep", RuleError::new("cep", "CEP inválido"));
        second.add("estado", RuleError::new("state", "Estado inválido"));

        first.merge(second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.get("cep").unwrap().len(), 2);
        assert!(first.has("estado", "state"));
    }

    #[test]
    fn validation_errors_merge_nested() {
        let mut outer = ValidationErrors::new();
        outer.add("nome", RuleError::new("required", "Nome é obrigatório"));

        let mut inner = ValidationErrors::new();
        inner.add("cep", RuleError::new("cep", "CEP inválido"));

        outer.merge_nested("endereco", inner);
        assert_eq!(outer.len(), 2);
        assert!(outer.has("endereco.cep", "cep"));
    }

    #[test]
    fn config_error_messages() {
        let err = ConfigError::InvertedBounds {
            rule: "rating",
            min: "5.0".to_string(),
            max: "1.0".to_string(),
        };
        assert_eq!(err.to_string(), "rating: min (5.0) must not exceed max (1.0)");
    }
}
