//! Delivery-time rule.

use crate::error::{ConfigError, RuleError};
use crate::traits::ValidationRule;
use serde::{Deserialize, Serialize};

/// Validates an estimated delivery time in minutes.
///
/// Besides the configured bounds and interval, the value must fall in a
/// realistic bucket: short deliveries need at least 5 minutes, anything
/// from 15 to 120 minutes is fine, and long deliveries (up to 240) must be
/// quoted in quarter or half hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeliveryTimeRule {
    pub min: i32,
    pub max: i32,
    /// Required multiple; zero or negative disables the check
    pub interval: i32,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for DeliveryTimeRule {
    fn default() -> Self {
        Self {
            min: 5,
            max: 240,
            interval: 5,
            message: None,
        }
    }
}

impl DeliveryTimeRule {
    pub fn new(min: i32, max: i32, interval: i32) -> Self {
        Self {
            min,
            max,
            interval,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                rule: "delivery_time",
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }

    fn fail(&self, reason: &'static str) -> RuleError {
        super::reject(
            "delivery_time",
            self.message.as_ref(),
            || {
                format!(
                    "Tempo de entrega deve estar entre {} e {} minutos e ser múltiplo de {}",
                    self.min, self.max, self.interval
                )
            },
            reason,
        )
        .param("min", self.min)
        .param("max", self.max)
        .param("interval", self.interval)
    }
}

/// Realistic delivery-time buckets, checked in order; first match wins.
fn is_realistic(minutes: i32) -> bool {
    match minutes {
        m if m < 15 => m >= 5,
        m if m <= 60 => true,
        m if m <= 120 => true,
        m if m <= 240 => m % 15 == 0 || m % 30 == 0,
        _ => false,
    }
}

impl ValidationRule<i32> for DeliveryTimeRule {
    fn validate(&self, value: &i32) -> Result<(), RuleError> {
        let minutes = *value;

        if minutes < self.min || minutes > self.max {
            return Err(self.fail("out_of_range"));
        }

        if self.interval > 0 && minutes % self.interval != 0 {
            return Err(self.fail("off_interval"));
        }

        if !is_realistic(minutes) {
            return Err(self.fail("unrealistic"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "delivery_time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_times() {
        let rule = DeliveryTimeRule::default();
        for m in [5, 10, 15, 20, 30, 45, 60, 90, 120, 135, 150, 180, 210, 240] {
            assert!(rule.validate(&m).is_ok(), "{m} should be valid");
        }
    }

    #[test]
    fn rejects_off_interval() {
        let rule = DeliveryTimeRule::default();
        for m in [7, 12, 33, 61] {
            assert_eq!(rule.validate(&m).unwrap_err().reason(), Some("off_interval"));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let rule = DeliveryTimeRule::default();
        for m in [0, 4, -5, 245, 250, 300] {
            assert_eq!(rule.validate(&m).unwrap_err().reason(), Some("out_of_range"));
        }
    }

    #[test]
    fn long_deliveries_need_quarter_hours() {
        let rule = DeliveryTimeRule::default();
        for m in [125, 130, 140, 145, 160, 170, 190, 200, 205, 220, 230, 235] {
            let err = rule.validate(&m).unwrap_err();
            assert_eq!(err.reason(), Some("unrealistic"), "{m}");
        }
        assert!(rule.validate(&165).is_ok());
        assert!(rule.validate(&195).is_ok());
        assert!(rule.validate(&225).is_ok());
    }

    #[test]
    fn buckets_apply_without_interval() {
        let rule = DeliveryTimeRule::new(1, 300, 0);
        assert!(rule.validate(&4).is_err());
        assert!(rule.validate(&5).is_ok());
        assert!(rule.validate(&13).is_ok());
        assert!(rule.validate(&77).is_ok());
        assert!(rule.validate(&121).is_err());
        assert!(rule.validate(&255).is_err());
        assert!(rule.validate(&270).is_err());
    }

    #[test]
    fn bucket_classifier() {
        assert!(!is_realistic(4));
        assert!(is_realistic(14));
        assert!(is_realistic(60));
        assert!(is_realistic(119));
        assert!(is_realistic(240));
        assert!(!is_realistic(241));
        assert!(!is_realistic(270));
    }

    #[test]
    fn inverted_bounds_fail_check() {
        assert!(DeliveryTimeRule::new(120, 10, 5).check().is_err());
        assert!(DeliveryTimeRule::default().check().is_ok());
    }
}
