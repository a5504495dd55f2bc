//! Property-based tests for the rule engine.

#[cfg(test)]
mod property_tests {
    use crate::config::SerializableRule;
    use crate::rules::*;
    use crate::traits::ValidationRule;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn optional_message_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Just(None), "[a-zA-Z0-9 ]{1,50}".prop_map(Some),]
    }

    fn category_kind_strategy() -> impl Strategy<Value = CategoryKind> {
        prop_oneof![
            Just(CategoryKind::Restaurant),
            Just(CategoryKind::Product),
            Just(CategoryKind::General),
        ]
    }

    // Decimals with a small declared scale, e.g. 12.345 as (12345, 3)
    fn decimal_strategy() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..100_000_000, 0u32..5).prop_map(|(n, scale)| Decimal::new(n, scale))
    }

    fn serializable_rule_strategy() -> impl Strategy<Value = SerializableRule> {
        prop_oneof![
            (0i64..1000, 1000i64..100_000, optional_message_strategy()).prop_map(
                |(min, max, message)| {
                    let mut rule = PriceRule::new(min, max);
                    rule.message = message;
                    SerializableRule::Price(rule)
                }
            ),
            (0i64..20, 20i64..100, 1i64..10, optional_message_strategy()).prop_map(
                |(min, max, inc, message)| {
                    let mut rule = RatingRule::new(
                        Decimal::new(min, 1),
                        Decimal::new(max, 1),
                        Decimal::new(inc, 1),
                    );
                    rule.message = message;
                    SerializableRule::Rating(rule)
                }
            ),
            (0i32..30, 30i32..300, 0i32..15, optional_message_strategy()).prop_map(
                |(min, max, interval, message)| {
                    let mut rule = DeliveryTimeRule::new(min, max, interval);
                    rule.message = message;
                    SerializableRule::DeliveryTime(rule)
                }
            ),
            (category_kind_strategy(), optional_message_strategy()).prop_map(|(kind, message)| {
                SerializableRule::Category(CategoryRule { kind, message })
            }),
            (1usize..10, 10usize..200, optional_message_strategy()).prop_map(
                |(min, max, message)| {
                    let mut rule = NameRule::new(min, max);
                    rule.message = message;
                    SerializableRule::Name(rule)
                }
            ),
            optional_message_strategy()
                .prop_map(|message| SerializableRule::Cep(CepRule { message })),
            optional_message_strategy()
                .prop_map(|message| SerializableRule::Phone(PhoneRule { message })),
            optional_message_strategy()
                .prop_map(|message| SerializableRule::State(StateRule { message })),
            optional_message_strategy()
                .prop_map(|message| SerializableRule::Email(EmailRule { message })),
            optional_message_strategy().prop_map(|message| {
                SerializableRule::OpeningHours(OpeningHoursRule { message })
            }),
            optional_message_strategy()
                .prop_map(|message| SerializableRule::Required(RequiredRule { message })),
            (
                prop_oneof![Just(None), (0usize..1000).prop_map(Some)],
                prop_oneof![Just(None), (0usize..1000).prop_map(Some)],
                optional_message_strategy(),
            )
                .prop_map(|(min, max, message)| SerializableRule::Length(LengthRule {
                    min,
                    max,
                    message
                })),
            (
                prop_oneof![Just(r"^[0-9]+$".to_string()), Just(r"^[a-z]+$".to_string()),],
                optional_message_strategy(),
            )
                .prop_map(|(pattern, message)| {
                    let mut rule = RegexRule::new(pattern);
                    rule.message = message;
                    SerializableRule::Regex(rule)
                }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Rule definitions survive a JSON round-trip unchanged.
        #[test]
        fn serializable_rule_roundtrip(rule in serializable_rule_strategy()) {
            let json = serde_json::to_string(&rule).unwrap();
            let parsed: SerializableRule = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(rule, parsed);
        }

        #[test]
        fn pretty_print_names_the_rule(rule in serializable_rule_strategy()) {
            let printed = rule.pretty_print();
            let expected_prefix = format!("#[validate({}", rule.type_name());
            prop_assert!(printed.starts_with(&expected_prefix));
            prop_assert!(printed.ends_with(")]"));
        }

        // Same input and configuration, same verdict.
        #[test]
        fn price_is_deterministic(amount in decimal_strategy()) {
            let rule = PriceRule::default();
            prop_assert_eq!(rule.validate(&amount), rule.validate(&amount));
        }

        #[test]
        fn valid_prices_have_at_most_two_decimals(amount in decimal_strategy()) {
            if PriceRule::default().validate(&amount).is_ok() {
                prop_assert!(amount.scale() <= 2);
                prop_assert!(amount > Decimal::ZERO);
            }
        }

        #[test]
        fn negative_prices_are_always_invalid(cents in 1i64..100_000_000) {
            let rule = PriceRule::new(-100_000_000, 100_000_000);
            prop_assert!(rule.validate(&Decimal::new(-cents, 2)).is_err());
        }

        #[test]
        fn valid_ratings_sit_on_the_grid(rating in decimal_strategy()) {
            let rule = RatingRule::default();
            if rule.validate(&rating).is_ok() {
                let steps = (rating - rule.min) / rule.increment;
                prop_assert_eq!(steps.fract(), Decimal::ZERO);
                prop_assert!(rating >= rule.min && rating <= rule.max);
            }
        }

        #[test]
        fn delivery_time_is_deterministic(minutes in -100i32..400) {
            let rule = DeliveryTimeRule::default();
            let first = rule.validate(&minutes).is_ok();
            prop_assert_eq!(first, rule.validate(&minutes).is_ok());
            if first {
                prop_assert_eq!(minutes % 5, 0);
                prop_assert!((5..=240).contains(&minutes));
            }
        }

        #[test]
        fn formatted_ceps_are_valid(prefix in "[0-9]{5}", suffix in "[0-9]{3}") {
            let rule = CepRule::new();
            let dashed = format!("{prefix}-{suffix}");
            let bare = format!("{prefix}{suffix}");
            prop_assert!(rule.validate(dashed.as_str()).is_ok());
            prop_assert!(rule.validate(bare.as_str()).is_ok());
        }

        #[test]
        fn state_case_does_not_matter(index in 0usize..27, lower in any::<bool>()) {
            let code = crate::tables::STATE_CODES[index];
            let input = if lower { code.to_lowercase() } else { code.to_string() };
            prop_assert!(StateRule::new().validate(input.as_str()).is_ok());
        }

        #[test]
        fn mobile_numbers_with_known_ddd_are_valid(
            index in 0usize..67,
            rest in "[0-9]{8}",
        ) {
            let ddd = crate::tables::AREA_CODES[index];
            let bare = format!("{ddd}9{rest}");
            let formatted = format!("({ddd}) 9{}-{}", &rest[..4], &rest[4..]);
            let international = format!("+55{ddd}9{rest}");
            let rule = PhoneRule::new();
            prop_assert!(rule.validate(bare.as_str()).is_ok());
            prop_assert!(rule.validate(formatted.as_str()).is_ok());
            prop_assert!(rule.validate(international.as_str()).is_ok());
        }

        #[test]
        fn opening_hours_follow_minute_order(
            open in 0u32..1440,
            close in 0u32..1440,
        ) {
            let value = format!(
                "{:02}:{:02}-{:02}:{:02}",
                open / 60, open % 60, close / 60, close % 60
            );
            let valid = OpeningHoursRule::new().validate(value.as_str()).is_ok();
            prop_assert_eq!(valid, close > open);
        }

        #[test]
        fn category_matching_ignores_case(index in 0usize..34) {
            let name = crate::tables::RESTAURANT_CATEGORIES[index];
            let rule = CategoryRule::restaurant();
            prop_assert!(rule.validate(name.to_uppercase().as_str()).is_ok());
            prop_assert!(rule.validate(name.to_lowercase().as_str()).is_ok());
        }

        #[test]
        fn names_with_digits_are_rejected(
            first in "[A-Za-zÀ-ÿ]{2,10}",
            digit in 0u8..10,
        ) {
            let value = format!("{first}{digit}");
            prop_assert!(NameRule::default().validate(value.as_str()).is_err());
        }

        // Absent values pass every rule except `required`.
        #[test]
        fn absent_is_valid(message in optional_message_strategy()) {
            let cep = CepRule { message: message.clone() };
            let email = EmailRule { message: message.clone() };
            prop_assert!(ValidationRule::<str>::is_valid(&cep, None));
            prop_assert!(ValidationRule::<str>::is_valid(&email, None));
            prop_assert!(ValidationRule::<Decimal>::is_valid(&PriceRule::default(), None));
            prop_assert!(ValidationRule::<Decimal>::is_valid(&RatingRule::default(), None));
            prop_assert!(ValidationRule::<i32>::is_valid(&DeliveryTimeRule::default(), None));
            prop_assert!(ValidationRule::<str>::is_valid(&NameRule::default(), None));
            let required = RequiredRule { message };
            prop_assert!(!ValidationRule::<str>::is_valid(&required, None));
        }
    }
}
