//! Form value validation
//!
//! Validation never fails: it returns a map of field name to human-readable
//! message, empty when every value passes. Required is checked first; empty
//! optional values skip the remaining checks.

use crate::form::config::{FieldType, FormBuilderConfig, FormField};
use regex::Regex;
use std::collections::HashMap;

pub struct FormValidator {
    email_pattern: Regex,
    phone_pattern: Regex,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        let email_pattern =
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex");
        let phone_pattern = Regex::new(
            r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$",
        )
        .expect("Invalid phone regex");
        Self {
            email_pattern,
            phone_pattern,
        }
    }

    /// Validate submitted values against the config. Keys of the returned
    /// map are field names; an empty map means the submission is valid.
    pub fn validate(
        &self,
        config: &FormBuilderConfig,
        values: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        let mut errors = HashMap::new();

        for field in &config.fields {
            let value = values.get(&field.name).map(|v| v.as_str()).unwrap_or("");

            if field.required && value.trim().is_empty() {
                errors.insert(field.name.clone(), format!("{} is required", field.label));
                continue;
            }
            if value.is_empty() {
                continue;
            }

            if let Some(message) = self.check_value(field, value) {
                errors.insert(field.name.clone(), message);
            }
        }

        errors
    }

    fn check_value(&self, field: &FormField, value: &str) -> Option<String> {
        match field.field_type {
            FieldType::Email if !self.email_pattern.is_match(value) => {
                return Some("Please enter a valid email address".to_string());
            }
            FieldType::Tel if !self.phone_pattern.is_match(value) => {
                return Some("Please enter a valid phone number".to_string());
            }
            _ => {}
        }

        let rules = &field.validation;
        if let Some(min_length) = rules.min_length {
            if value.chars().count() < min_length {
                return Some(format!("Minimum length is {} characters", min_length));
            }
        }
        if let Some(max_length) = rules.max_length {
            if value.chars().count() > max_length {
                return Some(format!("Maximum length is {} characters", max_length));
            }
        }

        if field.field_type == FieldType::Number {
            // Unparseable numbers skip the range checks rather than error;
            // the rendered input element already constrains the type.
            if let Ok(number) = value.parse::<f64>() {
                if let Some(min) = rules.min {
                    if number < min {
                        return Some(format!("Minimum value is {}", min));
                    }
                }
                if let Some(max) = rules.max {
                    if number > max {
                        return Some(format!("Maximum value is {}", max));
                    }
                }
            }
        }

        if let Some(pattern) = &rules.pattern {
            if let Ok(regex) = Regex::new(pattern) {
                if !regex.is_match(value) {
                    return Some("Please match the requested format".to_string());
                }
            }
        }

        None
    }
}

/// Validate with a fresh default validator.
pub fn validate(
    config: &FormBuilderConfig,
    values: &HashMap<String, String>,
) -> HashMap<String, String> {
    FormValidator::new().validate(config, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::config::{FieldValidation, FormField};

    fn config_with(field: FormField) -> FormBuilderConfig {
        FormBuilderConfig {
            fields: vec![field],
            ..Default::default()
        }
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_field_missing() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Email".to_string(),
            name: "email".to_string(),
            field_type: FieldType::Email,
            required: true,
            ..Default::default()
        });
        let errors = validate(&config, &HashMap::new());
        assert_eq!(errors.get("email").unwrap(), "Email is required");

        let errors = validate(&config, &values(&[("email", "   ")]));
        assert_eq!(errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn test_optional_empty_value_skips_checks() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Email".to_string(),
            name: "email".to_string(),
            field_type: FieldType::Email,
            ..Default::default()
        });
        assert!(validate(&config, &HashMap::new()).is_empty());
    }

    #[test]
    fn test_email_format() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Email".to_string(),
            name: "email".to_string(),
            field_type: FieldType::Email,
            ..Default::default()
        });
        let errors = validate(&config, &values(&[("email", "not-an-email")]));
        assert_eq!(
            errors.get("email").unwrap(),
            "Please enter a valid email address"
        );
        assert!(validate(&config, &values(&[("email", "a@b.co")])).is_empty());
    }

    #[test]
    fn test_phone_format() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Phone".to_string(),
            name: "phone".to_string(),
            field_type: FieldType::Tel,
            ..Default::default()
        });
        assert!(validate(&config, &values(&[("phone", "(555) 123-4567")])).is_empty());
        let errors = validate(&config, &values(&[("phone", "call me")]));
        assert_eq!(
            errors.get("phone").unwrap(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn test_length_bounds() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Bio".to_string(),
            name: "bio".to_string(),
            field_type: FieldType::Textarea,
            validation: FieldValidation {
                min_length: Some(5),
                max_length: Some(10),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(
            validate(&config, &values(&[("bio", "hey")])).get("bio").unwrap(),
            "Minimum length is 5 characters"
        );
        assert_eq!(
            validate(&config, &values(&[("bio", "hello there world")]))
                .get("bio")
                .unwrap(),
            "Maximum length is 10 characters"
        );
        assert!(validate(&config, &values(&[("bio", "just right")])).is_empty());
    }

    #[test]
    fn test_number_range() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Age".to_string(),
            name: "age".to_string(),
            field_type: FieldType::Number,
            validation: FieldValidation {
                min: Some(18.0),
                max: Some(99.0),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(
            validate(&config, &values(&[("age", "12")])).get("age").unwrap(),
            "Minimum value is 18"
        );
        assert_eq!(
            validate(&config, &values(&[("age", "120")])).get("age").unwrap(),
            "Maximum value is 99"
        );
        assert!(validate(&config, &values(&[("age", "30")])).is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let config = config_with(FormField {
            id: "field-1".to_string(),
            label: "Code".to_string(),
            name: "code".to_string(),
            field_type: FieldType::Text,
            validation: FieldValidation {
                pattern: Some(r"^[A-Z]{3}-\d{2}$".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(validate(&config, &values(&[("code", "ABC-12")])).is_empty());
        assert_eq!(
            validate(&config, &values(&[("code", "abc12")]))
                .get("code")
                .unwrap(),
            "Please match the requested format"
        );
    }
}
