//! Form builder model and editing session
//!
//! A form is an ordered list of field descriptors. The session mirrors the
//! resume session: it owns one config value, edits replace whole fields, and
//! entries are addressed by id. There is no cross-field referential
//! integrity beyond id uniqueness.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Tel,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
    Date,
}

impl FieldType {
    /// Whether this type carries an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::File => "file",
            FieldType::Date => "date",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValidation {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    /// Form submission key.
    pub name: String,
    pub placeholder: String,
    pub required: bool,
    /// Only meaningful for select/radio fields.
    pub options: Vec<String>,
    pub validation: FieldValidation,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            id: String::new(),
            field_type: FieldType::Text,
            label: String::new(),
            name: String::new(),
            placeholder: String::new(),
            required: false,
            options: Vec::new(),
            validation: FieldValidation::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilderConfig {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

impl Default for FormBuilderConfig {
    fn default() -> Self {
        Self {
            title: "Contact Form".to_string(),
            description: "Please fill out the form below".to_string(),
            fields: Vec::new(),
        }
    }
}

/// Partial field update; `None` leaves the current value in place.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub validation: Option<FieldValidation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug)]
pub struct FormSession {
    config: FormBuilderConfig,
    next_field_number: u64,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_config(FormBuilderConfig::default())
    }

    pub fn with_config(config: FormBuilderConfig) -> Self {
        let next_field_number = config
            .fields
            .iter()
            .filter_map(|f| f.id.strip_prefix("field-"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self {
            config,
            next_field_number,
        }
    }

    pub fn config(&self) -> &FormBuilderConfig {
        &self.config
    }

    pub fn set_title(&mut self, title: String) {
        self.config.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.config.description = description;
    }

    /// Append a new field of the given type with generated id/name, a
    /// type-derived label, and default options for option-carrying types.
    pub fn add_field(&mut self, field_type: FieldType) -> &FormField {
        let number = self.next_field_number;
        self.next_field_number += 1;

        let options = if field_type.has_options() {
            vec!["Option 1".to_string(), "Option 2".to_string()]
        } else {
            Vec::new()
        };

        self.config.fields.push(FormField {
            id: format!("field-{}", number),
            field_type,
            label: format!("New {} field", field_type),
            name: format!("field_{}", number),
            required: false,
            options,
            ..Default::default()
        });
        self.config.fields.last().expect("field just pushed")
    }

    /// Merge a partial patch into the field with the given id. Returns false
    /// when no field matches.
    pub fn patch_field(&mut self, id: &str, patch: FieldPatch) -> bool {
        match self.config.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                if let Some(label) = patch.label {
                    field.label = label;
                }
                if let Some(name) = patch.name {
                    field.name = name;
                }
                if let Some(placeholder) = patch.placeholder {
                    field.placeholder = placeholder;
                }
                if let Some(required) = patch.required {
                    field.required = required;
                }
                if let Some(options) = patch.options {
                    field.options = options;
                }
                if let Some(validation) = patch.validation {
                    field.validation = validation;
                }
                true
            }
            None => false,
        }
    }

    /// Swap the field with its neighbor. A move past either end is a no-op;
    /// moving a field up and then down restores the original order.
    pub fn move_field(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.config.fields.iter().position(|f| f.id == id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => {
                if index + 1 < self.config.fields.len() {
                    Some(index + 1)
                } else {
                    None
                }
            }
        };
        match target {
            Some(target) => {
                self.config.fields.swap(index, target);
                true
            }
            None => false,
        }
    }

    pub fn remove_field(&mut self, id: &str) -> bool {
        let before = self.config.fields.len();
        self.config.fields.retain(|f| f.id != id);
        self.config.fields.len() != before
    }
}
