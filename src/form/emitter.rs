//! Form source-code emitter
//!
//! Turns a form config into the textual source of a runnable, self-contained
//! HTML form. One conditionally-shaped block per field type, each respecting
//! the field's `required` flag and placeholder; field order is preserved
//! exactly as configured.

use crate::form::config::{FieldType, FormBuilderConfig, FormField};

/// Emit complete HTML source for the configured form.
pub fn emit(config: &FormBuilderConfig) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    out.push_str("<style>\n");
    out.push_str("form { max-width: 640px; margin: 0 auto; padding: 24px; font-family: Arial, sans-serif; }\n");
    out.push_str("label { display: block; font-size: 14px; margin-bottom: 6px; }\n");
    out.push_str("input, textarea, select { width: 100%; padding: 8px 12px; margin-bottom: 16px; border: 1px solid #ccc; border-radius: 6px; }\n");
    out.push_str("input[type=\"radio\"], input[type=\"checkbox\"] { width: auto; margin-right: 8px; margin-bottom: 0; }\n");
    out.push_str("button { width: 100%; padding: 12px; background: #2563eb; color: #fff; border: 0; border-radius: 6px; cursor: pointer; }\n");
    out.push_str("</style>\n</head>\n<body>\n<form method=\"post\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&config.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&config.description)));

    for field in &config.fields {
        out.push_str(&emit_field(field));
    }

    out.push_str("  <button type=\"submit\">Submit</button>\n</form>\n</body>\n</html>\n");
    out
}

fn emit_field(field: &FormField) -> String {
    match field.field_type {
        FieldType::Textarea => emit_textarea(field),
        FieldType::Select => emit_select(field),
        FieldType::Radio => emit_radio_group(field),
        FieldType::Checkbox => emit_checkbox(field),
        _ => emit_input(field),
    }
}

fn emit_input(field: &FormField) -> String {
    let mut attrs = format!(
        "type=\"{}\" name=\"{}\"",
        field.field_type,
        escape_attr(&field.name)
    );
    if !field.placeholder.is_empty() {
        attrs.push_str(&format!(
            " placeholder=\"{}\"",
            escape_attr(&field.placeholder)
        ));
    }
    if field.required {
        attrs.push_str(" required");
    }
    format!(
        "  <div>\n    <label>{}</label>\n    <input {}>\n  </div>\n",
        field_label(field),
        attrs
    )
}

fn emit_textarea(field: &FormField) -> String {
    let mut attrs = format!("name=\"{}\" rows=\"4\"", escape_attr(&field.name));
    if !field.placeholder.is_empty() {
        attrs.push_str(&format!(
            " placeholder=\"{}\"",
            escape_attr(&field.placeholder)
        ));
    }
    if field.required {
        attrs.push_str(" required");
    }
    format!(
        "  <div>\n    <label>{}</label>\n    <textarea {}></textarea>\n  </div>\n",
        field_label(field),
        attrs
    )
}

fn emit_select(field: &FormField) -> String {
    let mut attrs = format!("name=\"{}\"", escape_attr(&field.name));
    if field.required {
        attrs.push_str(" required");
    }
    let mut block = format!(
        "  <div>\n    <label>{}</label>\n    <select {}>\n      <option value=\"\">Select an option</option>\n",
        field_label(field),
        attrs
    );
    for option in &field.options {
        block.push_str(&format!(
            "      <option value=\"{}\">{}</option>\n",
            escape_attr(option),
            escape_html(option)
        ));
    }
    block.push_str("    </select>\n  </div>\n");
    block
}

fn emit_radio_group(field: &FormField) -> String {
    let required = if field.required { " required" } else { "" };
    let mut block = format!("  <div>\n    <label>{}</label>\n", field_label(field));
    for option in &field.options {
        block.push_str(&format!(
            "    <label><input type=\"radio\" name=\"{}\" value=\"{}\"{}>{}</label>\n",
            escape_attr(&field.name),
            escape_attr(option),
            required,
            escape_html(option)
        ));
    }
    block.push_str("  </div>\n");
    block
}

fn emit_checkbox(field: &FormField) -> String {
    let required = if field.required { " required" } else { "" };
    format!(
        "  <div>\n    <label><input type=\"checkbox\" name=\"{}\"{}>{}</label>\n  </div>\n",
        escape_attr(&field.name),
        required,
        field_label(field)
    )
}

/// Label text with the trailing required marker.
fn field_label(field: &FormField) -> String {
    let marker = if field.required { " *" } else { "" };
    format!("{}{}", escape_html(&field.label), marker)
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}
