//! Generic form builder: field model, code emitter, and value validation

pub mod config;
pub mod emitter;
pub mod validate;

pub use config::{FieldType, FormBuilderConfig, FormField, FormSession};
pub use emitter::emit;
pub use validate::validate;
