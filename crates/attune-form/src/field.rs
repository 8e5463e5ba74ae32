//! Field entries and field bindings
//!
//! [`FieldEntry`] is the per-field record the coordinator owns. A
//! [`BoundField`] packages one field's name, handle clone, and ordered
//! validator list so the revalidate-after-write side effect lives with the
//! field, not with the coordinator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::Form;
use crate::validate::{self, Validator};
use crate::value::FieldValue;

/// One named form control's value/validity/error-text tuple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Generated identifier for the rendered control (label/aria wiring)
    pub control_id: String,
    pub value: FieldValue,
    pub valid: bool,
    pub error_text: String,
}

impl FieldEntry {
    pub(crate) fn new(value: FieldValue, valid: bool, error_text: String) -> Self {
        Self {
            control_id: Uuid::new_v4().to_string(),
            value,
            valid,
            error_text,
        }
    }
}

/// A field component's view of the form scope
pub struct BoundField {
    name: String,
    form: Form,
    validators: Vec<Validator>,
}

impl BoundField {
    pub fn new(name: impl Into<String>, form: &Form, validators: Vec<Validator>) -> Self {
        Self {
            name: name.into(),
            form: form.clone(),
            validators,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register with the form scope and validate whatever value actually
    /// landed (a seed value may have overridden `initial`). Returns the
    /// generated control id.
    pub fn register(&self, initial: FieldValue) -> String {
        let control_id = self.form.register(&self.name, initial, true, "");
        self.revalidate();
        control_id
    }

    /// Remove this field from the registry (component unmount)
    pub fn deregister(&self) {
        self.form.deregister(&self.name);
    }

    /// Write a new value, then re-run the validators. Revalidation is the
    /// owning field's side effect after every value change.
    pub fn set_value(&self, value: FieldValue) {
        self.form.set_value(&self.name, value);
        self.revalidate();
    }

    /// Re-run the validator list against the current value and record the
    /// verdict.
    pub fn revalidate(&self) {
        let value = self.form.value(&self.name);
        let verdict = validate::run(&self.validators, &value);
        self.form.set_validity(&self.name, verdict.valid, verdict.error_text);
    }

    pub fn value(&self) -> FieldValue {
        self.form.value(&self.name)
    }

    pub fn valid(&self) -> bool {
        self.form.validity(&self.name)
    }

    pub fn error_text(&self) -> String {
        self.form.error_text(&self.name)
    }

    pub fn show_error(&self) -> bool {
        self.form.show_error(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormOptions;

    fn pet_name(form: &Form) -> BoundField {
        BoundField::new(
            "petName",
            form,
            vec![
                Validator::required("Pet name is required"),
                Validator::min_len(6, "Pet name must be at least 6 characters"),
            ],
        )
    }

    #[test]
    fn test_registration_validates_initial_value() {
        let form = Form::default();
        let field = pet_name(&form);

        field.register(FieldValue::default());
        assert!(!field.valid());
        assert_eq!(field.error_text(), "Pet name is required");
        assert!(!form.all_valid());
    }

    #[test]
    fn test_registration_validates_seeded_value() {
        let form = Form::new(FormOptions {
            seed: [("petName".to_string(), FieldValue::text("Reginald"))]
                .into_iter()
                .collect(),
            ..FormOptions::default()
        });
        let field = pet_name(&form);

        // The empty initial value is overridden by the seed, so the seeded
        // value is what gets validated.
        field.register(FieldValue::default());
        assert_eq!(field.value(), FieldValue::text("Reginald"));
        assert!(field.valid());
    }

    #[test]
    fn test_set_value_revalidates() {
        let form = Form::default();
        let field = pet_name(&form);
        field.register(FieldValue::default());

        field.set_value(FieldValue::text("Rex"));
        assert!(!field.valid());
        assert_eq!(field.error_text(), "Pet name must be at least 6 characters");

        field.set_value(FieldValue::text("Reginald"));
        assert!(field.valid());
        assert_eq!(field.error_text(), "");
        assert!(form.all_valid());
    }

    #[test]
    fn test_entry_serializes_untagged_values() {
        let entry = FieldEntry::new(FieldValue::text("Rex"), true, String::new());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["value"], serde_json::json!("Rex"));
        assert_eq!(json["valid"], serde_json::json!(true));
    }

    #[test]
    fn test_deregister_removes_entry() {
        let form = Form::default();
        let field = pet_name(&form);
        field.register(FieldValue::default());
        assert!(!form.all_valid());

        field.deregister();
        assert!(form.all_valid());
        assert!(form.entry("petName").is_err());
    }
}
