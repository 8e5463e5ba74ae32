//! Form state coordinator
//!
//! One [`Form`] handle is created per form scope and cloned into every
//! descendant field component. All reads and writes go through the
//! operation contract below; every operation is a single atomic state
//! transition, and aggregate validity is recomputed inside the same write
//! lock as the mutation that invalidated it.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::FormError;
use crate::field::FieldEntry;
use crate::value::{FieldValue, FormData};
use crate::Result;

/// Construction options for one form scope
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Expose field errors immediately instead of waiting for the first
    /// submit attempt
    pub always_show_errors: bool,
    /// Externally supplied form data; overrides initial values at
    /// registration time
    pub seed: FormData,
}

/// Outcome of a submit attempt
///
/// `entries` and `all_valid` are always populated so the caller can manage
/// focus for its error block regardless of outcome. `data` carries the
/// flattened name -> value payload and is `Some` only when every
/// registered field is valid.
#[derive(Debug, Clone)]
pub struct Submission {
    pub entries: HashMap<String, FieldEntry>,
    pub all_valid: bool,
    pub data: Option<FormData>,
}

#[derive(Debug)]
struct FormState {
    fields: HashMap<String, FieldEntry>,
    all_valid: bool,
    errors_visible: bool,
    seed: FormData,
    last_loaded: Option<FormData>,
}

impl FormState {
    fn recompute_all_valid(&mut self) {
        // Vacuously true for zero fields.
        self.all_valid = self.fields.values().all(|entry| entry.valid);
    }
}

pub struct Form {
    state: Arc<RwLock<FormState>>,
}

impl Form {
    pub fn new(options: FormOptions) -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState {
                fields: HashMap::new(),
                all_valid: true,
                errors_visible: options.always_show_errors,
                seed: options.seed,
                last_loaded: None,
            })),
        }
    }

    /// Register a field under `name`, returning its generated control id.
    ///
    /// A seed value supplied at construction overrides `initial_value`.
    /// Registering an already-registered name silently overwrites the
    /// previous entry.
    pub fn register(
        &self,
        name: &str,
        initial_value: FieldValue,
        valid: bool,
        error_text: impl Into<String>,
    ) -> String {
        let mut state = self.state.write();
        let value = state.seed.get(name).cloned().unwrap_or(initial_value);
        let entry = FieldEntry::new(value, valid, error_text.into());
        let control_id = entry.control_id.clone();

        if state.fields.insert(name.to_string(), entry).is_some() {
            tracing::debug!(field = %name, "Overwrote existing registration");
        }
        state.recompute_all_valid();

        tracing::debug!(field = %name, control_id = %control_id, "Registered field");

        control_id
    }

    /// Remove the entry for `name`; unknown names are a no-op.
    pub fn deregister(&self, name: &str) {
        let mut state = self.state.write();
        if state.fields.remove(name).is_some() {
            tracing::debug!(field = %name, "Deregistered field");
        }
        state.recompute_all_valid();
    }

    /// Update only the value of an existing entry. Validity is untouched;
    /// revalidation is the owning field's side effect (see
    /// [`BoundField`](crate::BoundField)).
    pub fn set_value(&self, name: &str, value: FieldValue) {
        let mut state = self.state.write();
        match state.fields.get_mut(name) {
            Some(entry) => entry.value = value,
            None => tracing::debug!(field = %name, "set_value on unregistered field ignored"),
        }
    }

    /// Update validity and error text of an existing entry and recompute
    /// aggregate validity.
    pub fn set_validity(&self, name: &str, valid: bool, error_text: impl Into<String>) {
        let mut state = self.state.write();
        match state.fields.get_mut(name) {
            Some(entry) => {
                entry.valid = valid;
                entry.error_text = error_text.into();
            }
            None => {
                tracing::debug!(field = %name, "set_validity on unregistered field ignored");
            }
        }
        state.recompute_all_valid();
    }

    /// Current value; defaults to empty text for unknown names.
    pub fn value(&self, name: &str) -> FieldValue {
        self.state
            .read()
            .fields
            .get(name)
            .map(|entry| entry.value.clone())
            .unwrap_or_default()
    }

    /// Current validity; defaults to `true` for unknown names.
    pub fn validity(&self, name: &str) -> bool {
        self.state
            .read()
            .fields
            .get(name)
            .map(|entry| entry.valid)
            .unwrap_or(true)
    }

    /// Current error text; defaults to empty for unknown names.
    pub fn error_text(&self, name: &str) -> String {
        self.state
            .read()
            .fields
            .get(name)
            .map(|entry| entry.error_text.clone())
            .unwrap_or_default()
    }

    /// Strict accessor for hosts that want unknown names surfaced instead
    /// of defaulted.
    pub fn entry(&self, name: &str) -> Result<FieldEntry> {
        self.state
            .read()
            .fields
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn all_valid(&self) -> bool {
        self.state.read().all_valid
    }

    pub fn errors_visible(&self) -> bool {
        self.state.read().errors_visible
    }

    /// Whether the field should render in its error state: invalid AND
    /// errors are visible (always-show configuration or a submit attempt).
    pub fn show_error(&self, name: &str) -> bool {
        let state = self.state.read();
        state.errors_visible
            && state
                .fields
                .get(name)
                .map(|entry| !entry.valid)
                .unwrap_or(false)
    }

    /// Overwrite values for every key present in both `partial` and the
    /// registry; keys without a registered entry are ignored and never
    /// create one. A payload equal to the previously loaded one is skipped
    /// so a re-render with the same object does not retrigger. Returns
    /// whether the payload was applied.
    pub fn load_data(&self, partial: FormData) -> bool {
        let mut state = self.state.write();
        if state.last_loaded.as_ref() == Some(&partial) {
            return false;
        }

        let mut applied = 0usize;
        for (name, value) in &partial {
            if let Some(entry) = state.fields.get_mut(name) {
                entry.value = value.clone();
                applied += 1;
            }
        }
        state.last_loaded = Some(partial);
        state.recompute_all_valid();

        tracing::debug!(applied, "Loaded external form data");

        true
    }

    /// Submit attempt. Flips error visibility on (first-submit gate) and
    /// returns the full entry map with aggregate validity; the flattened
    /// success payload is present only when everything is valid.
    pub fn submit(&self) -> Submission {
        let mut state = self.state.write();
        state.errors_visible = true;

        let all_valid = state.all_valid;
        let entries = state.fields.clone();
        let data = all_valid.then(|| {
            state
                .fields
                .iter()
                .map(|(name, entry)| (name.clone(), entry.value.clone()))
                .collect::<FormData>()
        });

        tracing::info!(all_valid, fields = entries.len(), "Form submitted");

        Submission {
            entries,
            all_valid,
            data,
        }
    }
}

impl Clone for Form {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), FieldValue::text(*value)))
            .collect()
    }

    #[test]
    fn test_all_valid_tracks_registry() {
        let form = Form::default();
        // Vacuously true with zero fields.
        assert!(form.all_valid());

        form.register("petName", FieldValue::default(), false, "Required");
        assert!(!form.all_valid());

        form.register("petType", FieldValue::text("dog"), true, "");
        assert!(!form.all_valid());

        form.set_validity("petName", true, "");
        assert!(form.all_valid());

        form.set_validity("petName", false, "Required");
        form.deregister("petName");
        // Only the valid entry remains.
        assert!(form.all_valid());

        form.deregister("petType");
        assert!(form.all_valid());
    }

    #[test]
    fn test_duplicate_registration_overwrites() {
        let form = Form::default();
        let first = form.register("petName", FieldValue::text("Rex"), true, "");
        let second = form.register("petName", FieldValue::text("Fido"), false, "Too short");

        assert_ne!(first, second);
        assert_eq!(form.value("petName"), FieldValue::text("Fido"));
        assert!(!form.validity("petName"));
        assert_eq!(form.entry("petName").unwrap().control_id, second);
    }

    #[test]
    fn test_seed_overrides_initial_value() {
        let form = Form::new(FormOptions {
            seed: data(&[("petName", "Reginald")]),
            ..FormOptions::default()
        });

        form.register("petName", FieldValue::text("Rex"), true, "");
        form.register("petType", FieldValue::text("dog"), true, "");

        assert_eq!(form.value("petName"), FieldValue::text("Reginald"));
        assert_eq!(form.value("petType"), FieldValue::text("dog"));
    }

    #[test]
    fn test_unknown_names_return_defaults() {
        let form = Form::default();
        assert_eq!(form.value("ghost"), FieldValue::text(""));
        assert!(form.validity("ghost"));
        assert_eq!(form.error_text("ghost"), "");
        assert!(form.entry("ghost").is_err());
    }

    #[test]
    fn test_writes_to_unknown_names_are_noops() {
        let form = Form::default();
        form.set_value("ghost", FieldValue::text("boo"));
        form.set_validity("ghost", false, "nope");

        assert!(form.entry("ghost").is_err());
        assert!(form.all_valid());
    }

    #[test]
    fn test_set_value_does_not_touch_validity() {
        let form = Form::default();
        form.register("petName", FieldValue::default(), false, "Required");

        form.set_value("petName", FieldValue::text("Reginald"));
        assert_eq!(form.value("petName"), FieldValue::text("Reginald"));
        // Still invalid until the owning field revalidates.
        assert!(!form.validity("petName"));
        assert_eq!(form.error_text("petName"), "Required");
    }

    #[test]
    fn test_load_data_never_creates_entries() {
        let form = Form::default();
        form.register("petName", FieldValue::default(), true, "");

        assert!(form.load_data(data(&[("petName", "Rex"), ("ghost", "boo")])));
        assert_eq!(form.value("petName"), FieldValue::text("Rex"));
        assert!(form.entry("ghost").is_err());
    }

    #[test]
    fn test_load_data_skips_identical_payload() {
        let form = Form::default();
        form.register("petName", FieldValue::default(), true, "");

        let payload = data(&[("petName", "Rex")]);
        assert!(form.load_data(payload.clone()));

        // Same payload again, e.g. from a re-render: skipped.
        form.set_value("petName", FieldValue::text("Fido"));
        assert!(!form.load_data(payload));
        assert_eq!(form.value("petName"), FieldValue::text("Fido"));

        // A changed payload applies.
        assert!(form.load_data(data(&[("petName", "Reginald")])));
        assert_eq!(form.value("petName"), FieldValue::text("Reginald"));
    }

    #[test]
    fn test_show_error_gated_on_first_submit() {
        let form = Form::default();
        form.register("petName", FieldValue::default(), false, "Required");

        // Invalid, but untouched forms render without error state.
        assert!(!form.show_error("petName"));
        assert!(!form.errors_visible());

        form.submit();
        assert!(form.show_error("petName"));

        // Valid fields never show an error even once visible.
        form.set_validity("petName", true, "");
        assert!(!form.show_error("petName"));
    }

    #[test]
    fn test_always_show_errors_option() {
        let form = Form::new(FormOptions {
            always_show_errors: true,
            ..FormOptions::default()
        });
        form.register("petName", FieldValue::default(), false, "Required");
        assert!(form.show_error("petName"));
    }

    #[test]
    fn test_submit_withholds_payload_when_invalid() {
        let form = Form::default();
        form.register("petName", FieldValue::default(), false, "Required");
        form.register("petType", FieldValue::default(), false, "Required");

        let submission = form.submit();
        assert!(!submission.all_valid);
        assert!(submission.data.is_none());
        // The raw-submit path still carries every entry for focus
        // management.
        assert_eq!(submission.entries.len(), 2);
        assert!(submission.entries.values().all(|entry| !entry.valid));
    }

    #[test]
    fn test_submit_flattens_payload_when_valid() {
        let form = Form::default();
        form.register("petName", FieldValue::text("Reginald"), true, "");
        form.register("petType", FieldValue::text("dog"), true, "");

        let submission = form.submit();
        assert!(submission.all_valid);

        let payload = submission.data.expect("valid form produces a payload");
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["petName"], FieldValue::text("Reginald"));
        assert_eq!(payload["petType"], FieldValue::text("dog"));
    }

    #[test]
    fn test_handle_clones_share_state() {
        let form = Form::default();
        let field_view = form.clone();

        form.register("petName", FieldValue::text("Rex"), true, "");
        assert_eq!(field_view.value("petName"), FieldValue::text("Rex"));

        field_view.set_value("petName", FieldValue::text("Fido"));
        assert_eq!(form.value("petName"), FieldValue::text("Fido"));
    }
}
