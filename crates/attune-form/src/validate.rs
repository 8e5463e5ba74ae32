//! Field validation pipeline
//!
//! Each field owns an ordered validator list that runs against the current
//! value on every relevant update. The first non-ignored validator that
//! fails wins: its message becomes the field's error text and no later
//! validator is evaluated. A validator flagged `ignore` is skipped without
//! counting as a failure.

use crate::value::FieldValue;

type Check = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

pub struct Validator {
    message: String,
    ignore: bool,
    check: Check,
}

impl Validator {
    pub fn new(
        message: impl Into<String>,
        check: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            ignore: false,
            check: Box::new(check),
        }
    }

    /// Skip this validator without counting it as a failure
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore
    }

    /// Control must carry a non-empty value
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(message, |value| !value.is_empty())
    }

    /// Text must be at least `min` characters; non-text shapes pass
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::new(message, move |value| match value {
            FieldValue::Text(text) => text.chars().count() >= min,
            _ => true,
        })
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .field("ignore", &self.ignore)
            .finish()
    }
}

/// Verdict of running a validator list against one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub error_text: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            error_text: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_text: message.into(),
        }
    }
}

/// Evaluate validators in list order; first non-ignored failure wins and
/// evaluation stops there. Empty (or fully ignored) lists pass.
pub fn run(validators: &[Validator], value: &FieldValue) -> Verdict {
    for validator in validators {
        if validator.ignore {
            continue;
        }
        if !(validator.check)(value) {
            return Verdict::fail(validator.message.clone());
        }
    }
    Verdict::pass()
}
