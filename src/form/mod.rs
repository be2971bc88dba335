//! The contact form shared by the home page, the contact page and the modal.

pub mod config;

use serde::{Deserialize, Serialize};

use crate::relay::RelayOutcome;

pub use config::{ContactFormConfig, FieldKind, FieldSpec, FormVariant, ProgramOption};

/// Caller-side state of a contact form: `idle → loading → success | error → idle`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitRejected(pub FormStatus);

impl std::fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "submit not allowed while form is {}", self.0.as_str())
    }
}

impl FormStatus {
    /// Start a submission. Refused while one is in flight or after success,
    /// which is when the submit button is disabled.
    pub fn begin(self) -> Result<FormStatus, SubmitRejected> {
        match self {
            FormStatus::Idle | FormStatus::Error => Ok(FormStatus::Loading),
            FormStatus::Loading | FormStatus::Success => Err(SubmitRejected(self)),
        }
    }

    /// Settle an in-flight submission. Other states are left as they are.
    pub fn resolve(self, outcome: &RelayOutcome) -> FormStatus {
        match self {
            FormStatus::Loading if outcome.is_success() => FormStatus::Success,
            FormStatus::Loading => FormStatus::Error,
            other => other,
        }
    }

    pub fn reset(self) -> FormStatus {
        FormStatus::Idle
    }

    pub fn submit_disabled(self) -> bool {
        matches!(self, FormStatus::Loading | FormStatus::Success)
    }

    pub fn is_success(self) -> bool {
        self == FormStatus::Success
    }

    pub fn is_error(self) -> bool {
        self == FormStatus::Error
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Loading => "loading",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }

    /// Read the status echoed back by the form's hidden field. Anything
    /// unrecognized is treated as idle.
    pub fn from_client(value: Option<&str>) -> FormStatus {
        match value {
            Some("loading") => FormStatus::Loading,
            Some("success") => FormStatus::Success,
            Some("error") => FormStatus::Error,
            _ => FormStatus::Idle,
        }
    }
}
