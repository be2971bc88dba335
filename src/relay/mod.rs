//! Forwarding of contact submissions to the sheet script.
//!
//! The relay is deliberately fail-open: transport failures and unparseable
//! replies are reported to the visitor as success. Only a well-formed JSON
//! reply that does not say `"success": true` surfaces as an error. This
//! means a "success" shown in the UI does not prove the row was written;
//! every unverified success is logged at `warn` by [`script::ScriptRelay`].

pub mod interpret;
pub mod script;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::submission::FieldMap;

pub use interpret::{interpret, Verdict};
pub use script::ScriptRelay;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelayStatus {
    Success,
    Error,
}

/// What the caller learns about a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayOutcome {
    pub status: RelayStatus,
    /// Opaque UI token, only present on success. Carries no server meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RelayOutcome {
    pub fn success() -> Self {
        Self {
            status: RelayStatus::Success,
            id: Some(opaque_id()),
        }
    }

    pub fn error() -> Self {
        Self {
            status: RelayStatus::Error,
            id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RelayStatus::Success
    }
}

#[derive(Debug)]
pub struct RelayError {
    pub message: String,
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for RelayError {
    fn from(s: String) -> Self {
        RelayError { message: s }
    }
}

impl From<&str> for RelayError {
    fn from(s: &str) -> Self {
        RelayError {
            message: s.to_string(),
        }
    }
}

/// Delivers one submission and reports the outcome. Never fails: every
/// error path is folded into a [`RelayOutcome`].
#[async_trait]
pub trait Relay: Send + Sync {
    async fn submit(&self, raw: &FieldMap) -> RelayOutcome;
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Random base-36 token, generated fresh for every successful submission.
pub fn opaque_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
