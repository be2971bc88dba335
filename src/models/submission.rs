use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The five caller-supplied fields of a contact form, after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub message: String,
}

/// Outgoing record posted to the sheet script.
///
/// Field order here is the wire order of the form-encoded body and matches
/// the sheet's column order (`Name, Email, Phone, Program, Message, Time, Date`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub message: String,
    pub time: String,
    pub date: String,
}

impl ContactSubmission {
    /// Attach the local time-of-day and date strings, formatted the way an
    /// en-US browser renders `toLocaleTimeString` / `toLocaleDateString`.
    pub fn stamped(fields: ContactFields, at: NaiveDateTime) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            program: fields.program,
            message: fields.message,
            time: at.format("%-I:%M:%S %p").to_string(),
            date: at.format("%-m/%-d/%Y").to_string(),
        }
    }
}
