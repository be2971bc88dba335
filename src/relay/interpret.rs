use serde_json::Value;

use super::RelayOutcome;

/// How the script's reply body was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// JSON with `"success": true`.
    Confirmed,
    /// JSON that does not say `"success": true`. Carries the script's
    /// `message` when it sent one.
    Rejected(Option<String>),
    /// Not JSON at all, typically an HTML page. Counted as success.
    Unparseable,
    /// A bare JSON `null`. Has no fields to read, so it is counted as
    /// success like an unparseable reply.
    NullReply,
}

pub fn interpret(body: &str) -> Verdict {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return Verdict::Unparseable;
    };

    if parsed.is_null() {
        return Verdict::NullReply;
    }

    if parsed.get("success") == Some(&Value::Bool(true)) {
        return Verdict::Confirmed;
    }

    let message = parsed
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string());
    Verdict::Rejected(message)
}

impl From<&Verdict> for RelayOutcome {
    fn from(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Confirmed | Verdict::Unparseable | Verdict::NullReply => {
                RelayOutcome::success()
            }
            Verdict::Rejected(_) => RelayOutcome::error(),
        }
    }
}
