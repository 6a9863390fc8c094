use serde::{Deserialize, Serialize};

/// Body of a ping response.
///
/// Serializes as `{"ok":true,"ts":<millis>,"url":"<request url>"}`, in that
/// field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingPayload {
    /// Always `true`.
    pub ok: bool,
    /// Milliseconds since the Unix epoch at the time of the request.
    pub ts: u64,
    /// The inbound request URL, verbatim.
    pub url: String,
}

impl PingPayload {
    /// Creates a successful payload for the given timestamp and URL.
    pub fn new(ts: u64, url: impl Into<String>) -> Self {
        Self {
            ok: true,
            ts,
            url: url.into(),
        }
    }
}
