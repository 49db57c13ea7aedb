//! Best-effort transaction journal.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SnaplinkError};

/// One recorded shorten transaction.
///
/// Field names follow the journal endpoint's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// The original URL as the user entered it
    pub url_input: String,
    /// The short URL the API answered with
    pub api_response: String,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local wall-clock time, `HH:MM:SS`
    pub time: String,
}

impl JournalEntry {
    /// Build an entry stamped with the given local time.
    pub fn new(url_input: String, api_response: String, at: DateTime<Local>) -> Self {
        Self {
            url_input,
            api_response,
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
        }
    }

    /// Build an entry stamped with the current local time.
    pub fn now(url_input: String, api_response: String) -> Self {
        Self::new(url_input, api_response, Local::now())
    }
}

/// Sink for journal entries, abstracted for testing.
///
/// Delivery is best effort by contract: callers detach the write and only
/// log failures.
#[async_trait]
pub trait Journal: Send + Sync {
    /// Deliver one entry.
    async fn record(&self, entry: &JournalEntry) -> Result<()>;
}

/// Journal client that POSTs entries as JSON to a web-app endpoint.
pub struct WebAppJournal {
    http: reqwest::Client,
    endpoint: String,
}

impl WebAppJournal {
    /// Create a new journal client against `endpoint`.
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl Journal for WebAppJournal {
    async fn record(&self, entry: &JournalEntry) -> Result<()> {
        debug!(url_input = %entry.url_input, "Recording transaction");

        let response = self.http.post(&self.endpoint).json(entry).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SnaplinkError::JournalStatus(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_entry() -> JournalEntry {
        let at = Local.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        JournalEntry::new(
            "https://example.com/page".to_string(),
            "https://tinyurl.com/abc123".to_string(),
            at,
        )
    }

    #[test]
    fn test_entry_formats_date_and_time() {
        let entry = fixed_entry();
        assert_eq!(entry.date, "2024-01-15");
        assert_eq!(entry.time, "12:30:45");
    }

    #[test]
    fn test_wire_format_uses_camel_case_fields() {
        let value = serde_json::to_value(fixed_entry()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "urlInput": "https://example.com/page",
                "apiResponse": "https://tinyurl.com/abc123",
                "date": "2024-01-15",
                "time": "12:30:45",
            })
        );
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = fixed_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
