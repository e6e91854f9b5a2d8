use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::models::calendar::parse_timestamp;
use crate::types::{text, Amount, TransactionId};

/// A single transaction record as returned by the backend for one service.
///
/// Only `transtype`, `param4` and `responsecode` drive status resolution and
/// only the two date fields drive the monthly filter. Everything else is
/// carried for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "text::text")]
    pub id: TransactionId,
    /// Flow code, `AM` (account to mobile) or `MA` (mobile to account) for transfers.
    #[serde(default, deserialize_with = "text::text")]
    pub transtype: String,
    /// Backend completion marker, `04` once the transfer has been completed.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub param4: Option<String>,
    /// Backend response code, `000` when the backend accepted the request.
    #[serde(default, deserialize_with = "text::text")]
    pub responsecode: String,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub postingdate: Option<String>,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub updatedat: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub reference: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "text::optional_text")]
    pub entry_type: Option<String>,
    /// Status string stamped by the backend. Never trusted for auditing.
    #[serde(rename = "status", default, deserialize_with = "text::optional_text")]
    pub backend_status: Option<String>
}

/// Outcome of picking the date a transaction is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoritativeDate {
    Parsed(DateTime<Local>),
    /// The chosen field was present but could not be read as a timestamp.
    Unreadable
}

impl Transaction {
    /// Returns the date this transaction counts against.
    ///
    /// `postingdate` wins over `updatedat`; when neither is present (or both
    /// are empty strings) the supplied `now` is used.
    pub fn authoritative_date(&self, now: DateTime<Local>) -> AuthoritativeDate {
        let chosen = [&self.postingdate, &self.updatedat]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty());

        match chosen {
            Some(value) => parse_timestamp(value)
                .map(AuthoritativeDate::Parsed)
                .unwrap_or(AuthoritativeDate::Unreadable),
            None => AuthoritativeDate::Parsed(now)
        }
    }
}
