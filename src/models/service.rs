use serde::Deserialize;

use crate::types::{text, ServiceId};

/// A banking service registered on the backend (wallet transfer, airtime, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "text::text")]
    pub id: ServiceId,
    #[serde(default, deserialize_with = "text::text")]
    pub name: String,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub logo_url: Option<String>,
    /// Whether the service is active. Visibility is decided upstream.
    #[serde(default, deserialize_with = "text::flag")]
    pub status: bool,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "text::optional_text")]
    pub updated_at: Option<String>
}
