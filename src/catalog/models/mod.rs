//! Data models representing catalog products and their review status.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Backend-assigned product identifier.
///
/// The backend may send identifiers as JSON numbers or strings. Both forms
/// are kept verbatim as text so they can be placed in request paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Creates an identifier from its textual form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawProductId::deserialize(deserializer)?;
        Ok(match raw {
            RawProductId::Text(text) => Self(text),
            RawProductId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Review status of a product as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    /// Not yet reviewed. Also used when the backend omits the status.
    #[default]
    Pending,
    /// Accepted by an operator.
    Approved,
    /// Rejected by an operator.
    Rejected,
    /// Deferred for a later review pass.
    ReviewLater,
    /// Any status value this client does not recognise.
    Other(String),
}

impl ProductStatus {
    /// Maps a backend status string onto a status value.
    ///
    /// Matching is exact; unknown values are preserved in [`Self::Other`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "Approved" => Self::Approved,
            "Rejected" => Self::Rejected,
            "ReviewLater" => Self::ReviewLater,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the backend representation of this status.
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::ReviewLater => "ReviewLater",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(serde_json::Value::Null) => Self::Pending,
            Some(serde_json::Value::String(value)) => Self::from_wire(&value),
            Some(other) => Self::Other(other.to_string()),
        })
    }
}

/// A status an operator can move a product into.
///
/// `Pending` is deliberately absent: the client never sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransitionStatus {
    /// Approve the product.
    Approved,
    /// Reject the product.
    Rejected,
    /// Defer the product.
    ReviewLater,
}

impl TransitionStatus {
    /// Human-readable action label used in UI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::ReviewLater => "marked for review later",
        }
    }
}

impl From<TransitionStatus> for ProductStatus {
    fn from(value: TransitionStatus) -> Self {
        match value {
            TransitionStatus::Approved => Self::Approved,
            TransitionStatus::Rejected => Self::Rejected,
            TransitionStatus::ReviewLater => Self::ReviewLater,
        }
    }
}

impl fmt::Display for TransitionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(ProductStatus::from(*self).as_wire())
    }
}

/// Body sent to `PUT /products/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// Target status.
    pub status: TransitionStatus,
}

/// A product record as returned by `GET /products`.
///
/// Only `id`, `status`, and `updated_at` drive review behaviour; the other
/// fields are passed through for display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    /// Backend identifier.
    pub id: ProductId,
    /// Current review status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Last modification timestamp; changes whenever the status changes.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// External product identifier.
    #[serde(default)]
    pub fdc_product_id: Option<String>,
    /// Location of the product image.
    #[serde(default)]
    pub product_image_uri: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub product_description: Option<String>,
    /// Free-form dimensions.
    #[serde(default)]
    pub product_dimensions: Option<String>,
    /// Price as sent by the backend (number or string).
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    /// Quantity as sent by the backend (number or string).
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
}

impl Product {
    /// Returns the date shown in the "Approved On" column, if any.
    #[must_use]
    pub fn approved_on(&self) -> Option<String> {
        self.updated_at.as_deref().map(format_display_date)
    }
}

/// Formats a backend timestamp as `MM/DD/YYYY`.
///
/// RFC 3339 timestamps keep the date in their own offset. Naive date-times
/// and plain dates are accepted too; anything else is returned unchanged.
#[must_use]
pub fn format_display_date(raw: &str) -> String {
    const DISPLAY_FORMAT: &str = "%m/%d/%Y";
    let trimmed = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.format(DISPLAY_FORMAT).to_string();
    }

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    if let Some(timestamp) = naive_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return timestamp.format(DISPLAY_FORMAT).to_string();
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_or_else(|_| trimmed.to_owned(), |date| date.format(DISPLAY_FORMAT).to_string())
}

/// Renders a pass-through JSON scalar for display.
#[must_use]
pub fn display_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
