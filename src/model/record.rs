//! User record and identifier types.
//!
//! Records arrive from the provider as JSON objects. `id`, `name` and `email`
//! are typed; anything else the provider sends is carried through untouched
//! so it survives edits and stays searchable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ===== RecordId =====

/// Record identifier.
///
/// Stored as the text the provider (or an edit) supplied. Ordering is
/// explicit rather than coerced:
///
/// - both ids parse as finite numbers: numeric order, ties broken lexically
/// - exactly one is numeric: the numeric id sorts first
/// - neither is numeric: lexical order
///
/// Equality is on the raw text, so `"1"` and `"01"` are distinct ids that
/// sort next to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap raw id text as received from the provider.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if the text is a finite number.
    pub fn numeric(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self::new(raw.to_string())
    }
}

/// Providers send ids as either JSON strings or JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number_text(&number)),
        })
    }
}

/// Shortest text for a JSON number, so `1.0` and `1` name the same id.
fn number_text(number: &serde_json::Number) -> String {
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    match number.as_f64() {
        // Adding zero folds -0.0 into 0.0
        Some(value) => (value + 0.0).to_string(),
        None => number.to_string(),
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// ===== Record =====

/// A single user entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned id. Not required to be unique.
    pub id: RecordId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Provider fields beyond the three typed ones (e.g. `role`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Record {
    /// Create a record with no extra fields.
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            extra: BTreeMap::new(),
        }
    }

    /// String form of every field value, typed fields first.
    ///
    /// Non-string extras use their JSON text.
    pub fn field_strings(&self) -> impl Iterator<Item = std::borrow::Cow<'_, str>> {
        use std::borrow::Cow;

        let typed = [
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
        ];
        let extras = self.extra.values().map(|value| match value {
            serde_json::Value::String(text) => Cow::Borrowed(text.as_str()),
            other => Cow::Owned(other.to_string()),
        });
        typed.into_iter().chain(extras)
    }
}

/// Sort records ascending by id. Stable, so duplicate ids keep their order.
pub fn sort_by_id(records: &mut [Record]) {
    records.sort_by(|a, b| a.id.cmp(&b.id));
}

// ===== RecordField =====

/// Editable field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// The record id.
    Id,
    /// The display name.
    Name,
    /// The email address.
    Email,
}

impl RecordField {
    /// Fields in edit order.
    pub const ALL: [RecordField; 3] = [RecordField::Id, RecordField::Name, RecordField::Email];

    /// Following field, wrapping to the first.
    pub fn next(self) -> Self {
        match self {
            RecordField::Id => RecordField::Name,
            RecordField::Name => RecordField::Email,
            RecordField::Email => RecordField::Id,
        }
    }

    /// Preceding field, wrapping to the last.
    pub fn prev(self) -> Self {
        match self {
            RecordField::Id => RecordField::Email,
            RecordField::Name => RecordField::Id,
            RecordField::Email => RecordField::Name,
        }
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            RecordField::Id => "ID",
            RecordField::Name => "Name",
            RecordField::Email => "Email",
        }
    }
}
