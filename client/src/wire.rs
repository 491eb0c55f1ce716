//! Attribute naming between the domain model and the wire.
//!
//! Domain structs use `snake_case` field names; the backend speaks
//! `kebab-case` attribute keys. Each resource declares its mapping as a
//! field enum through [`wire_fields!`], and every outbound attribute
//! object is built through [`Attributes`], so the only place a wire key
//! is spelled out is the table itself.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// One entry of a per-resource field table.
pub trait WireField: Copy + Eq + std::fmt::Debug + 'static {
    /// Every field in the table, in declaration order.
    const ALL: &'static [Self];

    /// Name of the field on the domain struct.
    fn field_name(self) -> &'static str;

    /// Attribute key on the wire.
    fn wire_key(self) -> &'static str;

    /// Look a field up by its wire key.
    #[must_use]
    fn from_wire(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.wire_key() == key)
    }
}

/// Declare a resource field table.
///
/// ```ignore
/// wire_fields! {
///     /// Event attribute keys.
///     pub enum EventField {
///         StartsAt => ("starts_at", "starts-at"),
///     }
/// }
/// ```
macro_rules! wire_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => ($field:literal, $wire:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = concat!("`", $field, "`, sent as `", $wire, "`.")]
                $variant,
            )+
        }

        impl $crate::wire::WireField for $name {
            const ALL: &'static [Self] = &[$( Self::$variant, )+];

            fn field_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $field, )+
                }
            }

            fn wire_key(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }
    };
}

pub(crate) use wire_fields;

/// Convert a `snake_case` identifier to `kebab-case`.
#[must_use]
pub fn snake_to_kebab(name: &str) -> String {
    name.replace('_', "-")
}

/// Convert a `kebab-case` key to `snake_case`.
#[must_use]
pub fn kebab_to_snake(key: &str) -> String {
    key.replace('-', "_")
}

/// Render a timestamp the way the backend expects it (RFC 3339, `Z` suffix).
#[must_use]
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn date(day: &NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Render a decimal amount, as an integer when it has no fractional part.
///
/// `0.0` goes out as `0` and `25.5` as `25.5`.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn number(value: f64) -> Value {
    // Beyond 2^53 every f64 is whole but no longer exact as an integer.
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// Rename an inbound `attributes` object to domain field names.
///
/// Keys listed in the table map through it; anything else falls back to
/// [`kebab_to_snake`] so attributes the table does not know about still
/// land on the matching struct field.
#[must_use]
pub fn rename_inbound<F: WireField>(attributes: Map<String, Value>) -> Map<String, Value> {
    attributes
        .into_iter()
        .map(|(key, value)| {
            let name = F::from_wire(&key)
                .map_or_else(|| kebab_to_snake(&key), |field| field.field_name().to_string());
            (name, value)
        })
        .collect()
}

/// Outbound JSON:API `attributes` object keyed through a field table.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes<F> {
    map: Map<String, Value>,
    _fields: PhantomData<F>,
}

impl<F: WireField> Attributes<F> {
    /// Create an empty attribute object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: Map::new(),
            _fields: PhantomData,
        }
    }

    /// Always send `field`.
    pub fn set(&mut self, field: F, value: impl Into<Value>) -> &mut Self {
        self.map.insert(field.wire_key().to_string(), value.into());
        self
    }

    /// Send `field` only when a value is given.
    pub fn set_opt<T: Into<Value>>(&mut self, field: F, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(field, value);
        }
        self
    }

    /// Partial-update semantics for a nullable field.
    ///
    /// `None` leaves the field out, `Some(None)` sends an explicit `null`.
    pub fn set_patch<T: Into<Value>>(&mut self, field: F, value: Option<Option<T>>) -> &mut Self {
        if let Some(value) = value {
            self.set(field, value.map_or(Value::Null, Into::into));
        }
        self
    }

    /// Whether `field` will be sent.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.map.contains_key(field.wire_key())
    }

    /// Number of attributes that will be sent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no attribute will be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Take the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}

impl<F: WireField> Default for Attributes<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    wire_fields! {
        enum SampleField {
            Name => ("name", "name"),
            StartsAt => ("starts_at", "starts-at"),
            IsHidden => ("is_hidden", "is-hidden"),
        }
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(snake_to_kebab("travel_budget_limit"), "travel-budget-limit");
        assert_eq!(kebab_to_snake("travel-budget-limit"), "travel_budget_limit");
        assert_eq!(snake_to_kebab("name"), "name");
    }

    #[test]
    fn test_from_wire_lookup() {
        assert_eq!(SampleField::from_wire("starts-at"), Some(SampleField::StartsAt));
        assert_eq!(SampleField::from_wire("starts_at"), None);
        assert_eq!(SampleField::ALL.len(), 3);
    }

    #[test]
    fn test_set_opt_omits_none() {
        let mut attrs = Attributes::<SampleField>::new();
        attrs
            .set(SampleField::Name, "Summer Exchange")
            .set_opt::<bool>(SampleField::IsHidden, None);

        assert!(attrs.contains(SampleField::Name));
        assert!(!attrs.contains(SampleField::IsHidden));
        assert_eq!(Value::Object(attrs.into_map()), json!({"name": "Summer Exchange"}));
    }

    #[test]
    fn test_set_patch_distinguishes_absent_from_null() {
        let mut attrs = Attributes::<SampleField>::new();
        attrs
            .set_patch::<String>(SampleField::Name, None)
            .set_patch::<String>(SampleField::StartsAt, Some(None))
            .set_patch(SampleField::IsHidden, Some(Some(false)));

        assert_eq!(
            Value::Object(attrs.into_map()),
            json!({"starts-at": null, "is-hidden": false})
        );
    }

    #[test]
    fn test_rename_inbound_uses_table_then_fallback() {
        let inbound = json!({
            "starts-at": "2025-07-01T10:00:00Z",
            "is-hidden": true,
            "created-at": "2025-01-01T00:00:00Z"
        });
        let Value::Object(map) = inbound else {
            unreachable!("fixture is an object");
        };

        let renamed = rename_inbound::<SampleField>(map);
        assert_eq!(renamed["starts_at"], json!("2025-07-01T10:00:00Z"));
        assert_eq!(renamed["is_hidden"], json!(true));
        assert_eq!(renamed["created_at"], json!("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_whole_numbers_go_out_as_integers() {
        assert_eq!(number(0.0).to_string(), "0");
        assert_eq!(number(5000.0).to_string(), "5000");
        assert_eq!(number(-12.0).to_string(), "-12");
        assert_eq!(number(25.5).to_string(), "25.5");
        assert!(number(0.0).is_i64());
        assert!(number(f64::NAN).is_null());
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_timestamp_and_date_rendering() {
        let at = DateTime::parse_from_rfc3339("2025-07-01T12:30:00+02:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(timestamp(&at), "2025-07-01T10:30:00Z");

        let day = NaiveDate::from_ymd_opt(2001, 3, 9).unwrap();
        assert_eq!(date(&day), "2001-03-09");
    }
}
