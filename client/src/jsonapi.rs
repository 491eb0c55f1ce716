//! JSON:API envelope types and validated decoding.
//!
//! Inbound documents are deserialized into [`Document`] /
//! [`ResourceObject`] and then decoded into domain structs through
//! [`decode_one`], [`decode_many`] and [`decode_page`], which check the resource type,
//! parse the string id and rename attribute keys through the resource's
//! field table. Outbound bodies are assembled with [`NewResource`].

use crate::error::{ClientError, Result};
use crate::wire::{self, Attributes, WireField};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Media type for every JSON:API request and response.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// A domain struct that travels as a JSON:API resource object.
pub trait Resource: DeserializeOwned {
    /// JSON:API `type` member (e.g. `"partner-organization"`).
    const TYPE: &'static str;

    /// Attribute table used to rename wire keys to field names.
    type Field: WireField;
}

/// Top-level response document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<D> {
    /// Primary data: a resource object or an array of them.
    pub data: D,
    /// Non-standard meta information.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Document meta block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Meta {
    /// Total number of resources in a collection, when reported.
    #[serde(default)]
    pub count: Option<u64>,
}

/// One decoded collection together with the total the backend reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// Resources in response order.
    pub items: Vec<R>,
    /// `meta.count`, when the backend sent one.
    pub count: Option<u64>,
}

/// Inbound resource object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceObject {
    /// String-encoded numeric id.
    pub id: String,
    /// Resource type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Kebab-cased attributes.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Relationship members, if any.
    #[serde(default)]
    pub relationships: Option<Map<String, Value>>,
}

/// Reference to an existing resource inside a relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    /// Resource type.
    pub kind: &'static str,
    /// Numeric id, rendered as a string on the wire.
    pub id: u64,
}

impl ResourceIdentifier {
    /// Reference resource `kind` number `id`.
    #[must_use]
    pub const fn new(kind: &'static str, id: u64) -> Self {
        Self { kind, id }
    }

    fn into_value(self) -> Value {
        json!({ "type": self.kind, "id": self.id.to_string() })
    }
}

/// Relationship linkage for an outbound resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Relationship {
    /// To-one reference to an existing resource.
    ToOne(ResourceIdentifier),
    /// Resources created together with their parent in the same body.
    Nested(Vec<NewResource>),
}

impl Relationship {
    fn into_value(self) -> Value {
        let data = match self {
            Self::ToOne(identifier) => identifier.into_value(),
            Self::Nested(resources) => {
                Value::Array(resources.into_iter().map(NewResource::into_value).collect())
            }
        };
        json!({ "data": data })
    }
}

/// Outbound resource object.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    kind: &'static str,
    id: Option<u64>,
    attributes: Map<String, Value>,
    relationships: Vec<(&'static str, Relationship)>,
}

impl NewResource {
    /// Resource to be created; the server assigns the id.
    #[must_use]
    pub fn create<F: WireField>(kind: &'static str, attributes: Attributes<F>) -> Self {
        Self {
            kind,
            id: None,
            attributes: attributes.into_map(),
            relationships: Vec::new(),
        }
    }

    /// Partial update of resource `id`.
    #[must_use]
    pub fn update<F: WireField>(kind: &'static str, id: u64, attributes: Attributes<F>) -> Self {
        Self {
            id: Some(id),
            ..Self::create(kind, attributes)
        }
    }

    /// Attach a relationship member.
    #[must_use]
    pub fn with_relationship(mut self, name: &'static str, relationship: Relationship) -> Self {
        self.relationships.push((name, relationship));
        self
    }

    /// Attach a to-one reference to `kind` number `id`.
    #[must_use]
    pub fn belongs_to(self, name: &'static str, kind: &'static str, id: u64) -> Self {
        self.with_relationship(name, Relationship::ToOne(ResourceIdentifier::new(kind, id)))
    }

    /// Render the bare resource object.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from(self.kind));
        if let Some(id) = self.id {
            object.insert("id".to_string(), Value::from(id.to_string()));
        }
        object.insert("attributes".to_string(), Value::Object(self.attributes));
        if !self.relationships.is_empty() {
            let relationships = self
                .relationships
                .into_iter()
                .map(|(name, relationship)| (name.to_string(), relationship.into_value()))
                .collect();
            object.insert("relationships".to_string(), Value::Object(relationships));
        }
        Value::Object(object)
    }

    /// Render the full request document `{ "data": ... }`.
    #[must_use]
    pub fn into_document(self) -> Value {
        json!({ "data": self.into_value() })
    }
}

/// Parse a wire id; ids are positive integers carried as strings.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResourceId`] for anything that is not a
/// positive base-10 integer.
pub fn parse_id(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ClientError::InvalidResourceId { id: raw.to_string() }),
    }
}

/// Decode one resource object into its domain struct.
///
/// To-one relationship linkage (`relationships.event.data.id`) fills the
/// matching `<name>_id` field when the attributes do not carry it.
///
/// # Errors
///
/// Fails if the `type` does not match `R::TYPE`, the id is invalid, or
/// the attributes do not fit the domain struct.
pub fn decode_resource<R: Resource>(object: ResourceObject) -> Result<R> {
    if object.kind != R::TYPE {
        return Err(ClientError::ResponseParseFailed(format!(
            "expected resource type `{}`, got `{}`",
            R::TYPE,
            object.kind
        )));
    }

    let id = parse_id(&object.id)?;
    let mut fields = wire::rename_inbound::<R::Field>(object.attributes);

    for (name, member) in object.relationships.into_iter().flatten() {
        let Some(linked) = member
            .pointer("/data/id")
            .and_then(Value::as_str)
            .and_then(|raw| parse_id(raw).ok())
        else {
            continue;
        };
        let key = format!("{}_id", wire::kebab_to_snake(&name));
        let slot = fields.entry(key).or_insert(Value::Null);
        if slot.is_null() {
            *slot = Value::from(linked);
        }
    }

    fields.insert("id".to_string(), Value::from(id));

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ClientError::ResponseParseFailed(format!("{} attributes: {e}", R::TYPE)))
}

/// Decode a single-resource document.
///
/// # Errors
///
/// Fails if the body is not a document whose `data` is one resource
/// object, or if [`decode_resource`] rejects it.
pub fn decode_one<R: Resource>(body: Value) -> Result<R> {
    let document: Document<ResourceObject> = serde_json::from_value(body)
        .map_err(|e| ClientError::ResponseParseFailed(format!("{} document: {e}", R::TYPE)))?;
    decode_resource(document.data)
}

/// Decode a collection document, preserving order.
///
/// # Errors
///
/// Fails if `data` is not an array of resource objects, or if any
/// element is rejected by [`decode_resource`].
pub fn decode_many<R: Resource>(body: Value) -> Result<Vec<R>> {
    decode_page(body).map(|page| page.items)
}

/// Decode a collection document and its `meta.count`.
///
/// # Errors
///
/// Same as [`decode_many`].
pub fn decode_page<R: Resource>(body: Value) -> Result<Page<R>> {
    let document: Document<Vec<ResourceObject>> = serde_json::from_value(body)
        .map_err(|e| ClientError::ResponseParseFailed(format!("{} collection: {e}", R::TYPE)))?;
    let items = document
        .data
        .into_iter()
        .map(decode_resource)
        .collect::<Result<_>>()?;
    Ok(Page {
        items,
        count: document.meta.and_then(|meta| meta.count),
    })
}

/// `errors[0].detail` from a JSON:API error document, if non-empty.
#[must_use]
pub fn error_detail(body: &Value) -> Option<&str> {
    body.pointer("/errors/0/detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
}
