//! Listing snapshots held by the comparison list.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque listing identifier.
///
/// Always stored as a string. Catalog data uses integer ids while the API
/// hands out UUIDs, so both JSON strings and integers are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ListingId(s),
            RawId::Unsigned(n) => ListingId(n.to_string()),
            RawId::Signed(n) => ListingId(n.to_string()),
        })
    }
}

/// Where a listing is.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub area: Option<String>,
    pub country: String,
    empty_fields: EmptyFields,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            area: None,
            country: country.into(),
            empty_fields: EmptyFields::new(),
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }
}

#[derive(Serialize, Deserialize)]
struct LocationRecord {
    city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    area: Option<String>,
    country: String,
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = LocationRecord {
            city: self.city.clone(),
            area: self.area.clone(),
            country: self.country.clone(),
        };
        serialize_with_empty_fields(record, &self.empty_fields, serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (record, empty_fields): (LocationRecord, _) =
            deserialize_with_empty_fields(deserializer, &["area"])?;
        Ok(Self {
            city: record.city,
            area: record.area,
            country: record.country,
            empty_fields,
        })
    }
}

/// Snapshot of a listing taken when it was added to the comparison list.
///
/// This is a value copy. Later edits to the source listing are not
/// reflected until the entry is removed and added again.
///
/// Fields the comparison view does not know about (description, agent,
/// coordinates, ...) are kept in [`ComparisonEntry::extra`], and optional
/// fields that arrived as `null` or `[]` are written back that way, so a
/// persisted entry loads back with the same field set.
///
/// Serialization fails for a non-finite `price`; JSON has no encoding for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// Unique key within a comparison set
    pub id: ListingId,

    pub title: String,

    /// Image URLs, first one is the thumbnail
    pub images: Vec<String>,

    pub price: f64,

    /// Currency code or symbol prefix (e.g. "KSh")
    pub currency: String,

    /// URL slug for the property detail page
    pub slug: Option<String>,

    /// Suffix shown after the price (e.g. "per night")
    pub price_unit: Option<String>,

    pub property_type: Option<String>,

    pub purpose: Option<String>,

    pub location: Option<Location>,

    pub bedrooms: Option<u32>,

    pub bathrooms: Option<u32>,

    /// Free-form floor size (e.g. "1,800 sq ft")
    pub size: Option<String>,

    /// Amenities
    pub features: Vec<String>,

    /// Producer fields not used by the comparison view
    pub extra: Map<String, Value>,

    empty_fields: EmptyFields,
}

const OPTIONAL_ENTRY_FIELDS: &[&str] = &[
    "slug",
    "priceUnit",
    "type",
    "purpose",
    "location",
    "bedrooms",
    "bathrooms",
    "size",
    "features",
];

/// JSON shape of a [`ComparisonEntry`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    id: ListingId,
    title: String,
    images: Vec<String>,
    price: f64,
    currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_unit: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    features: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Serialize for ComparisonEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.price.is_finite() {
            return Err(S::Error::custom(format!(
                "listing {} has a non-finite price",
                self.id
            )));
        }

        let record = EntryRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            images: self.images.clone(),
            price: self.price,
            currency: self.currency.clone(),
            slug: self.slug.clone(),
            price_unit: self.price_unit.clone(),
            property_type: self.property_type.clone(),
            purpose: self.purpose.clone(),
            location: self.location.clone(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size: self.size.clone(),
            features: self.features.clone(),
            extra: self.extra.clone(),
        };
        serialize_with_empty_fields(record, &self.empty_fields, serializer)
    }
}

impl<'de> Deserialize<'de> for ComparisonEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (record, empty_fields): (EntryRecord, _) =
            deserialize_with_empty_fields(deserializer, OPTIONAL_ENTRY_FIELDS)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            images: record.images,
            price: record.price,
            currency: record.currency,
            slug: record.slug,
            price_unit: record.price_unit,
            property_type: record.property_type,
            purpose: record.purpose,
            location: record.location,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size: record.size,
            features: record.features,
            extra: record.extra,
            empty_fields,
        })
    }
}

/// Optional keys that arrived as `null` or `[]`, with the value they had.
type EmptyFields = BTreeMap<String, Value>;

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn deserialize_with_empty_fields<'de, D, T>(
    deserializer: D,
    optional: &[&str],
) -> Result<(T, EmptyFields), D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let mut raw = Map::<String, Value>::deserialize(deserializer)?;

    let mut empty_fields = EmptyFields::new();
    for key in optional {
        if raw.get(*key).map_or(false, is_empty_value) {
            if let Some(value) = raw.remove(*key) {
                empty_fields.insert((*key).to_string(), value);
            }
        }
    }

    let record = T::deserialize(Value::Object(raw)).map_err(D::Error::custom)?;
    Ok((record, empty_fields))
}

fn serialize_with_empty_fields<S, T>(
    record: T,
    empty_fields: &EmptyFields,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut value = serde_json::to_value(record).map_err(S::Error::custom)?;
    if let Value::Object(map) = &mut value {
        // A field set after loading wins over its recorded empty value
        for (key, empty) in empty_fields {
            map.entry(key.clone()).or_insert_with(|| empty.clone());
        }
    }
    value.serialize(serializer)
}

impl ComparisonEntry {
    /// Create an entry with the required fields; everything else is empty.
    pub fn new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            images: Vec::new(),
            price,
            currency: currency.into(),
            slug: None,
            price_unit: None,
            property_type: None,
            purpose: None,
            location: None,
            bedrooms: None,
            bathrooms: None,
            size: None,
            features: Vec::new(),
            extra: Map::new(),
            empty_fields: EmptyFields::new(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_unit(mut self, unit: impl Into<String>) -> Self {
        self.price_unit = Some(unit.into());
        self
    }

    pub fn with_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// First image, used as the thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
