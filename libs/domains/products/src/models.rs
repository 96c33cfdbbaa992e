use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Product entity - represents a product held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the service
    pub id: String,
    /// Product name (trimmed, non-empty)
    pub name: String,
    /// Product description (trimmed, non-empty)
    pub description: String,
    /// Price, never negative
    #[serde(serialize_with = "serialize_price")]
    #[schema(example = 25)]
    pub price: f64,
    /// Category (trimmed, lower-cased)
    pub category: String,
    /// Whether the product is in stock
    pub in_stock: bool,
}

/// Request body for create and update.
///
/// Fields are kept as raw JSON so that type errors (e.g. a string price) are
/// reported by validation rather than by body deserialization. A missing key
/// is `None`; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Mouse")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Wireless mouse")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 25)]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Electronics")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>, example = true)]
    pub in_stock: Option<Value>,
}

/// Any value that is present in the body, `null` included.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validated, normalized input for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Validated, normalized partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// `{message, product}` body returned by create, update and delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            message: message.into(),
            product,
        }
    }
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Merge the supplied fields; `id` never changes.
    pub fn apply_changes(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(in_stock) = changes.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Whole-number prices are written as JSON integers (`25`, not `25.0`).
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
