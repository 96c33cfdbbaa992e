//! Field checks and normalization for create/update request bodies.
//!
//! Pure functions: they never touch the store and never panic.

use serde_json::Value;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, ProductChanges, ProductPayload};

pub const MISSING_REQUIRED_FIELDS: &str =
    "Missing required fields: name, description, price, and category are required";
pub const INVALID_PRICE: &str = "Price must be a positive number";

/// Validate a create request.
///
/// `name`, `description`, `price` and `category` are required; `inStock`
/// defaults to `true`.
pub fn validate_create(payload: ProductPayload) -> ProductResult<NewProduct> {
    let name = payload.name.as_ref().and_then(trimmed_string);
    let description = payload.description.as_ref().and_then(trimmed_string);
    let category = payload.category.as_ref().and_then(trimmed_string);

    let (Some(name), Some(description), Some(price), Some(category)) =
        (name, description, payload.price.as_ref(), category)
    else {
        return Err(ProductError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
    };

    Ok(NewProduct {
        name,
        description,
        price: parse_price(price)?,
        category: category.to_lowercase(),
        in_stock: payload.in_stock.as_ref().is_none_or(truthy),
    })
}

/// Validate an update request. Every field is optional.
pub fn validate_update(payload: ProductPayload) -> ProductResult<ProductChanges> {
    let price = payload.price.as_ref().map(parse_price).transpose()?;

    Ok(ProductChanges {
        name: optional_string("name", payload.name.as_ref())?,
        description: optional_string("description", payload.description.as_ref())?,
        price,
        category: optional_string("category", payload.category.as_ref())?
            .map(|c| c.to_lowercase()),
        in_stock: payload.in_stock.as_ref().map(truthy),
    })
}

fn parse_price(value: &Value) -> ProductResult<f64> {
    value
        .as_f64()
        .filter(|price| *price >= 0.0)
        .ok_or_else(|| ProductError::Validation(INVALID_PRICE.to_string()))
}

fn trimmed_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// An update text field. Falsy values (`null`, `""`, `false`, `0`) and
/// whitespace-only strings leave the stored value alone.
fn optional_string(field: &str, value: Option<&Value>) -> ProductResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) if !truthy(v) => Ok(None),
        Some(v) if v.is_string() => Ok(trimmed_string(v)),
        Some(_) => Err(ProductError::Validation(format!(
            "{} must be a string",
            field
        ))),
    }
}

/// JSON truthiness, used to coerce `inStock`.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
