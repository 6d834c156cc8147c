//! Validation of product creation bodies. Runs before any persistence call.

use crate::error::AppError;
use crate::product::{NewProduct, NAME_MAX_CHARS};
use serde_json::Value;

pub const NAME_REQUIRED_MESSAGE: &str = "A termék név megadása kötelező.";
pub const NAME_TOO_LONG_MESSAGE: &str = "A termék neve legfeljebb 255 karakter lehet.";
pub const PRICE_INVALID_MESSAGE: &str = "Az ár egy pozitív szám kell legyen.";

/// Check a raw creation body and extract its fields. Name is checked before price.
/// A body that is not a JSON object has no fields and fails on the name.
pub fn validate_new_product(body: &Value) -> Result<NewProduct, AppError> {
    let name = validate_name(body.get("name"))?;
    let price = validate_price(body.get("price"))?;
    Ok(NewProduct {
        name,
        price,
        description: description(body.get("description")),
    })
}

fn validate_name(v: Option<&Value>) -> Result<String, AppError> {
    let Some(Value::String(name)) = v else {
        return Err(AppError::Validation(NAME_REQUIRED_MESSAGE.into()));
    };
    if name.trim().is_empty() {
        return Err(AppError::Validation(NAME_REQUIRED_MESSAGE.into()));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::Validation(NAME_TOO_LONG_MESSAGE.into()));
    }
    Ok(name.clone())
}

/// Numbers and numeric strings are accepted; the result must be finite and positive.
fn validate_price(v: Option<&Value>) -> Result<f64, AppError> {
    let n = match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(AppError::Validation(PRICE_INVALID_MESSAGE.into())),
    }
}

fn description(v: Option<&Value>) -> Option<String> {
    match v {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
