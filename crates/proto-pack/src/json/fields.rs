//! Converts JSON member values back into field values.
//!
//! Every parser returns `Ok(None)` for `null`, which leaves the target field
//! untouched.

use serde_json::Value;

use super::{JsonMessage, UnmarshalOptions};
use crate::error::DecodeError;
use crate::field::Field;
use crate::message::Enumeration;

fn mismatch(field: &Field, expected: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        field: field.name,
        expected,
    }
}

fn out_of_range(field: &Field, value: impl ToString) -> DecodeError {
    DecodeError::OutOfRange {
        field: field.name,
        value: value.to_string(),
    }
}

/// Integral value of a JSON number, accepting `1.0` and `1e2` forms.
fn integral(field: &Field, number: &serde_json::Number) -> Result<i64, DecodeError> {
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(out_of_range(field, number)),
    }
}

/// Accepts a decimal string (the canonical form) or a number.
pub fn int64(field: &Field, value: Value) -> Result<Option<i64>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| out_of_range(field, s)),
        Value::Number(n) => integral(field, &n).map(Some),
        _ => Err(mismatch(field, "an int64 as string or number")),
    }
}

/// Accepts a number (the canonical form) or a numeric string.
pub fn int32(field: &Field, value: Value) -> Result<Option<i32>, DecodeError> {
    let wide = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => integral(field, &n)?,
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| out_of_range(field, &s))?,
        _ => return Err(mismatch(field, "an int32 number")),
    };
    i32::try_from(wide)
        .map(Some)
        .map_err(|_| out_of_range(field, wide))
}

pub fn bool(field: &Field, value: Value) -> Result<Option<bool>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        _ => Err(mismatch(field, "a boolean")),
    }
}

pub fn string(field: &Field, value: Value) -> Result<Option<String>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(mismatch(field, "a string")),
    }
}

/// Accepts a symbol name or any `int32`; numbers outside the declared set
/// are kept as unrecognized values.
pub fn enumeration<E: Enumeration>(field: &Field, value: Value) -> Result<Option<i32>, DecodeError> {
    match value {
        Value::String(symbol) => match E::from_str_name(&symbol) {
            Some(e) => Ok(Some(e.to_i32())),
            None => Err(DecodeError::UnknownEnumSymbol {
                field: field.name,
                symbol,
            }),
        },
        other => int32(field, other),
    }
}

pub fn repeated_int32(field: &Field, value: Value) -> Result<Option<Vec<i32>>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| int32(field, item)?.ok_or_else(|| mismatch(field, "a list of int32")))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(mismatch(field, "a list of int32")),
    }
}

/// Merges into the existing sub-message, creating it when unset.
pub fn merge_message<M: JsonMessage + Default>(
    field: &Field,
    value: Value,
    target: &mut Option<M>,
    options: &UnmarshalOptions,
) -> Result<(), DecodeError> {
    match value {
        Value::Null => Ok(()),
        Value::Object(_) => target
            .get_or_insert_with(M::default)
            .merge_json_value(value, options),
        _ => Err(mismatch(field, "an object")),
    }
}

pub fn repeated_message<M: JsonMessage + Default>(
    field: &Field,
    value: Value,
    options: &UnmarshalOptions,
) -> Result<Option<Vec<M>>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                if !item.is_object() {
                    return Err(mismatch(field, "a list of objects"));
                }
                let mut msg = M::default();
                msg.merge_json_value(item, options)?;
                Ok(msg)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(mismatch(field, "a list of objects")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: Field = Field::new(1, "id", "id");

    #[test]
    fn test_int64_forms() {
        assert_eq!(int64(&ID, json!("12345")).unwrap(), Some(12345));
        assert_eq!(int64(&ID, json!(12345)).unwrap(), Some(12345));
        assert_eq!(int64(&ID, json!(1e3)).unwrap(), Some(1000));
        assert_eq!(int64(&ID, json!("-9223372036854775808")).unwrap(), Some(i64::MIN));
        assert_eq!(int64(&ID, Value::Null).unwrap(), None);
        assert!(matches!(
            int64(&ID, json!("12x")),
            Err(DecodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            int64(&ID, json!(1.5)),
            Err(DecodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            int64(&ID, json!(true)),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_int32_range() {
        assert_eq!(int32(&ID, json!(-7)).unwrap(), Some(-7));
        assert_eq!(int32(&ID, json!("42")).unwrap(), Some(42));
        assert!(matches!(
            int32(&ID, json!(2_147_483_648i64)),
            Err(DecodeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_repeated_rejects_null_items() {
        assert_eq!(
            repeated_int32(&ID, json!([1, 2])).unwrap(),
            Some(vec![1, 2])
        );
        assert!(repeated_int32(&ID, json!([1, null])).is_err());
        assert!(repeated_int32(&ID, json!({"a": 1})).is_err());
    }

    #[test]
    fn test_bool_and_string_types() {
        assert_eq!(bool(&ID, json!(true)).unwrap(), Some(true));
        assert!(bool(&ID, json!("true")).is_err());
        assert_eq!(string(&ID, json!("x")).unwrap(), Some("x".to_owned()));
        assert!(string(&ID, json!(1)).is_err());
    }
}
