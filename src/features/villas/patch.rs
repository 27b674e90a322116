//! Applying `replace` operations from a PATCH body to villa fields.

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto};

/// Fields a PATCH body may target. `id` and the timestamps are not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchableField {
    Name,
    Details,
    Rate,
    Sqft,
    Occupancy,
    ImageUrl,
    Amenity,
}

impl PatchableField {
    pub const ALL: [PatchableField; 7] = [
        PatchableField::Name,
        PatchableField::Details,
        PatchableField::Rate,
        PatchableField::Sqft,
        PatchableField::Occupancy,
        PatchableField::ImageUrl,
        PatchableField::Amenity,
    ];

    /// Key of the field in request and response bodies
    pub fn json_name(self) -> &'static str {
        match self {
            PatchableField::Name => "name",
            PatchableField::Details => "details",
            PatchableField::Rate => "rate",
            PatchableField::Sqft => "sqft",
            PatchableField::Occupancy => "occupancy",
            PatchableField::ImageUrl => "imageUrl",
            PatchableField::Amenity => "amenity",
        }
    }

    /// PATCH path for this field, e.g. `/imageUrl`
    pub fn path(self) -> String {
        format!("/{}", self.json_name())
    }

    /// Resolve a patch path such as `/rate` or `/imageurl`.
    ///
    /// The leading slash is optional and matching ignores ASCII case.
    pub fn from_path(path: &str) -> Option<Self> {
        let key = path.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|field| field.json_name().eq_ignore_ascii_case(key))
    }
}

/// Apply every `replace` op whose path names a patchable field.
///
/// Ops with another `op` and ops with unknown paths are skipped. Returns the
/// number of ops applied. On error `fields` is left untouched.
pub fn apply_patch(fields: &mut VillaFieldsDto, ops: &[PatchOperationDto]) -> Result<usize> {
    let mut patched = fields.clone();
    let mut applied = 0;

    for op in ops {
        if !op.is_replace() {
            tracing::debug!("Skipping unsupported patch op '{}'", op.op);
            continue;
        }

        let Some(field) = PatchableField::from_path(&op.path) else {
            tracing::debug!("Skipping unknown patch path '{}'", op.path);
            continue;
        };

        match field {
            PatchableField::Name => patched.name = coerce_text(field, &op.value)?,
            PatchableField::Details => patched.details = coerce_text(field, &op.value)?,
            PatchableField::Rate => patched.rate = coerce_float(field, &op.value)?,
            PatchableField::Sqft => patched.sqft = coerce_integer(field, &op.value)?,
            PatchableField::Occupancy => patched.occupancy = coerce_integer(field, &op.value)?,
            PatchableField::ImageUrl => patched.image_url = coerce_text(field, &op.value)?,
            PatchableField::Amenity => patched.amenity = coerce_text(field, &op.value)?,
        }
        applied += 1;
    }

    *fields = patched;
    Ok(applied)
}

fn invalid(field: PatchableField, expected: &str, value: &Value) -> AppError {
    AppError::Validation(format!(
        "{} must be {}, got {}",
        field.json_name(),
        expected,
        value
    ))
}

fn coerce_text(field: PatchableField, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(invalid(field, "a string", other)),
    }
}

/// A JSON number or numeric string as a finite float
pub fn float_from_json(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite())
}

/// A JSON integer or integer string; fractions are rejected
pub fn integer_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_float(field: PatchableField, value: &Value) -> Result<f64> {
    float_from_json(value).ok_or_else(|| invalid(field, "a number", value))
}

fn coerce_integer(field: PatchableField, value: &Value) -> Result<i64> {
    integer_from_json(value).ok_or_else(|| invalid(field, "an integer", value))
}
