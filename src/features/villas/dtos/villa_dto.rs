use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::villas::models::Villa;
use crate::features::villas::patch::{float_from_json, integer_from_json};

lazy_static! {
    /// At least one non-whitespace character
    static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

/// Writable villa fields, used as the POST and PUT body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaFieldsDto {
    #[validate(regex(path = *NON_BLANK_REGEX, message = "name must not be blank"))]
    pub name: String,

    pub details: String,

    /// Nightly price
    #[serde(deserialize_with = "number_or_numeric_string")]
    #[validate(range(min = 0.0, message = "rate must not be negative"))]
    pub rate: f64,

    #[serde(deserialize_with = "integer_or_integer_string")]
    #[validate(range(min = 0, message = "sqft must not be negative"))]
    pub sqft: i64,

    #[serde(deserialize_with = "integer_or_integer_string")]
    #[validate(range(min = 0, message = "occupancy must not be negative"))]
    pub occupancy: i64,

    pub image_url: String,

    pub amenity: String,
}

/// Accepts `150.5` as well as `"150.5"`, the same way PATCH values are coerced
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    float_from_json(&value)
        .ok_or_else(|| de::Error::custom(format!("expected a number, got {}", value)))
}

fn integer_or_integer_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integer_from_json(&value)
        .ok_or_else(|| de::Error::custom(format!("expected an integer, got {}", value)))
}

impl From<&Villa> for VillaFieldsDto {
    fn from(v: &Villa) -> Self {
        Self {
            name: v.name.clone(),
            details: v.details.clone(),
            rate: v.rate,
            sqft: v.sqft,
            occupancy: v.occupancy,
            image_url: v.image_url.clone(),
            amenity: v.amenity.clone(),
        }
    }
}

/// Response DTO for villa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaResponseDto {
    pub id: i64,
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub sqft: i64,
    pub occupancy: i64,
    pub image_url: String,
    pub amenity: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<Villa> for VillaResponseDto {
    fn from(v: Villa) -> Self {
        Self {
            id: v.id,
            name: v.name,
            details: v.details,
            rate: v.rate,
            sqft: v.sqft,
            occupancy: v.occupancy,
            image_url: v.image_url,
            amenity: v.amenity,
            created_date: v.created_date,
            updated_date: v.updated_date,
        }
    }
}

impl VillaResponseDto {
    /// The writable part of this record
    pub fn fields(&self) -> VillaFieldsDto {
        VillaFieldsDto {
            name: self.name.clone(),
            details: self.details.clone(),
            rate: self.rate,
            sqft: self.sqft,
            occupancy: self.occupancy,
            image_url: self.image_url.clone(),
            amenity: self.amenity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> VillaFieldsDto {
        VillaFieldsDto {
            name: "Royal Villa".to_string(),
            details: "Sea view".to_string(),
            rate: 200.0,
            sqft: 550,
            occupancy: 4,
            image_url: "https://img.example.com/1.png".to_string(),
            amenity: "Pool".to_string(),
        }
    }

    #[test]
    fn test_fields_use_camel_case_keys() {
        let value = serde_json::to_value(fields()).unwrap();
        assert_eq!(value["imageUrl"], "https://img.example.com/1.png");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_integer_rate_is_accepted() {
        let dto: VillaFieldsDto = serde_json::from_value(json!({
            "name": "A", "details": "B", "rate": 150, "sqft": 10,
            "occupancy": 2, "imageUrl": "http://x", "amenity": ""
        }))
        .unwrap();
        assert_eq!(dto.rate, 150.0);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let dto: VillaFieldsDto = serde_json::from_value(json!({
            "name": "A", "details": "B", "rate": "150.5", "sqft": " 10 ",
            "occupancy": "2", "imageUrl": "http://x", "amenity": ""
        }))
        .unwrap();
        assert_eq!(dto.rate, 150.5);
        assert_eq!(dto.sqft, 10);
        assert_eq!(dto.occupancy, 2);
    }

    #[test]
    fn test_unparsable_numbers_are_rejected() {
        for (key, bad) in [
            ("sqft", json!("lots")),
            ("sqft", json!(10.5)),
            ("occupancy", json!(null)),
            ("rate", json!("NaN")),
            ("rate", json!(true)),
        ] {
            let mut body = json!({
                "name": "A", "details": "B", "rate": 150, "sqft": 10,
                "occupancy": 2, "imageUrl": "http://x", "amenity": ""
            });
            body[key] = bad;
            assert!(serde_json::from_value::<VillaFieldsDto>(body).is_err());
        }
    }

    #[test]
    fn test_validation_rules() {
        assert!(fields().validate().is_ok());

        let mut blank = fields();
        blank.name = "   ".to_string();
        assert!(blank.validate().is_err());

        let mut negative = fields();
        negative.rate = -1.0;
        negative.occupancy = -2;
        let errors = negative.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert!(field_errors.contains_key("rate"));
        assert!(field_errors.contains_key("occupancy"));
    }
}
