use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto};
use crate::features::villas::patch::PatchableField;
use crate::shared::validation::{is_http_url, parse_unsigned_decimal, parse_unsigned_integer};

/// Label shown next to a field in forms and reports
pub fn field_label(field: PatchableField) -> &'static str {
    match field {
        PatchableField::Name => "Name",
        PatchableField::Details => "Details",
        PatchableField::Rate => "Rate",
        PatchableField::Sqft => "Sqft",
        PatchableField::Occupancy => "Occupancy",
        PatchableField::ImageUrl => "Image URL",
        PatchableField::Amenity => "Amenity",
    }
}

/// Validate a villa id typed by the user
pub fn parse_id(raw: &str) -> Result<i64, String> {
    match parse_unsigned_integer(raw) {
        Some(id) if id > 0 => Ok(id),
        _ => Err("ID must be a positive integer".to_string()),
    }
}

/// Raw text of the create/update form, exactly as typed
#[derive(Debug, Clone, Default)]
pub struct VillaForm {
    pub name: String,
    pub details: String,
    pub rate: String,
    pub sqft: String,
    pub occupancy: String,
    pub image_url: String,
    pub amenity: String,
}

impl VillaForm {
    /// Check every field and collect all problems.
    ///
    /// Amenity is the only optional field.
    pub fn validate(&self) -> Result<VillaFieldsDto, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let details = self.details.trim();
        let image_url = self.image_url.trim();

        required(name, PatchableField::Name, &mut errors);
        required(details, PatchableField::Details, &mut errors);

        let rate = required(&self.rate, PatchableField::Rate, &mut errors)
            .and_then(|raw| numeric(raw, PatchableField::Rate, &mut errors));
        let sqft = required(&self.sqft, PatchableField::Sqft, &mut errors)
            .and_then(|raw| integer(raw, PatchableField::Sqft, &mut errors));
        let occupancy = required(&self.occupancy, PatchableField::Occupancy, &mut errors)
            .and_then(|raw| integer(raw, PatchableField::Occupancy, &mut errors));

        if required(image_url, PatchableField::ImageUrl, &mut errors).is_some()
            && !is_http_url(image_url)
        {
            errors.push("Image URL must start with http:// or https://".to_string());
        }

        match (rate, sqft, occupancy) {
            (Some(rate), Some(sqft), Some(occupancy)) if errors.is_empty() => Ok(VillaFieldsDto {
                name: name.to_string(),
                details: details.to_string(),
                rate,
                sqft,
                occupancy,
                image_url: image_url.to_string(),
                amenity: self.amenity.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Partial update form: an id plus the fields the user ticked
#[derive(Debug, Clone, Default)]
pub struct PartialVillaForm {
    pub id: String,
    pub fields: Vec<(PatchableField, String)>,
}

impl PartialVillaForm {
    /// Validate the id and the selected fields, then build `replace` ops.
    ///
    /// Numeric fields are sent as JSON numbers.
    pub fn validate(&self) -> Result<(i64, Vec<PatchOperationDto>), Vec<String>> {
        let mut errors = Vec::new();

        let id = parse_id(&self.id).map_err(|e| errors.push(e)).ok();

        if self.fields.is_empty() {
            errors.push("Please select other entities to update.".to_string());
        }

        let mut ops = Vec::with_capacity(self.fields.len());
        for &(field, ref raw) in &self.fields {
            let raw = raw.trim();
            if field != PatchableField::Amenity && required(raw, field, &mut errors).is_none() {
                continue;
            }

            let path = field.path();
            match field {
                PatchableField::Rate => {
                    if let Some(rate) = numeric(raw, field, &mut errors) {
                        ops.push(PatchOperationDto::replace(&path, rate));
                    }
                }
                PatchableField::Sqft | PatchableField::Occupancy => {
                    if let Some(value) = integer(raw, field, &mut errors) {
                        ops.push(PatchOperationDto::replace(&path, value));
                    }
                }
                PatchableField::ImageUrl if !is_http_url(raw) => {
                    errors.push("Image URL must start with http:// or https://".to_string());
                }
                _ => ops.push(PatchOperationDto::replace(&path, raw)),
            }
        }

        match id {
            Some(id) if errors.is_empty() => Ok((id, ops)),
            _ => Err(errors),
        }
    }
}

fn required<'a>(raw: &'a str, field: PatchableField, errors: &mut Vec<String>) -> Option<&'a str> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(match field {
            PatchableField::Details => "Details are required.".to_string(),
            _ => format!("{} is required.", field_label(field)),
        });
        None
    } else {
        Some(raw)
    }
}

fn numeric(raw: &str, field: PatchableField, errors: &mut Vec<String>) -> Option<f64> {
    let parsed = parse_unsigned_decimal(raw);
    if parsed.is_none() {
        errors.push(format!("{} must be a valid number.", field_label(field)));
    }
    parsed
}

fn integer(raw: &str, field: PatchableField, errors: &mut Vec<String>) -> Option<i64> {
    let parsed = parse_unsigned_integer(raw);
    if parsed.is_none() {
        errors.push(format!("{} must be a valid integer.", field_label(field)));
    }
    parsed
}
