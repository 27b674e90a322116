use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a villa row
#[derive(Debug, Clone, FromRow)]
pub struct Villa {
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

impl Villa {
    /// Column list matching the field order of this struct
    pub const COLUMNS: &'static str = "id, name, details, rate, sqft, occupancy, image_url, \
                                       amenity, created_date, updated_date";

    /// Timestamp for the next mutation of this row.
    ///
    /// Never earlier than `created_date`, even if the wall clock stepped back.
    pub fn next_updated_date(&self) -> DateTime<Utc> {
        Utc::now().max(self.created_date)
    }
}
