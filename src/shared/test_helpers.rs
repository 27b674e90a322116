use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use sqlx::SqlitePool;

use crate::core::config::DatabaseConfig;
use crate::core::database::{create_pool, run_migrations};
use crate::features::villas::dtos::VillaFieldsDto;

/// Fresh in-memory database with the villas schema applied
pub async fn test_pool() -> SqlitePool {
    let pool = create_pool(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

/// Random but valid villa fields
pub fn sample_fields() -> VillaFieldsDto {
    let cents: i64 = (5_000i64..50_000).fake();
    let slug: String = Word().fake();

    VillaFieldsDto {
        name: CompanyName().fake(),
        details: Sentence(3..8).fake(),
        rate: cents as f64 / 100.0,
        sqft: (200i64..2_000).fake(),
        occupancy: (1i64..12).fake(),
        image_url: format!("https://img.example.com/{}.png", slug),
        amenity: Word().fake(),
    }
}
