use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto, VillaResponseDto};
use crate::features::villas::models::Villa;
use crate::features::villas::patch::apply_patch;
use crate::shared::constants::VILLA_NOT_FOUND;

/// Record store for villas. Every write runs in its own transaction.
pub struct VillaService {
    pool: SqlitePool,
}

fn not_found(id: i64) -> AppError {
    tracing::warn!("Villa with ID {} not found", id);
    AppError::NotFound(VILLA_NOT_FOUND.to_string())
}

impl VillaService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all villas in insertion order
    pub async fn list(&self) -> Result<Vec<VillaResponseDto>> {
        let query = format!("SELECT {} FROM villas ORDER BY id", Villa::COLUMNS);
        let villas: Vec<Villa> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list villas: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Retrieved {} villas", villas.len());
        Ok(villas.into_iter().map(VillaResponseDto::from).collect())
    }

    /// Get villa by ID
    pub async fn get(&self, id: i64) -> Result<VillaResponseDto> {
        let query = format!("SELECT {} FROM villas WHERE id = ?", Villa::COLUMNS);
        let villa: Option<Villa> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let villa = villa.ok_or_else(|| not_found(id))?;
        tracing::info!("Retrieved villa with ID {}", id);
        Ok(villa.into())
    }

    /// Insert a villa. Both timestamps get the same instant.
    pub async fn create(&self, dto: VillaFieldsDto) -> Result<VillaResponseDto> {
        dto.validate()?;

        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO villas (
                name, details, rate, sqft, occupancy, image_url, amenity,
                created_date, updated_date
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            Villa::COLUMNS
        );

        let villa: Villa = sqlx::query_as(&query)
            .bind(&dto.name)
            .bind(&dto.details)
            .bind(dto.rate)
            .bind(dto.sqft)
            .bind(dto.occupancy)
            .bind(&dto.image_url)
            .bind(&dto.amenity)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create villa: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created villa {} with ID {}", villa.name, villa.id);
        Ok(villa.into())
    }

    /// Overwrite every writable field of an existing villa
    pub async fn replace(&self, id: i64, dto: VillaFieldsDto) -> Result<VillaResponseDto> {
        dto.validate()?;

        let mut tx = self.pool.begin().await?;
        let current = Self::fetch_for_update(&mut tx, id).await?;
        let villa = Self::write_fields(&mut tx, &current, &dto).await?;
        tx.commit().await?;

        tracing::info!("Updated villa ID {}", id);
        Ok(villa.into())
    }

    /// Apply `replace` ops to an existing villa.
    ///
    /// `updated_date` is refreshed once, even when no op matched a field.
    pub async fn patch(&self, id: i64, ops: &[PatchOperationDto]) -> Result<VillaResponseDto> {
        let mut tx = self.pool.begin().await?;
        let current = Self::fetch_for_update(&mut tx, id).await?;

        let mut fields = VillaFieldsDto::from(&current);
        let applied = apply_patch(&mut fields, ops)?;
        fields.validate()?;

        let villa = Self::write_fields(&mut tx, &current, &fields).await?;
        tx.commit().await?;

        tracing::info!(
            "Completed patch for villa ID {} ({} of {} ops applied)",
            id,
            applied,
            ops.len()
        );
        Ok(villa.into())
    }

    /// Delete villa by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM villas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted villa with ID {}", id);
        Ok(())
    }

    async fn fetch_for_update(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        id: i64,
    ) -> Result<Villa> {
        let query = format!("SELECT {} FROM villas WHERE id = ?", Villa::COLUMNS);
        let villa: Option<Villa> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::Database)?;

        villa.ok_or_else(|| not_found(id))
    }

    async fn write_fields(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        current: &Villa,
        fields: &VillaFieldsDto,
    ) -> Result<Villa> {
        let query = format!(
            r#"
            UPDATE villas
            SET name = ?, details = ?, rate = ?, sqft = ?, occupancy = ?,
                image_url = ?, amenity = ?, updated_date = ?
            WHERE id = ?
            RETURNING {}
            "#,
            Villa::COLUMNS
        );

        sqlx::query_as(&query)
            .bind(&fields.name)
            .bind(&fields.details)
            .bind(fields.rate)
            .bind(fields.sqft)
            .bind(fields.occupancy)
            .bind(&fields.image_url)
            .bind(&fields.amenity)
            .bind(current.next_updated_date())
            .bind(current.id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update villa {}: {:?}", current.id, e);
                AppError::Database(e)
            })
    }
}
