use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto, VillaResponseDto};
use crate::features::villas::services::VillaService;
use crate::shared::types::ErrorResponse;

/// List all villas
#[utoipa::path(
    get,
    path = "/api/VillaAPI",
    responses(
        (status = 200, description = "Villas in insertion order", body = Vec<VillaResponseDto>),
    ),
    tag = "villas"
)]
pub async fn list_villas(
    State(service): State<Arc<VillaService>>,
) -> Result<Json<Vec<VillaResponseDto>>> {
    let villas = service.list().await?;
    Ok(Json(villas))
}

/// Get villa by ID
#[utoipa::path(
    get,
    path = "/api/VillaAPI/{id}",
    params(
        ("id" = i64, Path, description = "Villa ID")
    ),
    responses(
        (status = 200, description = "Villa found", body = VillaResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Villa not found", body = ErrorResponse)
    ),
    tag = "villas"
)]
pub async fn get_villa(
    State(service): State<Arc<VillaService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<VillaResponseDto>> {
    let villa = service.get(id).await?;
    Ok(Json(villa))
}

/// Create a villa
#[utoipa::path(
    post,
    path = "/api/VillaAPI",
    request_body = VillaFieldsDto,
    responses(
        (status = 201, description = "Villa created", body = VillaResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "villas"
)]
pub async fn create_villa(
    State(service): State<Arc<VillaService>>,
    AppJson(dto): AppJson<VillaFieldsDto>,
) -> Result<(StatusCode, Json<VillaResponseDto>)> {
    let villa = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(villa)))
}

/// Replace all writable fields of a villa
#[utoipa::path(
    put,
    path = "/api/VillaAPI/{id}",
    params(
        ("id" = i64, Path, description = "Villa ID")
    ),
    request_body = VillaFieldsDto,
    responses(
        (status = 204, description = "Villa updated"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Villa not found", body = ErrorResponse)
    ),
    tag = "villas"
)]
pub async fn replace_villa(
    State(service): State<Arc<VillaService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<VillaFieldsDto>,
) -> Result<StatusCode> {
    service.replace(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partially update a villa
///
/// Body is a list of `{"op": "replace", "path": "/field", "value": ...}`.
/// Other ops and unknown paths are ignored.
#[utoipa::path(
    patch,
    path = "/api/VillaAPI/{id}",
    params(
        ("id" = i64, Path, description = "Villa ID")
    ),
    request_body = Vec<PatchOperationDto>,
    responses(
        (status = 204, description = "Villa updated"),
        (status = 400, description = "Value could not be coerced", body = ErrorResponse),
        (status = 404, description = "Villa not found", body = ErrorResponse)
    ),
    tag = "villas"
)]
pub async fn patch_villa(
    State(service): State<Arc<VillaService>>,
    AppPath(id): AppPath<i64>,
    AppJson(ops): AppJson<Vec<PatchOperationDto>>,
) -> Result<StatusCode> {
    service.patch(id, &ops).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a villa
#[utoipa::path(
    delete,
    path = "/api/VillaAPI/{id}",
    params(
        ("id" = i64, Path, description = "Villa ID")
    ),
    responses(
        (status = 204, description = "Villa deleted"),
        (status = 404, description = "Villa not found", body = ErrorResponse)
    ),
    tag = "villas"
)]
pub async fn delete_villa(
    State(service): State<Arc<VillaService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
