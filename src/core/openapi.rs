use utoipa::{Modify, OpenApi};

use crate::features::villas::{dtos as villas_dtos, handlers as villas_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        villas_handlers::list_villas,
        villas_handlers::get_villa,
        villas_handlers::create_villa,
        villas_handlers::replace_villa,
        villas_handlers::patch_villa,
        villas_handlers::delete_villa,
    ),
    components(
        schemas(
            ErrorResponse,
            villas_dtos::VillaResponseDto,
            villas_dtos::VillaFieldsDto,
            villas_dtos::PatchOperationDto,
        )
    ),
    tags(
        (name = "villas", description = "Villa records")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
