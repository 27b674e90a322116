mod patch_dto;
mod villa_dto;

pub use patch_dto::PatchOperationDto;
pub use villa_dto::{VillaFieldsDto, VillaResponseDto};
