use async_trait::async_trait;

use crate::client::error::ClientError;
use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto, VillaResponseDto};

/// Remote villa store as seen by the client controller
#[async_trait]
pub trait VillaGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<VillaResponseDto>, ClientError>;

    async fn get(&self, id: i64) -> Result<VillaResponseDto, ClientError>;

    async fn create(&self, fields: &VillaFieldsDto) -> Result<VillaResponseDto, ClientError>;

    async fn replace(&self, id: i64, fields: &VillaFieldsDto) -> Result<(), ClientError>;

    async fn patch(&self, id: i64, ops: &[PatchOperationDto]) -> Result<(), ClientError>;

    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}
