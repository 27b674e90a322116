use async_trait::async_trait;
use reqwest::{header, Response};

use crate::client::error::ClientError;
use crate::client::gateway::VillaGateway;
use crate::core::config::ClientConfig;
use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto, VillaResponseDto};
use crate::shared::constants::VILLA_API_PATH;
use crate::shared::types::ErrorResponse;

/// HTTP implementation of [`VillaGateway`]
pub struct VillaApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl VillaApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static("no-cache"),
        );

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.api_url.clone(),
            http_client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, VILLA_API_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, VILLA_API_PATH, id)
    }
}

/// Pass success responses through; turn the rest into `ClientError::Api`
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message);

    match status.as_u16() {
        400 => tracing::error!("API Error (Bad Request): {:?}", message),
        404 => tracing::error!("Data not found"),
        500 => tracing::error!("API Error (Internal Server Error)"),
        other => tracing::warn!("Unhandled status code: {}", other),
    }

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl VillaGateway for VillaApiClient {
    async fn list(&self) -> Result<Vec<VillaResponseDto>, ClientError> {
        let response = self.http_client.get(self.collection_url()).send().await?;
        let villas = check_status(response)
            .await?
            .json::<Vec<VillaResponseDto>>()
            .await?;

        tracing::info!("Obtaining villas OK ({} records)", villas.len());
        Ok(villas)
    }

    async fn get(&self, id: i64) -> Result<VillaResponseDto, ClientError> {
        let response = self.http_client.get(self.item_url(id)).send().await?;
        let villa = check_status(response)
            .await?
            .json::<VillaResponseDto>()
            .await?;

        tracing::info!("Obtaining villa {} OK", id);
        Ok(villa)
    }

    async fn create(&self, fields: &VillaFieldsDto) -> Result<VillaResponseDto, ClientError> {
        let response = self
            .http_client
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?;
        let villa = check_status(response)
            .await?
            .json::<VillaResponseDto>()
            .await?;

        tracing::info!("Villa creation done (ID {})", villa.id);
        Ok(villa)
    }

    async fn replace(&self, id: i64, fields: &VillaFieldsDto) -> Result<(), ClientError> {
        let response = self
            .http_client
            .put(self.item_url(id))
            .json(fields)
            .send()
            .await?;
        check_status(response).await?;

        tracing::info!("Updating villa {} OK", id);
        Ok(())
    }

    async fn patch(&self, id: i64, ops: &[PatchOperationDto]) -> Result<(), ClientError> {
        let response = self
            .http_client
            .patch(self.item_url(id))
            .json(ops)
            .send()
            .await?;
        check_status(response).await?;

        tracing::info!("Partially updating villa {} OK", id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.http_client.delete(self.item_url(id)).send().await?;
        check_status(response).await?;

        tracing::info!("Deleting villa {} OK", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::villas::{routes, VillaService};
    use crate::shared::test_helpers::{sample_fields, test_pool};
    use std::sync::Arc;
    use std::time::Duration;

    /// Serve the villa routes on an ephemeral port and point a client at it
    async fn spawn_api() -> VillaApiClient {
        let service = Arc::new(VillaService::new(test_pool().await));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, routes::routes(service)).await.unwrap();
        });

        VillaApiClient::new(&ClientConfig {
            api_url: format!("http://{}", addr),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let client = VillaApiClient::new(&ClientConfig {
            api_url: "http://localhost:7155".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(client.collection_url(), "http://localhost:7155/api/VillaAPI");
        assert_eq!(client.item_url(7), "http://localhost:7155/api/VillaAPI/7");
    }

    #[tokio::test]
    async fn test_round_trip_against_running_api() {
        let client = spawn_api().await;
        let fields = sample_fields();

        let created = client.create(&fields).await.unwrap();
        assert_eq!(created.fields(), fields);

        client
            .patch(created.id, &[PatchOperationDto::replace("/rate", 199.5)])
            .await
            .unwrap();
        let fetched = client.get(created.id).await.unwrap();
        assert_eq!(fetched.rate, 199.5);

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 1);

        client.delete(created.id).await.unwrap();
        let err = client.get(created.id).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_server_validation_message_is_surfaced() {
        let client = spawn_api().await;
        let mut fields = sample_fields();
        fields.rate = -5.0;

        let err = client.create(&fields).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.unwrap_or_default().contains("rate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
