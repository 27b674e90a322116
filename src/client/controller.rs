use crate::client::error::ClientError;
use crate::client::form::{parse_id, PartialVillaForm, VillaForm};
use crate::client::gateway::VillaGateway;
use crate::client::report::render_record;
use crate::features::villas::dtos::VillaResponseDto;

/// What the list view knows about its data.
///
/// Passed explicitly to [`VillaController::refresh`] and to every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// A list has been fetched at least once
    pub data_loaded: bool,
    /// A mutation succeeded since the last fetch
    pub modified: bool,
}

impl ViewState {
    pub fn needs_refresh(&self) -> bool {
        !self.data_loaded || self.modified
    }
}

/// Message for the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) | Outcome::Failure(msg) => msg,
        }
    }
}

impl From<ClientError> for Outcome {
    fn from(err: ClientError) -> Self {
        Outcome::Failure(err.user_message())
    }
}

pub struct VillaController<G> {
    gateway: G,
    villas: Vec<VillaResponseDto>,
}

impl<G: VillaGateway> VillaController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            villas: Vec::new(),
        }
    }

    /// Villas for the list view, refetched only when `state` says so
    pub async fn refresh(
        &mut self,
        state: &mut ViewState,
    ) -> Result<&[VillaResponseDto], ClientError> {
        if state.needs_refresh() {
            tracing::debug!(
                "Getting {} data from API",
                if state.data_loaded { "updated" } else { "initial" }
            );
            self.villas = self.gateway.list().await?;
            state.data_loaded = true;
            state.modified = false;
        }
        Ok(&self.villas)
    }

    pub async fn find(&self, raw_id: &str) -> Outcome {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(msg) => return Outcome::Failure(msg),
        };

        match self.gateway.get(id).await {
            Ok(villa) => Outcome::Success(render_record(&villa)),
            Err(err) => err.into(),
        }
    }

    pub async fn create(&self, state: &mut ViewState, form: &VillaForm) -> Outcome {
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return ClientError::Validation(errors).into(),
        };

        match self.gateway.create(&fields).await {
            Ok(_) => {
                state.modified = true;
                Outcome::Success("Villa created successfully".to_string())
            }
            Err(err) => err.into(),
        }
    }

    pub async fn update(&self, state: &mut ViewState, raw_id: &str, form: &VillaForm) -> Outcome {
        let (id, fields) = match (parse_id(raw_id), form.validate()) {
            (Ok(id), Ok(fields)) => (id, fields),
            (id, fields) => {
                let mut errors: Vec<String> = id.err().into_iter().collect();
                errors.extend(fields.err().unwrap_or_default());
                return ClientError::Validation(errors).into();
            }
        };

        match self.gateway.replace(id, &fields).await {
            Ok(()) => {
                state.modified = true;
                Outcome::Success("Updated successfully".to_string())
            }
            Err(err) => err.into(),
        }
    }

    pub async fn update_partial(&self, state: &mut ViewState, form: &PartialVillaForm) -> Outcome {
        let (id, ops) = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return ClientError::Validation(errors).into(),
        };

        match self.gateway.patch(id, &ops).await {
            Ok(()) => {
                state.modified = true;
                Outcome::Success("Updated successfully".to_string())
            }
            Err(err) => err.into(),
        }
    }

    pub async fn delete(&self, state: &mut ViewState, raw_id: &str) -> Outcome {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(msg) => return Outcome::Failure(msg),
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                state.modified = true;
                Outcome::Success("Deleted successfully".to_string())
            }
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::villas::dtos::{PatchOperationDto, VillaFieldsDto};
    use crate::features::villas::patch::{apply_patch, PatchableField};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// In-process stand-in for the API
    #[derive(Default)]
    struct FakeGateway {
        villas: Mutex<Vec<VillaResponseDto>>,
        list_calls: AtomicUsize,
        calls: AtomicUsize,
        fail_status: Option<u16>,
    }

    impl FakeGateway {
        fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_status {
                Some(status) => Err(ClientError::Api {
                    status,
                    message: Some("rejected".to_string()),
                }),
                None => Ok(()),
            }
        }

        fn not_found() -> ClientError {
            ClientError::Api {
                status: 404,
                message: Some("Villa not found".to_string()),
            }
        }
    }

    #[async_trait]
    impl VillaGateway for FakeGateway {
        async fn list(&self) -> Result<Vec<VillaResponseDto>, ClientError> {
            self.check()?;
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.villas.lock().unwrap().clone())
        }

        async fn get(&self, id: i64) -> Result<VillaResponseDto, ClientError> {
            self.check()?;
            let villas = self.villas.lock().unwrap();
            villas
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .ok_or_else(Self::not_found)
        }

        async fn create(&self, fields: &VillaFieldsDto) -> Result<VillaResponseDto, ClientError> {
            self.check()?;
            let mut villas = self.villas.lock().unwrap();
            let now = Utc::now();
            let villa = VillaResponseDto {
                id: villas.len() as i64 + 1,
                name: fields.name.clone(),
                details: fields.details.clone(),
                rate: fields.rate,
                sqft: fields.sqft,
                occupancy: fields.occupancy,
                image_url: fields.image_url.clone(),
                amenity: fields.amenity.clone(),
                created_date: now,
                updated_date: now,
            };
            villas.push(villa.clone());
            Ok(villa)
        }

        async fn replace(&self, id: i64, fields: &VillaFieldsDto) -> Result<(), ClientError> {
            self.check()?;
            let mut villas = self.villas.lock().unwrap();
            let villa = villas
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(Self::not_found)?;
            villa.name = fields.name.clone();
            villa.rate = fields.rate;
            Ok(())
        }

        async fn patch(&self, id: i64, ops: &[PatchOperationDto]) -> Result<(), ClientError> {
            self.check()?;
            let mut villas = self.villas.lock().unwrap();
            let villa = villas
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(Self::not_found)?;
            let mut fields = villa.fields();
            apply_patch(&mut fields, ops).map_err(|e| ClientError::Api {
                status: 400,
                message: Some(e.to_string()),
            })?;
            villa.rate = fields.rate;
            villa.image_url = fields.image_url;
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), ClientError> {
            self.check()?;
            let mut villas = self.villas.lock().unwrap();
            let before = villas.len();
            villas.retain(|v| v.id != id);
            if villas.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }
    }

    fn form() -> VillaForm {
        VillaForm {
            name: "Royal Villa".to_string(),
            details: "Sea view".to_string(),
            rate: "200".to_string(),
            sqft: "550".to_string(),
            occupancy: "4".to_string(),
            image_url: "https://img.example.com/1.png".to_string(),
            amenity: "Pool".to_string(),
        }
    }

    #[tokio::test]
    async fn test_refresh_fetches_once_until_modified() {
        let mut controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();

        assert_ok!(controller.refresh(&mut state).await);
        assert_ok!(controller.refresh(&mut state).await);
        assert_eq!(controller.gateway.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            state,
            ViewState {
                data_loaded: true,
                modified: false
            }
        );

        let outcome = controller.create(&mut state, &form()).await;
        assert!(outcome.is_success());
        assert!(state.modified);

        let villas = controller.refresh(&mut state).await.unwrap();
        assert_eq!(villas.len(), 1);
        assert_eq!(controller.gateway.list_calls.load(Ordering::SeqCst), 2);
        assert!(!state.modified);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();
        let bad = VillaForm {
            sqft: "lots".to_string(),
            image_url: "img.example.com".to_string(),
            ..form()
        };

        let outcome = controller.create(&mut state, &bad).await;

        assert_eq!(
            outcome,
            Outcome::Failure(
                "Sqft must be a valid integer.\nImage URL must start with http:// or https://"
                    .to_string()
            )
        );
        assert_eq!(controller.gateway.calls.load(Ordering::SeqCst), 0);
        assert!(!state.modified);
    }

    #[tokio::test]
    async fn test_find_renders_record_or_reports_missing() {
        let controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();
        controller.create(&mut state, &form()).await;

        let found = controller.find("1").await;
        assert!(found.is_success());
        assert!(found.message().contains("Name: Royal Villa"));

        assert_eq!(
            controller.find("2").await,
            Outcome::Failure("Cannot find data".to_string())
        );
        assert_eq!(
            controller.find("abc").await,
            Outcome::Failure("ID must be a positive integer".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_partial_sends_ops_and_marks_modified() {
        let controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();
        controller.create(&mut state, &form()).await;
        state.modified = false;

        let partial = PartialVillaForm {
            id: "1".to_string(),
            fields: vec![(PatchableField::Rate, "199.5".to_string())],
        };
        let outcome = controller.update_partial(&mut state, &partial).await;

        assert_eq!(outcome, Outcome::Success("Updated successfully".to_string()));
        assert!(state.modified);
        let villa = controller.gateway.villas.lock().unwrap()[0].clone();
        assert_eq!(villa.rate, 199.5);
    }

    #[tokio::test]
    async fn test_update_collects_id_and_field_errors() {
        let controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();
        let bad = VillaForm {
            name: String::new(),
            ..form()
        };

        let outcome = controller.update(&mut state, "zero", &bad).await;
        assert_eq!(
            outcome,
            Outcome::Failure("ID must be a positive integer\nName is required.".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_maps_statuses() {
        let controller = VillaController::new(FakeGateway::default());
        let mut state = ViewState::default();
        controller.create(&mut state, &form()).await;
        state.modified = false;

        assert_eq!(
            controller.delete(&mut state, "1").await,
            Outcome::Success("Deleted successfully".to_string())
        );
        assert!(state.modified);

        state.modified = false;
        assert_eq!(
            controller.delete(&mut state, "1").await,
            Outcome::Failure("Cannot find data".to_string())
        );
        assert!(!state.modified);
    }

    #[tokio::test]
    async fn test_failed_call_surfaces_without_retry() {
        let mut controller = VillaController::new(FakeGateway::failing(500));
        let mut state = ViewState::default();

        let outcome = controller.update(&mut state, "1", &form()).await;
        assert_eq!(
            outcome,
            Outcome::Failure("API returned status code 500".to_string())
        );
        assert_eq!(controller.gateway.calls.load(Ordering::SeqCst), 1);

        assert_err!(controller.refresh(&mut state).await);
        assert!(!state.data_loaded);
    }
}
