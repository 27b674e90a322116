//! Client controller for the villa API.
//!
//! Collects raw form input, validates it locally, calls the API through a
//! [`VillaGateway`] and turns the result into a message for the user.

pub mod api_client;
pub mod controller;
pub mod error;
pub mod form;
pub mod gateway;
pub mod report;

pub use api_client::VillaApiClient;
pub use controller::{Outcome, VillaController, ViewState};
pub use error::ClientError;
pub use form::{PartialVillaForm, VillaForm};
pub use gateway::VillaGateway;
