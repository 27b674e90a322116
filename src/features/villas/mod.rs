//! Villa records: the single-table CRUD surface of the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Success | Description |
//! |--------|----------|---------|-------------|
//! | GET | `/api/VillaAPI` | 200 | List villas in insertion order |
//! | POST | `/api/VillaAPI` | 201 | Create villa |
//! | GET | `/api/VillaAPI/{id}` | 200 | Get villa |
//! | PUT | `/api/VillaAPI/{id}` | 204 | Replace all writable fields |
//! | PATCH | `/api/VillaAPI/{id}` | 204 | Apply `replace` ops |
//! | DELETE | `/api/VillaAPI/{id}` | 204 | Delete villa |
//!
//! Unknown ids yield 404, malformed or invalid bodies 400.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod patch;
pub mod routes;
pub mod services;

pub use services::VillaService;
