//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs define the JSON shape of requests and responses. Server-side domain models in
//! `server::model` convert into these at the controller boundary.

pub mod api;
pub mod moodboard;
