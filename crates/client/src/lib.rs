//! SheetWright Client - Headless form controllers for the character-sheet app
//!
//! The controllers here drive the experience-spend form and the wonder
//! sub-effect formset through injected view handles, so they run and test
//! without a live document tree. The rendering layer implements the view
//! ports; the query backend sits behind an outbound port with a reqwest
//! adapter for native targets.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

pub use application::controllers::{
    SpendFormController, Ticket, WonderFormController,
};
pub use application::services::ExampleService;
pub use application::{get_request_timeout_ms, ParseResponse, ServiceError};
pub use config::{ConfigError, FormConfig};
