//! Application services for backend queries

mod example_service;

pub use example_service::ExampleService;
