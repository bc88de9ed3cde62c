// Calendario Library
// Decision: Shared library for binaries (web server, icon generator) and integration tests

// Domain types (shared wire/storage entity)
pub mod domain;

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Services layer
pub mod services;
pub use services::EventoService;

// Storage layer
pub mod storage;

// OpenAPI spec generation
pub mod openapi;
