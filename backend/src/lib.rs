//! # Contacts API
//!
//! A REST API exposing create, read, update and delete operations on a single
//! contact resource, backed by a relational store and documented with a
//! generated OpenAPI schema.
//!
//! ## Architecture
//!
//! - [`api`]: Domain types shared by the HTTP and repository layers
//! - [`config`]: Server settings read from the environment
//! - [`db`]: Repository pattern, storage backends and the service layer
//! - [`http`]: Axum-based HTTP server, handlers and API documentation

pub mod api;
pub mod config;
pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
