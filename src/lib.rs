//! # Sportfish Rust Backend
//!
//! Biological metrics computation engine for lake sampling surveys.
//!
//! This crate provides a Rust-based backend for sportfish population survey
//! data, turning nested event/set/fish records into the analytical tables
//! biologists use for reporting: catch summaries, abundance and condition
//! with the relative-weight/K-factor fallback, angler-unit abundance,
//! length-frequency histograms, and CPUE derivations. The backend exposes a
//! REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Data Entry**: Build sampling events from transects and net sets
//! - **Metrics**: Per-species catch, condition, and size-structure tables
//! - **Effort**: Catch-per-unit-effort over electrofishing and netting hours
//! - **Reporting**: Payload assembly for the external document generator
//! - **Export**: Flattened spreadsheet rows for download
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Storage operations, repository pattern, and persistence layer
//! - [`models`]: Event, set, and fish domain types plus the species table
//! - [`services`]: Pure metric computations over sampling events
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
