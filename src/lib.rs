//! # CYI Rust Backend
//!
//! Crop yield and weather lookup engine.
//!
//! This crate loads two tabular agricultural datasets — historical combined
//! crop/weather observations and future yield predictions — reconciles their
//! inconsistent naming, units, and temporal coverage into two canonical
//! in-memory tables, and answers point lookups and yield-trend queries for a
//! presentation layer. The optional HTTP API exposes the query surface via
//! Axum for the frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the historical and prediction CSV files into
//!   typed canonical records
//! - **Normalization**: Column-name cleanup, date parsing, crop/state name
//!   canonicalization, crop aliasing, unit conversion
//! - **Queries**: Averaged point lookups keyed on (crop, state, year) and
//!   year-ordered yield trend series
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV ingestion and DataFrame-to-record conversion
//! - [`preprocessing`]: Schema validation and the load pipeline producing the
//!   immutable [`models::YieldDataset`]
//! - [`services`]: Pure query logic (lookup, trends, vocabularies)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
