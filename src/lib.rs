//! Estoque Server Library
//!
//! This crate exposes the server's modules for integration tests and
//! benchmarks. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `listing`: reconstruction of product records from positioned PDF text
//! - `compare`: per-category diff of two reconstructed listings
//! - `pdf`: the PDF boundary (MuPDF text extraction, printpdf generation)
//! - `routes`: the HTTP API

pub mod compare;
pub mod config;
pub mod error;
pub mod listing;
pub mod pdf;
pub mod routes;
pub mod state;
