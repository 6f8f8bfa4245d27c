//! Core library components.
//!
//! This module contains the reusable logic for resolving pull inputs,
//! talking to the secret store and writing the payload.

pub mod config;
pub mod constants;
pub mod domain;
pub mod resolve;
pub mod store;
pub mod sync;
pub mod types;
