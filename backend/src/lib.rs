//! # BaZi Service
//!
//! Converts a birth date and time into the four pillars of BaZi (八字):
//! the sexagenary stem-branch pairs of the year, month, day and hour.
//!
//! ## Architecture
//!
//! - [`models`]: birth moment parsing in a fixed regional offset
//! - [`services`]: calendar adapter, response shaper and the pipeline joining them
//! - [`api`]: request and response DTOs, including the `ApiResponse` envelope
//! - [`error`]: validation and adapter errors
//! - [`config`]: server configuration from the environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The calendar computations themselves live in the `ganzhi-calendar` crate.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
mod api_tests;
