//! SurveyFlow client crate.
//!
//! Layering follows ports-and-adapters: `ports` declares the outbound HTTP
//! boundary, `application` owns the session state machine and DTOs,
//! `infrastructure` provides the reqwest adapter, and `ui` holds the Dioxus
//! components. The binary in `main.rs` is the composition root.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;
