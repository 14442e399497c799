//! Recigo turns recipes into grocery shopping checklists.
//!
//! The crate has two halves that mirror the deployment:
//!
//! - A backend HTTP service ([`api`] + [`generation`]) that proxies two
//!   prompts to an OpenAI-style completion API and validates the JSON it
//!   gets back before relaying it to the app.
//! - The app-side core ([`catalog`], [`checklist`], [`store`], [`client`]):
//!   category resolution for free-text item names, the deterministic
//!   category sort, pure checklist mutations, whole-snapshot persistence,
//!   and a typed client for the backend.

pub mod api;
pub mod catalog;
pub mod checklist;
pub mod client;
pub mod generation;
pub mod models;
pub mod store;
