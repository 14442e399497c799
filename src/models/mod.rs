//! Domain models for Recigo.
//!
//! # Core Concepts
//!
//! - [`GroceryItem`]: one entry on the shopping checklist. Identity is the
//!   `id`; everything else is mutable in place. The full ordered sequence
//!   of items is the checklist state, persisted as a whole.
//! - [`GroceryList`]: the validated output of a grocery-list generation
//!   request: raw ingredients, items grouped by store category, and the
//!   assumptions the generator made.
//! - [`ApiResponse`]: the `{success, data?, error?}` envelope both backend
//!   endpoints speak.

mod grocery;
mod item;
mod response;

pub use grocery::*;
pub use item::*;
pub use response::*;
