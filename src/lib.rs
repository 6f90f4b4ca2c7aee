//! Mock product-catalog service.
//!
//! Exposes a single `POST /api/v1/products` endpoint that creates products in
//! an in-memory store and rejects a second product with the same
//! (seller.id, marketplace, title) triple.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod product;
pub mod store;

pub use app::{AppState, SharedAppState, create_app};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use product::{MissingFields, NewProduct, ProductKey, ProductRecord};
pub use store::ProductStore;
