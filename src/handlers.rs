pub mod products;

pub use products::create_product;
