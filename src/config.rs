//! Service configuration.
//!
//! Values come from the environment:
//!
//! - `CATALOG_API_VERSION` - version segment of the API prefix (default `v1`)
//! - `CATALOG_PRODUCTS_PATH` - full path of the products endpoint
//!   (default `/api/<version>/products`)

pub const DEFAULT_API_VERSION: &str = "v1";

const API_VERSION_VAR: &str = "CATALOG_API_VERSION";
const PRODUCTS_PATH_VAR: &str = "CATALOG_PRODUCTS_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub products: String,
}

impl Endpoints {
    pub fn for_version(api_version: &str) -> Self {
        Self {
            products: format!("/api/{}/products", api_version),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_version: String,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoints: Endpoints::for_version(DEFAULT_API_VERSION),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_version = var(API_VERSION_VAR).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let endpoints = match var(PRODUCTS_PATH_VAR) {
            Some(path) if path.starts_with('/') => Endpoints { products: path },
            Some(path) => Endpoints {
                products: format!("/{}", path),
            },
            None => Endpoints::for_version(&api_version),
        };

        Self {
            api_version,
            endpoints,
        }
    }
}
