use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use time::OffsetDateTime;

/// Keys the store assigns itself; a submitted value for any of them is dropped.
const STORE_ASSIGNED: [&str; 3] = ["id", "createdAt", "updatedAt"];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Missing required fields: seller.id, marketplace, or title")]
pub struct MissingFields;

/// The (seller.id, marketplace, title) triple that identifies a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKey {
    pub seller_id: String,
    pub marketplace: String,
    pub title: String,
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seller ID '{}', marketplace '{}' and title '{}'",
            self.seller_id, self.marketplace, self.title
        )
    }
}

/// A validated creation request: the identifying triple plus every submitted
/// field, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    key: ProductKey,
    fields: Map<String, Value>,
}

impl NewProduct {
    /// Validates a request body.
    ///
    /// `seller.id`, `marketplace` and `title` must be non-empty JSON strings.
    /// An absent `seller` object, or a body that is not an object at all, is
    /// the same as a missing field. Values are compared and stored exactly as
    /// sent: no trimming, no case folding.
    pub fn from_json(body: Value) -> Result<Self, MissingFields> {
        let Value::Object(mut fields) = body else {
            return Err(MissingFields);
        };

        let seller_id = fields
            .get("seller")
            .and_then(|seller| seller.get("id"))
            .and_then(non_empty_str);
        let marketplace = fields.get("marketplace").and_then(non_empty_str);
        let title = fields.get("title").and_then(non_empty_str);

        let (Some(seller_id), Some(marketplace), Some(title)) = (seller_id, marketplace, title)
        else {
            return Err(MissingFields);
        };

        let key = ProductKey {
            seller_id: seller_id.to_string(),
            marketplace: marketplace.to_string(),
            title: title.to_string(),
        };

        for reserved in STORE_ASSIGNED {
            fields.shift_remove(reserved);
        }

        Ok(Self { key, fields })
    }

    pub fn key(&self) -> &ProductKey {
        &self.key
    }

    pub fn into_key(self) -> ProductKey {
        self.key
    }

    pub(crate) fn into_parts(self) -> (ProductKey, Map<String, Value>) {
        (self.key, self.fields)
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// A created product as returned to the caller:
/// `{ id, ...submitted fields, createdAt, updatedAt }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    #[serde(skip)]
    pub key: ProductKey,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ProductRecord {
    pub fn matches(&self, key: &ProductKey) -> bool {
        self.key == *key
    }
}
