use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
};
use serde_json::{Map, Value};

use crate::auth::BearerToken;
use crate::product::{NewProduct, ProductRecord};

/// `POST /api/v1/products`
///
/// Checks run in order and the first failure wins: credential, required
/// fields, duplicate triple. Only a request passing all three touches the
/// store.
pub async fn create_product(
    State(state): State<crate::SharedAppState>,
    _token: BearerToken,
    headers: HeaderMap,
    body: Bytes,
) -> crate::AppResult<(StatusCode, Json<ProductRecord>)> {
    let body = read_json_body(&headers, &body)?;
    let product = NewProduct::from_json(body)?;

    let record = {
        // Held across the check and the insert so concurrent requests for the
        // same triple cannot both succeed.
        let mut records = state.store.lock();
        if records.is_duplicate(product.key()) {
            return Err(crate::AppError::Duplicate(product.into_key()));
        }
        records.insert(product)
    };

    tracing::info!(
        id = %record.id,
        seller_id = %record.key.seller_id,
        marketplace = %record.key.marketplace,
        "created product"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Reads the body the way a JSON body parser does: a request without a JSON
/// content type, or with an empty body, is an empty object. Only JSON that is
/// present and invalid is an error.
fn read_json_body(headers: &HeaderMap, body: &[u8]) -> crate::AppResult<Value> {
    if !has_json_content_type(headers) || body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    Ok(serde_json::from_slice(body)?)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}
