use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use priceboard_pricing::{BrandId, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/applicable", get(get_applicable_price))
}

/// `GET /api/v1/prices/applicable?product_id=&brand_id=&application_date=`
///
/// Absence of an applicable price maps to 404; malformed input maps to 400.
/// Status codes are decided here, never in the domain.
pub async fn get_applicable_price(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PriceQuery>,
) -> axum::response::Response {
    let product_id = match ProductId::new(query.product_id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let brand_id = match BrandId::new(query.brand_id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let at = match dto::parse_application_date(&query.application_date) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.applicable_price(product_id, brand_id, at) {
        Ok(Some(price)) => {
            (StatusCode::OK, Json(dto::price_to_response(&price))).into_response()
        }
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "no applicable price for the requested product/brand/date",
        ),
        Err(e) => errors::store_error_to_response(e),
    }
}
