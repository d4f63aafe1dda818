//! Handler for ad search.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::api::dto::ad::AdResponse;
use crate::api::dto::search::SearchQueryParams;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub ads: Vec<AdResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

/// Searches published ads.
///
/// # Endpoint
///
/// `GET /api/v1/search?keyword=&category=&minPrice=&maxPrice=&city=&page=&limit=`
///
/// # Response
///
/// ```json
/// { "ads": [...], "total": 41, "page": 1, "limit": 20, "totalPages": 3 }
/// ```
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let result = state.search_ads.execute(params.into()).await?;

    Ok(Json(SearchResponse {
        ads: result.ads.iter().map(AdResponse::from).collect(),
        total: result.total,
        page: result.page,
        limit: result.limit,
        total_pages: result.total_pages,
    }))
}
