//! Query-string DTO for the search endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};

use crate::domain::value_objects::SearchParams;

/// `GET /search` parameters.
///
/// Numbers arrive as strings in the query; `serde_with` parses them and
/// treats empty values as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryParams {
    pub keyword: Option<String>,
    pub category: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub min_price: Option<f64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub max_price: Option<f64>,

    pub city: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<SearchQueryParams> for SearchParams {
    fn from(q: SearchQueryParams) -> Self {
        SearchParams {
            keyword: q.keyword,
            category: q.category,
            min_price: q.min_price,
            max_price: q.max_price,
            city: q.city,
            page: q.page,
            limit: q.limit,
        }
    }
}
