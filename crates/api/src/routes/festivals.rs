//! Festival calendar endpoints.

use auth::IdentityProvider;
use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{Festival, FestivalId};

use crate::AppState;
use crate::error::ApiError;

use super::SearchParams;

/// GET /api/festivals — every festival in seed order.
#[tracing::instrument(skip(state))]
pub async fn list<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
) -> Json<Vec<Festival>> {
    Json(state.catalog.festivals().to_vec())
}

/// GET /api/festivals/{id} — a single festival.
#[tracing::instrument(skip(state))]
pub async fn get<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Path(id): Path<u32>,
) -> Result<Json<Festival>, ApiError> {
    state
        .catalog
        .festival(FestivalId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Festival {id} not found")))
}

/// GET /api/festivals/search?q= — substring match over the list.
#[tracing::instrument(skip(state))]
pub async fn search<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Festival>> {
    Json(
        state
            .catalog
            .festivals_matching(&params.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}
