//! Monastery reference data endpoints.

use auth::IdentityProvider;
use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{Monastery, MonasteryId};

use crate::AppState;
use crate::error::ApiError;

use super::SearchParams;

/// GET /api/monasteries — every monastery in seed order.
#[tracing::instrument(skip(state))]
pub async fn list<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
) -> Json<Vec<Monastery>> {
    Json(state.catalog.monasteries().to_vec())
}

/// GET /api/monasteries/{id} — a single monastery.
#[tracing::instrument(skip(state))]
pub async fn get<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Path(id): Path<u32>,
) -> Result<Json<Monastery>, ApiError> {
    state
        .catalog
        .monastery(MonasteryId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Monastery {id} not found")))
}

/// GET /api/monasteries/search?q= — substring match over the list.
#[tracing::instrument(skip(state))]
pub async fn search<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Monastery>> {
    Json(
        state
            .catalog
            .monasteries_matching(&params.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}
