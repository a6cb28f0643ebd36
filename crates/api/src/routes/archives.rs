//! Archive collection endpoints.

use auth::IdentityProvider;
use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{Archive, ArchiveId};

use crate::AppState;
use crate::error::ApiError;

use super::SearchParams;

/// GET /api/archives — every archive item in seed order.
#[tracing::instrument(skip(state))]
pub async fn list<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
) -> Json<Vec<Archive>> {
    Json(state.catalog.archives().to_vec())
}

/// GET /api/archives/{id} — a single archive item.
#[tracing::instrument(skip(state))]
pub async fn get<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Path(id): Path<u32>,
) -> Result<Json<Archive>, ApiError> {
    state
        .catalog
        .archive(ArchiveId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Archive {id} not found")))
}

/// GET /api/archives/search?q= — substring match over the collection.
#[tracing::instrument(skip(state))]
pub async fn search<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Archive>> {
    Json(
        state
            .catalog
            .archives_matching(&params.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}
