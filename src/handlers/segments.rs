use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::config;
use crate::es::{EsClient, Liveness};
use crate::models::{aggregate, SegmentTotals};
use crate::templates::SegmentsTemplate;

/// Shared state pro všechny handlery
pub struct AppState {
    pub es: EsClient,
}

/// Odpověď když cluster neodpovídá na ping
pub const CLUSTER_DOWN_MESSAGE: &str = "elasticsearch cluster is down!";

/// Zobrazí tabulku segment memory per shard a per index.
/// Ping musí uspět dřív než se vůbec pošle segments dotaz.
pub async fn segments_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    if state.es.ping(config::PING_TIMEOUT).await == Liveness::Unavailable {
        tracing::warn!("Cluster did not answer the liveness ping");
        return Ok(Html(CLUSTER_DOWN_MESSAGE.to_string()));
    }

    let response = state.es.segments().await.map_err(|e| {
        tracing::error!("Failed to load segment stats: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to query segment stats: {}", e),
        )
    })?;

    let groups = aggregate(&response.indices);
    let totals = SegmentTotals::from_groups(&groups);

    tracing::info!(
        "Rendering {} indices with {} shard instances",
        totals.indices,
        totals.shard_instances
    );

    let template = SegmentsTemplate { groups, totals };

    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
