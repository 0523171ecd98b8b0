use scoring::{
    DataStore,
    dto::performance::{
        LogPerformanceRequest, PerformanceResponse, PreviewPointsRequest, PreviewPointsResponse,
    },
    error::Result,
    services::tracker,
};
use uuid::Uuid;

/// Score and store a new performance record
pub async fn log_performance(
    store: &dyn DataStore,
    request: LogPerformanceRequest,
) -> Result<PerformanceResponse> {
    let record = tracker::log_performance(
        store,
        request.user_id,
        request.metrics,
        request.outcome,
        request.rating,
    )
    .await?;

    Ok(PerformanceResponse::from(record))
}

/// Score an activity without storing anything
pub fn preview_points(request: &PreviewPointsRequest) -> Result<PreviewPointsResponse> {
    let points = tracker::preview_points(&request.metrics)?;

    Ok(PreviewPointsResponse {
        kind: request.metrics.kind(),
        points,
    })
}

pub async fn delete_performance(store: &dyn DataStore, record_id: Uuid) -> Result<()> {
    store.delete_performance(record_id).await
}
