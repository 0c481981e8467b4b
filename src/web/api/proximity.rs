use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::geo::{find_nearest, CandidateSet, GeoPoint3D, SpatialDistance};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProximityQuery {
    /// Station id; falls back to the configured default
    pub station: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProximityResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    pub buoy_latitude: f64,
    pub buoy_longitude: f64,
    pub buoy_altitude_km: f64,
    pub closest_balloon_index: usize,
    pub closest_balloon_triplet: GeoPoint3D,
    pub distance_km: f64,
    pub candidates_considered: usize,
    pub candidates_skipped: usize,
}

/// Run the altitude-aware search and shape the response body.
pub fn build_proximity_response(
    station: Option<String>,
    buoy: GeoPoint3D,
    feed: &[Value],
    model: &SpatialDistance,
) -> ApiResult<ProximityResponse> {
    let candidates = CandidateSet::<GeoPoint3D>::from_json(feed);
    if candidates.is_empty() {
        log::warn!(
            "Balloon feed has no valid entries ({} skipped)",
            candidates.skipped()
        );
        return Err(ApiError::NoCandidates);
    }
    if candidates.skipped() > 0 {
        log::debug!("Skipped {} malformed balloon entries", candidates.skipped());
    }

    let nearest = find_nearest(&buoy, &candidates, model);
    let (Some(index), Some(point)) = (nearest.index, nearest.point) else {
        return Err(ApiError::NoCandidates);
    };

    log::info!(
        "Closest balloon to {} is #{} at {:.3} km",
        station.as_deref().unwrap_or("reference"),
        index,
        nearest.distance_km
    );

    Ok(ProximityResponse {
        station,
        buoy_latitude: buoy.latitude_deg,
        buoy_longitude: buoy.longitude_deg,
        buoy_altitude_km: buoy.altitude_km,
        closest_balloon_index: index,
        closest_balloon_triplet: point,
        distance_km: nearest.distance_km,
        candidates_considered: candidates.len(),
        candidates_skipped: candidates.skipped(),
    })
}

#[utoipa::path(
    get,
    path = "/api/proximity",
    tag = "proximity",
    params(ProximityQuery),
    responses(
        (status = 200, description = "Closest balloon to the buoy", body = ProximityResponse),
        (status = 404, description = "Buoy coordinates not found", body = ErrorResponse),
        (status = 422, description = "No valid balloon in the feed", body = ErrorResponse),
        (status = 502, description = "Balloon data not found", body = ErrorResponse)
    )
)]
pub async fn closest_to_buoy(
    State(state): State<AppState>,
    Query(query): Query<ProximityQuery>,
) -> ApiResult<Json<ProximityResponse>> {
    let station_id = query
        .station
        .unwrap_or_else(|| state.config.upstream.default_station.clone());

    let buoy = state.upstream.station(&station_id).await.map_err(|e| {
        log::warn!("Failed to resolve station {}: {}", station_id, e);
        ApiError::ReferenceUnavailable(e)
    })?;

    let feed = fetch_candidates(&state).await?;
    let model = SpatialDistance::with_radius(state.config.geo.earth_radius_km);

    build_proximity_response(Some(station_id), buoy, &feed, &model).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/proximity/reference",
    tag = "proximity",
    responses(
        (status = 200, description = "Closest balloon to the configured reference point", body = ProximityResponse),
        (status = 422, description = "No valid balloon in the feed", body = ErrorResponse),
        (status = 502, description = "Balloon data not found", body = ErrorResponse)
    )
)]
pub async fn closest_to_reference(
    State(state): State<AppState>,
) -> ApiResult<Json<ProximityResponse>> {
    let feed = fetch_candidates(&state).await?;
    let model = SpatialDistance::with_radius(state.config.geo.earth_radius_km);

    build_proximity_response(None, state.config.reference.point(), &feed, &model).map(Json)
}

async fn fetch_candidates(state: &AppState) -> ApiResult<Vec<Value>> {
    state.upstream.feed().await.map_err(|e| {
        log::warn!("Failed to fetch balloon feed: {}", e);
        ApiError::CandidatesUnavailable(e)
    })
}
