use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::geo::{find_nearest, CandidateSet, GeoPoint2D, SurfaceDistance};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClosestBalloonRequest {
    pub lat: f64,
    pub lon: f64,
    /// Entries shaped `{"lat", "lon", "alt"}` or `[lat, lon]`; anything else is skipped
    #[schema(value_type = Vec<Object>)]
    pub balloons: Vec<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClosestBalloonResponse {
    /// The winning entry exactly as submitted
    #[schema(value_type = Option<Object>)]
    pub powder_balloon: Option<Value>,
    pub index: Option<usize>,
    /// Great-circle distance; null when nothing matched
    pub distance_km: Option<f64>,
}

pub fn closest_balloon(request: &ClosestBalloonRequest, model: &SurfaceDistance) -> ClosestBalloonResponse {
    let reference = GeoPoint2D::new(request.lat, request.lon);
    let candidates = CandidateSet::<GeoPoint2D>::from_json(&request.balloons);
    let nearest = find_nearest(&reference, &candidates, model);

    ClosestBalloonResponse {
        powder_balloon: nearest.index.and_then(|i| request.balloons.get(i).cloned()),
        index: nearest.index,
        distance_km: nearest.is_found().then_some(nearest.distance_km),
    }
}

/// Surface-only search over balloons posted by the caller. An empty or fully malformed
/// list is not an error; the response simply carries nulls.
#[utoipa::path(
    post,
    path = "/api/balloons/closest",
    tag = "balloons",
    request_body = ClosestBalloonRequest,
    responses(
        (status = 200, description = "Closest balloon by great-circle distance", body = ClosestBalloonResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn closest(
    State(state): State<AppState>,
    Json(request): Json<ClosestBalloonRequest>,
) -> Json<ClosestBalloonResponse> {
    let model = SurfaceDistance::with_radius(state.config.geo.earth_radius_km);
    Json(closest_balloon(&request, &model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> ClosestBalloonRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn returns_submitted_entry() {
        let req = request(json!({
            "lat": 0.0,
            "lon": 0.0,
            "balloons": [
                {"lat": 0.0, "lon": 90.0, "alt": 12.0},
                {"lat": 1.0, "lon": 1.0, "alt": 3.0, "id": "b2"}
            ]
        }));
        let response = closest_balloon(&req, &SurfaceDistance::default());
        assert_eq!(response.index, Some(1));
        assert_eq!(
            response.powder_balloon,
            Some(json!({"lat": 1.0, "lon": 1.0, "alt": 3.0, "id": "b2"}))
        );
    }

    #[test]
    fn quarter_circumference() {
        let req = request(json!({
            "lat": 0.0,
            "lon": 0.0,
            "balloons": [[0.0, 90.0]]
        }));
        let response = closest_balloon(&req, &SurfaceDistance::default());
        assert!((response.distance_km.unwrap() - 10007.54).abs() < 0.1);
    }

    #[test]
    fn empty_list_gives_nulls() {
        let req = request(json!({"lat": 0.0, "lon": 0.0, "balloons": ["x", 3]}));
        let response = closest_balloon(&req, &SurfaceDistance::default());
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body, json!({"powder_balloon": null, "index": null, "distance_km": null}));
    }
}
