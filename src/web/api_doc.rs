use utoipa::OpenApi;

use super::api::balloons::{ClosestBalloonRequest, ClosestBalloonResponse};
use super::api::error::ErrorResponse;
use super::api::proximity::ProximityResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::proximity::closest_to_buoy,
        super::api::proximity::closest_to_reference,
        super::api::balloons::closest,
    ),
    components(
        schemas(
            ProximityResponse,
            ClosestBalloonRequest,
            ClosestBalloonResponse,
            ErrorResponse,
            crate::geo::GeoPoint2D,
            crate::geo::GeoPoint3D,
        )
    ),
    info(
        title = "Sky Proximity API",
        description = "Find the airborne sensor closest to a ground reference point",
        version = "0.1.0"
    ),
    tags(
        (name = "proximity", description = "Altitude-aware nearest search"),
        (name = "balloons", description = "Great-circle nearest search")
    )
)]
pub struct ApiDoc;
