mod candidates;
mod nearest;
mod spatial;
mod surface;
mod types;

pub use candidates::CandidateSet;
pub use nearest::{find_nearest, DistanceModel, NearestResult};
pub use spatial::SpatialDistance;
pub use surface::SurfaceDistance;
pub use types::{CartesianPoint, GeoPoint2D, GeoPoint3D};

pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Which distance strategy a query uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceMode {
    /// Great-circle distance, altitude ignored
    Surface,
    /// Straight-line distance through space, altitude included
    Spatial,
}
