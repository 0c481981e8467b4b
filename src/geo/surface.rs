use crate::geo::{DistanceModel, GeoPoint2D, EARTH_MEAN_RADIUS_KM};

/// Great-circle distance on a sphere of fixed radius (haversine).
#[derive(Debug, Clone, Copy)]
pub struct SurfaceDistance {
    pub radius_km: f64,
}

impl Default for SurfaceDistance {
    fn default() -> Self {
        Self {
            radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl SurfaceDistance {
    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn distance(&self, from: &GeoPoint2D, to: &GeoPoint2D) -> f64 {
        let lat1 = from.lat_rad();
        let lat2 = to.lat_rad();
        let d_lat = lat2 - lat1;
        let d_lon = to.lon_rad() - from.lon_rad();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // rounding can push `a` past 1.0 near antipodes; NaN inputs still propagate
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_km * c
    }
}

impl DistanceModel<GeoPoint2D> for SurfaceDistance {
    fn distance(&self, a: &GeoPoint2D, b: &GeoPoint2D) -> f64 {
        SurfaceDistance::distance(self, a, b)
    }
}
