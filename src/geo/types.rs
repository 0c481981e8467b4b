use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A position on the surface of the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint2D {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint2D {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// A position above the sphere. Feeds deliver these as `[lon, lat, alt]` triplets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint3D {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub altitude_km: f64,
}

impl GeoPoint3D {
    pub fn new(longitude_deg: f64, latitude_deg: f64, altitude_km: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            altitude_km,
        }
    }

    pub fn from_triplet([lon, lat, alt]: [f64; 3]) -> Self {
        Self::new(lon, lat, alt)
    }

    pub fn surface(&self) -> GeoPoint2D {
        GeoPoint2D::new(self.latitude_deg, self.longitude_deg)
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Earth-centered frame, km. Only lives for one distance computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn distance_to(&self, other: &CartesianPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triplet_keeps_lon_lat_alt_order() {
        let p = GeoPoint3D::from_triplet([-160.2, 23.5, 12.0]);
        assert_eq!(p.longitude_deg, -160.2);
        assert_eq!(p.latitude_deg, 23.5);
        assert_eq!(p.altitude_km, 12.0);
        assert_eq!(p.surface(), GeoPoint2D::new(23.5, -160.2));
    }

    #[test]
    fn cartesian_distance_is_euclidean() {
        let a = CartesianPoint { x: 0.0, y: 0.0, z: 0.0 };
        let b = CartesianPoint { x: 3.0, y: 4.0, z: 12.0 };
        assert!((a.distance_to(&b) - 13.0).abs() < 1e-12);
    }
}
