use crate::geo::{CartesianPoint, DistanceModel, GeoPoint3D, EARTH_MEAN_RADIUS_KM};

/// Straight-line distance through space between two points above a spherical body.
///
/// Altitude is added to the mean radius, i.e. it is treated as measured radially from the
/// center rather than above local terrain or an ellipsoid. Good enough for ranking sensors.
#[derive(Debug, Clone, Copy)]
pub struct SpatialDistance {
    pub radius_km: f64,
}

impl Default for SpatialDistance {
    fn default() -> Self {
        Self {
            radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl SpatialDistance {
    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn to_cartesian(&self, p: &GeoPoint3D) -> CartesianPoint {
        let r = self.radius_km + p.altitude_km;
        let lat = p.lat_rad();
        let lon = p.lon_rad();
        CartesianPoint {
            x: r * lat.cos() * lon.cos(),
            y: r * lat.cos() * lon.sin(),
            z: r * lat.sin(),
        }
    }

    pub fn distance(&self, from: &GeoPoint3D, to: &GeoPoint3D) -> f64 {
        self.to_cartesian(from).distance_to(&self.to_cartesian(to))
    }
}

impl DistanceModel<GeoPoint3D> for SpatialDistance {
    fn distance(&self, a: &GeoPoint3D, b: &GeoPoint3D) -> f64 {
        SpatialDistance::distance(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        let buoy = GeoPoint3D::new(-160.2, 23.5, 0.0);
        let d = SpatialDistance::default().distance(&buoy, &buoy);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn altitude_straight_above_is_radial() {
        let model = SpatialDistance::default();
        let ground = GeoPoint3D::new(10.0, 10.0, 0.0);
        let above = GeoPoint3D::new(10.0, 10.0, 5.0);
        assert!((model.distance(&ground, &above) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn cartesian_axes() {
        let model = SpatialDistance::with_radius(1.0);
        let origin = model.to_cartesian(&GeoPoint3D::new(0.0, 0.0, 0.0));
        assert!((origin.x - 1.0).abs() < 1e-12);
        assert!(origin.y.abs() < 1e-12);
        assert!(origin.z.abs() < 1e-12);

        let east = model.to_cartesian(&GeoPoint3D::new(90.0, 0.0, 0.0));
        assert!((east.y - 1.0).abs() < 1e-12);

        let pole = model.to_cartesian(&GeoPoint3D::new(0.0, 90.0, 1.0));
        assert!((pole.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn chord_is_shorter_than_arc() {
        let model = SpatialDistance::default();
        let a = GeoPoint3D::new(0.0, 0.0, 0.0);
        let b = GeoPoint3D::new(90.0, 0.0, 0.0);
        let chord = model.distance(&a, &b);
        assert!((chord - EARTH_MEAN_RADIUS_KM * 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn symmetric_and_triangle_inequality() {
        let model = SpatialDistance::default();
        let points = [
            GeoPoint3D::new(-160.2, 23.5, 0.0),
            GeoPoint3D::new(-150.0, 20.0, 18.0),
            GeoPoint3D::new(30.0, -45.0, 3.5),
            GeoPoint3D::new(179.9, 0.1, 400.0),
        ];
        for a in &points {
            for b in &points {
                assert!((model.distance(a, b) - model.distance(b, a)).abs() < 1e-9);
                for c in &points {
                    assert!(model.distance(a, c) <= model.distance(a, b) + model.distance(b, c) + 1e-6);
                }
            }
        }
    }
}
