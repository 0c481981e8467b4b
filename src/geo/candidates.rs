use log::debug;
use serde_json::Value;

use crate::geo::{GeoPoint2D, GeoPoint3D};

/// A validated candidate. `index` is its position in the raw input, malformed entries included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<P> {
    pub index: usize,
    pub point: P,
}

/// Parse-or-skip conversion from one raw feed entry.
pub trait FromFeedEntry: Sized {
    fn from_feed_entry(value: &Value) -> Option<Self>;
}

impl FromFeedEntry for GeoPoint3D {
    /// Only `[lon, lat, alt]` with three JSON numbers.
    fn from_feed_entry(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 3 {
            return None;
        }
        let lon = items[0].as_f64()?;
        let lat = items[1].as_f64()?;
        let alt = items[2].as_f64()?;
        Some(GeoPoint3D::from_triplet([lon, lat, alt]))
    }
}

impl FromFeedEntry for GeoPoint2D {
    /// Either `{"lat": .., "lon": ..}` (other keys ignored) or `[lat, lon]`.
    fn from_feed_entry(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let lat = map.get("lat")?.as_f64()?;
                let lon = map.get("lon")?.as_f64()?;
                Some(GeoPoint2D::new(lat, lon))
            }
            Value::Array(items) if items.len() == 2 => {
                Some(GeoPoint2D::new(items[0].as_f64()?, items[1].as_f64()?))
            }
            _ => None,
        }
    }
}

/// Ordered, typed candidates ready for the nearest search.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet<P> {
    entries: Vec<Candidate<P>>,
    skipped: usize,
}

impl<P> Default for CandidateSet<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            skipped: 0,
        }
    }
}

impl<P: FromFeedEntry> CandidateSet<P> {
    pub fn from_json(raw: &[Value]) -> Self {
        let mut entries = Vec::with_capacity(raw.len());
        let mut skipped = 0;

        for (index, value) in raw.iter().enumerate() {
            match P::from_feed_entry(value) {
                Some(point) => entries.push(Candidate { index, point }),
                None => {
                    debug!("Skipping malformed candidate at index {}: {}", index, value);
                    skipped += 1;
                }
            }
        }

        Self { entries, skipped }
    }
}

impl<P> CandidateSet<P> {
    /// Candidates indexed by their position in `points`.
    pub fn from_points(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            entries: points
                .into_iter()
                .enumerate()
                .map(|(index, point)| Candidate { index, point })
                .collect(),
            skipped: 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate<P>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Same positions, points mapped. Used to project 3-D feeds onto the surface.
    pub fn map<Q>(&self, f: impl Fn(&P) -> Q) -> CandidateSet<Q> {
        CandidateSet {
            entries: self
                .entries
                .iter()
                .map(|c| Candidate {
                    index: c.index,
                    point: f(&c.point),
                })
                .collect(),
            skipped: self.skipped,
        }
    }
}
