use serde::Serialize;

use crate::geo::CandidateSet;

/// A pairwise distance in km between two points of the same kind.
pub trait DistanceModel<P> {
    fn distance(&self, a: &P, b: &P) -> f64;
}

/// Outcome of a nearest search.
///
/// `distance_km` is `f64::INFINITY` when nothing was found; serde_json writes that as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestResult<P> {
    pub index: Option<usize>,
    pub point: Option<P>,
    pub distance_km: f64,
}

impl<P> NearestResult<P> {
    pub fn not_found() -> Self {
        Self {
            index: None,
            point: None,
            distance_km: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Single pass over `candidates`, keeping the first strictly-smaller distance.
pub fn find_nearest<P, M>(reference: &P, candidates: &CandidateSet<P>, model: &M) -> NearestResult<P>
where
    P: Copy,
    M: DistanceModel<P> + ?Sized,
{
    let mut best = NearestResult::not_found();

    for candidate in candidates.iter() {
        let distance = model.distance(reference, &candidate.point);
        // NaN never compares less, so garbage coordinates cannot win
        if distance < best.distance_km {
            best = NearestResult {
                index: Some(candidate.index),
                point: Some(candidate.point),
                distance_km: distance,
            };
        }
    }

    best
}
