//! Store candidate resolution.

use basket_core::{CandidateStore, Store, distance_miles};
use geo::Coord;

/// Annotate `stores` with their distance from `origin`, keep those within
/// `radius_miles` and sort them nearest first.
///
/// Equal distances are ordered by store id so the output never depends on
/// the order the catalog returned. Stores whose distance cannot be computed
/// (non-finite coordinates) are dropped.
///
/// # Examples
/// ```
/// use basket_core::Store;
/// use basket_planner::resolve_candidates;
/// use geo::Coord;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let stores = vec![
///     Store::new("far", "Far", "", Coord { x: 0.0, y: 1.0 }),
///     Store::new("near", "Near", "", Coord { x: 0.0, y: 0.01 }),
/// ];
/// let candidates = resolve_candidates(origin, stores, 10.0);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].store.id.as_str(), "near");
/// ```
#[must_use]
pub fn resolve_candidates<I>(origin: Coord<f64>, stores: I, radius_miles: f64) -> Vec<CandidateStore>
where
    I: IntoIterator<Item = Store>,
{
    let mut candidates: Vec<CandidateStore> = stores
        .into_iter()
        .map(|store| CandidateStore {
            distance_from_user: distance_miles(origin, store.location),
            store,
        })
        .filter(|candidate| candidate.distance_from_user <= radius_miles)
        .collect();

    candidates.sort_by(|lhs, rhs| {
        lhs.distance_from_user
            .total_cmp(&rhs.distance_from_user)
            .then_with(|| lhs.store.id.cmp(&rhs.store.id))
    });

    if candidates.is_empty() {
        log::debug!("no stores within {radius_miles} miles of {origin:?}");
    }
    candidates
}
