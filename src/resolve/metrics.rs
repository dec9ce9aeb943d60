//! Tie-break metrics.

use crate::tracks::{HonorCommitment, TrackResources};

/// Absolute tolerance for every vote, ratio and score comparison.
pub const VOTE_EPSILON: f64 = 1e-6;

/// Committed votes over the original capacity of the tracks actually used.
pub fn compute_utilization(original: &TrackResources, commitment: &HonorCommitment) -> f64 {
    let used = f64::from(commitment.total_from_tracks());
    if used <= 0.0 {
        return 0.0;
    }
    let capacity: u64 = commitment.tracks_used().map(|t| u64::from(original.get(t))).sum();
    if capacity == 0 {
        return 0.0;
    }
    used / capacity as f64
}

/// Committed votes over the participant's total original capacity.
pub fn compute_focus(original: &TrackResources, commitment: &HonorCommitment) -> f64 {
    let used = f64::from(commitment.total_from_tracks());
    if used <= 0.0 {
        return 0.0;
    }
    let capacity = original.total_votes_wide();
    if capacity == 0 {
        return 0.0;
    }
    used / capacity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_counts_only_used_tracks() {
        let original = TrackResources::new([6, 4, 0, 0], 10, 0);
        let c = HonorCommitment::from_tracks([3, 1, 0, 0, 0, 0]);
        assert!((compute_utilization(&original, &c) - 0.4).abs() < VOTE_EPSILON);
        assert!((compute_focus(&original, &c) - 0.2).abs() < VOTE_EPSILON);
    }

    #[test]
    fn full_single_pool_is_one() {
        let original = TrackResources::new([6, 0, 0, 0], 0, 0);
        let c = HonorCommitment::from_tracks([6, 0, 0, 0, 0, 0]);
        assert!((compute_utilization(&original, &c) - 1.0).abs() < VOTE_EPSILON);
    }

    #[test]
    fn wild_votes_are_ignored() {
        let original = TrackResources::new([0, 0, 0, 0], 4, 0);
        let mut c = HonorCommitment::from_tracks([0, 0, 0, 0, 2, 0]);
        c.wild_votes = 10;
        assert!((compute_utilization(&original, &c) - 0.5).abs() < VOTE_EPSILON);
    }

    #[test]
    fn capacity_beyond_u32_is_exact() {
        let original = TrackResources::new([u32::MAX, u32::MAX, 0, 0], 0, 0);
        let c = HonorCommitment::from_tracks([u32::MAX, 1, 0, 0, 0, 0]);
        assert!((compute_utilization(&original, &c) - 0.5).abs() < VOTE_EPSILON);
        assert!((compute_focus(&original, &c) - 0.5).abs() < VOTE_EPSILON);
    }

    #[test]
    fn empty_commitment_scores_zero() {
        let original = TrackResources::new([1, 1, 1, 1], 1, 1);
        let c = HonorCommitment::default();
        assert_eq!(compute_utilization(&original, &c), 0.0);
        assert_eq!(compute_focus(&original, &c), 0.0);
        assert_eq!(compute_focus(&TrackResources::default(), &c), 0.0);
    }
}
