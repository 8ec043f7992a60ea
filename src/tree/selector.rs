//! Feature-candidate selection strategies.
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;


/// Decides which feature columns one split attempt examines.
///
/// The order of the produced candidates is the tie-break priority:
/// among equally good splits, the earliest candidate wins.
pub trait FeatureCandidateSelector {
    /// Fill `candidates` with the feature indices to examine.
    /// The buffer is cleared first; any previous content is discarded.
    fn select(&mut self, n_features: usize, candidates: &mut Vec<usize>);
}


/// Examines every feature at every split.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFeatureCandidateSelector;


impl FeatureCandidateSelector for AllFeatureCandidateSelector {
    #[inline]
    fn select(&mut self, n_features: usize, candidates: &mut Vec<usize>) {
        candidates.clear();
        candidates.extend(0..n_features);
    }
}


/// Examines a fresh random subset of the features at every split,
/// the usual choice for variance-reduction ensembles.
/// Selection is deterministic for a fixed seed.
#[derive(Debug, Clone)]
pub struct RandomFeatureCandidateSelector {
    n_candidates: usize,
    rng: StdRng,
}


impl RandomFeatureCandidateSelector {
    /// Draw `n_candidates` features per split from a generator
    /// seeded with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `n_candidates` is zero.
    pub fn new(n_candidates: usize, seed: u64) -> Self {
        assert!(n_candidates > 0, "A split must examine at least one feature");

        Self {
            n_candidates,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}


impl FeatureCandidateSelector for RandomFeatureCandidateSelector {
    fn select(&mut self, n_features: usize, candidates: &mut Vec<usize>) {
        candidates.clear();
        candidates.extend(0..n_features);

        // Partial Fisher-Yates: shuffle only the first `take` positions.
        let take = self.n_candidates.min(n_features);
        for i in 0..take {
            let j = self.rng.gen_range(i..n_features);
            candidates.swap(i, j);
        }
        candidates.truncate(take);
    }
}
