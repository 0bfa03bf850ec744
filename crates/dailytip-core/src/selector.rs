//! Random tip selection with immediate-repeat suppression.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use tracing::debug;

use crate::catalog::{Tip, TipCatalog};

/// Anything that can hand out the next tip.
///
/// [`DailyTipCache`](crate::daily::DailyTipCache) only needs this, so tests
/// can count how often it asks.
pub trait TipSource {
    fn next_tip(&mut self) -> Tip;

    /// Treat `tip` as the previous pick, so the next one differs from it.
    fn exclude(&mut self, _tip: &Tip) {}
}

/// In-memory record of the previous pick. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub last_index: Option<usize>,
}

/// Picks uniformly random tips, never the same index twice in a row.
pub struct TipSelector<R = Mcg128Xsl64> {
    catalog: TipCatalog,
    state: SelectionState,
    rng: R,
}

impl TipSelector<Mcg128Xsl64> {
    /// Selector seeded from OS entropy.
    pub fn new(catalog: TipCatalog) -> Self {
        Self::with_rng(catalog, Mcg128Xsl64::from_entropy())
    }

    /// Reproducible selector.
    pub fn seeded(catalog: TipCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, Mcg128Xsl64::seed_from_u64(seed))
    }
}

impl<R: Rng> TipSelector<R> {
    pub fn with_rng(catalog: TipCatalog, rng: R) -> Self {
        Self {
            catalog,
            state: SelectionState::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &TipCatalog {
        &self.catalog
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Make `tip` the previous pick. Tips outside the catalog are ignored.
    pub fn exclude(&mut self, tip: &Tip) {
        if let Some(index) = self.catalog.position(tip) {
            self.state.last_index = Some(index);
        }
    }

    pub fn next(&mut self) -> Tip {
        self.next_indexed().1
    }

    /// Next tip together with its catalog index (`None` for the fallback tip).
    pub fn next_indexed(&mut self) -> (Option<usize>, Tip) {
        let size = self.catalog.size();
        match size {
            0 => (None, Tip::fallback()),
            1 => (Some(0), self.tip_at(0)),
            _ => {
                let index = loop {
                    let candidate = self.rng.gen_range(0..size);
                    if Some(candidate) != self.state.last_index {
                        break candidate;
                    }
                };
                debug!(index, previous = ?self.state.last_index, "selected tip");
                self.state.last_index = Some(index);
                (Some(index), self.tip_at(index))
            }
        }
    }

    // Only called with indices drawn from 0..size.
    fn tip_at(&self, index: usize) -> Tip {
        match self.catalog.at(index) {
            Ok(tip) => tip.clone(),
            Err(err) => unreachable!("{err}"),
        }
    }
}

impl<R: Rng> TipSource for TipSelector<R> {
    fn next_tip(&mut self) -> Tip {
        self.next()
    }

    fn exclude(&mut self, tip: &Tip) {
        TipSelector::exclude(self, tip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> TipCatalog {
        TipCatalog::new(
            (0..n)
                .map(|i| Tip::new(format!("tip {i}"), "Energy"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_catalog_yields_fallback() {
        let mut selector = TipSelector::seeded(TipCatalog::default(), 7);
        for _ in 0..3 {
            assert_eq!(selector.next_indexed(), (None, Tip::fallback()));
        }
        assert_eq!(selector.state().last_index, None);
    }

    #[test]
    fn single_tip_repeats() {
        let mut selector = TipSelector::seeded(catalog(1), 7);
        for _ in 0..5 {
            assert_eq!(selector.next().text, "tip 0");
        }
    }

    #[test]
    fn consecutive_picks_differ() {
        let mut selector = TipSelector::seeded(catalog(2), 42);
        let mut previous = selector.next_indexed().0;
        for _ in 0..200 {
            let (index, _) = selector.next_indexed();
            assert_ne!(index, previous);
            previous = index;
        }
    }

    #[test]
    fn state_tracks_last_pick() {
        let mut selector = TipSelector::seeded(catalog(5), 1);
        let (index, tip) = selector.next_indexed();
        assert_eq!(selector.state().last_index, index);
        assert_eq!(selector.catalog().at(index.unwrap()).unwrap(), &tip);
    }

    #[test]
    fn exclude_primes_last_index() {
        let built = catalog(2);
        let first = built.at(0).unwrap().clone();
        for seed in 0..50 {
            let mut selector = TipSelector::seeded(built.clone(), seed);
            selector.exclude(&first);
            assert_eq!(selector.state().last_index, Some(0));
            assert_eq!(selector.next_indexed().0, Some(1));
        }
    }

    #[test]
    fn exclude_ignores_unknown_tip() {
        let mut selector = TipSelector::seeded(catalog(3), 9);
        selector.exclude(&Tip::new("not in catalog", "Energy"));
        assert_eq!(selector.state().last_index, None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TipSelector::seeded(TipCatalog::builtin(), 99);
        let mut b = TipSelector::seeded(TipCatalog::builtin(), 99);
        for _ in 0..20 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn every_tip_is_reachable() {
        let mut selector = TipSelector::seeded(catalog(4), 3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            if let (Some(i), _) = selector.next_indexed() {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
