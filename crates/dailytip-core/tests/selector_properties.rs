//! Property tests for tip selection.

use dailytip_core::{Tip, TipCatalog, TipSelector};
use proptest::prelude::*;

fn catalog(size: usize) -> TipCatalog {
    TipCatalog::new(
        (0..size)
            .map(|i| Tip::new(format!("Tip number {i}"), "General"))
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn no_index_repeats_back_to_back(size in 2usize..40, seed in any::<u64>(), draws in 2usize..200) {
        let mut selector = TipSelector::seeded(catalog(size), seed);
        let mut previous = selector.next_indexed().0;
        for _ in 1..draws {
            let (index, tip) = selector.next_indexed();
            let index = index.expect("non-empty catalog yields an index");
            prop_assert!(index < size);
            prop_assert_ne!(Some(index), previous);
            prop_assert_eq!(tip.text, format!("Tip number {index}"));
            previous = Some(index);
        }
    }

    #[test]
    fn single_tip_always_returned(seed in any::<u64>(), draws in 1usize..50) {
        let mut selector = TipSelector::seeded(catalog(1), seed);
        for _ in 0..draws {
            prop_assert_eq!(selector.next(), Tip::new("Tip number 0", "General"));
        }
    }

    #[test]
    fn empty_catalog_never_panics(seed in any::<u64>(), draws in 1usize..50) {
        let mut selector = TipSelector::seeded(TipCatalog::default(), seed);
        for _ in 0..draws {
            prop_assert_eq!(selector.next(), Tip::fallback());
        }
    }
}

#[test]
fn test_fallback_tip_contents() {
    let tip = Tip::fallback();
    assert_eq!(tip.text, "No tips available yet.");
    assert_eq!(tip.category, "General");
}
