//! The tip-of-the-day widget state.
//!
//! Owns the store handle, the displayed tip and the active theme. Rendering
//! is left to the caller.

use serde::Serialize;
use tracing::warn;

use crate::catalog::Tip;
use crate::daily::DailyTipCache;
use crate::error::StoreError;
use crate::notify::{
    tip_title, AdvisorySink, NotificationBackend, NotificationGateway, NotifyOutcome,
};
use crate::selector::TipSource;
use crate::store::KeyValueStore;
use crate::theme::{load_theme, save_theme, Theme};

/// What the widget currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub day: String,
    pub tip: Tip,
    pub theme: Theme,
}

pub struct TipWidget<S> {
    cache: DailyTipCache<S>,
    day: String,
    displayed: Tip,
    theme: Theme,
}

impl<S: KeyValueStore> TipWidget<S> {
    /// Apply the stored theme and show today's tip.
    pub fn initialize(
        store: S,
        today_key: &str,
        selector: &mut impl TipSource,
        default_theme: Theme,
    ) -> Self {
        let theme = load_theme(&store, default_theme);
        let mut cache = DailyTipCache::new(store);
        let displayed = cache.get_or_create_today(today_key, selector);
        Self {
            cache,
            day: today_key.to_string(),
            displayed,
            theme,
        }
    }

    pub fn displayed_tip(&self) -> &Tip {
        &self.displayed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            day: self.day.clone(),
            tip: self.displayed.clone(),
            theme: self.theme,
        }
    }

    /// Re-run the daily lookup, e.g. after midnight. Returns whether the
    /// displayed tip changed.
    pub fn refresh(&mut self, today_key: &str, selector: &mut impl TipSource) -> bool {
        let tip = self.cache.get_or_create_today(today_key, selector);
        self.day = today_key.to_string();
        let changed = tip != self.displayed;
        self.displayed = tip;
        changed
    }

    /// Drop today's record and pick a tip other than the displayed one.
    ///
    /// # Errors
    /// Returns an error if the record cannot be removed.
    pub fn reshuffle(&mut self, selector: &mut impl TipSource) -> Result<&Tip, StoreError> {
        self.cache.invalidate()?;
        selector.exclude(&self.displayed);
        self.displayed = self.cache.get_or_create_today(&self.day, selector);
        Ok(&self.displayed)
    }

    /// Flip the theme and persist it. The in-memory theme flips even if the
    /// write fails.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = save_theme(self.cache.store_mut(), theme) {
            warn!(error = %e, "failed to persist theme preference");
        }
    }

    /// Send the displayed tip through `gateway`.
    pub async fn notify_displayed<B, A>(
        &self,
        gateway: &NotificationGateway<B, A>,
        label: &str,
    ) -> NotifyOutcome
    where
        B: NotificationBackend,
        A: AdvisorySink,
    {
        let title = tip_title(label, &self.displayed.category);
        gateway.notify(&title, &self.displayed.text).await
    }

    pub fn into_store(self) -> S {
        self.cache.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TipCatalog;
    use crate::selector::TipSelector;
    use crate::store::{MemoryStore, THEME_KEY};

    #[test]
    fn initialize_uses_default_theme_when_unset() {
        let mut selector = TipSelector::seeded(TipCatalog::builtin(), 5);
        let widget =
            TipWidget::initialize(MemoryStore::new(), "2024-01-01", &mut selector, Theme::Dark);
        assert_eq!(widget.theme(), Theme::Dark);
        assert!(widget.displayed_tip().is_valid());
    }

    #[test]
    fn toggle_persists() {
        let mut selector = TipSelector::seeded(TipCatalog::builtin(), 5);
        let mut widget =
            TipWidget::initialize(MemoryStore::new(), "2024-01-01", &mut selector, Theme::Light);
        assert_eq!(widget.toggle_theme(), Theme::Dark);
        let store = widget.into_store();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let widget = TipWidget::initialize(store, "2024-01-01", &mut selector, Theme::Light);
        assert_eq!(widget.theme(), Theme::Dark);
    }

    #[test]
    fn reinitializing_same_day_keeps_tip() {
        let mut selector = TipSelector::seeded(TipCatalog::builtin(), 11);
        let widget =
            TipWidget::initialize(MemoryStore::new(), "2024-01-01", &mut selector, Theme::Light);
        let first = widget.displayed_tip().clone();

        let mut other = TipSelector::seeded(TipCatalog::builtin(), 12);
        let widget =
            TipWidget::initialize(widget.into_store(), "2024-01-01", &mut other, Theme::Light);
        assert_eq!(widget.displayed_tip(), &first);
    }

    #[test]
    fn reshuffle_replaces_tip_for_same_day() {
        let mut selector = TipSelector::seeded(TipCatalog::builtin(), 3);
        let mut widget =
            TipWidget::initialize(MemoryStore::new(), "2024-01-01", &mut selector, Theme::Light);
        let before = widget.displayed_tip().clone();
        let after = widget.reshuffle(&mut selector).unwrap().clone();
        // Consecutive picks from the same selector never repeat.
        assert_ne!(before, after);
        assert_eq!(widget.day(), "2024-01-01");
    }

    #[test]
    fn reshuffle_after_cache_hit_replaces_tip() {
        let catalog = TipCatalog::new(vec![
            Tip::new("Turn off lights.", "Energy"),
            Tip::new("Use a reusable bottle.", "Water"),
        ])
        .unwrap();

        for seed in 0..50 {
            let mut first = TipSelector::seeded(catalog.clone(), seed);
            let store =
                TipWidget::initialize(MemoryStore::new(), "2024-01-01", &mut first, Theme::Light)
                    .into_store();

            // New process: the record is read back and the selector never runs.
            let mut fresh = TipSelector::seeded(catalog.clone(), seed + 1000);
            let mut widget = TipWidget::initialize(store, "2024-01-01", &mut fresh, Theme::Light);
            assert_eq!(fresh.state().last_index, None);

            let before = widget.displayed_tip().clone();
            let after = widget.reshuffle(&mut fresh).unwrap().clone();
            assert_ne!(before, after, "seed {seed}");
        }
    }
}
