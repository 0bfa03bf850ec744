pub mod config;
pub mod notifications;
pub mod notify;
pub mod shuffle;
pub mod theme;
pub mod tips;
pub mod today;

use dailytip_core::{Config, Result, SqliteStore, TipSelector, TipWidget};

/// Today's widget over the on-disk store, plus the selector it was built with.
pub(crate) fn open_widget(
    config: &Config,
) -> Result<(TipWidget<SqliteStore>, TipSelector)> {
    let mut selector = TipSelector::new(config.catalog()?);
    let today = config.day.boundary.today();
    let widget = TipWidget::initialize(
        SqliteStore::open()?,
        today.as_str(),
        &mut selector,
        config.ui.default_theme,
    );
    Ok((widget, selector))
}
