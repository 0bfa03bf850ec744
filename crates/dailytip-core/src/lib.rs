//! # Sustainability Daily Core Library
//!
//! Core logic for the "tip of the day" widget: one sustainability tip per
//! calendar day, a persisted light/dark theme, and optional notifications
//! carrying the displayed tip. The `dailytip` CLI is a thin shell over this
//! crate.
//!
//! ## Key Components
//!
//! - [`TipCatalog`]: Ordered, read-only list of tips
//! - [`TipSelector`]: Random pick that never repeats the previous index
//! - [`DailyTipCache`]: Memoizes one tip per day in a [`KeyValueStore`]
//! - [`NotificationGateway`]: Permission handling and dispatch
//! - [`TipWidget`]: Ties the above together
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod config;
pub mod daily;
pub mod day;
pub mod error;
pub mod notify;
pub mod selector;
pub mod store;
pub mod theme;
pub mod widget;

pub use catalog::{Tip, TipCatalog};
pub use config::Config;
pub use daily::{DailyTipCache, DailyTipRecord};
pub use day::{DayBoundary, DayKey};
pub use error::{CatalogError, ConfigError, CoreError, NotifyError, Result, StoreError};
pub use notify::{
    tip_title, AdvisorySink, Capability, LogAdvisor, Notification, NotificationBackend,
    NotificationGateway, NotifyOutcome, Permission, PermissionOutcome, PermissionState,
};
pub use selector::{SelectionState, TipSelector, TipSource};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use theme::Theme;
pub use widget::{TipWidget, WidgetView};
