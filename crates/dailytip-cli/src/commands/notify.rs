use dailytip_core::{Config, NotificationGateway, NotifyOutcome, Result, SqliteStore};

use super::open_widget;
use crate::desktop::{DesktopBackend, TerminalAdvisor};

/// Raise a notification carrying today's tip.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let (widget, _selector) = open_widget(&config)?;

    let label = config.notifications.title_label.clone();
    let backend = DesktopBackend::new(SqliteStore::open()?, config.notifications.enabled, &label);
    let gateway = NotificationGateway::with_advisor(backend, TerminalAdvisor)
        .with_icon(config.notifications.icon.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(widget.notify_displayed(&gateway, &label));

    match outcome {
        NotifyOutcome::Dispatched => println!("notification sent"),
        NotifyOutcome::Blocked => println!("notification blocked"),
        NotifyOutcome::Unsupported => println!("notifications unsupported"),
        NotifyOutcome::Failed => println!("notification failed"),
    }
    Ok(())
}
