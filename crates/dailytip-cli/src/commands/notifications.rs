use clap::Subcommand;
use dailytip_core::{Config, NotificationGateway, Permission, Result, SqliteStore};
use serde_json::json;

use crate::desktop::{DesktopBackend, TerminalAdvisor};

#[derive(Subcommand)]
pub enum NotificationsAction {
    /// Show support and permission state
    Status,
    /// Allow notifications without being asked
    Allow,
    /// Block notifications
    Deny,
    /// Forget the decision so the next `notify` asks again
    Reset,
}

pub fn run(action: NotificationsAction) -> Result<()> {
    let config = Config::load()?;
    let backend = DesktopBackend::new(
        SqliteStore::open()?,
        config.notifications.enabled,
        config.notifications.title_label.clone(),
    );

    match action {
        NotificationsAction::Status => {
            let gateway = NotificationGateway::with_advisor(backend, TerminalAdvisor);
            let status = json!({
                "supported": gateway.check_support(),
                "state": gateway.state(),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        NotificationsAction::Allow => {
            backend.remember(Permission::Granted)?;
            println!("notifications allowed");
        }
        NotificationsAction::Deny => {
            backend.remember(Permission::Denied)?;
            println!("notifications blocked");
        }
        NotificationsAction::Reset => {
            backend.remember(Permission::Undetermined)?;
            println!("notification permission reset");
        }
    }
    Ok(())
}
