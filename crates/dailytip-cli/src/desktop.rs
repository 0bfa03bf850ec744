//! Desktop notification backend.
//!
//! Dispatch goes through `notify-rust`. There is no OS-level permission for
//! desktop notifications, so the decision is asked once on the terminal and
//! remembered in the key-value store.

use std::cell::RefCell;
use std::io::{BufRead, IsTerminal, Write};

use dailytip_core::store::NOTIFICATION_PERMISSION_KEY;
use dailytip_core::{
    AdvisorySink, Capability, KeyValueStore, Notification, NotificationBackend, NotifyError,
    Permission, PermissionOutcome, StoreError,
};
use tracing::warn;

const DESKTOP_PLATFORM: bool = cfg!(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "macos",
    target_os = "windows"
));

pub struct DesktopBackend<S> {
    store: RefCell<S>,
    enabled: bool,
    app_name: String,
}

impl<S: KeyValueStore> DesktopBackend<S> {
    pub fn new(store: S, enabled: bool, app_name: impl Into<String>) -> Self {
        Self {
            store: RefCell::new(store),
            enabled,
            app_name: app_name.into(),
        }
    }

    /// Remember a decision, or forget it with `Permission::Undetermined`.
    pub fn remember(&self, permission: Permission) -> Result<(), StoreError> {
        let mut store = self.store.borrow_mut();
        match permission {
            Permission::Undetermined => store.remove_many(&[NOTIFICATION_PERMISSION_KEY]),
            Permission::Granted => store.set(NOTIFICATION_PERMISSION_KEY, "granted"),
            Permission::Denied => store.set(NOTIFICATION_PERMISSION_KEY, "denied"),
        }
    }
}

fn ask(app_name: &str) -> std::io::Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Allow {app_name} to show desktop notifications? [y/N] ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

impl<S: KeyValueStore> NotificationBackend for DesktopBackend<S> {
    fn capability(&self) -> Capability {
        if self.enabled && DESKTOP_PLATFORM {
            Capability::Available
        } else {
            Capability::Unavailable
        }
    }

    fn permission(&self) -> Permission {
        match self.store.borrow().get(NOTIFICATION_PERMISSION_KEY) {
            Ok(Some(value)) => match value.as_str() {
                "granted" => Permission::Granted,
                "denied" => Permission::Denied,
                _ => Permission::Undetermined,
            },
            Ok(None) => Permission::Undetermined,
            Err(e) => {
                warn!(error = %e, "failed to read notification permission");
                Permission::Undetermined
            }
        }
    }

    fn can_prompt(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    async fn request_permission(&self) -> PermissionOutcome {
        let app_name = self.app_name.clone();
        let outcome = match tokio::task::spawn_blocking(move || ask(&app_name)).await {
            Ok(Ok(true)) => PermissionOutcome::Granted,
            Ok(Ok(false)) => PermissionOutcome::Denied,
            Ok(Err(e)) => {
                warn!(error = %e, "failed to read permission answer");
                return PermissionOutcome::Denied;
            }
            Err(e) => {
                warn!(error = %e, "permission prompt task failed");
                return PermissionOutcome::Denied;
            }
        };

        let decided = match outcome {
            PermissionOutcome::Granted => Permission::Granted,
            PermissionOutcome::Denied => Permission::Denied,
        };
        if let Err(e) = self.remember(decided) {
            warn!(error = %e, "failed to remember notification permission");
        }
        outcome
    }

    fn dispatch(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut desktop = notify_rust::Notification::new();
        desktop
            .summary(&notification.title)
            .body(&notification.body)
            .appname(&self.app_name);
        if let Some(icon) = &notification.icon {
            desktop.icon(icon);
        }
        desktop
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::DispatchFailed(e.to_string()))
    }
}

/// Prints advisories to stderr.
pub struct TerminalAdvisor;

impl AdvisorySink for TerminalAdvisor {
    fn advise(&self, advisory: &NotifyError) {
        eprintln!("Warning: {advisory}");
    }
}
