//! Notification permission handling and dispatch.
//!
//! Concurrent permission requests share a single prompt.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::NotifyError;

/// Whether the environment can show notifications at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

/// Permission as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Undetermined,
    Granted,
    Denied,
}

/// Result of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionOutcome {
    Granted,
    Denied,
}

/// Permission state as seen by callers of the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Unsupported,
    Undetermined,
    /// A prompt is in flight.
    Pending,
    Granted,
    Denied,
}

/// What `notify` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyOutcome {
    Dispatched,
    Blocked,
    Unsupported,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
}

/// Title shown for a tip: product label plus the tip's category.
pub fn tip_title(label: &str, category: &str) -> String {
    format!("{label} – {category}")
}

/// Boundary to whatever actually shows notifications.
#[allow(async_fn_in_trait)]
pub trait NotificationBackend {
    fn capability(&self) -> Capability;

    fn permission(&self) -> Permission;

    /// Whether a permission prompt can be shown right now.
    fn can_prompt(&self) -> bool {
        true
    }

    /// Ask the user. Resolves once they answer.
    async fn request_permission(&self) -> PermissionOutcome;

    /// Best-effort delivery.
    fn dispatch(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Receives user-visible advisory messages.
pub trait AdvisorySink {
    fn advise(&self, advisory: &NotifyError);
}

/// Advisory sink that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAdvisor;

impl AdvisorySink for LogAdvisor {
    fn advise(&self, advisory: &NotifyError) {
        warn!("{advisory}");
    }
}

type PromptReceiver = watch::Receiver<Option<PermissionOutcome>>;

/// Clears the in-flight slot when the prompting future finishes or is dropped.
struct PendingPrompt<'a> {
    slot: &'a RefCell<Option<PromptReceiver>>,
}

impl Drop for PendingPrompt<'_> {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

pub struct NotificationGateway<B, A = LogAdvisor> {
    backend: B,
    advisor: A,
    icon: Option<String>,
    pending: RefCell<Option<PromptReceiver>>,
}

impl<B: NotificationBackend> NotificationGateway<B, LogAdvisor> {
    pub fn new(backend: B) -> Self {
        Self::with_advisor(backend, LogAdvisor)
    }
}

impl<B: NotificationBackend, A: AdvisorySink> NotificationGateway<B, A> {
    pub fn with_advisor(backend: B, advisor: A) -> Self {
        Self {
            backend,
            advisor,
            icon: None,
            pending: RefCell::new(None),
        }
    }

    /// Icon attached to every dispatched notification.
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon.filter(|i| !i.trim().is_empty());
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn advisor(&self) -> &A {
        &self.advisor
    }

    pub fn check_support(&self) -> bool {
        self.backend.capability() == Capability::Available
    }

    pub fn state(&self) -> PermissionState {
        if !self.check_support() {
            return PermissionState::Unsupported;
        }
        if self.pending.borrow().is_some() {
            return PermissionState::Pending;
        }
        match self.backend.permission() {
            Permission::Undetermined => PermissionState::Undetermined,
            Permission::Granted => PermissionState::Granted,
            Permission::Denied => PermissionState::Denied,
        }
    }

    /// Resolve the permission, prompting only when undecided.
    ///
    /// Unsupported environments and backends that cannot prompt resolve to
    /// denied with an advisory. Nothing is remembered in either case.
    pub async fn request_permission(&self) -> PermissionOutcome {
        if !self.check_support() {
            self.advisor.advise(&NotifyError::CapabilityUnavailable);
            return PermissionOutcome::Denied;
        }
        match self.backend.permission() {
            Permission::Granted => return PermissionOutcome::Granted,
            Permission::Denied => return PermissionOutcome::Denied,
            Permission::Undetermined => {}
        }
        if !self.backend.can_prompt() {
            self.advisor.advise(&NotifyError::PromptUnavailable);
            return PermissionOutcome::Denied;
        }

        let in_flight = self.pending.borrow().clone();
        if let Some(mut rx) = in_flight {
            debug!("joining in-flight permission prompt");
            return match rx.wait_for(Option::is_some).await {
                Ok(outcome) => outcome.unwrap_or(PermissionOutcome::Denied),
                // The prompting future was dropped before the user answered.
                Err(_) => PermissionOutcome::Denied,
            };
        }

        let (tx, rx) = watch::channel(None);
        *self.pending.borrow_mut() = Some(rx);
        let _prompt = PendingPrompt {
            slot: &self.pending,
        };

        debug!("requesting notification permission");
        let outcome = self.backend.request_permission().await;
        debug!(?outcome, "notification permission resolved");
        tx.send_replace(Some(outcome));
        outcome
    }

    /// Show `title`/`body` if permitted, asking first when undecided.
    pub async fn notify(&self, title: &str, body: &str) -> NotifyOutcome {
        if !self.check_support() {
            self.advisor.advise(&NotifyError::CapabilityUnavailable);
            return NotifyOutcome::Unsupported;
        }

        let permitted = match self.backend.permission() {
            Permission::Granted => true,
            Permission::Denied => false,
            Permission::Undetermined if !self.backend.can_prompt() => {
                self.advisor.advise(&NotifyError::PromptUnavailable);
                return NotifyOutcome::Blocked;
            }
            Permission::Undetermined => {
                self.request_permission().await == PermissionOutcome::Granted
            }
        };
        if !permitted {
            self.advisor.advise(&NotifyError::PermissionDenied);
            return NotifyOutcome::Blocked;
        }

        let notification = Notification {
            title: title.to_string(),
            body: body.to_string(),
            icon: self.icon.clone(),
        };
        match self.backend.dispatch(&notification) {
            Ok(()) => {
                debug!(title, "notification dispatched");
                NotifyOutcome::Dispatched
            }
            Err(e) => {
                warn!(error = %e, "notification dispatch failed");
                self.advisor.advise(&e);
                NotifyOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Granted {
        sent: Cell<usize>,
    }

    impl NotificationBackend for Granted {
        fn capability(&self) -> Capability {
            Capability::Available
        }
        fn permission(&self) -> Permission {
            Permission::Granted
        }
        async fn request_permission(&self) -> PermissionOutcome {
            PermissionOutcome::Granted
        }
        fn dispatch(&self, _notification: &Notification) -> Result<(), NotifyError> {
            self.sent.set(self.sent.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn title_joins_label_and_category() {
        assert_eq!(
            tip_title("Sustainability Daily", "Water"),
            "Sustainability Daily – Water"
        );
    }

    #[test]
    fn blank_icon_is_dropped() {
        let gateway = NotificationGateway::new(Granted { sent: Cell::new(0) })
            .with_icon(Some("  ".into()));
        assert!(gateway.icon.is_none());
    }

    #[tokio::test]
    async fn granted_dispatches_without_prompt() {
        let gateway = NotificationGateway::new(Granted { sent: Cell::new(0) });
        assert_eq!(gateway.state(), PermissionState::Granted);
        assert_eq!(gateway.notify("t", "b").await, NotifyOutcome::Dispatched);
        assert_eq!(gateway.backend().sent.get(), 1);
    }
}
