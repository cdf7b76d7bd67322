//! Contract between the desktop window manager and the content providers it mounts.
//!
//! A content provider never sees window geometry or stacking. It receives read-only signals
//! describing whether its window is visible and active, a bundle of host services, and a
//! callback for asking the manager to do things on its behalf.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, View};
use platform_host::{ClipboardService, KeyValueStore, NoopClipboardService, NoopKeyValueStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Requests a content provider can send upward to the window manager.
pub enum AppCommand {
    /// Open (or restore and raise) the app whose registry key is `key`.
    ///
    /// Unknown keys are logged and ignored by the manager.
    OpenApp {
        /// Registry key such as `"terminal"`.
        key: String,
    },
    /// Close the window hosting the sender.
    CloseSelf,
}

#[derive(Clone, Copy)]
/// Upward command channel for a mounted content provider.
pub struct AppHost {
    sender: Option<Callback<AppCommand>>,
}

impl AppHost {
    /// Creates a host bound to the manager's command callback.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Creates a host whose commands go nowhere (previews, tests).
    pub fn detached() -> Self {
        Self { sender: None }
    }

    /// Sends `command` to the manager when attached.
    pub fn send(&self, command: AppCommand) {
        if let Some(sender) = self.sender.as_ref() {
            sender.call(command);
        }
    }

    /// Whether commands reach a manager.
    pub fn is_attached(&self) -> bool {
        self.sender.is_some()
    }
}

#[derive(Clone)]
/// Host services injected into content providers.
pub struct AppServices {
    /// Command channel to the manager.
    pub host: AppHost,
    /// Key-value store for provider-owned persisted state.
    pub storage: Rc<dyn KeyValueStore>,
    /// Clipboard writer.
    pub clipboard: Rc<dyn ClipboardService>,
}

impl AppServices {
    /// Bundles the given services.
    pub fn new(
        host: AppHost,
        storage: Rc<dyn KeyValueStore>,
        clipboard: Rc<dyn ClipboardService>,
    ) -> Self {
        Self {
            host,
            storage,
            clipboard,
        }
    }

    /// Services that persist nothing and reject clipboard writes.
    pub fn detached() -> Self {
        Self::new(
            AppHost::detached(),
            Rc::new(NoopKeyValueStore),
            Rc::new(NoopClipboardService),
        )
    }
}

#[derive(Clone)]
/// Per-mount context handed to a content provider.
pub struct AppMountContext {
    /// Registry key of the hosting window.
    pub window_key: &'static str,
    /// Changes whenever the manager re-instantiates this window's content.
    pub generation: u64,
    /// `true` while the window is open and not minimized.
    pub visible: Signal<bool>,
    /// `true` while the window is the active (topmost visible) window.
    pub active: Signal<bool>,
    /// Injected host services.
    pub services: AppServices,
}

/// Function that renders a content provider for a mount context.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// A mountable content provider.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Wraps a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Renders the provider.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn detached_services_are_inert() {
        let services = AppServices::detached();
        assert!(!services.host.is_attached());
        services.host.send(AppCommand::CloseSelf);

        assert!(block_on(services.clipboard.write_text("x")).is_err());
        assert_eq!(block_on(services.storage.load_raw("k")).expect("load"), None);
    }

    #[test]
    fn open_app_commands_compare_by_key() {
        let open = |key: &str| AppCommand::OpenApp {
            key: key.to_string(),
        };
        assert_eq!(open("terminal"), open("terminal"));
        assert_ne!(open("terminal"), open("pong"));
        assert_ne!(open("terminal"), AppCommand::CloseSelf);
    }
}
