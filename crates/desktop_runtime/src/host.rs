//! Host-side runtime helpers: service wiring, reducer effect execution, and the boot sequence.

mod boot;

use std::rc::Rc;

use desktop_app_contract::{AppHost, AppServices};
use platform_host::{ClipboardService, KeyValueStore, MemoryClipboardService, MemoryKeyValueStore};
use platform_host_web::{WebClipboardService, WebKeyValueStore};

pub(crate) use boot::install_boot_sequence;

use crate::{model::AppId, reducer::RuntimeEffect};

/// Playback volume for title-bar click sounds.
pub const UI_SOUND_VOLUME: f64 = 0.5;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects and app services.
pub struct DesktopHostContext {
    storage: Rc<dyn KeyValueStore>,
    clipboard: Rc<dyn ClipboardService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(WebKeyValueStore), Rc::new(WebClipboardService))
    }
}

impl DesktopHostContext {
    /// Bundles explicit service implementations.
    pub fn new(storage: Rc<dyn KeyValueStore>, clipboard: Rc<dyn ClipboardService>) -> Self {
        Self { storage, clipboard }
    }

    /// In-memory services, for previews and tests outside a browser.
    pub fn in_memory() -> Self {
        Self::new(
            Rc::new(MemoryKeyValueStore::default()),
            Rc::new(MemoryClipboardService::default()),
        )
    }

    /// Returns the configured key-value store.
    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        self.storage.clone()
    }

    /// Returns the configured clipboard writer.
    pub fn clipboard(&self) -> Rc<dyn ClipboardService> {
        self.clipboard.clone()
    }

    /// Builds the service bundle handed to a mounted content provider.
    pub fn app_services(&self, host: AppHost) -> AppServices {
        AppServices::new(host, self.storage(), self.clipboard())
    }

    /// Executes one reducer-emitted effect.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(url) => platform_host_web::play_ui_sound(url, UI_SOUND_VOLUME),
            RuntimeEffect::FocusWindowContent(window_id) => focus_window_content(window_id),
        }
    }
}

/// DOM id of a window's content container.
pub fn window_content_dom_id(window_id: AppId) -> String {
    format!("window-content-{}", window_id.key())
}

fn focus_window_content(window_id: AppId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let dom_id = window_content_dom_id(window_id);
        // Content mounts on the next render, so wait a frame before looking it up.
        leptos::request_animation_frame(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Some(element) = document
                .get_element_by_id(&dom_id)
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            if let Err(err) = element.focus() {
                leptos::logging::warn!("focus {dom_id} failed: {err:?}");
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = window_id;
    }
}

/// Splits an `open` query value (`terminal,calculator`) into app keys.
///
/// Keys are not validated here; unknown ones are rejected by the reducer when dispatched.
pub fn parse_open_keys(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_keys_are_split_and_trimmed() {
        assert_eq!(
            parse_open_keys(" terminal, ,Calculator,"),
            vec!["terminal".to_string(), "Calculator".to_string()]
        );
        assert!(parse_open_keys("").is_empty());
    }

    #[test]
    fn content_dom_ids_use_app_keys() {
        assert_eq!(window_content_dom_id(AppId::MusicPlayer), "window-content-music-player");
    }

    #[test]
    fn app_services_share_host_storage() {
        let host = DesktopHostContext::in_memory();
        let services = host.app_services(AppHost::detached());
        block_on(services.storage.save_raw("k", "\"v\"")).expect("save");
        assert_eq!(
            block_on(host.storage().load_raw("k")).expect("load"),
            Some("\"v\"".to_string())
        );
    }
}
