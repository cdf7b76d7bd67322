//! Desktop shell UI composition and interaction surfaces.

mod menu_bar;
mod screens;
mod window;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use system_ui::prelude::*;

use self::{
    menu_bar::MenuBar,
    screens::{BootScreen, ShutdownScreen},
    window::DesktopWindow,
};
use crate::{
    apps,
    model::{AppId, BootStage, DesktopState, InteractionState, LayoutMode, Point, WindowRecord},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn pointer_from_touch_event(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

/// Forwards a pointer move to whichever session is active.
fn track_pointer(runtime: DesktopRuntimeContext, pointer: Point) {
    let (dragging, resizing) = runtime
        .interaction
        .with_untracked(|ui| (ui.dragging.is_some(), ui.resizing.is_some()));
    if !dragging && !resizing {
        return;
    }
    let container = runtime.surface_bounds();
    if dragging {
        runtime.dispatch_action(DesktopAction::UpdateDrag { pointer, container });
    }
    if resizing {
        runtime.dispatch_action(DesktopAction::UpdateResize { pointer, container });
    }
}

/// Touch sessions are tracked through touch events, which keep flowing after the browser cancels
/// the pointer stream, so only mouse and pen cancellations end a session.
fn cancel_ends_interaction(pointer_type: &str) -> bool {
    pointer_type != "touch"
}

fn end_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(InteractionState::is_active) {
        runtime.dispatch_action(DesktopAction::EndInteraction);
    }
}

fn sync_layout(runtime: DesktopRuntimeContext) {
    let Some(width) = platform_host_web::viewport_width() else {
        return;
    };
    let (current, wanted) = runtime
        .state
        .with_untracked(|desktop| (desktop.layout, desktop.config.layout_for_width(width)));
    if current != wanted {
        runtime.dispatch_action(DesktopAction::SetLayout { layout: wanted });
    }
}

fn install_pointer_listeners(runtime: DesktopRuntimeContext) -> Vec<WindowListenerHandle> {
    vec![
        window_event_listener(ev::pointermove, move |ev| {
            track_pointer(runtime, pointer_from_pointer_event(&ev));
        }),
        window_event_listener(ev::pointerup, move |_| end_pointer_interaction(runtime)),
        window_event_listener(ev::pointercancel, move |ev| {
            if cancel_ends_interaction(&ev.pointer_type()) {
                end_pointer_interaction(runtime);
            }
        }),
        window_event_listener(ev::touchmove, move |ev| {
            if let Some(pointer) = pointer_from_touch_event(&ev) {
                track_pointer(runtime, pointer);
            }
        }),
        window_event_listener(ev::touchend, move |_| end_pointer_interaction(runtime)),
    ]
}

#[component]
/// Renders the boot screens, menu bar, desktop icons, and windows.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let boot = create_memo(move |_| state.with(|desktop| desktop.boot));
    let layout = create_memo(move |_| state.with(|desktop| desktop.layout));

    sync_layout(runtime);
    let resize_listener = window_event_listener(ev::resize, move |_| sync_layout(runtime));

    // Global pointer tracking exists only while windows can be dragged.
    let pointer_listeners = store_value(Vec::<WindowListenerHandle>::new());
    let remove_pointer_listeners = move || {
        pointer_listeners.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    create_effect(move |_| {
        remove_pointer_listeners();
        if layout.get() == LayoutMode::Desktop {
            pointer_listeners.set_value(install_pointer_listeners(runtime));
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let (ready, menu_open) =
            state.with_untracked(|desktop| (desktop.is_desktop_ready(), desktop.system_menu_open));
        if !ready {
            return;
        }
        if menu_open {
            runtime.dispatch_action(DesktopAction::CloseSystemMenu);
        } else {
            runtime.dispatch_action(DesktopAction::CloseTop);
        }
    });

    on_cleanup(move || {
        resize_listener.remove();
        escape_listener.remove();
        remove_pointer_listeners();
    });

    view! {
        <div
            class="desktop-shell"
            data-layout=move || format!("{:?}", layout.get()).to_lowercase()
        >
            {move || match boot.get() {
                BootStage::Desktop => view! { <DesktopSurface /> }.into_view(),
                BootStage::ShutDown => view! { <ShutdownScreen /> }.into_view(),
                BootStage::Off | BootStage::Happy | BootStage::Loading => {
                    view! { <BootScreen stage=boot /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let surface = runtime.surface;
    let no_open_windows = create_memo(move |_| state.with(|desktop| desktop.open_window_count() == 0));

    view! {
        <MenuBar />
        <div
            class="desktop-surface"
            node_ref=surface
            on:pointerdown=move |_| {
                if state.with_untracked(|desktop| desktop.selected_icon.is_some()) {
                    runtime.dispatch_action(DesktopAction::SelectIcon { icon: None });
                }
            }
        >
            <div class="desktop-icons">
                {apps::desktop_icon_apps()
                    .map(|app_id| view! { <DesktopIcon app_id /> })
                    .collect_view()}
            </div>
            <Show when=move || no_open_windows.get() fallback=|| ()>
                <p class="desktop-hint">"Double-click icon to open"</p>
            </Show>
            <For each=move || AppId::ALL key=|id| *id let:window_id>
                <DesktopWindow window_id />
            </For>
        </div>
    }
}

#[component]
fn DesktopIcon(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected =
        create_memo(move |_| runtime.state.with(|desktop| desktop.selected_icon == Some(app_id)));
    let activate = move || runtime.dispatch_action(DesktopAction::Activate { window_id: app_id });

    view! {
        <button
            type="button"
            class="desktop-icon"
            data-app=app_id.key()
            aria-pressed=move || selected.get().to_string()
            on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::SelectIcon { icon: Some(app_id) })
            }
            on:dblclick=move |_| activate()
            on:keydown=move |ev: ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            <span class="desktop-icon-glyph" aria-hidden="true">{app_id.glyph()}</span>
            <span class="desktop-icon-label">{app_id.title()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_cancel_keeps_touch_sessions_alive() {
        assert!(!cancel_ends_interaction("touch"));
        assert!(cancel_ends_interaction("mouse"));
        assert!(cancel_ends_interaction("pen"));
    }
}
