use desktop_app_contract::{AppCommand, AppHost, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    host::window_content_dom_id,
    model::{ContentMount, PointerKind, ResizeEdge},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Drag and resize targets opt out of browser panning and zooming, otherwise a touch drag is
/// cancelled as soon as the page starts to scroll.
const GESTURE_FREE_STYLE: &str = "touch-action:none";

/// Primary-button mouse presses and primary touch/pen contacts only.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Inline style for a window frame.
///
/// Maximized windows and every window in mobile layout fill the surface through CSS, so only the
/// stacking order is emitted for them. Stored geometry is left untouched either way.
fn window_style(window: &WindowRecord, layout: LayoutMode) -> String {
    let display = if window.is_minimized { "display:none;" } else { "" };
    if window.is_maximized || layout == LayoutMode::Mobile {
        return format!("z-index:{};{display}", window.z_order);
    }
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{display}",
        window.position.x, window.position.y, window.size.width, window.size.height, window.z_order
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let record = create_memo(move |_| state.with(|desktop| desktop.window(window_id).cloned()));
    let layout = create_memo(move |_| state.with(|desktop| desktop.layout));
    let is_open = create_memo(move |_| record.with(|w| w.as_ref().is_some_and(|w| w.is_open)));
    let visible = create_memo(move |_| record.with(|w| w.as_ref().is_some_and(WindowRecord::is_visible)));
    let maximized = create_memo(move |_| record.with(|w| w.as_ref().is_some_and(|w| w.is_maximized)));
    let active = create_memo(move |_| state.with(|desktop| desktop.active_window() == Some(window_id)));
    let content = create_memo(move |_| record.with(|w| w.as_ref().and_then(|w| w.content)));

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::Focus { window_id });
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };

    let close = Callback::new(move |_: ev::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Close { window_id })
    });
    let minimize = Callback::new(move |_: ev::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Minimize { window_id })
    });
    let toggle_maximize = Callback::new(move |_: ev::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id })
    });

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <section
                class="desktop-window"
                role="dialog"
                aria-label=window_id.title()
                data-app=window_id.key()
                data-active=move || active.get().to_string()
                data-maximized=move || maximized.get().to_string()
                style=move || {
                    record.with(|w| {
                        w.as_ref().map(|w| window_style(w, layout.get())).unwrap_or_default()
                    })
                }
                on:pointerdown=focus
            >
                <header
                    class="titlebar"
                    style=GESTURE_FREE_STYLE
                    on:pointerdown=begin_drag
                    on:dblclick=titlebar_double_click
                >
                    <WindowControlButton control=WindowControl::Close on_click=close />
                    <span class="titlebar-title">{window_id.title()}</span>
                    <div class="titlebar-controls">
                        <WindowControlButton control=WindowControl::Maximize on_click=toggle_maximize />
                        <WindowControlButton control=WindowControl::Minimize on_click=minimize />
                    </div>
                </header>
                <div class="window-body" id=window_content_dom_id(window_id) tabindex="-1">
                    {move || {
                        content.get().map(|mount| mount_content(runtime, mount, visible, active))
                    }}
                </div>
                <Show
                    when=move || !maximized.get() && layout.get() == LayoutMode::Desktop
                    fallback=|| ()
                >
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| view! { <WindowResizeHandle window_id edge /> })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
            pointer_kind: PointerKind::from_dom(&ev.pointer_type()),
        });
    };

    view! {
        <div
            class=format!("window-resize-handle edge-{}", edge.token())
            aria-hidden="true"
            style=GESTURE_FREE_STYLE
            on:pointerdown=on_pointerdown
        />
    }
}

/// Instantiates a content provider for one mount generation.
fn mount_content(
    runtime: DesktopRuntimeContext,
    mount: ContentMount,
    visible: Memo<bool>,
    active: Memo<bool>,
) -> View {
    let window_id = mount.app_id;
    let host = AppHost::new(Callback::new(move |command: AppCommand| match command {
        AppCommand::OpenApp { key } => runtime.dispatch_action(DesktopAction::OpenByKey { key }),
        AppCommand::CloseSelf => runtime.dispatch_action(DesktopAction::Close { window_id }),
    }));
    let services = runtime.host.with_value(|host_context| host_context.app_services(host));

    apps::app_module(window_id).mount(AppMountContext {
        window_key: window_id.key(),
        generation: mount.generation,
        visible: visible.into(),
        active: active.into(),
        services,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn floating_windows_carry_geometry() {
        let mut window = WindowRecord::new(AppId::Terminal, 101);
        window.is_open = true;
        assert_eq!(
            window_style(&window, LayoutMode::Desktop),
            "left:60px;top:60px;width:500px;height:350px;z-index:101;"
        );
    }

    #[test]
    fn maximized_and_mobile_windows_only_stack() {
        let mut window = WindowRecord::new(AppId::Pong, 104);
        window.is_open = true;
        assert_eq!(window_style(&window, LayoutMode::Mobile), "z-index:104;");

        window.is_maximized = true;
        window.is_minimized = true;
        assert_eq!(
            window_style(&window, LayoutMode::Desktop),
            "z-index:104;display:none;"
        );
    }
}
