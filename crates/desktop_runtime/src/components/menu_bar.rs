use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use platform_host::local_clock_now;

use super::*;

/// Decorative menu titles next to the system menu.
const MENU_TITLES: [&str; 5] = ["File", "Edit", "View", "Special", "Help"];

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu_open = create_memo(move |_| state.with(|desktop| desktop.system_menu_open));

    view! {
        <div class="menubar" role="menubar">
            <div class="menubar-left">
                <button
                    type="button"
                    class="menubar-system"
                    aria-label="System menu"
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleSystemMenu);
                    }
                >
                    <span class="menubar-logo" aria-hidden="true"></span>
                </button>
                {MENU_TITLES
                    .into_iter()
                    .map(|title| view! { <span class="menubar-title">{title}</span> })
                    .collect_view()}
            </div>
            <div class="menubar-right">
                <AppSwitcher />
                <MenuBarClock />
                <span class="menubar-finder">"Finder"</span>
            </div>
        </div>
        <Show when=move || menu_open.get() fallback=|| ()>
            <SystemMenu />
        </Show>
    }
}

#[component]
fn SystemMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let activate = move |window_id: AppId| {
        move |_: ev::MouseEvent| runtime.dispatch_action(DesktopAction::Activate { window_id })
    };

    view! {
        <div
            class="system-menu-dismiss"
            on:click=move |_| runtime.dispatch_action(DesktopAction::CloseSystemMenu)
        ></div>
        <div class="system-menu" role="menu">
            <button type="button" role="menuitem" on:click=activate(AppId::About)>
                <span aria-hidden="true">{AppId::About.glyph()}</span>
                <span>"About This Computer"</span>
            </button>
            <hr />
            <button type="button" role="menuitem" on:click=activate(AppId::ReadMe)>
                <span aria-hidden="true">{AppId::ReadMe.glyph()}</span>
                <span>"ReadMe"</span>
            </button>
            <hr />
            <button
                type="button"
                role="menuitem"
                on:click=move |_| runtime.dispatch_action(DesktopAction::Shutdown)
            >
                <span aria-hidden="true">"⏻"</span>
                <span>"Shut Down"</span>
            </button>
        </div>
    }
}

/// Menu-bar buttons for every open window; pressing one restores or raises it.
#[component]
fn AppSwitcher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open_windows = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .windows
                .iter()
                .filter(|w| w.is_open)
                .map(|w| w.id)
                .collect::<Vec<_>>()
        })
    });
    let active = create_memo(move |_| state.with(DesktopState::active_window));

    view! {
        <div class="menubar-switcher">
            <For each=move || open_windows.get() key=|id| *id let:window_id>
                <button
                    type="button"
                    class="menubar-switcher-item"
                    title=window_id.title()
                    aria-pressed=move || (active.get() == Some(window_id)).to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::Activate { window_id })
                >
                    <span aria-hidden="true">{window_id.glyph()}</span>
                </button>
            </For>
        </div>
    }
}

#[component]
fn MenuBarClock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let interval_ms = runtime.state.with_untracked(|desktop| desktop.config.clock_interval_ms);
    let now = create_rw_signal(local_clock_now().format_12h());
    let ticker = store_value::<Option<IntervalHandle>>(None);

    match set_interval_with_handle(
        move || now.set(local_clock_now().format_12h()),
        Duration::from_millis(interval_ms),
    ) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(err) => logging::warn!("menu bar clock failed to start: {err:?}"),
    }
    on_cleanup(move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! { <span class="menubar-clock">{move || now.get()}</span> }
}
