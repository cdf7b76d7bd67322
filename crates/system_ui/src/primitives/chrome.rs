use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Title-bar control kinds.
pub enum WindowControl {
    /// Close box (left edge of the title bar).
    Close,
    /// Collapse to the menu-bar application list.
    Minimize,
    /// Zoom box toggling between the stored frame and the full desktop.
    Maximize,
}

impl WindowControl {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Close => "Close window",
            Self::Minimize => "Minimize window",
            Self::Maximize => "Zoom window",
        }
    }
}

#[component]
/// Square title-bar box.
///
/// Pointer-down is stopped here so pressing a control never starts a title-bar drag.
pub fn WindowControlButton(
    control: WindowControl,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=control.label()
            title=control.label()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-control=control.token()
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></button>
    }
}

#[component]
/// Footer strip for counts and short status text.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
        >
            {children()}
        </div>
    }
}
