use leptos::wasm_bindgen::JsCast;

use super::*;

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Horizontal slider over a numeric range.
///
/// `on_input` receives the parsed slider value; unparsable input is dropped.
pub fn RangeField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(optional)] on_input: Option<Callback<f64>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-range", layout_class)
            type="range"
            min=min
            max=max
            step=step
            aria-label=aria_label
            prop:value=move || value.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-percent=move || format!("{:.2}", percent_of(value.get(), min, max))
            on:input=move |ev| {
                let Some(on_input) = on_input.as_ref() else {
                    return;
                };
                if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                    on_input.call(parsed);
                }
            }
        />
    }
}

#[component]
/// Striped progress bar filled to `percent` (0-100).
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] percent: MaybeSignal<f64>,
    #[prop(optional)] on_seek: Option<Callback<f64>>,
) -> impl IntoView {
    let clamped = move || percent_of(percent.get(), 0.0, 100.0);
    let seekable = on_seek.is_some();

    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", clamped())
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-seekable=bool_token(seekable)
            on:click=move |ev: MouseEvent| {
                let Some(on_seek) = on_seek.as_ref() else {
                    return;
                };
                let Some(target) = ev
                    .current_target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                let rect = target.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return;
                }
                let ratio = (f64::from(ev.client_x()) - rect.left()) / rect.width();
                on_seek.call((ratio * 100.0).clamp(0.0, 100.0));
            }
        >
            <div
                class="ui-progress-fill"
                data-ui-slot="fill"
                style=move || format!("width: {:.2}%", clamped())
            ></div>
        </div>
    }
}
