//! Four-function desk calculator.

mod engine;

use desktop_app_contract::AppMountContext;
use engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

#[derive(Clone, Copy)]
struct CalcKeySpec {
    id: &'static str,
    label: &'static str,
    variant: ButtonVariant,
    wide: bool,
    action: CalcAction,
}

const fn key(id: &'static str, label: &'static str, action: CalcAction) -> CalcKeySpec {
    CalcKeySpec {
        id,
        label,
        variant: ButtonVariant::Standard,
        wide: false,
        action,
    }
}

const fn op_key(id: &'static str, op: BinaryOp) -> CalcKeySpec {
    CalcKeySpec {
        id,
        label: "",
        variant: ButtonVariant::Primary,
        wide: false,
        action: CalcAction::Binary(op),
    }
}

const CALC_KEYS: [CalcKeySpec; 19] = [
    CalcKeySpec {
        variant: ButtonVariant::Danger,
        ..key("clear", "C", CalcAction::Clear)
    },
    key("sign", "±", CalcAction::ToggleSign),
    key("percent", "%", CalcAction::Percent),
    op_key("divide", BinaryOp::Divide),
    key("7", "7", CalcAction::Digit('7')),
    key("8", "8", CalcAction::Digit('8')),
    key("9", "9", CalcAction::Digit('9')),
    op_key("multiply", BinaryOp::Multiply),
    key("4", "4", CalcAction::Digit('4')),
    key("5", "5", CalcAction::Digit('5')),
    key("6", "6", CalcAction::Digit('6')),
    op_key("subtract", BinaryOp::Subtract),
    key("1", "1", CalcAction::Digit('1')),
    key("2", "2", CalcAction::Digit('2')),
    key("3", "3", CalcAction::Digit('3')),
    op_key("add", BinaryOp::Add),
    CalcKeySpec {
        wide: true,
        ..key("0", "0", CalcAction::Digit('0'))
    },
    key("decimal", ".", CalcAction::Decimal),
    CalcKeySpec {
        variant: ButtonVariant::Primary,
        ..key("equals", "=", CalcAction::Equals)
    },
];

fn key_label(spec: &CalcKeySpec) -> &'static str {
    match spec.action {
        CalcAction::Binary(op) => op.symbol(),
        _ => spec.label,
    }
}

/// Mounts the calculator into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <CalculatorApp context /> }.into_view()
}

#[component]
/// Calculator window body.
pub fn CalculatorApp(context: AppMountContext) -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());
    let active = context.active;

    let on_keydown = move |ev: KeyboardEvent| {
        if !active.get_untracked() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-calculator" tabindex="0" on:keydown=on_keydown>
            <div class="calc-display" role="status" aria-live="polite">
                <span class="calc-pending">
                    {move || calc.with(|state| state.pending_op().map(BinaryOp::symbol).unwrap_or(""))}
                </span>
                <span class="calc-entry">{move || calc.with(|state| state.display_text().to_string())}</span>
            </div>
            <div class="calc-keypad" role="group" aria-label="Calculator keys">
                {CALC_KEYS
                    .iter()
                    .map(|spec| {
                        let action = spec.action;
                        let pressed = Signal::derive(move || match action {
                            CalcAction::Binary(op) => calc.with(|state| {
                                state.pending_op() == Some(op)
                                    && state.phase() == engine::CalcPhase::AwaitingSecond
                            }),
                            _ => false,
                        });
                        view! {
                            <Button
                                variant=spec.variant
                                layout_class=if spec.wide { "calc-key calc-key-wide" } else { "calc-key" }
                                ui_slot=spec.id
                                pressed
                                on_click=Callback::new(move |_| calc.update(|state| state.apply(action)))
                            >
                                {key_label(spec)}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
