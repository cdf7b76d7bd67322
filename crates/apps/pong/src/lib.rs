//! Paddle game against a CPU opponent.

mod game;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use game::{
    GameStatus, PaddleInput, PongGame, BALL_SIZE, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT,
    PADDLE_INSET, PADDLE_WIDTH,
};
use leptos::ev::{KeyboardEvent, TouchEvent};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use system_ui::prelude::*;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        platform_host::unix_time_ms_now()
    }
}

/// Inline style placing a field-space rectangle as percentages of the play area.
fn place(x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; width: {:.3}%; height: {:.3}%",
        x * 100.0 / FIELD_WIDTH,
        y * 100.0 / FIELD_HEIGHT,
        w * 100.0 / FIELD_WIDTH,
        h * 100.0 / FIELD_HEIGHT
    )
}

/// Mounts the game into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <PongApp context /> }.into_view()
}

#[component]
/// Paddle game window body.
pub fn PongApp(context: AppMountContext) -> impl IntoView {
    let game = create_rw_signal(PongGame::new(random_seed()));
    let input = store_value(PaddleInput::default());
    let loop_handle = store_value::<Option<IntervalHandle>>(None);
    let field_ref = create_node_ref::<html::Div>();
    let visible = context.visible;

    let running = create_memo(move |_| game.with(PongGame::is_running));
    create_effect(move |_| {
        let should_run = running.get() && visible.get();
        loop_handle.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
            if !should_run {
                return;
            }
            let tick = move || {
                let held = input.get_value();
                game.update(|g| {
                    g.step(held);
                });
            };
            match set_interval_with_handle(tick, FRAME_INTERVAL) {
                Ok(handle) => *slot = Some(handle),
                Err(err) => logging::warn!("pong loop failed to start: {err:?}"),
            }
        });
    });

    on_cleanup(move || {
        loop_handle.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    let focus_field = move || {
        if let Some(field) = field_ref.get_untracked() {
            let _ = field.focus();
        }
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        " " | "Escape" => {
            ev.prevent_default();
            game.update(PongGame::toggle);
        }
        "ArrowUp" | "w" | "W" => {
            ev.prevent_default();
            input.update_value(|held| held.up = true);
        }
        "ArrowDown" | "s" | "S" => {
            ev.prevent_default();
            input.update_value(|held| held.down = true);
        }
        _ => {}
    };

    let on_keyup = move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowUp" | "w" | "W" => input.update_value(|held| held.up = false),
        "ArrowDown" | "s" | "S" => input.update_value(|held| held.down = false),
        _ => {}
    };

    let on_touchmove = move |ev: TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let Some(field) = field_ref.get_untracked() else {
            return;
        };
        let rect = field.get_bounding_client_rect();
        if rect.height() <= 0.0 {
            return;
        }
        ev.prevent_default();
        let ratio = (f64::from(touch.client_y()) - rect.top()) / rect.height();
        game.update(|g| g.aim_player(ratio));
    };

    let status_text = move || match game.with(|g| g.status) {
        GameStatus::NotStarted => "Click or press Space to start",
        GameStatus::Running => "W/S or ↑/↓ to move · Space to pause",
        GameStatus::Paused => "Paused · Space to resume",
    };

    view! {
        <div class="app-pong">
            <div class="pong-scoreboard">
                <span class="pong-score" data-side="player">{move || format!("YOU {}", game.with(|g| g.player_score))}</span>
                <span class="pong-score" data-side="cpu">{move || format!("CPU {}", game.with(|g| g.cpu_score))}</span>
            </div>
            <div
                class="pong-field"
                tabindex="0"
                node_ref=field_ref
                data-status=move || format!("{:?}", game.with(|g| g.status)).to_lowercase()
                on:keydown=on_keydown
                on:keyup=on_keyup
                on:touchmove=on_touchmove
                on:click=move |_| {
                    focus_field();
                    game.update(PongGame::start);
                }
            >
                <div class="pong-net" aria-hidden="true"></div>
                <div
                    class="pong-paddle"
                    data-side="player"
                    style=move || place(PADDLE_INSET, game.with(|g| g.player_y), PADDLE_WIDTH, PADDLE_HEIGHT)
                ></div>
                <div
                    class="pong-paddle"
                    data-side="cpu"
                    style=move || {
                        place(
                            FIELD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
                            game.with(|g| g.cpu_y),
                            PADDLE_WIDTH,
                            PADDLE_HEIGHT,
                        )
                    }
                ></div>
                <div
                    class="pong-ball"
                    style=move || game.with(|g| place(g.ball_x, g.ball_y, BALL_SIZE, BALL_SIZE))
                ></div>
            </div>
            <div class="pong-controls">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| {
                        focus_field();
                        game.update(PongGame::toggle);
                    })
                >
                    {move || if running.get() { "Pause" } else { "Start" }}
                </Button>
                <Button on_click=Callback::new(move |_| {
                    input.set_value(PaddleInput::default());
                    game.update(PongGame::reset);
                })>
                    "Reset"
                </Button>
            </div>
            <StatusBar>{status_text}</StatusBar>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_relative_to_field() {
        assert_eq!(
            place(0.0, 90.0, 120.0, 18.0),
            "left: 0.000%; top: 50.000%; width: 50.000%; height: 10.000%"
        );
    }
}
