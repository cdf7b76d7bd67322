//! Media player with a fixed playlist and simulated playback.

mod player;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use player::{format_time, PlayerState};
use system_ui::prelude::*;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Mounts the media player into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <MusicPlayerApp context /> }.into_view()
}

#[component]
/// Media player window body.
pub fn MusicPlayerApp(context: AppMountContext) -> impl IntoView {
    let player = create_rw_signal(PlayerState::default());
    let visible = context.visible;
    let ticker = store_value::<Option<IntervalHandle>>(None);

    create_effect(move |_| {
        if !visible.get() {
            player.update(PlayerState::pause);
        }
    });

    let playing = create_memo(move |_| player.with(PlayerState::is_playing));
    create_effect(move |_| {
        let should_tick = visible.get() && playing.get();
        ticker.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
            if !should_tick {
                return;
            }
            match set_interval_with_handle(move || player.update(|p| p.tick(1)), TICK_INTERVAL) {
                Ok(handle) => *slot = Some(handle),
                Err(err) => logging::warn!("music player tick failed to start: {err:?}"),
            }
        });
    });

    on_cleanup(move || {
        ticker.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    let now_playing = move || player.with(|p| p.current_track());
    let playlist = player.with_untracked(PlayerState::playlist);

    view! {
        <div class="app-music-player">
            <div class="music-display" aria-live="polite">
                <div class="music-display-label">"NOW PLAYING"</div>
                <div class="music-title">{move || now_playing().map(|t| t.title).unwrap_or("-")}</div>
                <div class="music-artist">{move || now_playing().map(|t| t.artist).unwrap_or("")}</div>
                <div class="music-time">
                    {move || {
                        player.with(|p| {
                            let total = p.current_track().map(|t| t.duration_secs).unwrap_or(0);
                            format!("{} / {}", format_time(p.position_secs()), format_time(total))
                        })
                    }}
                </div>
            </div>

            <ProgressBar
                layout_class="music-progress"
                percent=Signal::derive(move || player.with(PlayerState::progress_percent))
                on_seek=Callback::new(move |percent| player.update(|p| p.seek_percent(percent)))
            />

            <div class="music-controls" role="group" aria-label="Playback controls">
                <Button aria_label="Previous track" on_click=Callback::new(move |_| player.update(PlayerState::previous))>
                    "⏮"
                </Button>
                <Button aria_label="Stop" on_click=Callback::new(move |_| player.update(PlayerState::stop))>
                    "⏹"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    aria_label=Signal::derive(move || {
                        if player.with(PlayerState::is_playing) { "Pause" } else { "Play" }.to_string()
                    })
                    pressed=Signal::derive(move || player.with(PlayerState::is_playing))
                    on_click=Callback::new(move |_| player.update(PlayerState::toggle_play))
                >
                    {move || if player.with(PlayerState::is_playing) { "⏸" } else { "▶" }}
                </Button>
                <Button aria_label="Next track" on_click=Callback::new(move |_| player.update(PlayerState::next))>
                    "⏭"
                </Button>
                <Button
                    layout_class="music-repeat"
                    title=Signal::derive(move || player.with(|p| p.repeat().label().to_string()))
                    on_click=Callback::new(move |_| player.update(PlayerState::cycle_repeat))
                >
                    {move || player.with(|p| p.repeat().label())}
                </Button>
            </div>

            <div class="music-volume">
                <span aria-hidden="true">"🔈"</span>
                <RangeField
                    aria_label="Volume"
                    value=Signal::derive(move || f64::from(player.with(PlayerState::volume)))
                    on_input=Callback::new(move |volume| player.update(|p| p.set_volume(volume)))
                />
                <span aria-hidden="true">"🔊"</span>
            </div>

            <div class="music-playlist" role="listbox" aria-label="Playlist">
                {playlist
                    .iter()
                    .enumerate()
                    .map(|(index, track)| {
                        let selected = move || player.with(|p| p.current_index() == index);
                        view! {
                            <div
                                class="music-playlist-item"
                                role="option"
                                aria-selected=move || selected().to_string()
                                data-selected=move || selected().to_string()
                                on:click=move |_| player.update(|p| p.select(index))
                            >
                                <span class="music-playlist-title">{track.title}</span>
                                <span class="music-playlist-duration">{format_time(track.duration_secs)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <StatusBar>
                {move || {
                    player.with(|p| {
                        let state = if p.is_playing() { "▶ Playing" } else { "⏹ Stopped" };
                        format!("{state} | Volume: {}%", p.volume())
                    })
                }}
            </StatusBar>
        </div>
    }
}
