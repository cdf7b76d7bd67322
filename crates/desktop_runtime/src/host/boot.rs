use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::{
    model::{AppId, BootStage},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

/// Whether the power-on sequence should start: the machine is off and the desktop has been
/// scrolled into view at least once.
fn should_start_boot(stage: BootStage, revealed: bool) -> bool {
    stage == BootStage::Off && revealed
}

/// Drives the power-on sequence whenever the desktop reaches [`BootStage::Off`] while
/// `revealed` reads `true`.
///
/// Happy-face and loading screens are timed from the start of the sequence; the ReadMe opens
/// centered shortly after the desktop appears, followed by any deep-linked apps (first boot
/// only).
pub(crate) fn install_boot_sequence(
    runtime: DesktopRuntimeContext,
    open_on_boot: Vec<String>,
    revealed: Signal<bool>,
) {
    let timers = store_value(Vec::<TimeoutHandle>::new());
    let deep_link = store_value(Some(open_on_boot));

    let clear_timers = move || {
        timers.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    };
    on_cleanup(clear_timers);

    let stage = create_memo(move |_| runtime.state.with(|state| state.boot));

    create_effect(move |_| {
        if !should_start_boot(stage.get(), revealed.get()) {
            return;
        }
        clear_timers();

        let config = runtime.state.with_untracked(|state| state.config.clone());
        runtime.dispatch_action(DesktopAction::SetBootStage {
            stage: BootStage::Happy,
        });

        schedule(timers, config.loading_stage_delay_ms, move || {
            runtime.dispatch_action(DesktopAction::SetBootStage {
                stage: BootStage::Loading,
            });
        });
        schedule(timers, config.desktop_stage_delay_ms, move || {
            runtime.dispatch_action(DesktopAction::SetBootStage {
                stage: BootStage::Desktop,
            });
        });
        schedule(
            timers,
            config.desktop_stage_delay_ms + config.readme_auto_open_delay_ms,
            move || {
                if let Some(container) = runtime.surface_bounds() {
                    runtime.dispatch_action(DesktopAction::Center {
                        window_id: AppId::ReadMe,
                        container,
                    });
                }
                runtime.dispatch_action(DesktopAction::Open {
                    window_id: AppId::ReadMe,
                });
                let keys = deep_link.try_update_value(Option::take).flatten();
                for key in keys.unwrap_or_default() {
                    runtime.dispatch_action(DesktopAction::OpenByKey { key });
                }
            },
        );
    });
}

fn schedule(
    timers: StoredValue<Vec<TimeoutHandle>>,
    delay_ms: u64,
    step: impl FnOnce() + 'static,
) {
    match set_timeout_with_handle(step, Duration::from_millis(delay_ms)) {
        Ok(handle) => timers.update_value(|handles| handles.push(handle)),
        Err(err) => logging::warn!("boot timer failed: {err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_waits_for_reveal_and_power_off() {
        assert!(!should_start_boot(BootStage::Off, false));
        assert!(should_start_boot(BootStage::Off, true));
        for stage in [
            BootStage::Happy,
            BootStage::Loading,
            BootStage::Desktop,
            BootStage::ShutDown,
        ] {
            assert!(!should_start_boot(stage, true), "{stage:?}");
        }
    }
}
