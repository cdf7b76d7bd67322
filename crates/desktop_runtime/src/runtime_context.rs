//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the boot
//! orchestration. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    host::{self, DesktopHostContext},
    model::{ContainerBounds, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Desktop surface windows are positioned in; bound by the shell.
    pub surface: NodeRef<html::Div>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the reducer container around `host` with default desktop state.
    pub(crate) fn new(host: DesktopHostContext) -> Self {
        let host = store_value(host);
        let state = create_rw_signal(DesktopState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let surface = create_node_ref::<html::Div>();

        let dispatch = Callback::new(move |action: DesktopAction| {
            let mut desktop = state.get_untracked();
            let mut ui = interaction.get_untracked();
            let previous_desktop = desktop.clone();
            let previous_ui = ui.clone();

            match reduce_desktop(&mut desktop, &mut ui, action) {
                Ok(new_effects) => {
                    if desktop != previous_desktop {
                        state.set(desktop);
                    }
                    if ui != previous_ui {
                        interaction.set(ui);
                    }
                    if !new_effects.is_empty() {
                        let mut queue = effects.get_untracked();
                        queue.extend(new_effects);
                        effects.set(queue);
                    }
                }
                Err(err) => logging::warn!("desktop reducer error: {err}"),
            }
        });

        Self {
            host,
            state,
            interaction,
            effects,
            surface,
            dispatch,
        }
    }

    /// Current size of the desktop surface, or `None` while it is not mounted.
    pub fn surface_bounds(&self) -> Option<ContainerBounds> {
        let surface = self.surface.get_untracked()?;
        let rect = surface.get_bounding_client_rect();
        Some(ContainerBounds {
            width: rect.width(),
            height: rect.height(),
        })
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and runs the boot sequence.
pub fn DesktopProvider(
    /// Host services; defaults to the browser implementations.
    #[prop(optional)]
    host_services: Option<DesktopHostContext>,
    /// App keys to open once the desktop has booted (from the `?open=` deep link).
    #[prop(optional)]
    open_on_boot: Vec<String>,
    /// Gate for the power-on sequence, typically "scrolled into view"; always open when unset.
    #[prop(optional, into)]
    revealed: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let runtime = DesktopRuntimeContext::new(host_services.unwrap_or_default());

    provide_context(runtime);

    effect_executor::install(runtime);
    let revealed = revealed.unwrap_or_else(|| Signal::derive(|| true));
    host::install_boot_sequence(runtime, open_on_boot, revealed);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;

    #[test]
    fn surface_bounds_absent_until_mounted() {
        let _ = leptos::create_runtime();
        let runtime = DesktopRuntimeContext::new(DesktopHostContext::in_memory());
        assert_eq!(runtime.surface_bounds(), None);
    }

    #[test]
    fn dispatch_commits_state_and_queues_effects() {
        let _ = leptos::create_runtime();
        let runtime = DesktopRuntimeContext::new(DesktopHostContext::in_memory());

        runtime.dispatch_action(DesktopAction::Open {
            window_id: AppId::Terminal,
        });

        let active = runtime.state.with_untracked(DesktopState::active_window);
        assert_eq!(active, Some(AppId::Terminal));
        assert!(!runtime.effects.with_untracked(Vec::is_empty));
    }
}
