//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::model::{
    AppId, BootStage, ContainerBounds, ContentMount, DesktopState, DragSession, InteractionState,
    LayoutMode, Point, PointerKind, ResizeEdge, ResizeSession, WindowRecord,
};
use crate::window_manager::{
    centered_position, clamp_drag_position, clamp_resize_origin, drag_target, resize_geometry,
};

/// Sound played by window title-bar controls.
pub const CLICK_SOUND_URL: &str = "/sounds/click.wav";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window (or bring it back) and mount fresh content when it was closed.
    Open {
        /// Window to open.
        window_id: AppId,
    },
    /// Open a window by its string key; unknown keys are rejected.
    OpenByKey {
        /// Key as written in links or app commands.
        key: String,
    },
    /// Hide a window, drop its content, and reset its geometry.
    Close {
        /// Window to close.
        window_id: AppId,
    },
    /// Close the active window, if any.
    CloseTop,
    /// Hide a window without closing it.
    Minimize {
        /// Window to minimize.
        window_id: AppId,
    },
    /// Un-minimize and raise a window.
    Restore {
        /// Window to restore.
        window_id: AppId,
    },
    /// Flip the full-surface layout override.
    ToggleMaximize {
        /// Window to toggle.
        window_id: AppId,
    },
    /// Raise a window to the top of the stack.
    Focus {
        /// Window to focus.
        window_id: AppId,
    },
    /// Application-switcher behavior: open, restore, or focus as appropriate.
    Activate {
        /// Window to activate.
        window_id: AppId,
    },
    /// Center a window inside the desktop surface.
    Center {
        /// Window to place.
        window_id: AppId,
        /// Current desktop surface size.
        container: ContainerBounds,
    },
    /// Begin dragging a window by its title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: AppId,
        /// Pointer position at press.
        pointer: Point,
    },
    /// Pointer moved while a drag may be active.
    UpdateDrag {
        /// Current pointer position.
        pointer: Point,
        /// Desktop surface size, when the surface is still mounted.
        container: Option<ContainerBounds>,
    },
    /// Begin resizing a window from an edge or corner handle.
    BeginResize {
        /// Window being resized.
        window_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at press.
        pointer: Point,
        /// Device that pressed the handle.
        pointer_kind: PointerKind,
    },
    /// Pointer moved while a resize may be active.
    UpdateResize {
        /// Current pointer position.
        pointer: Point,
        /// Desktop surface size, when the surface is still mounted.
        container: Option<ContainerBounds>,
    },
    /// Pointer released or cancelled; ends any drag or resize.
    EndInteraction,
    /// Switch between desktop and full-screen mobile layout.
    SetLayout {
        /// New layout.
        layout: LayoutMode,
    },
    /// Advance the boot sequence.
    SetBootStage {
        /// Stage to show.
        stage: BootStage,
    },
    /// Close every window and power the desktop off.
    Shutdown,
    /// Leave the powered-off screen and restart the boot sequence.
    PowerOn,
    /// Toggle the system menu dropdown.
    ToggleSystemMenu,
    /// Close the system menu if open.
    CloseSystemMenu,
    /// Highlight a desktop icon, or clear the highlight.
    SelectIcon {
        /// Icon to highlight.
        icon: Option<AppId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Play a UI sound by asset URL.
    PlaySound(&'static str),
    /// Move keyboard focus into a window's content.
    FocusWindowContent(AppId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference something the registry does not know.
pub enum ReducerError {
    /// The target window is not in the registry.
    #[error("window not found: {0:?}")]
    WindowNotFound(AppId),
    /// The key does not name any application.
    #[error("unknown application key `{0}`")]
    UnknownApp(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a window or key the registry does not
/// contain. The state is left as it was before the failing step.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open { window_id } => {
            open_window(state, window_id)?;
            effects.push(RuntimeEffect::FocusWindowContent(window_id));
        }
        DesktopAction::OpenByKey { key } => {
            let window_id = AppId::from_key(&key).ok_or(ReducerError::UnknownApp(key))?;
            return reduce_desktop(state, interaction, DesktopAction::Open { window_id });
        }
        DesktopAction::Close { window_id } => {
            close_window(state, interaction, window_id)?;
            effects.push(RuntimeEffect::PlaySound(CLICK_SOUND_URL));
        }
        DesktopAction::CloseTop => {
            if let Some(window_id) = state.active_window() {
                close_window(state, interaction, window_id)?;
            }
        }
        DesktopAction::Minimize { window_id } => {
            find_window_mut(state, window_id)?.is_minimized = true;
            end_sessions_for(interaction, window_id);
            effects.push(RuntimeEffect::PlaySound(CLICK_SOUND_URL));
        }
        DesktopAction::Restore { window_id } => {
            focus_window(state, window_id)?;
            find_window_mut(state, window_id)?.is_minimized = false;
            effects.push(RuntimeEffect::FocusWindowContent(window_id));
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.is_maximized = !window.is_maximized;
            end_sessions_for(interaction, window_id);
            effects.push(RuntimeEffect::PlaySound(CLICK_SOUND_URL));
        }
        DesktopAction::Focus { window_id } => {
            focus_window(state, window_id)?;
        }
        DesktopAction::Activate { window_id } => {
            let window = find_window_mut(state, window_id)?;
            let next = if !window.is_open {
                DesktopAction::Open { window_id }
            } else if window.is_minimized {
                DesktopAction::Restore { window_id }
            } else {
                DesktopAction::Focus { window_id }
            };
            state.system_menu_open = false;
            return reduce_desktop(state, interaction, next);
        }
        DesktopAction::Center {
            window_id,
            container,
        } => {
            let window = find_window_mut(state, window_id)?;
            window.position = centered_position(window.size, container);
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            let layout = state.layout;
            let window = find_window_mut(state, window_id)?;
            if window.is_maximized || layout == LayoutMode::Mobile || !window.is_visible() {
                return Ok(effects);
            }
            let window_origin = window.position;
            focus_window(state, window_id)?;
            interaction.resizing = None;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_origin: pointer,
                window_origin,
            });
        }
        DesktopAction::UpdateDrag { pointer, container } => {
            let (Some(session), Some(container)) = (interaction.dragging.as_ref(), container)
            else {
                return Ok(effects);
            };
            let keep_visible = state.config.drag_keep_visible;
            let position = clamp_drag_position(drag_target(session, pointer), container, keep_visible);
            find_window_mut(state, session.window_id)?.position = position;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
            pointer_kind,
        } => {
            let layout = state.layout;
            let window = find_window_mut(state, window_id)?;
            if pointer_kind == PointerKind::Touch
                || layout == LayoutMode::Mobile
                || window.is_maximized
                || !window.is_visible()
            {
                return Ok(effects);
            }
            let session = ResizeSession {
                window_id,
                edge,
                pointer_origin: pointer,
                size_origin: window.size,
                position_origin: window.position,
            };
            focus_window(state, window_id)?;
            interaction.dragging = None;
            interaction.resizing = Some(session);
        }
        DesktopAction::UpdateResize { pointer, container } => {
            let Some(session) = interaction.resizing.as_ref() else {
                return Ok(effects);
            };
            if session.edge.moves_origin() && container.is_none() {
                return Ok(effects);
            }
            let min_size = state.config.min_window_size;
            let (mut position, mut size) = resize_geometry(session, pointer, min_size);
            if let Some(container) = container.filter(|_| session.edge.moves_origin()) {
                (position, size) = clamp_resize_origin(
                    session,
                    position,
                    size,
                    container,
                    state.config.drag_keep_visible,
                    min_size,
                );
            }
            let window = find_window_mut(state, session.window_id)?;
            window.position = position;
            window.size = size;
        }
        DesktopAction::EndInteraction => {
            interaction.dragging = None;
            interaction.resizing = None;
        }
        DesktopAction::SetLayout { layout } => {
            state.layout = layout;
            if layout == LayoutMode::Mobile {
                *interaction = InteractionState::default();
            }
        }
        DesktopAction::SetBootStage { stage } => {
            state.boot = stage;
        }
        DesktopAction::Shutdown => {
            let ids: Vec<AppId> = state.windows.iter().map(|w| w.id).collect();
            for window_id in ids {
                close_window(state, interaction, window_id)?;
                find_window_mut(state, window_id)?.is_minimized = false;
            }
            *interaction = InteractionState::default();
            state.boot = BootStage::ShutDown;
            state.system_menu_open = false;
            state.selected_icon = None;
        }
        DesktopAction::PowerOn => {
            if state.boot == BootStage::ShutDown {
                state.boot = BootStage::Off;
            }
        }
        DesktopAction::ToggleSystemMenu => {
            state.system_menu_open = !state.system_menu_open;
        }
        DesktopAction::CloseSystemMenu => {
            state.system_menu_open = false;
        }
        DesktopAction::SelectIcon { icon } => {
            state.selected_icon = icon;
        }
    }

    Ok(effects)
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: AppId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn next_z(state: &mut DesktopState) -> u64 {
    state.z_counter = state.z_counter.saturating_add(1);
    state.z_counter
}

fn focus_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    // Validate before drawing so a failed lookup leaves the counter alone.
    find_window_mut(state, window_id)?;
    let z = next_z(state);
    find_window_mut(state, window_id)?.z_order = z;
    Ok(())
}

fn open_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?;
    let z = next_z(state);
    let generation = state.next_generation;
    let window = find_window_mut(state, window_id)?;
    let remount = !window.is_open || window.content.is_none();
    window.is_open = true;
    window.is_minimized = false;
    window.z_order = z;
    if remount {
        window.content = Some(ContentMount {
            app_id: window_id,
            generation,
        });
        state.next_generation = generation.saturating_add(1);
    }
    state.selected_icon = None;
    Ok(())
}

fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: AppId,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.is_open = false;
    window.is_maximized = false;
    window.content = None;
    window.position = window.default_position;
    window.size = window.default_size;
    end_sessions_for(interaction, window_id);
    Ok(())
}

fn end_sessions_for(interaction: &mut InteractionState, window_id: AppId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|s| s.window_id == window_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|s| s.window_id == window_id)
    {
        interaction.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Size;

    const CONTAINER: ContainerBounds = ContainerBounds {
        width: 1000.0,
        height: 700.0,
    };

    fn apply(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action).expect("reduce");
    }

    fn window(state: &DesktopState, id: AppId) -> &WindowRecord {
        state.window(id).expect("window")
    }

    #[test]
    fn registry_declares_every_app_closed() {
        let state = DesktopState::default();
        assert_eq!(state.windows.len(), AppId::ALL.len());
        assert!(state.windows.iter().all(|w| !w.is_open && w.content.is_none()));
        assert_eq!(state.active_window(), None);
        assert_eq!(state.z_counter, 100);
    }

    #[test]
    fn open_raises_and_mounts_fresh_content() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut ui,
            DesktopAction::Open {
                window_id: AppId::Terminal,
            },
        )
        .expect("open");

        let terminal = window(&state, AppId::Terminal);
        assert!(terminal.is_open);
        assert_eq!(terminal.z_order, 101);
        assert_eq!(
            terminal.content,
            Some(ContentMount {
                app_id: AppId::Terminal,
                generation: 1
            })
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowContent(AppId::Terminal)]);

        // Re-opening an open window keeps its content instance.
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });
        assert_eq!(window(&state, AppId::Terminal).content.map(|c| c.generation), Some(1));

        apply(&mut state, &mut ui, DesktopAction::Close { window_id: AppId::Terminal });
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });
        assert_eq!(window(&state, AppId::Terminal).content.map(|c| c.generation), Some(2));
    }

    #[test]
    fn unknown_key_is_rejected_without_touching_state() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut ui,
            DesktopAction::OpenByKey {
                key: "finder".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::UnknownApp("finder".to_string()));
        assert_eq!(state, before);

        apply(&mut state, &mut ui, DesktopAction::OpenByKey { key: " Music-Player ".to_string() });
        assert!(window(&state, AppId::MusicPlayer).is_open);
    }

    #[test]
    fn missing_record_reports_window_not_found() {
        let mut state = DesktopState::default();
        state.windows.retain(|w| w.id != AppId::Pong);
        let mut ui = InteractionState::default();

        let err = reduce_desktop(&mut state, &mut ui, DesktopAction::Focus { window_id: AppId::Pong })
            .unwrap_err();
        assert_eq!(err, ReducerError::WindowNotFound(AppId::Pong));
        assert_eq!(state.z_counter, 100);
    }

    #[test]
    fn drag_is_clamped_to_container() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::ReadMe });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                window_id: AppId::ReadMe,
                pointer: Point::new(50.0, 40.0),
            },
        );

        let moves = [
            (Point::new(-500.0, -500.0), Point::new(0.0, 0.0)),
            (Point::new(5000.0, 5000.0), Point::new(900.0, 650.0)),
            (Point::new(250.0, 140.0), Point::new(230.0, 130.0)),
        ];
        for (pointer, expected) in moves {
            apply(
                &mut state,
                &mut ui,
                DesktopAction::UpdateDrag {
                    pointer,
                    container: Some(CONTAINER),
                },
            );
            let position = window(&state, AppId::ReadMe).position;
            assert_eq!(position, expected);
            assert!((0.0..=900.0).contains(&position.x));
            assert!((0.0..=650.0).contains(&position.y));
        }

        apply(&mut state, &mut ui, DesktopAction::EndInteraction);
        assert_eq!(ui, InteractionState::default());
    }

    #[test]
    fn drag_without_container_is_skipped() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::ReadMe });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                window_id: AppId::ReadMe,
                pointer: Point::new(0.0, 0.0),
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: Point::new(80.0, 80.0),
                container: None,
            },
        );
        assert_eq!(window(&state, AppId::ReadMe).position, Point::new(30.0, 30.0));
        assert!(ui.dragging.is_some());
    }

    #[test]
    fn drag_refused_when_maximized_or_mobile() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });
        apply(&mut state, &mut ui, DesktopAction::ToggleMaximize { window_id: AppId::Terminal });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                window_id: AppId::Terminal,
                pointer: Point::new(1.0, 1.0),
            },
        );
        assert_eq!(ui.dragging, None);

        apply(&mut state, &mut ui, DesktopAction::ToggleMaximize { window_id: AppId::Terminal });
        apply(&mut state, &mut ui, DesktopAction::SetLayout { layout: LayoutMode::Mobile });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                window_id: AppId::Terminal,
                pointer: Point::new(1.0, 1.0),
            },
        );
        assert_eq!(ui.dragging, None);
    }

    #[test]
    fn resize_never_goes_below_minimum() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::MusicPlayer });

        for edge in ResizeEdge::ALL {
            apply(
                &mut state,
                &mut ui,
                DesktopAction::BeginResize {
                    window_id: AppId::MusicPlayer,
                    edge,
                    pointer: Point::new(300.0, 300.0),
                    pointer_kind: PointerKind::Mouse,
                },
            );
            for pointer in [
                Point::new(-2000.0, -2000.0),
                Point::new(2000.0, 2000.0),
                Point::new(310.0, 290.0),
            ] {
                apply(
                    &mut state,
                    &mut ui,
                    DesktopAction::UpdateResize {
                        pointer,
                        container: Some(CONTAINER),
                    },
                );
                let size = window(&state, AppId::MusicPlayer).size;
                assert!(size.width >= 300.0, "{edge:?} width {}", size.width);
                assert!(size.height >= 200.0, "{edge:?} height {}", size.height);
            }
            apply(&mut state, &mut ui, DesktopAction::EndInteraction);
        }
    }

    #[test]
    fn west_resize_past_container_keeps_right_edge() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });
        let start = window(&state, AppId::Terminal).clone();
        assert_eq!((start.position.x, start.size.width), (60.0, 500.0));

        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginResize {
                window_id: AppId::Terminal,
                edge: ResizeEdge::West,
                pointer: Point::new(60.0, 200.0),
                pointer_kind: PointerKind::Mouse,
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateResize {
                pointer: Point::new(-40.0, 200.0),
                container: Some(CONTAINER),
            },
        );

        let resized = window(&state, AppId::Terminal);
        assert_eq!(resized.position, Point::new(0.0, start.position.y));
        assert_eq!(resized.size.width, 560.0);
        assert_eq!(resized.position.x + resized.size.width, 560.0);
        assert_eq!(resized.size.height, start.size.height);
    }

    #[test]
    fn resize_refused_for_touch_pointers() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Trash });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginResize {
                window_id: AppId::Trash,
                edge: ResizeEdge::SouthEast,
                pointer: Point::new(0.0, 0.0),
                pointer_kind: PointerKind::Touch,
            },
        );
        assert_eq!(ui.resizing, None);
    }

    #[test]
    fn single_active_window_and_increasing_counter() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        for id in [AppId::ReadMe, AppId::Terminal, AppId::Calculator] {
            apply(&mut state, &mut ui, DesktopAction::Open { window_id: id });
        }

        let sequence = [
            AppId::ReadMe,
            AppId::ReadMe,
            AppId::Calculator,
            AppId::Terminal,
            AppId::Terminal,
        ];
        let mut last_counter = state.z_counter;
        for id in sequence {
            apply(&mut state, &mut ui, DesktopAction::Focus { window_id: id });
            assert!(state.z_counter > last_counter);
            last_counter = state.z_counter;

            assert_eq!(state.active_window(), Some(id));
            let top = window(&state, id).z_order;
            let holders = state
                .windows
                .iter()
                .filter(|w| w.is_visible() && w.z_order == top)
                .count();
            assert_eq!(holders, 1);
        }

        apply(&mut state, &mut ui, DesktopAction::Minimize { window_id: AppId::Terminal });
        assert_eq!(state.active_window(), Some(AppId::Calculator));
        apply(&mut state, &mut ui, DesktopAction::Restore { window_id: AppId::Terminal });
        assert_eq!(state.active_window(), Some(AppId::Terminal));
    }

    #[test]
    fn close_resets_geometry() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                window_id: AppId::Terminal,
                pointer: Point::new(100.0, 100.0),
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: Point::new(300.0, 250.0),
                container: Some(CONTAINER),
            },
        );
        apply(&mut state, &mut ui, DesktopAction::EndInteraction);
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginResize {
                window_id: AppId::Terminal,
                edge: ResizeEdge::SouthEast,
                pointer: Point::new(0.0, 0.0),
                pointer_kind: PointerKind::Mouse,
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateResize {
                pointer: Point::new(120.0, 80.0),
                container: Some(CONTAINER),
            },
        );
        apply(&mut state, &mut ui, DesktopAction::EndInteraction);

        let moved = window(&state, AppId::Terminal);
        assert_eq!(moved.position, Point::new(260.0, 210.0));
        assert_eq!(moved.size, Size::new(620.0, 430.0));

        apply(&mut state, &mut ui, DesktopAction::Close { window_id: AppId::Terminal });
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Terminal });

        let reopened = window(&state, AppId::Terminal);
        assert_eq!(reopened.position, AppId::Terminal.default_position());
        assert_eq!(reopened.size, AppId::Terminal.default_size());
        assert!(!reopened.is_maximized);
    }

    #[test]
    fn maximize_keeps_stored_geometry() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Pong });
        let before = window(&state, AppId::Pong).clone();

        apply(&mut state, &mut ui, DesktopAction::ToggleMaximize { window_id: AppId::Pong });
        assert!(window(&state, AppId::Pong).is_maximized);
        apply(&mut state, &mut ui, DesktopAction::ToggleMaximize { window_id: AppId::Pong });

        let after = window(&state, AppId::Pong);
        assert!(!after.is_maximized);
        assert_eq!((after.position, after.size), (before.position, before.size));
    }

    #[test]
    fn activate_opens_restores_then_focuses() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();

        apply(&mut state, &mut ui, DesktopAction::Activate { window_id: AppId::Trash });
        assert!(window(&state, AppId::Trash).is_open);

        apply(&mut state, &mut ui, DesktopAction::Minimize { window_id: AppId::Trash });
        apply(&mut state, &mut ui, DesktopAction::Activate { window_id: AppId::Trash });
        assert!(window(&state, AppId::Trash).is_visible());

        let generation = window(&state, AppId::Trash).content.map(|c| c.generation);
        apply(&mut state, &mut ui, DesktopAction::Activate { window_id: AppId::Trash });
        assert_eq!(window(&state, AppId::Trash).content.map(|c| c.generation), generation);
        assert_eq!(state.active_window(), Some(AppId::Trash));
    }

    #[test]
    fn close_top_closes_only_the_active_window() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::ReadMe });
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Calculator });

        apply(&mut state, &mut ui, DesktopAction::CloseTop);
        assert!(!window(&state, AppId::Calculator).is_open);
        assert!(window(&state, AppId::ReadMe).is_open);

        apply(&mut state, &mut ui, DesktopAction::CloseTop);
        apply(&mut state, &mut ui, DesktopAction::CloseTop);
        assert_eq!(state.open_window_count(), 0);
    }

    #[test]
    fn center_places_window_in_container() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(
            &mut state,
            &mut ui,
            DesktopAction::Center {
                window_id: AppId::ReadMe,
                container: CONTAINER,
            },
        );
        assert_eq!(window(&state, AppId::ReadMe).position, Point::new(220.0, 140.0));
    }

    #[test]
    fn shutdown_closes_everything_and_power_on_restarts_boot() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::SetBootStage { stage: BootStage::Desktop });
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::ReadMe });
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::Pong });
        apply(&mut state, &mut ui, DesktopAction::Minimize { window_id: AppId::Pong });
        apply(&mut state, &mut ui, DesktopAction::ToggleSystemMenu);

        apply(&mut state, &mut ui, DesktopAction::Shutdown);
        assert_eq!(state.boot, BootStage::ShutDown);
        assert_eq!(state.open_window_count(), 0);
        assert!(state
            .windows
            .iter()
            .all(|w| !w.is_minimized && !w.is_maximized && w.content.is_none()));
        assert!(!state.system_menu_open);

        apply(&mut state, &mut ui, DesktopAction::PowerOn);
        assert_eq!(state.boot, BootStage::Off);
    }

    #[test]
    fn title_bar_controls_request_click_sound() {
        let mut state = DesktopState::default();
        let mut ui = InteractionState::default();
        apply(&mut state, &mut ui, DesktopAction::Open { window_id: AppId::ReadMe });
        for action in [
            DesktopAction::ToggleMaximize { window_id: AppId::ReadMe },
            DesktopAction::Minimize { window_id: AppId::ReadMe },
            DesktopAction::Close { window_id: AppId::ReadMe },
        ] {
            let effects = reduce_desktop(&mut state, &mut ui, action).expect("reduce");
            assert_eq!(effects, vec![RuntimeEffect::PlaySound(CLICK_SOUND_URL)]);
        }
    }
}
