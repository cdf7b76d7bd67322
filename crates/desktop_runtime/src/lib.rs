//! Retro desktop window manager: registry, stacking, drag/resize, and the Leptos shell.
//!
//! All window semantics live in the pure [`reducer`]; [`components`] renders state and turns DOM
//! events into [`DesktopAction`] values.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::{parse_open_keys, DesktopHostContext};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
