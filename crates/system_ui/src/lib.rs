//! Platinum-styled UI primitives shared by the desktop shell and its content providers.
//!
//! Every primitive emits the stable `data-ui-*` attribute contract the site stylesheet keys
//! on. Content providers compose these instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, ProgressBar, RangeField, StatusBar, WindowControl, WindowControlButton,
};

/// Convenience imports for content-provider crates.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, ProgressBar, RangeField, StatusBar, WindowControl,
        WindowControlButton,
    };
}
