//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On native targets every adapter degrades to an inert implementation so dependent crates keep
//! compiling and testing without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod clipboard;
pub mod reveal;
pub mod storage;
pub mod viewport;

pub use audio::play_ui_sound;
pub use clipboard::WebClipboardService;
pub use reveal::{observe_reveal, RevealObserver, REVEAL_THRESHOLD};
pub use storage::WebKeyValueStore;
pub use viewport::{viewport_width, MOBILE_BREAKPOINT_PX};
