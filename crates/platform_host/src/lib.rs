//! Typed host-service contracts shared by the desktop runtime, its apps, and browser adapters.
//!
//! Concrete browser implementations live in `platform_host_web`. Everything here compiles on
//! the native target so state machines that depend on host services stay unit-testable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod storage;
pub mod time;

pub use clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService,
};
pub use storage::{
    load_json_with, save_json_with, KeyValueFuture, KeyValueStore, MemoryKeyValueStore,
    NoopKeyValueStore,
};
pub use time::{current_year, local_clock_now, local_date_string, unix_time_ms_now, LocalClock};
