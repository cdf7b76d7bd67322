//! Trash contents and their persistence.

use platform_host::{load_json_with, save_json_with, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Storage key holding the JSON-encoded item list.
pub const TRASH_STORAGE_KEY: &str = "cruz-os-trash-items";

/// One deleted file as shown in the trash listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashItem {
    /// File or folder name.
    pub name: String,
    /// Display size, `--` for folders.
    pub size: String,
    /// Display date of deletion.
    pub date: String,
}

impl TrashItem {
    fn new(name: &str, size: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            size: size.to_string(),
            date: date.to_string(),
        }
    }

    /// Whether the entry should render with a folder glyph.
    pub fn is_folder(&self) -> bool {
        self.name.contains("folder") || self.size.contains("folder")
    }
}

/// Contents of a trash that has never been persisted.
pub fn default_items() -> Vec<TrashItem> {
    vec![
        TrashItem::new("old_resume_v1.doc", "24 KB", "Jan 15, 2024"),
        TrashItem::new("portfolio_raw_html_version", "-- folder", "Mar 8, 2024"),
        TrashItem::new("screenshot_2024.png", "156 KB", "Feb 22, 2024"),
        TrashItem::new("notes_backup.txt", "2 KB", "Dec 3, 2023"),
        TrashItem::new("test_file.js", "1 KB", "Apr 1, 2024"),
    ]
}

/// Reads the persisted list.
///
/// A missing key yields [`default_items`]; so does an entry that fails to decode, after a
/// warning is logged.
pub async fn load_items<S: KeyValueStore + ?Sized>(store: &S) -> Vec<TrashItem> {
    match load_json_with::<_, Vec<TrashItem>>(store, TRASH_STORAGE_KEY).await {
        Ok(Some(items)) => items,
        Ok(None) => default_items(),
        Err(err) => {
            leptos::logging::warn!("trash load failed: {err}");
            default_items()
        }
    }
}

/// Writes the full list, replacing whatever was stored.
///
/// # Errors
///
/// Returns the store's error message when encoding or the write fails.
pub async fn save_items<S: KeyValueStore + ?Sized>(
    store: &S,
    items: &[TrashItem],
) -> Result<(), String> {
    save_json_with(store, TRASH_STORAGE_KEY, items).await
}

/// In-window trash state: the listing plus the emptying animation flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrashBin {
    items: Vec<TrashItem>,
    loaded: bool,
    emptying: bool,
}

impl TrashBin {
    pub(crate) fn items(&self) -> &[TrashItem] {
        &self.items
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn is_emptying(&self) -> bool {
        self.emptying
    }

    pub(crate) fn finish_load(&mut self, items: Vec<TrashItem>) {
        self.items = items;
        self.loaded = true;
    }

    pub(crate) fn can_empty(&self) -> bool {
        !self.items.is_empty() && !self.emptying
    }

    /// Returns `false` when there is nothing to do.
    pub(crate) fn begin_emptying(&mut self) -> bool {
        if !self.can_empty() {
            return false;
        }
        self.emptying = true;
        true
    }

    /// Removes the last item; returns whether the emptying run is still going.
    pub(crate) fn step_emptying(&mut self) -> bool {
        if !self.emptying {
            return false;
        }
        self.items.pop();
        if self.items.is_empty() {
            self.emptying = false;
        }
        self.emptying
    }

    pub(crate) fn summary(&self) -> String {
        match self.items.len() {
            0 => "Trash is empty".to_string(),
            1 => "1 item in Trash".to_string(),
            n => format!("{n} items in Trash"),
        }
    }

    pub(crate) fn footer(&self) -> &'static str {
        if self.items.is_empty() {
            "Trash has been emptied"
        } else {
            "Click \"Empty Trash\" to permanently delete all items"
        }
    }
}
