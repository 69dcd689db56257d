//! Compare list state shared across the app.

use dioxus::prelude::*;
use guri_compare::{
    CompareConfig, CompareError, CompareList, ComparisonEntry, ListingId, StoreError, Toggled,
};
use tracing::debug;

use crate::storage::{browser_store, BrowserStore};

/// How loud a notice is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A dismissible message shown above the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Notice for a rejected add.
pub fn notice_for(error: &CompareError) -> Notice {
    match error {
        CompareError::CapacityExceeded { capacity } => Notice::warning(format!(
            "You can compare up to {} properties. Remove one to add another.",
            capacity
        )),
        CompareError::DuplicateEntry { .. } => {
            Notice::info("This property is already in your compare list.")
        }
        CompareError::InvalidPrice { .. } => {
            Notice::warning("This property has no valid price and can't be compared.")
        }
    }
}

/// Notice for a storage problem, if it is worth telling the visitor about.
pub fn storage_notice(error: &StoreError) -> Notice {
    if error.is_read_failure() {
        Notice::warning("Your saved comparison could not be restored.")
    } else {
        Notice::warning("Your compare list could not be saved and may be lost on reload.")
    }
}

/// Compare list handle, provided at the app root.
#[derive(Clone, Copy)]
pub struct CompareContext {
    list: Signal<CompareList<BrowserStore>>,
    /// Whether the floating widget is expanded
    pub is_open: Signal<bool>,
    pub notice: Signal<Option<Notice>>,
}

impl CompareContext {
    pub fn count(&self) -> usize {
        self.list.read().len()
    }

    pub fn is_full(&self) -> bool {
        self.list.read().is_full()
    }

    pub fn entries(&self) -> Vec<ComparisonEntry> {
        self.list.read().entries().to_vec()
    }

    pub fn is_in_compare(&self, id: &ListingId) -> bool {
        self.list.read().contains(id)
    }

    pub fn add(&self, entry: ComparisonEntry) {
        let mut list = self.list;
        let result = list.write().add(entry);
        match result {
            Ok(()) => {
                self.open();
                self.after_write();
            }
            Err(e) => self.report(notice_for(&e)),
        }
    }

    pub fn toggle(&self, entry: ComparisonEntry) {
        let mut list = self.list;
        let result = list.write().toggle(entry);
        match result {
            Ok(Toggled::Added) => {
                self.open();
                self.after_write();
            }
            Ok(Toggled::Removed) => self.after_write(),
            Err(e) => self.report(notice_for(&e)),
        }
    }

    pub fn remove(&self, id: &ListingId) {
        let mut list = self.list;
        let removed = list.write().remove(id);
        if removed {
            self.after_write();
        }
    }

    pub fn clear(&self) {
        let mut list = self.list;
        list.write().clear();
        self.close();
        self.after_write();
    }

    pub fn open(&self) {
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn close(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
    }

    pub fn toggle_open(&self) {
        let mut is_open = self.is_open;
        let current = *is_open.peek();
        is_open.set(!current);
    }

    pub fn report(&self, notice: Notice) {
        debug!(message = %notice.message, "showing notice");
        let mut slot = self.notice;
        slot.set(Some(notice));
    }

    pub fn dismiss_notice(&self) {
        let mut slot = self.notice;
        slot.set(None);
    }

    fn after_write(&self) {
        let warning = self.list.read().storage_error().map(storage_notice);
        if let Some(notice) = warning {
            self.report(notice);
        }
    }
}

/// Provide a compare context over `init()` to the components below the caller.
pub fn use_compare_provider(
    init: impl FnOnce() -> CompareList<BrowserStore>,
) -> CompareContext {
    let list = use_signal(init);
    let is_open = use_signal(|| false);
    let notice = use_signal(|| list.peek().storage_error().map(storage_notice));

    use_context_provider(|| CompareContext {
        list,
        is_open,
        notice,
    })
}

/// Hydrate the compare list from browser storage and provide it to `children`.
#[component]
pub fn CompareProvider(config: CompareConfig, children: Element) -> Element {
    use_compare_provider(|| CompareList::hydrate_with(browser_store(&config), &config));

    rsx! {
        {children}
    }
}

/// Get the compare context
pub fn use_compare() -> CompareContext {
    use_context::<CompareContext>()
}
