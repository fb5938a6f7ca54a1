//! Lifecycle of the site's single detail modal.
//!
//! The state is a plain value owned by whoever composes the UI (the desktop
//! shell keeps it in managed state). Transitions return a [`ModalChange`]
//! describing what the page has to do: show, swap or hide the modal and
//! suspend or resume background scrolling.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ModalContentEntry};
use crate::error::Result;

/// What the page should do with background scrolling after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollLock {
    Suspend,
    Keep,
    Resume,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "change")]
pub enum ModalChange {
    Opened { key: String },
    /// Content swapped while the modal stayed visible.
    Replaced { previous: String, key: String },
    Closed { previous: String },
}

impl ModalChange {
    pub fn scroll(&self) -> ScrollLock {
        match self {
            ModalChange::Opened { .. } => ScrollLock::Suspend,
            ModalChange::Replaced { .. } => ScrollLock::Keep,
            ModalChange::Closed { .. } => ScrollLock::Resume,
        }
    }
}

/// The three ways a visitor can dismiss the modal. All of them close it the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseTrigger {
    CloseButton,
    Overlay,
    Escape,
}

/// Content ready to drop into `#modalTitle` / `#modalBody`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub key: String,
    pub title: String,
    pub html: String,
}

impl From<&ModalContentEntry> for ModalView {
    fn from(entry: &ModalContentEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            title: entry.title.to_string(),
            html: entry.to_html(),
        }
    }
}

/// Everything the page needs after a transition: what changed, what to show,
/// what to do with scrolling, and the resulting state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalUpdate {
    pub change: Option<ModalChange>,
    pub scroll: ScrollLock,
    pub view: Option<ModalView>,
    pub state: ModalUiState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalUiState {
    is_open: bool,
    active_key: Option<String>,
}

impl ModalUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    /// Show the content for `key`.
    ///
    /// An unknown key leaves the state untouched and returns
    /// `ContentNotFound`. Opening while already open swaps the content
    /// directly, without passing through the closed state.
    pub fn open(
        &mut self,
        catalog: &Catalog,
        key: &str,
    ) -> Result<(ModalChange, &'static ModalContentEntry)> {
        let entry = catalog.get(key)?;

        let change = match self.active_key.take() {
            Some(previous) if self.is_open => ModalChange::Replaced {
                previous,
                key: key.to_string(),
            },
            _ => ModalChange::Opened {
                key: key.to_string(),
            },
        };

        self.is_open = true;
        self.active_key = Some(key.to_string());
        Ok((change, entry))
    }

    /// Hide the modal. Returns `None` if it was already closed.
    pub fn close(&mut self) -> Option<ModalChange> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        let previous = self.active_key.take().unwrap_or_default();
        Some(ModalChange::Closed { previous })
    }

    pub fn dismiss(&mut self, trigger: CloseTrigger) -> Option<ModalChange> {
        match trigger {
            CloseTrigger::CloseButton | CloseTrigger::Overlay | CloseTrigger::Escape => {
                self.close()
            }
        }
    }

    /// [`open`](Self::open), packaged for the page.
    pub fn show(&mut self, catalog: &Catalog, key: &str) -> Result<ModalUpdate> {
        let (change, entry) = self.open(catalog, key)?;
        Ok(ModalUpdate {
            scroll: change.scroll(),
            change: Some(change),
            view: Some(ModalView::from(entry)),
            state: self.clone(),
        })
    }

    /// [`dismiss`](Self::dismiss), packaged for the page. Dismissing a closed
    /// modal reports no change and leaves scrolling as it is.
    pub fn hide(&mut self, trigger: CloseTrigger) -> ModalUpdate {
        let change = self.dismiss(trigger);
        ModalUpdate {
            scroll: change.as_ref().map_or(ScrollLock::Keep, ModalChange::scroll),
            change,
            view: None,
            state: self.clone(),
        }
    }
}
