use std::sync::Arc;
use tokio::sync::Mutex;

use crate::catalog;
use crate::error::{Result, SiteError};
use crate::logs::LoggerState;
use crate::modal::{CloseTrigger, ModalChange, ModalUiState, ModalUpdate, ModalView};

/// Managed state holding the page's single modal.
pub struct ModalState {
    pub ui: Arc<Mutex<ModalUiState>>,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            ui: Arc::new(Mutex::new(ModalUiState::new())),
        }
    }
}

#[tauri::command]
pub async fn get_modal_content(key: String) -> Result<ModalView> {
    let entry = catalog::get_content(&key)?;
    Ok(ModalView::from(entry))
}

#[tauri::command]
pub async fn open_modal(
    key: String,
    state: tauri::State<'_, ModalState>,
    logger: tauri::State<'_, LoggerState>,
) -> Result<ModalUpdate> {
    let result = state.ui.lock().await.show(catalog::catalog(), &key);
    match &result {
        Ok(_) => logger.log("modal", &format!("open {key}")).await,
        Err(SiteError::ContentNotFound(missing)) => logger.log("modal-miss", missing).await,
        Err(_) => {}
    }
    result
}

#[tauri::command]
pub async fn close_modal(
    trigger: CloseTrigger,
    state: tauri::State<'_, ModalState>,
    logger: tauri::State<'_, LoggerState>,
) -> Result<ModalUpdate> {
    let update = state.ui.lock().await.hide(trigger);
    if let Some(ModalChange::Closed { previous }) = &update.change {
        logger
            .log("modal", &format!("close {previous} ({trigger:?})"))
            .await;
    }
    Ok(update)
}

#[tauri::command]
pub async fn get_modal_state(state: tauri::State<'_, ModalState>) -> Result<ModalUiState> {
    Ok(state.ui.lock().await.clone())
}
