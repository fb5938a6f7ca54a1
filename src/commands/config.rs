use crate::config::{SettingsState, SiteConfig};
use crate::error::Result;
use crate::logs::LoggerState;
use crate::validation::CounterThresholds;

#[tauri::command]
pub async fn load_config(settings: tauri::State<'_, SettingsState>) -> Result<SiteConfig> {
    Ok(settings.config.lock().await.clone())
}

#[tauri::command]
pub async fn save_settings(
    counter: Option<CounterThresholds>,
    log_retention: Option<usize>,
    settings: tauri::State<'_, SettingsState>,
    logger: tauri::State<'_, LoggerState>,
) -> Result<SiteConfig> {
    let config = SiteConfig::update(counter, log_retention)?;
    settings.replace(config.clone()).await;
    logger
        .log(
            "config",
            &format!(
                "counter {}/{}, keep {} sessions",
                config.counter.warn_at, config.counter.critical_at, config.log_retention
            ),
        )
        .await;
    Ok(config)
}
