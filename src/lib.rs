pub mod catalog;
pub mod config;
pub mod error;
pub mod logs;
pub mod modal;
pub mod util;
pub mod validation;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .manage(commands::modal::ModalState::default())
        .manage(logs::LoggerState::default())
        .manage(config::SettingsState::new(config::SiteConfig::load()))
        .setup(|app| {
            // Start the session log in the background; the page works without it.
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let Some(logs_dir) = config::data_dir().map(|d| d.join("logs")) else {
                    return;
                };
                let retention = handle.state::<config::SettingsState>().log_retention().await;
                let logger = logs::SessionLogger::new(&logs_dir, retention).await;
                let state = handle.state::<logs::LoggerState>();
                *state.logger.lock().await = logger;
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::forms::validate_field,
            commands::forms::validate_form,
            commands::forms::character_count,
            commands::forms::service_details_visible,
            commands::modal::get_modal_content,
            commands::modal::open_modal,
            commands::modal::close_modal,
            commands::modal::get_modal_state,
            commands::config::load_config,
            commands::config::save_settings,
        ])
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                if let Some(state) = window.try_state::<logs::LoggerState>() {
                    tauri::async_runtime::block_on(state.inner().shutdown());
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("failed to run Grim Reaper & Co");
}
