//! Monkey Explorer Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use tauri::Manager;

mod config;
mod domain;
mod repository;
mod commands;

use config::AppConfig;
use repository::{init_db, MonkeyRepository};

/// Application state shared across commands
pub struct AppState {
    pub monkey_repo: MonkeyRepository,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::resolve(app.handle())?;
            rolling_logger::init_logger(&config.log_dir, &config.log_prefix)?;
            log::info!("app setup starting, db at {}", config.db_path.display());

            let db_state = init_db(&config.db_path)?;
            app.manage(AppState {
                monkey_repo: MonkeyRepository::new(db_state.conn),
            });

            log::info!("state managed, app ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_monkeys,
            commands::get_monkey,
            commands::create_monkey,
            commands::update_monkey,
            commands::delete_monkey,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
