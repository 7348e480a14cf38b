mod bridge;
mod commands;
mod config;
mod error;
mod fs_service;
mod shell;

use config::ShellConfig;
use shell::AppShell;
use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = ShellConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to read configuration: {}. Using defaults.", e);
        ShellConfig::default()
    });

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let shell = app.state::<AppShell>();
            let config = shell.config();

            let mut log = tauri_plugin_log::Builder::default().level(config.log_level);
            if config.dev_mode {
                log = log.target(Target::new(TargetKind::Webview));
            }
            app.handle().plugin(log.build())?;

            shell.open_main_window(app.handle())?;
            Ok(())
        })
        .manage(AppShell::new(config))
        // Only these four are reachable from the webview; see capabilities/default.json.
        .invoke_handler(tauri::generate_handler![
            commands::select_directory,
            commands::list_pdf_files,
            commands::read_file,
            commands::file_exists,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(shell::handle_run_event);
}
