//! Application lifecycle: owns the main window and reacts to run-loop events.

use crate::config::ShellConfig;
use std::sync::{Mutex, MutexGuard};
use tauri::{AppHandle, Manager, RunEvent, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

pub const MAIN_WINDOW: &str = "main";

pub struct AppShell {
    config: ShellConfig,
    main_window: Mutex<Option<WebviewWindow>>,
}

impl AppShell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            main_window: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    fn slot(&self) -> MutexGuard<'_, Option<WebviewWindow>> {
        self.main_window.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Handle to the main window while it is alive.
    pub fn main_window(&self) -> Option<WebviewWindow> {
        self.slot().clone()
    }

    /// Create the main window, or focus it if it already exists.
    pub fn open_main_window(&self, app: &AppHandle) -> tauri::Result<WebviewWindow> {
        if let Some(window) = self.main_window() {
            let _ = window.set_focus();
            return Ok(window);
        }

        let config = &self.config;
        let builder = WebviewWindowBuilder::new(app, MAIN_WINDOW, self.start_url());
        #[cfg(desktop)]
        let builder = builder
            .title("PDF Shelf")
            .inner_size(config.window_width as f64, config.window_height as f64)
            .min_inner_size(config.min_width as f64, config.min_height as f64);
        let window = builder.build()?;

        #[cfg(debug_assertions)]
        if config.dev_mode {
            window.open_devtools();
        }

        log::info!("Main window created ({})", if config.dev_mode { "dev server" } else { "bundled assets" });
        *self.slot() = Some(window.clone());
        Ok(window)
    }

    /// Drop the handle once the window with `label` is destroyed.
    pub fn forget_window(&self, label: &str) {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|w| w.label() == label) {
            *slot = None;
            log::info!("Main window closed");
        }
    }

    fn start_url(&self) -> WebviewUrl {
        if self.config.dev_mode {
            match self.config.dev_url() {
                Ok(url) => return WebviewUrl::External(url),
                Err(e) => log::error!("Bad dev server URL, using bundled assets: {}", e),
            }
        }
        WebviewUrl::App("index.html".into())
    }
}

/// macOS apps stay alive with no windows open; everywhere else the last
/// window closing ends the process. An explicit exit code always exits.
fn keeps_running_without_windows(code: Option<i32>) -> bool {
    code.is_none() && cfg!(target_os = "macos")
}

pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        RunEvent::WindowEvent {
            label,
            event: tauri::WindowEvent::Destroyed,
            ..
        } => {
            app.state::<AppShell>().forget_window(&label);
        }
        RunEvent::ExitRequested { code, api, .. } => {
            if keeps_running_without_windows(code) {
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                if let Err(e) = app.state::<AppShell>().open_main_window(app) {
                    log::error!("Failed to reopen main window: {}", e);
                }
            }
        }
        _ => {}
    }
}
