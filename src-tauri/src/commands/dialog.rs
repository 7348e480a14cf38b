use crate::shell::AppShell;
use tauri::{command, AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, FilePath};
use tokio::sync::oneshot;

/// Map the picker's answer to a path string; cancel and unusable picks become `None`.
fn selection_path(folder: Option<FilePath>) -> Option<String> {
    let path = folder?.into_path().ok()?;
    Some(path.to_string_lossy().into_owned())
}

/// Open the native folder picker over the main window.
#[command]
pub async fn select_directory(app: AppHandle) -> Option<String> {
    let (tx, rx) = oneshot::channel();

    #[allow(unused_mut)]
    let mut picker = app.dialog().file();
    #[cfg(desktop)]
    if let Some(window) = app.state::<AppShell>().main_window() {
        picker = picker.set_parent(&window);
    }
    picker.pick_folder(move |folder| {
        let _ = tx.send(folder);
    });

    match rx.await {
        Ok(folder) => selection_path(folder),
        Err(_) => {
            log::warn!("Folder picker closed without answering");
            None
        }
    }
}
