use crate::bridge::{FileReadResult, PdfFileEntry};
use crate::fs_service;
use std::path::Path;
use tauri::command;

#[command]
pub async fn list_pdf_files(dir_path: String) -> Vec<PdfFileEntry> {
    match fs_service::list_pdf_files(Path::new(&dir_path)).await {
        Ok(files) => {
            log::debug!("Found {} PDF files in {}", files.len(), dir_path);
            files
        }
        Err(e) => {
            log::error!("Error reading directory: {}", e);
            Vec::new()
        }
    }
}

#[command]
pub async fn read_file(file_path: String) -> FileReadResult {
    let path = Path::new(&file_path);
    match fs_service::read_file(path).await {
        Ok(data) => FileReadResult::success(data, path),
        Err(e) => {
            log::warn!("Error reading PDF file: {}", e);
            FileReadResult::failure(e)
        }
    }
}

#[command]
pub async fn file_exists(file_path: String) -> bool {
    fs_service::file_exists(Path::new(&file_path)).await
}
