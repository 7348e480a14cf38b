fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new().app_manifest(tauri_build::AppManifest::new().commands(&[
            "select_directory",
            "list_pdf_files",
            "read_file",
            "file_exists",
        ])),
    )
    .expect("failed to run tauri-build");
}
