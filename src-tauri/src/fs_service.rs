use crate::bridge::PdfFileEntry;
use crate::error::AppError;
use std::path::Path;

/// Return the extension with its leading dot if it is `pdf` in any case.
fn pdf_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("pdf") {
        Some(format!(".{}", ext))
    } else {
        None
    }
}

/// List the regular PDF files directly inside `dir`.
///
/// Symlinks are followed, so a link to a PDF counts and a link to a
/// directory does not. Any failure aborts the whole listing; entries
/// collected so far are dropped. Order is whatever `read_dir` yields.
pub async fn list_pdf_files(dir: &Path) -> Result<Vec<PdfFileEntry>, AppError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| AppError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut pdf_files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| AppError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?
    {
        let path = entry.path();
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|source| AppError::Metadata {
                path: path.clone(),
                source,
            })?;

        if !metadata.is_file() {
            continue;
        }
        let Some(extension) = pdf_extension(&path) else {
            continue;
        };

        pdf_files.push(PdfFileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_string_lossy().into_owned(),
            extension,
        });
    }
    Ok(pdf_files)
}

/// Read a whole file into memory.
pub async fn read_file(path: &Path) -> Result<Vec<u8>, AppError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Whether `path` can be reached right now. Inaccessible counts as absent.
pub async fn file_exists(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn names(entries: &[PdfFileEntry]) -> BTreeSet<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn mixed_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("paper.pdf"), b"%PDF-1.7").unwrap();
        fs::write(dir.path().join("SCAN.PDF"), b"%PDF-1.4").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        fs::write(dir.path().join("archive.pdf.zip"), b"PK").unwrap();
        fs::write(dir.path().join(".pdf"), b"hidden").unwrap();
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();
        fs::write(dir.path().join("folder.pdf").join("nested.pdf"), b"%PDF").unwrap();
        dir
    }

    #[test]
    fn extension_match_ignores_case_and_keeps_original() {
        assert_eq!(pdf_extension(Path::new("a.pdf")).as_deref(), Some(".pdf"));
        assert_eq!(pdf_extension(Path::new("a.PdF")).as_deref(), Some(".PdF"));
        assert_eq!(pdf_extension(Path::new("a.pdfx")), None);
        assert_eq!(pdf_extension(Path::new(".pdf")), None);
        assert_eq!(pdf_extension(Path::new("pdf")), None);
    }

    #[tokio::test]
    async fn lists_only_regular_pdf_files() {
        let dir = mixed_dir();
        let entries = list_pdf_files(dir.path()).await.unwrap();

        let expected: BTreeSet<String> = ["paper.pdf", "SCAN.PDF"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names(&entries), expected);

        let scan = entries.iter().find(|e| e.name == "SCAN.PDF").unwrap();
        assert_eq!(scan.extension, ".PDF");
        assert_eq!(Path::new(&scan.path), dir.path().join("SCAN.PDF"));
    }

    #[tokio::test]
    async fn listing_is_not_recursive() {
        let dir = mixed_dir();
        let entries = list_pdf_files(dir.path()).await.unwrap();
        assert!(entries.iter().all(|e| e.name != "nested.pdf"));
    }

    #[tokio::test]
    async fn empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_pdf_files(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_pdf_files(&dir.path().join("gone")).await.unwrap_err();
        assert!(matches!(err, AppError::DirectoryRead { .. }));
    }

    #[tokio::test]
    async fn listing_a_file_is_an_error() {
        let dir = mixed_dir();
        assert!(list_pdf_files(&dir.path().join("paper.pdf")).await.is_err());
    }

    #[tokio::test]
    async fn repeated_listing_yields_same_set() {
        let dir = mixed_dir();
        let first = list_pdf_files(dir.path()).await.unwrap();
        let second = list_pdf_files(dir.path()).await.unwrap();
        assert_eq!(names(&first), names(&second));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_are_followed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("real.pdf"), b"%PDF").unwrap();
        symlink(target.path().join("real.pdf"), dir.path().join("link.pdf")).unwrap();
        symlink(target.path(), dir.path().join("dirlink.pdf")).unwrap();

        let entries = list_pdf_files(dir.path()).await.unwrap();
        let expected: BTreeSet<String> = ["link.pdf".to_string()].into_iter().collect();
        assert_eq!(names(&entries), expected);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn dangling_symlink_aborts_listing() {
        use std::os::unix::fs::symlink;

        let dir = mixed_dir();
        symlink(dir.path().join("nowhere.pdf"), dir.path().join("broken.pdf")).unwrap();

        let err = list_pdf_files(dir.path()).await.unwrap_err();
        assert!(matches!(err, AppError::Metadata { .. }));
    }

    #[tokio::test]
    async fn read_returns_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.pdf");
        let content: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        fs::write(&path, &content).unwrap();

        assert_eq!(read_file(&path).await.unwrap(), content);
    }

    #[tokio::test]
    async fn read_missing_file_fails_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("missing.pdf")).await.unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn read_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_file(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn exists_reflects_presence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("here.pdf");
        assert!(!file_exists(&path).await);

        fs::write(&path, b"%PDF").unwrap();
        assert!(file_exists(&path).await);
        assert!(file_exists(dir.path()).await);

        fs::remove_file(&path).unwrap();
        assert!(!file_exists(&path).await);
    }

    #[tokio::test]
    async fn empty_path_does_not_exist() {
        assert!(!file_exists(Path::new("")).await);
    }
}
