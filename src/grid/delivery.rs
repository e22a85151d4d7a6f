// src/grid/delivery.rs

use bevy::log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use super::definitions::EXPORT_CONTENT_TYPE;

/// Where a delivered file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Save dialog was cancelled.")]
    Cancelled,
    #[error("Content type '{0}' cannot be saved; only text/plain is supported.")]
    UnsupportedContentType(String),
    #[error("Export folder is not set.")]
    NoTargetDirectory,
}

/// Turns in-memory content into a saved file.
pub trait Delivery {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

impl<D: Delivery + ?Sized> Delivery for Box<D> {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        (**self).deliver(content, filename, content_type)
    }
}

impl<D: Delivery + ?Sized> Delivery for &mut D {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        (**self).deliver(content, filename, content_type)
    }
}

fn check_content_type(content_type: &str) -> Result<(), DeliveryError> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(EXPORT_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(DeliveryError::UnsupportedContentType(content_type.to_string()))
    }
}

/// Transient file a delivery writes into before it is moved over the target.
/// Removed on drop if it still exists, whichever way the delivery ended.
struct StagedFile {
    path: PathBuf,
    file: Option<File>,
}

impl StagedFile {
    fn acquire(dir: &Path, filename: &str) -> io::Result<Self> {
        let path = dir.join(format!(".{}.{}.part", filename, Uuid::new_v4().simple()));
        let file = File::options().write(true).create_new(true).open(&path)?;
        debug!("GridExport: Staging file acquired at {:?}", path);
        Ok(Self { path, file: Some(file) })
    }

    fn write_all(&mut self, content: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => {
                file.write_all(content)?;
                file.sync_all()
            }
            None => Err(io::Error::new(ErrorKind::Other, "staging file already closed")),
        }
    }

    fn commit(mut self, target: &Path) -> io::Result<()> {
        // Close the handle first; Windows refuses to rename open files.
        self.file.take();
        fs::rename(&self.path, target)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        self.file.take();
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("GridExport: Staging file released at {:?}", self.path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "GridExport: Failed to release staging file {:?}: {}",
                self.path, e
            ),
        }
    }
}

/// Writes `content` to `target` through a staging file in `dir`.
fn write_through_staging(dir: &Path, target: &Path, content: &[u8]) -> Result<usize, DeliveryError> {
    let mut staged = StagedFile::acquire(dir, &target_file_name(target))?;
    staged.write_all(content)?;
    staged.commit(target)?;
    Ok(content.len())
}

fn target_file_name(target: &Path) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string())
}

/// Saves into a fixed folder, creating it if necessary.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        check_content_type(content_type)?;
        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(filename);
        let bytes_written = write_through_staging(&self.dir, &target, content)?;
        info!("GridExport: Wrote {} bytes to {:?}", bytes_written, target);
        Ok(DeliveryReceipt { path: target, bytes_written })
    }
}

/// Asks the user where to save with a native dialog (blocking).
#[derive(Debug, Clone, Default)]
pub struct DialogDelivery {
    initial_dir: Option<PathBuf>,
}

impl DialogDelivery {
    pub fn new(initial_dir: Option<PathBuf>) -> Self {
        Self { initial_dir }
    }
}

impl Delivery for DialogDelivery {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        check_content_type(content_type)?;

        let mut dialog = rfd::FileDialog::new()
            .set_title("Save grid")
            .set_file_name(filename)
            .add_filter("Text", &["txt"]);
        if let Some(dir) = &self.initial_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(target) = dialog.save_file() else {
            info!("GridExport: Save dialog cancelled.");
            return Err(DeliveryError::Cancelled);
        };
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .ok_or(DeliveryError::NoTargetDirectory)?;

        let bytes_written = write_through_staging(&dir, &target, content)?;
        info!("GridExport: Wrote {} bytes to {:?}", bytes_written, target);
        Ok(DeliveryReceipt { path: target, bytes_written })
    }
}

/// Keeps every delivery in memory instead of touching the disk.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingDelivery {
    pub deliveries: Vec<(Vec<u8>, String, String)>,
    pub fail_with_cancel: bool,
}

#[cfg(test)]
impl Delivery for RecordingDelivery {
    fn deliver(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        if self.fail_with_cancel {
            return Err(DeliveryError::Cancelled);
        }
        self.deliveries
            .push((content.to_vec(), filename.to_string(), content_type.to_string()));
        Ok(DeliveryReceipt {
            path: PathBuf::from(filename),
            bytes_written: content.len(),
        })
    }
}

#[cfg(test)]
pub(crate) fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("matrixpad-{}-{}", label, Uuid::new_v4().simple()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leftover_staging_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .expect("read scratch dir")
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "part").unwrap_or(false))
            .collect()
    }

    #[test]
    fn test_directory_delivery_writes_file() {
        let dir = scratch_dir("deliver");
        let mut delivery = DirectoryDelivery::new(&dir);
        let receipt = delivery
            .deliver(b"123\n456\n789\n", "my-new-file.txt", "text/plain")
            .expect("delivery succeeds");

        assert_eq!(receipt.path, dir.join("my-new-file.txt"));
        assert_eq!(receipt.bytes_written, 12);
        assert_eq!(fs::read_to_string(&receipt.path).unwrap(), "123\n456\n789\n");
        assert!(leftover_staging_files(&dir).is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_delivery_overwrites_previous_export() {
        let dir = scratch_dir("overwrite");
        let mut delivery = DirectoryDelivery::new(&dir);
        delivery.deliver(b"old\n\n\n", "my-new-file.txt", "text/plain").unwrap();
        delivery.deliver(b"new\n\n\n", "my-new-file.txt", "text/plain").unwrap();

        assert_eq!(fs::read_to_string(dir.join("my-new-file.txt")).unwrap(), "new\n\n\n");
        assert!(leftover_staging_files(&dir).is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_delivery_creates_missing_folder() {
        let dir = scratch_dir("nested").join("exports");
        let mut delivery = DirectoryDelivery::new(&dir);
        delivery.deliver(b"\n\n\n", "my-new-file.txt", "text/plain").unwrap();
        assert!(dir.join("my-new-file.txt").is_file());
        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn test_staging_released_when_commit_fails() {
        let dir = scratch_dir("commit-fail");
        // A directory sitting at the target path makes the final rename fail.
        fs::create_dir_all(dir.join("my-new-file.txt")).unwrap();

        let mut delivery = DirectoryDelivery::new(&dir);
        let result = delivery.deliver(b"abc\n\n\n", "my-new-file.txt", "text/plain");

        assert!(matches!(result, Err(DeliveryError::Io(_))));
        assert!(leftover_staging_files(&dir).is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_content_type_rejected_before_writing() {
        let dir = scratch_dir("content-type");
        let mut delivery = DirectoryDelivery::new(&dir);
        let result = delivery.deliver(b"{}", "my-new-file.txt", "application/json");

        assert!(matches!(result, Err(DeliveryError::UnsupportedContentType(ct)) if ct == "application/json"));
        assert!(!dir.join("my-new-file.txt").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_content_type_parameters_accepted() {
        assert!(check_content_type("text/plain").is_ok());
        assert!(check_content_type("Text/Plain; charset=utf-8").is_ok());
        assert!(check_content_type("text/csv").is_err());
    }
}
