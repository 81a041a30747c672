use std::io::ErrorKind;
use std::path::Path;
use todo_core::TodoResult;
use tokio::fs;

/// Write-to-temp-then-rename file writer, so readers never see a
/// half-written snapshot file
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to `path` atomically, creating parent directories as needed
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TodoResult<()> {
        // Temp file must share the target's filesystem for the rename to be atomic
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, treating a missing file as `None`
    pub async fn read_optional(path: &Path) -> TodoResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
