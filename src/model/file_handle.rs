use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    #[cfg_attr(not(test), allow(dead_code))]
    Memory(Vec<u8>),
}

/// A file picked or dropped by the user, consumed once by an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    source: FileSource,
}

impl FileHandle {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            source: FileSource::Path(path),
        }
    }

    #[cfg(test)]
    pub fn in_memory(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Memory(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn read(&self) -> io::Result<Vec<u8>> {
        match &self.source {
            FileSource::Path(path) => tokio::fs::read(path).await,
            FileSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}
