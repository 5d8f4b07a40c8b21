use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use corpus_profile_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut text = String::new();
        Self::open(path)
            .and_then(|mut file| file.read_to_string(&mut text))
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(text)
    }
}
