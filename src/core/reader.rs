use std::{future::Future, io, path::Path};

/// Raw file access used to load language configuration files.
///
/// Every error is treated the same way by the resolver: the file is unavailable.
pub trait FileReader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// Reads from the local filesystem through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send {
        tokio::fs::read(path.to_path_buf())
    }
}
