//! Input file sources
//!
//! The encoder never touches a filesystem itself. Callers hand it
//! [`ArchiveSource`] values: [`MemorySource`] for bytes already in memory
//! and, with the `std` feature, [`HostFile`] for paths on the build host.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;

/// A file that can be staged into the boot archive
pub trait ArchiveSource {
    /// Path shown in diagnostics; the table stores its basename
    fn path(&self) -> &str;

    /// Size in bytes, as reported before reading
    fn size(&self) -> Result<u64>;

    /// Append the full contents to `dst`
    fn read_into(&self, dst: &mut Vec<u8>) -> Result<()>;
}

impl<S: ArchiveSource + ?Sized> ArchiveSource for &S {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn size(&self) -> Result<u64> {
        (**self).size()
    }

    fn read_into(&self, dst: &mut Vec<u8>) -> Result<()> {
        (**self).read_into(dst)
    }
}

/// In-memory file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    path: String,
    data: Vec<u8>,
}

impl MemorySource {
    /// Wrap `data` under `path`
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    /// File contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl ArchiveSource for MemorySource {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn read_into(&self, dst: &mut Vec<u8>) -> Result<()> {
        dst.extend_from_slice(&self.data);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use host::HostFile;

#[cfg(feature = "std")]
mod host {
    use std::fs::File;
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use super::ArchiveSource;
    use crate::error::{BootImgError, Result};
    use alloc::string::String;
    use alloc::vec::Vec;

    /// A file on the build host
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HostFile {
        path: PathBuf,
        display: String,
    }

    impl HostFile {
        /// Refer to the file at `path`; nothing is opened yet
        pub fn new(path: impl AsRef<Path>) -> Self {
            let path = path.as_ref().to_path_buf();
            let display = path.to_string_lossy().into_owned();
            Self { path, display }
        }

        fn unavailable(&self) -> BootImgError {
            BootImgError::InputUnavailable {
                name: self.display.clone(),
            }
        }
    }

    impl ArchiveSource for HostFile {
        fn path(&self) -> &str {
            &self.display
        }

        fn size(&self) -> Result<u64> {
            let meta = std::fs::metadata(&self.path).map_err(|_| self.unavailable())?;
            if !meta.is_file() {
                return Err(self.unavailable());
            }
            Ok(meta.len())
        }

        fn read_into(&self, dst: &mut Vec<u8>) -> Result<()> {
            let mut file = File::open(&self.path).map_err(|_| self.unavailable())?;
            file.read_to_end(dst).map_err(|_| self.unavailable())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let src = MemorySource::new("out/apps/init", b"\x7fELF".to_vec());
        assert_eq!(src.path(), "out/apps/init");
        assert_eq!(src.size(), Ok(4));

        let mut dst = b"head".to_vec();
        src.read_into(&mut dst).unwrap();
        assert_eq!(dst, b"head\x7fELF");
    }
}
