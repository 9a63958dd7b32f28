//! Error types for boot image encoding

use alloc::string::String;
use core::fmt;

use crate::types::{MAX_ARCHIVE_FILES, MAX_PARTITIONS, SECTOR_SIZE};

/// Result type for boot image operations
pub type Result<T> = core::result::Result<T, BootImgError>;

/// Errors that can occur while building a boot image
///
/// Every variant is raised before any output byte is handed back, so a
/// failed encode never leaves a partially valid buffer behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootImgError {
    /// More files than the archive table has slots for
    TooManyFiles {
        /// Number of files supplied
        count: usize,
    },

    /// A zero-length file cannot be told apart from an unused slot
    EmptyFileNotAllowed {
        /// Path of the empty file
        name: String,
    },

    /// An input file could not be stat'ed or read
    InputUnavailable {
        /// Path of the unreadable file
        name: String,
    },

    /// More partitions than the MBR has slots for
    TooManyPartitions {
        /// Number of partitions supplied
        count: usize,
    },

    /// Archive format version without a known layout
    UnsupportedVersion {
        /// Version byte requested
        version: u8,
    },

    /// A file size or payload offset does not fit the 32-bit table fields
    ArchiveTooLarge {
        /// Path of the file that overflowed
        name: String,
    },

    /// The first partition has no explicit starting LBA
    MissingStartLba {
        /// Partition index
        index: usize,
    },

    /// Sector count or partition end does not fit in 32 bits
    SectorOverflow {
        /// Partition index
        index: usize,
    },

    /// Target block device does not use 512-byte sectors
    InvalidBlockSize {
        /// Block size reported by the device
        size: u32,
    },

    /// I/O error on the target block device
    IoError,
}

impl fmt::Display for BootImgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFiles { count } => write!(
                f,
                "cannot write more than {} files to boot archive (got {})",
                MAX_ARCHIVE_FILES, count
            ),
            Self::EmptyFileNotAllowed { name } => {
                write!(f, "cannot insert empty file '{}' in boot archive", name)
            }
            Self::InputUnavailable { name } => write!(f, "cannot read input file '{}'", name),
            Self::TooManyPartitions { count } => write!(
                f,
                "only {} partitions supported (got {})",
                MAX_PARTITIONS, count
            ),
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported boot archive version {}", version)
            }
            Self::ArchiveTooLarge { name } => {
                write!(f, "file '{}' does not fit in a 32-bit archive offset", name)
            }
            Self::MissingStartLba { index } => {
                write!(f, "partition {} needs an explicit starting LBA", index)
            }
            Self::SectorOverflow { index } => {
                write!(f, "partition {} extends past the 32-bit sector range", index)
            }
            Self::InvalidBlockSize { size } => write!(
                f,
                "block size {} is not supported (expected {})",
                size, SECTOR_SIZE
            ),
            Self::IoError => write!(f, "I/O error on block device"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BootImgError {}
