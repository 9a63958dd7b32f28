//! Archive header and version-to-layout mapping
//!
//! Versions 1 and 2 have an 8-byte header; version 3 appended a 64-bit
//! build serial. Table entries are 80 bytes in every version. Each
//! version maps to a fixed [`ArchiveLayout`]; new versions add a variant
//! instead of editing one.

use crate::error::{BootImgError, Result};
use crate::types::{
    ARCHIVE_BASE_OFFSET, ARCHIVE_COUNT_SIZE, ARCHIVE_ENTRY_SIZE, ARCHIVE_MAGIC, ARCHIVE_TAG,
    MAX_ARCHIVE_FILES,
};
use crate::utils::ByteWriter;

/// Boot archive format version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ArchiveVersion {
    /// Original layout: 8-byte header without serial
    V1 = 1,
    /// Same layout as [`ArchiveVersion::V1`]
    V2 = 2,
    /// Current layout: 16-byte header with serial, 80-byte entries
    #[default]
    V3 = 3,
}

impl ArchiveVersion {
    /// Version written by default
    pub const CURRENT: Self = Self::V3;

    /// Map a version byte to a known layout
    pub fn from_u8(version: u8) -> Result<Self> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            _ => Err(BootImgError::UnsupportedVersion { version }),
        }
    }

    /// Version byte stored in the header
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Byte layout for this version
    pub const fn layout(self) -> ArchiveLayout {
        match self {
            Self::V1 | Self::V2 => ArchiveLayout {
                header_size: 8,
                has_serial: false,
            },
            Self::V3 => ArchiveLayout {
                header_size: 16,
                has_serial: true,
            },
        }
    }
}

/// Field widths selected by an [`ArchiveVersion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveLayout {
    /// Header size in bytes
    pub header_size: usize,
    /// Header carries a 64-bit build serial
    pub has_serial: bool,
}

impl ArchiveLayout {
    /// Size of the full table including the entry count
    pub const fn table_size(&self) -> usize {
        ARCHIVE_COUNT_SIZE + MAX_ARCHIVE_FILES * ARCHIVE_ENTRY_SIZE
    }

    /// Offset of the first payload byte
    ///
    /// Independent of how many files are present: all 64 slots are
    /// always reserved.
    pub const fn base_offset(&self) -> usize {
        self.header_size + self.table_size()
    }
}

const _: () =
    assert!(ArchiveVersion::CURRENT.layout().base_offset() == ARCHIVE_BASE_OFFSET as usize);

/// Archive header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Format version
    pub version: ArchiveVersion,
    /// Build serial (dropped by layouts without one)
    pub serial: u64,
}

impl ArchiveHeader {
    /// Header for `version` stamped with `serial`
    pub fn new(version: ArchiveVersion, serial: u64) -> Self {
        Self { version, serial }
    }

    /// Emit the header: tag, magic, version, 3 reserved bytes, serial
    pub fn write(&self, out: &mut ByteWriter) {
        out.put_u8(ARCHIVE_TAG);
        out.put_bytes(&ARCHIVE_MAGIC);
        out.put_u8(self.version.as_u8());
        out.put_zeros(3);
        if self.version.layout().has_serial {
            out.put_u64(self.serial);
        }
    }
}
