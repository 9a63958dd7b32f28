//! Archive table entries

use alloc::string::String;

use crate::types::ARCHIVE_NAME_LEN;
use crate::utils::{name_field, ByteWriter};

/// A staged input file with its computed payload offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Source path as supplied by the caller
    pub path: String,
    /// Name stored in the table (basename of `path`)
    pub name: String,
    /// File size in bytes (never zero)
    pub size: u32,
    /// Absolute offset of the file data in the archive
    pub offset: u32,
}

/// One fixed-size slot of the archive table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Name bytes, NUL padded, not terminated at exactly 64 bytes
    pub name: [u8; ARCHIVE_NAME_LEN],
    /// File size in bytes
    pub size: u32,
    /// Absolute payload offset
    pub offset: u32,
    /// Modification time (Unix seconds)
    pub mtime: u64,
}

impl TableEntry {
    /// Unused slot
    pub const NULL: Self = Self {
        name: [0; ARCHIVE_NAME_LEN],
        size: 0,
        offset: 0,
        mtime: 0,
    };

    /// Populated slot for a staged file
    pub fn for_file(file: &InputFile, mtime: u64) -> Self {
        Self {
            name: name_field(&file.name),
            size: file.size,
            offset: file.offset,
            mtime,
        }
    }

    /// Is this an unused slot?
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Emit the 80-byte entry
    pub fn write(&self, out: &mut ByteWriter) {
        out.put_bytes(&self.name);
        out.put_u32(self.size);
        out.put_u32(self.offset);
        out.put_u64(self.mtime);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ARCHIVE_ENTRY_SIZE;

    fn staged(name: &str, size: u32, offset: u32) -> InputFile {
        InputFile {
            path: alloc::format!("out/apps/{}", name),
            name: name.into(),
            size,
            offset,
        }
    }

    #[test]
    fn test_entry_bytes() {
        let mut out = ByteWriter::default();
        TableEntry::for_file(&staged("init", 300, 5140), 1_500_000_000).write(&mut out);
        let bytes = out.into_inner();
        assert_eq!(bytes.len(), ARCHIVE_ENTRY_SIZE);
        assert_eq!(&bytes[..4], b"init");
        assert_eq!(&bytes[64..68], &300u32.to_le_bytes());
        assert_eq!(&bytes[68..72], &5140u32.to_le_bytes());
        assert_eq!(&bytes[72..80], &1_500_000_000u64.to_le_bytes());
    }

    #[test]
    fn test_null_entry_is_zero() {
        let mut out = ByteWriter::default();
        TableEntry::NULL.write(&mut out);
        assert!(out.into_inner().iter().all(|&b| b == 0));
        assert!(TableEntry::NULL.is_null());
    }
}
