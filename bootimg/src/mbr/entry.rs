//! MBR partition entry (16 bytes)

use core::fmt;

use crate::types::{CHS_SENTINEL, PARTITION_BOOTABLE, PARTITION_ENTRY_SIZE};
use crate::utils::pack::write_u32_le;

/// A placed partition, ready to be written into its slot
///
/// CHS fields are never computed; both are written as the `0xFF` sentinel
/// and firmware goes by the LBA fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    /// Active partition flag
    pub bootable: bool,
    /// Partition type byte (0x0C = FAT32 LBA)
    pub partition_type: u8,
    /// First sector
    pub lba: u32,
    /// Length in sectors
    pub sector_count: u32,
}

impl PartitionEntry {
    /// Status byte: 0x80 if bootable, else 0x00
    pub fn status(&self) -> u8 {
        if self.bootable {
            PARTITION_BOOTABLE
        } else {
            0
        }
    }

    /// First sector past the end of this partition
    pub fn end_lba(&self) -> u64 {
        self.lba as u64 + self.sector_count as u64
    }

    /// Encode as the on-disk 16-byte entry
    pub fn to_bytes(&self) -> [u8; PARTITION_ENTRY_SIZE] {
        let mut bytes = [0u8; PARTITION_ENTRY_SIZE];
        bytes[0] = self.status();
        bytes[1..4].copy_from_slice(&CHS_SENTINEL);
        bytes[4] = self.partition_type;
        bytes[5..8].copy_from_slice(&CHS_SENTINEL);
        write_u32_le(&mut bytes, 8, self.lba);
        write_u32_le(&mut bytes, 12, self.sector_count);
        bytes
    }
}

impl fmt::Display for PartitionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Partition Type:0x{:x}, Extent:[base={} size={} sectors], {}bootable>",
            self.partition_type,
            self.lba,
            self.sector_count,
            if self.bootable { "" } else { "not " }
        )
    }
}
