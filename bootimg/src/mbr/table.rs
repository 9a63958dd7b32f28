//! Partition descriptors and placement
//!
//! Partitions are declared by size. The first one must carry an explicit
//! start LBA (it depends on how many sectors are reserved for boot code);
//! every later one without an LBA is placed at the first sector after the
//! furthest partition end seen so far.

use alloc::vec::Vec;
use log::info;

use super::entry::PartitionEntry;
use crate::error::{BootImgError, Result};
use crate::types::{MAX_PARTITIONS, PARTITION_ENTRY_SIZE, PARTITION_TABLE_OFFSET, SECTOR_SIZE};
use crate::utils::bytes_to_sectors;

/// Sector limit of the 32-bit LBA fields
const LBA_LIMIT: u64 = 1 << 32;

/// Declarative description of one partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSpec {
    /// Active partition flag
    pub bootable: bool,
    /// Partition type byte
    pub partition_type: u8,
    /// Explicit first sector, or `None` to follow the previous partition
    pub lba: Option<u32>,
    /// Size in bytes; rounded down to whole sectors
    pub size: u64,
}

impl PartitionSpec {
    /// Type used when none is given (FAT32 with LBA addressing)
    pub const DEFAULT_TYPE: u8 = 0x0C;

    /// Size used when none is given
    pub const DEFAULT_SIZE: u64 = 1024 * 1024;

    /// Non-bootable partition of `size` bytes placed after the previous one
    pub fn new(size: u64) -> Self {
        Self {
            bootable: false,
            partition_type: Self::DEFAULT_TYPE,
            lba: None,
            size,
        }
    }

    /// Partition of `size` bytes starting at `lba`
    pub fn at(lba: u32, size: u64) -> Self {
        Self {
            lba: Some(lba),
            ..Self::new(size)
        }
    }

    /// Set the active flag
    pub fn bootable(mut self, bootable: bool) -> Self {
        self.bootable = bootable;
        self
    }

    /// Set the partition type byte
    pub fn with_type(mut self, partition_type: u8) -> Self {
        self.partition_type = partition_type;
        self
    }
}

impl Default for PartitionSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// Up to four placed partitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionTable {
    entries: Vec<PartitionEntry>,
}

impl PartitionTable {
    /// Validate and place `specs` in order
    pub fn from_specs(specs: &[PartitionSpec]) -> Result<Self> {
        if specs.len() > MAX_PARTITIONS {
            return Err(BootImgError::TooManyPartitions { count: specs.len() });
        }

        let mut entries = Vec::with_capacity(specs.len());
        let mut next_free = 0u64;

        for (index, spec) in specs.iter().enumerate() {
            let lba = match spec.lba {
                Some(lba) => lba as u64,
                None if index == 0 => return Err(BootImgError::MissingStartLba { index }),
                None => next_free,
            };
            let sectors = bytes_to_sectors(spec.size);
            if lba >= LBA_LIMIT || lba + sectors > LBA_LIMIT {
                return Err(BootImgError::SectorOverflow { index });
            }

            let entry = PartitionEntry {
                bootable: spec.bootable,
                partition_type: spec.partition_type,
                lba: lba as u32,
                sector_count: sectors as u32,
            };
            info!("Adding partition {}", entry);

            next_free = next_free.max(entry.end_lba());
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Placed partitions, in slot order
    pub fn entries(&self) -> &[PartitionEntry] {
        &self.entries
    }

    /// Number of used slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no slot is used
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the used slots into a boot sector
    ///
    /// Unused slots are left as they are in `sector`.
    pub fn write_into(&self, sector: &mut [u8; SECTOR_SIZE]) {
        for (slot, entry) in self.entries.iter().enumerate() {
            let offset = PARTITION_TABLE_OFFSET + slot * PARTITION_ENTRY_SIZE;
            sector[offset..offset + PARTITION_ENTRY_SIZE].copy_from_slice(&entry.to_bytes());
        }
    }
}
