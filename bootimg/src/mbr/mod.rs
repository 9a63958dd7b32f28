//! MBR partition table encoder
//!
//! Byte offsets and field widths follow the on-disk MBR exactly; the
//! layout is a firmware contract. Only LBA addressing is used.

pub mod entry;
pub mod record;
pub mod table;
pub mod writer;

pub use entry::PartitionEntry;
pub use record::{BootRecord, VolumeId};
pub use table::{PartitionSpec, PartitionTable};
pub use writer::write_boot_record;

use crate::error::Result;
use crate::types::SECTOR_SIZE;

/// Encode `specs` into a fresh 512-byte boot sector
pub fn encode(specs: &[PartitionSpec], volume_id: VolumeId) -> Result<[u8; SECTOR_SIZE]> {
    Ok(BootRecord::new(specs, volume_id)?.encode())
}
