//! Boot record (sector 0)
//!
//! ```text
//! [0,440)   boot code, never written here
//! [440,444) volume id
//! [444,446) reserved
//! [446,510) 4 x partition entry
//! [510,512) 0x55 0xAA
//! ```

use core::fmt;
use log::debug;
use rand::RngCore;

use super::table::{PartitionSpec, PartitionTable};
use crate::error::Result;
use crate::types::{BOOT_SIGNATURE, BOOT_SIGNATURE_OFFSET, SECTOR_SIZE, VOLUME_ID_OFFSET};

/// 4-byte disk signature, generated once per disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VolumeId(pub [u8; 4]);

impl VolumeId {
    /// Draw a fresh id from `rng`
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut id = [0u8; 4];
        rng.fill_bytes(&mut id);
        Self(id)
    }

    /// Raw bytes in on-disk order
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<u32> for VolumeId {
    /// Little-endian, matching how the id reads as a 32-bit disk signature
    fn from(value: u32) -> Self {
        Self(value.to_le_bytes())
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", u32::from_le_bytes(self.0))
    }
}

/// Partition table plus volume id, encodable as a boot sector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootRecord {
    table: PartitionTable,
    volume_id: VolumeId,
}

impl BootRecord {
    /// Place `specs` and pair them with `volume_id`
    pub fn new(specs: &[PartitionSpec], volume_id: VolumeId) -> Result<Self> {
        let table = PartitionTable::from_specs(specs)?;
        debug!("boot record: {} partitions, volume id {}", table.len(), volume_id);
        Ok(Self { table, volume_id })
    }

    /// Placed partitions
    pub fn table(&self) -> &PartitionTable {
        &self.table
    }

    /// Disk signature
    pub fn volume_id(&self) -> VolumeId {
        self.volume_id
    }

    /// Encode into a zeroed sector
    pub fn encode(&self) -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];
        self.encode_into(&mut sector);
        sector
    }

    /// Write the volume id, used partition slots and signature into
    /// `sector`, leaving boot code and unused slots untouched
    pub fn encode_into(&self, sector: &mut [u8; SECTOR_SIZE]) {
        sector[VOLUME_ID_OFFSET..VOLUME_ID_OFFSET + 4].copy_from_slice(self.volume_id.as_bytes());
        self.table.write_into(sector);
        sector[BOOT_SIGNATURE_OFFSET..].copy_from_slice(&BOOT_SIGNATURE);
    }
}
