//! Sector calculation utilities

use crate::types::SECTOR_SIZE;

/// Whole 512-byte sectors contained in `byte_count` (rounds down)
pub fn bytes_to_sectors(byte_count: u64) -> u64 {
    byte_count / SECTOR_SIZE as u64
}
