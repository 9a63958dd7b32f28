//! Boot record writer for block devices
//!
//! Overlays a [`BootRecord`] onto sector 0 of a disk image, keeping the
//! boot code bytes that an earlier step already put there.

use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;
use log::debug;

use super::record::BootRecord;
use crate::error::{BootImgError, Result};
use crate::types::SECTOR_SIZE;

/// Read-modify-write sector 0 of `block_io` with `record`
pub fn write_boot_record<B: BlockIo>(block_io: &mut B, record: &BootRecord) -> Result<()> {
    let block_size = block_io.block_size().to_u32();
    if block_size as usize != SECTOR_SIZE {
        return Err(BootImgError::InvalidBlockSize { size: block_size });
    }

    let mut sector = [0u8; SECTOR_SIZE];
    block_io
        .read_blocks(Lba(0), &mut sector)
        .map_err(|_| BootImgError::IoError)?;

    record.encode_into(&mut sector);

    block_io
        .write_blocks(Lba(0), &sector)
        .map_err(|_| BootImgError::IoError)?;
    block_io.flush().map_err(|_| BootImgError::IoError)?;

    debug!("boot record written to LBA 0");
    Ok(())
}
