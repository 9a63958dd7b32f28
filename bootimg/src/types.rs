//! Layout constants shared by the boot image formats
//!
//! These are firmware and boot loader contracts, not tunables.

/// Disk sector size (always 512 bytes)
pub const SECTOR_SIZE: usize = 512;

/// Number of slots in the boot archive file table
pub const MAX_ARCHIVE_FILES: usize = 64;

/// Width of the name field in an archive table entry
pub const ARCHIVE_NAME_LEN: usize = 64;

/// Size of one archive table entry: name, size, offset, mtime
pub const ARCHIVE_ENTRY_SIZE: usize = ARCHIVE_NAME_LEN + 16;

/// Archive header tag byte
pub const ARCHIVE_TAG: u8 = 0x80;

/// Archive header magic
pub const ARCHIVE_MAGIC: [u8; 3] = *b"IRD";

/// Size of the little-endian entry count preceding the table
pub const ARCHIVE_COUNT_SIZE: usize = 4;

/// Payload offset of the current archive layout (16 + 4 + 64 * 80)
pub const ARCHIVE_BASE_OFFSET: u32 = 5140;

/// Number of partition slots in the MBR
pub const MAX_PARTITIONS: usize = 4;

/// Size of one MBR partition entry
pub const PARTITION_ENTRY_SIZE: usize = 16;

/// Offset of the 4-byte volume id in the boot sector
pub const VOLUME_ID_OFFSET: usize = 440;

/// Offset of the partition table in the boot sector
pub const PARTITION_TABLE_OFFSET: usize = 446;

/// Offset of the boot signature in the boot sector
pub const BOOT_SIGNATURE_OFFSET: usize = 510;

/// Boot signature bytes
pub const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];

/// Bootable indicator for an active partition
pub const PARTITION_BOOTABLE: u8 = 0x80;

/// CHS sentinel; the image is LBA-only
pub const CHS_SENTINEL: [u8; 3] = [0xFF, 0xFF, 0xFF];

const _: () = assert!(
    PARTITION_TABLE_OFFSET + MAX_PARTITIONS * PARTITION_ENTRY_SIZE == BOOT_SIGNATURE_OFFSET
);
const _: () = assert!(BOOT_SIGNATURE_OFFSET + BOOT_SIGNATURE.len() == SECTOR_SIZE);
