//! Boot Image Encoders
//!
//! A `no_std` producer for the two binary structures a freshly built disk
//! image needs before any filesystem driver is running.
//!
//! # Overview
//!
//! This crate provides:
//! - The boot archive (initrd) encoder: a flat container with a fixed
//!   64-slot file table, read by the kernel before it can mount anything
//! - The MBR partition table encoder: four 16-byte LBA-only entries
//! - The boot record: partition table, volume id and the `0x55 0xAA`
//!   signature combined into one 512-byte sector
//! - A block device writer that overlays the boot record onto sector 0
//!
//! # Architecture
//!
//! Both encoders are pure functions from a small descriptor to a byte
//! buffer. Nothing is written anywhere until the whole buffer has been
//! validated and built; writing it out is the caller's job.
//! 1. **Archive layer** - header, table and payload of the boot archive
//! 2. **MBR layer** - partition placement, entries and the boot record
//! 3. **Utils** - little-endian packing, sector math, build serials
//!
//! # Usage
//!
//! ```ignore
//! use bootimg::archive::{encode, ArchiveStamp, ArchiveVersion, MemorySource};
//!
//! let files = [MemorySource::new("out/apps/init", init_bytes)];
//! let stamp = ArchiveStamp::new(serial, unix_now);
//! let image = encode(&files, ArchiveVersion::CURRENT, &stamp)?;
//! ```
//!
//! ```ignore
//! use bootimg::mbr::{BootRecord, PartitionSpec, VolumeId};
//!
//! let specs = [PartitionSpec::at(2048, 48 << 20).bootable(true)];
//! let record = BootRecord::new(&specs, VolumeId::generate(&mut rng))?;
//! let sector: [u8; 512] = record.encode();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod archive;
pub mod error;
pub mod mbr;
pub mod types;
pub mod utils;

pub use error::{BootImgError, Result};
pub use types::{ARCHIVE_BASE_OFFSET, MAX_ARCHIVE_FILES, MAX_PARTITIONS, SECTOR_SIZE};

// High-level API exports
pub use archive::encode as encode_archive;
pub use mbr::{write_boot_record, BootRecord};
