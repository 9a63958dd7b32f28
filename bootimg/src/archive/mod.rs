//! Boot archive (initrd) encoder
//!
//! The archive is a flat container the kernel reads before any
//! filesystem driver is up:
//!
//! ```text
//! offset 0:    header { tag=0x80, "IRD", version, 0,0,0, serial:u64 }
//! offset 16:   count:u32
//! offset 20:   64 x entry { name:[u8;64], size:u32, offset:u32, mtime:u64 }
//! offset 5140: file payloads, in table order, no padding
//! ```
//!
//! Versions 1 and 2 omit the header serial, moving the table to offset 8
//! and the payload to 5132.
//!
//! All 64 slots are always present so a reader can find any file with
//! one bounded scan and a direct seek. Unused slots are all zero, which
//! is why zero-length files are rejected.

pub mod entry;
pub mod header;
pub mod source;

pub use entry::{InputFile, TableEntry};
pub use header::{ArchiveHeader, ArchiveLayout, ArchiveVersion};
#[cfg(feature = "std")]
pub use source::HostFile;
pub use source::{ArchiveSource, MemorySource};

use alloc::vec::Vec;
use log::{debug, info};

use crate::error::{BootImgError, Result};
use crate::types::MAX_ARCHIVE_FILES;
use crate::utils::{basename, ByteWriter};

/// The non-reproducible inputs of an archive
///
/// Injected by the caller so identical inputs and stamp give
/// byte-identical archives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStamp {
    /// Build serial stored in the header
    pub serial: u64,
    /// Unix time stored in every populated entry
    pub mtime: u64,
}

impl ArchiveStamp {
    /// Stamp from a header serial and an entry mtime
    pub fn new(serial: impl Into<u64>, mtime: u64) -> Self {
        Self {
            serial: serial.into(),
            mtime,
        }
    }
}

/// Stat every source and assign sequential payload offsets
///
/// Fails before anything is read if there are more than 64 files, a file
/// is empty or missing, or an offset would not fit in 32 bits.
pub fn plan<S: ArchiveSource>(files: &[S], version: ArchiveVersion) -> Result<Vec<InputFile>> {
    if files.len() > MAX_ARCHIVE_FILES {
        return Err(BootImgError::TooManyFiles { count: files.len() });
    }

    let base = version.layout().base_offset() as u64;
    let mut offset = base;
    let mut staged = Vec::with_capacity(files.len());

    for source in files {
        let path = source.path();
        let size = source.size()?;
        if size == 0 {
            return Err(BootImgError::EmptyFileNotAllowed { name: path.into() });
        }

        let too_large = || BootImgError::ArchiveTooLarge { name: path.into() };
        let size32 = u32::try_from(size).map_err(|_| too_large())?;
        let offset32 = u32::try_from(offset).map_err(|_| too_large())?;
        // The file must also end inside the addressable range
        offset = offset.checked_add(size).ok_or_else(too_large)?;
        u32::try_from(offset).map_err(|_| too_large())?;

        staged.push(InputFile {
            path: path.into(),
            name: basename(path).into(),
            size: size32,
            offset: offset32,
        });
    }

    debug!(
        "boot archive v{}: {} files, payload at {}",
        version.as_u8(),
        staged.len(),
        base
    );
    Ok(staged)
}

/// Encode `files` into a boot archive
///
/// Files are stored in the order given. The returned buffer is complete;
/// on error nothing is returned.
pub fn encode<S: ArchiveSource>(
    files: &[S],
    version: ArchiveVersion,
    stamp: &ArchiveStamp,
) -> Result<Vec<u8>> {
    let staged = plan(files, version)?;
    let layout = version.layout();

    for file in &staged {
        info!(
            "Adding file '{}' to boot archive.. size: {}, offset: {}",
            file.path, file.size, file.offset
        );
    }

    let total = staged
        .last()
        .map_or(layout.base_offset(), |f| (f.offset + f.size) as usize);
    let mut out = ByteWriter::with_capacity(total);

    ArchiveHeader::new(version, stamp.serial).write(&mut out);

    out.put_u32(staged.len() as u32);
    for slot in 0..MAX_ARCHIVE_FILES {
        let entry = staged
            .get(slot)
            .map_or(TableEntry::NULL, |f| TableEntry::for_file(f, stamp.mtime));
        entry.write(&mut out);
    }
    debug_assert_eq!(out.len(), layout.base_offset());

    for (source, file) in files.iter().zip(&staged) {
        let start = out.len();
        source.read_into(out.buffer_mut())?;
        // The file changed between stat and read
        if out.len() - start != file.size as usize {
            return Err(BootImgError::InputUnavailable {
                name: file.path.clone(),
            });
        }
    }

    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn sources(sizes: &[usize]) -> Vec<MemorySource> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &len)| {
                MemorySource::new(format!("out/apps/f{}", i), alloc::vec![i as u8; len])
            })
            .collect()
    }

    #[test]
    fn test_plan_offsets() {
        let staged = plan(&sources(&[10, 20, 5]), ArchiveVersion::V3).unwrap();
        let offsets: Vec<u32> = staged.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, [5140, 5150, 5170]);
        assert_eq!(staged[1].name, "f1");
    }

    #[test]
    fn test_plan_pre_serial_base() {
        let staged = plan(&sources(&[1, 2]), ArchiveVersion::V1).unwrap();
        assert_eq!(staged[0].offset, 5132);
        assert_eq!(staged[1].offset, 5133);
    }

    #[test]
    fn test_empty_list() {
        let files: [MemorySource; 0] = [];
        let image = encode(&files, ArchiveVersion::V3, &ArchiveStamp::default()).unwrap();
        assert_eq!(image.len(), 5140);
        assert_eq!(&image[16..20], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_total_length() {
        let stamp = ArchiveStamp::new(7u64, 9);
        let image = encode(&sources(&[3, 4]), ArchiveVersion::V3, &stamp).unwrap();
        assert_eq!(image.len(), 5140 + 7);
        assert_eq!(&image[5140..], &[0, 0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_file_rejected_first() {
        let err = plan(&sources(&[4, 0, 2]), ArchiveVersion::V3).unwrap_err();
        assert_eq!(
            err,
            BootImgError::EmptyFileNotAllowed {
                name: "out/apps/f1".into()
            }
        );
    }
}
