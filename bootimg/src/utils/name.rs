//! File name handling for archive table entries

use crate::types::ARCHIVE_NAME_LEN;

/// Final `/`-separated path component
///
/// A backslash is an ordinary name character on the build host.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Pack a name into the fixed 64-byte field
///
/// Longer names are cut at exactly 64 bytes with no terminator; shorter
/// ones are NUL padded.
pub fn name_field(name: &str) -> [u8; ARCHIVE_NAME_LEN] {
    let mut field = [0u8; ARCHIVE_NAME_LEN];
    let bytes = name.as_bytes();
    let len = bytes.len().min(ARCHIVE_NAME_LEN);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}
