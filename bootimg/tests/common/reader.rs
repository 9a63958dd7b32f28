//! Reference boot archive reader
//!
//! Parses what the kernel's early loader parses: header, the full 64-slot
//! table, then each file by direct offset.

#![allow(dead_code)]

use bootimg::archive::ArchiveLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub size: u32,
    pub offset: u32,
    pub mtime: u64,
}

#[derive(Debug)]
pub struct ParsedArchive {
    pub tag: u8,
    pub magic: [u8; 3],
    pub version: u8,
    pub reserved: [u8; 3],
    pub serial: Option<u64>,
    pub count: u32,
    /// All 64 slots, including null ones
    pub slots: Vec<ParsedEntry>,
    data: Vec<u8>,
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

fn u64_at(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

impl ParsedArchive {
    pub fn parse(data: &[u8], layout: &ArchiveLayout) -> Self {
        let serial = layout.has_serial.then(|| u64_at(data, 8));
        let count = u32_at(data, layout.header_size);

        let mut slots = Vec::with_capacity(64);
        let mut pos = layout.header_size + 4;
        for _ in 0..64 {
            let raw_name = &data[pos..pos + 64];
            let end = raw_name.iter().position(|&b| b == 0).unwrap_or(64);
            slots.push(ParsedEntry {
                name: String::from_utf8_lossy(&raw_name[..end]).into_owned(),
                size: u32_at(data, pos + 64),
                offset: u32_at(data, pos + 68),
                mtime: u64_at(data, pos + 72),
            });
            pos += 80;
        }

        Self {
            tag: data[0],
            magic: [data[1], data[2], data[3]],
            version: data[4],
            reserved: [data[5], data[6], data[7]],
            serial,
            count,
            slots,
            data: data.to_vec(),
        }
    }

    /// The populated entries
    pub fn entries(&self) -> &[ParsedEntry] {
        &self.slots[..self.count as usize]
    }

    /// File contents located by direct offset
    pub fn contents(&self, entry: &ParsedEntry) -> &[u8] {
        let start = entry.offset as usize;
        &self.data[start..start + entry.size as usize]
    }

    /// Look a file up by name with a bounded linear scan
    pub fn find(&self, name: &str) -> Option<&ParsedEntry> {
        self.slots.iter().find(|e| e.size != 0 && e.name == name)
    }
}
