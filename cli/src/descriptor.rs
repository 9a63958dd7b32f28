//! JSON partition table descriptions
//!
//! ```json
//! [
//!   { "bootable": "yes", "type": 12, "lba": 2048, "size": 50331648 },
//!   { "type": 131, "size": 67108864 }
//! ]
//! ```
//!
//! Every key is optional: `bootable` defaults to no, `type` to FAT32 LBA,
//! `size` to 1 MiB, and a missing `lba` follows the previous partition.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bootimg::mbr::PartitionSpec;
use serde::Deserialize;

/// `"yes"`/`"no"` as written by hand, or a plain JSON bool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Bootable {
    Flag(bool),
    Word(String),
}

impl Bootable {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Word(word) => word == "yes",
        }
    }
}

impl Default for Bootable {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// One element of the descriptor array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartitionDescriptor {
    #[serde(default)]
    pub bootable: Bootable,

    #[serde(rename = "type", default = "default_type")]
    pub partition_type: u8,

    #[serde(default)]
    pub lba: Option<u32>,

    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_type() -> u8 {
    PartitionSpec::DEFAULT_TYPE
}

fn default_size() -> u64 {
    PartitionSpec::DEFAULT_SIZE
}

impl From<PartitionDescriptor> for PartitionSpec {
    fn from(desc: PartitionDescriptor) -> Self {
        PartitionSpec {
            bootable: desc.bootable.is_set(),
            partition_type: desc.partition_type,
            lba: desc.lba,
            size: desc.size,
        }
    }
}

/// Parse a descriptor array
pub fn parse(json: &str) -> serde_json::Result<Vec<PartitionSpec>> {
    let descriptors: Vec<PartitionDescriptor> = serde_json::from_str(json)?;
    Ok(descriptors.into_iter().map(PartitionSpec::from).collect())
}

/// Read and parse the descriptor file at `path`
pub fn load(path: &Path) -> Result<Vec<PartitionSpec>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read partition description {}", path.display()))?;
    parse(&json).with_context(|| format!("invalid partition description {}", path.display()))
}
