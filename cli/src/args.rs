//! Command line surface

use std::path::PathBuf;

use bootimg::mbr::VolumeId;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mkbootimg",
    version,
    about = "Build the boot archive and MBR of a bootable disk image"
)]
pub struct Cli {
    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pack files into a boot archive (initrd)
    Initrd(InitrdArgs),
    /// Write an MBR partition table described by a JSON file
    Mbr(MbrArgs),
}

#[derive(Debug, Args)]
pub struct InitrdArgs {
    /// The file where the image will be written to
    #[arg(long)]
    pub dest: PathBuf,

    /// A file to add to the image (repeatable, kept in order)
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Archive format version
    #[arg(long, default_value_t = 3)]
    pub format_version: u8,

    /// Header serial, instead of one derived from the build date
    #[arg(long)]
    pub serial: Option<u64>,

    /// Entry mtime in Unix seconds, instead of the build time
    #[arg(long)]
    pub mtime: Option<u64>,

    /// Pin the build time for reproducible images
    #[arg(long, env = "SOURCE_DATE_EPOCH", hide_env_values = true)]
    pub source_date_epoch: Option<i64>,
}

#[derive(Debug, Args)]
pub struct MbrArgs {
    /// JSON file describing the partition table
    pub source: PathBuf,

    /// Output file for the 512-byte boot record
    pub dest: PathBuf,

    /// Overlay onto sector 0 of an existing disk image, keeping its boot code
    #[arg(long)]
    pub into: bool,

    /// Disk signature as 8 hex digits, instead of a random one
    #[arg(long, value_parser = parse_volume_id)]
    pub volume_id: Option<VolumeId>,
}

/// Parse `deadbeef` or `0xDEADBEEF`
pub fn parse_volume_id(value: &str) -> Result<VolumeId, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.len() != 8 {
        return Err(format!("expected 8 hex digits, got '{}'", value));
    }
    u32::from_str_radix(digits, 16)
        .map(VolumeId::from)
        .map_err(|e| format!("invalid volume id '{}': {}", value, e))
}
