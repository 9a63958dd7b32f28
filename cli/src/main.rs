//! mkbootimg: boot archive and MBR producer for the disk image build
//!
//! Usage:
//!   mkbootimg initrd --dest out/initrd.img --file out/apps/init --file out/apps/mount
//!   mkbootimg mbr build/partitions.json out/mbr.bin
//!   mkbootimg mbr build/partitions.json out/os.img --into

mod args;
mod descriptor;
mod stamp;

use std::fs::{self, OpenOptions};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bootimg::archive::{self, ArchiveVersion, HostFile};
use bootimg::mbr::{write_boot_record, BootRecord, VolumeId};
use clap::Parser;
use gpt_disk_io::BlockIoAdapter;
use gpt_disk_types::BlockSize;
use log::{info, LevelFilter};

use args::{Cli, Command, InitrdArgs, MbrArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        Command::Initrd(args) => run_initrd(args),
        Command::Mbr(args) => run_mbr(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_initrd(args: InitrdArgs) -> Result<()> {
    let version = ArchiveVersion::from_u8(args.format_version)?;
    let stamp = stamp::resolve(version, args.source_date_epoch, args.serial, args.mtime)?;

    let files: Vec<HostFile> = args.files.iter().map(HostFile::new).collect();
    // Encode fully before touching the destination
    let image = archive::encode(&files, version, &stamp)?;

    fs::write(&args.dest, &image)
        .with_context(|| format!("cannot write {}", args.dest.display()))?;
    info!("Size of boot archive: {} bytes", image.len());
    Ok(())
}

fn run_mbr(args: MbrArgs) -> Result<()> {
    let specs = descriptor::load(&args.source)?;
    let volume_id = args
        .volume_id
        .unwrap_or_else(|| VolumeId::generate(&mut rand::rng()));
    let record = BootRecord::new(&specs, volume_id)?;

    if args.into {
        let mut image = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&args.dest)
            .with_context(|| format!("cannot open disk image {}", args.dest.display()))?;
        let mut block_io = BlockIoAdapter::new(&mut image, BlockSize::BS_512);
        write_boot_record(&mut block_io, &record)
            .with_context(|| format!("cannot update boot record of {}", args.dest.display()))?;
    } else {
        fs::write(&args.dest, record.encode())
            .with_context(|| format!("cannot write {}", args.dest.display()))?;
    }

    info!(
        "Wrote boot record with {} partitions, volume id {}",
        record.table().len(),
        volume_id
    );
    Ok(())
}
