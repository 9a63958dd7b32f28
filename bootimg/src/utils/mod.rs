//! Utility functions and helpers

pub mod name;
pub mod pack;
pub mod sector;
pub mod serial;

pub use name::{basename, name_field};
pub use pack::ByteWriter;
pub use sector::bytes_to_sectors;
pub use serial::BuildSerial;
