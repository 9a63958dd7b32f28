//! Build serial numbers
//!
//! The archive header carries a provenance stamp derived from the ISO
//! calendar date of the build. It is informative only; nothing orders or
//! compares archives by it.

/// Fixed tag OR'ed into the low bits of every serial
pub const SERIAL_TAG: u64 = 0x11730;

/// Packed build date, tag and format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildSerial(pub u64);

impl BuildSerial {
    /// Build a serial from an ISO calendar date
    ///
    /// `((year * 1_000_000 + week * 10_000 + weekday) << 10) | 0x11730 | version`.
    /// The tag overlaps the shifted date bits; the OR is applied as is.
    pub fn from_iso_date(iso_year: u32, iso_week: u32, iso_weekday: u32, version: u8) -> Self {
        let date = iso_year as u64 * 1_000_000 + iso_week as u64 * 10_000 + iso_weekday as u64;
        Self((date << 10) | SERIAL_TAG | version as u64)
    }

    /// Raw 64-bit value as stored in the header
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<BuildSerial> for u64 {
    fn from(serial: BuildSerial) -> u64 {
        serial.0
    }
}
