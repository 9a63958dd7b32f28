//! Build stamp: header serial and entry mtime

use anyhow::{anyhow, Result};
use bootimg::archive::{ArchiveStamp, ArchiveVersion};
use bootimg::utils::BuildSerial;
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use log::debug;

/// Serial for the ISO calendar date of `date`
pub fn serial_for(date: NaiveDate, version: ArchiveVersion) -> BuildSerial {
    let week = date.iso_week();
    BuildSerial::from_iso_date(
        week.year() as u32,
        week.week(),
        date.weekday().number_from_monday(),
        version.as_u8(),
    )
}

/// Stamp for an archive built at `now`, dated `date`
pub fn stamp_at(
    now: DateTime<Utc>,
    date: NaiveDate,
    version: ArchiveVersion,
) -> Result<ArchiveStamp> {
    let mtime = u64::try_from(now.timestamp())
        .map_err(|_| anyhow!("build time {} is before the Unix epoch", now))?;
    Ok(ArchiveStamp::new(serial_for(date, version), mtime))
}

/// Resolve the stamp from the command line
///
/// `SOURCE_DATE_EPOCH` pins both fields and dates the serial in UTC;
/// otherwise the serial uses the local calendar date. Explicit `--serial`
/// and `--mtime` override either field.
pub fn resolve(
    version: ArchiveVersion,
    source_date_epoch: Option<i64>,
    serial: Option<u64>,
    mtime: Option<u64>,
) -> Result<ArchiveStamp> {
    let mut stamp = match source_date_epoch {
        Some(epoch) => {
            let now = DateTime::<Utc>::from_timestamp(epoch, 0)
                .ok_or_else(|| anyhow!("SOURCE_DATE_EPOCH {} is out of range", epoch))?;
            stamp_at(now, now.date_naive(), version)?
        }
        None => stamp_at(Utc::now(), Local::now().date_naive(), version)?,
    };

    if let Some(serial) = serial {
        stamp.serial = serial;
    }
    if let Some(mtime) = mtime {
        stamp.mtime = mtime;
    }
    debug!("build stamp: serial {:#x}, mtime {}", stamp.serial, stamp.mtime);
    Ok(stamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_from_date() {
        // 2026-10-16 is a Friday in ISO week 42
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(serial_for(date, ArchiveVersion::V3).get(), 2075054151475);
    }

    #[test]
    fn test_iso_year_differs_from_calendar_year() {
        // 2027-01-01 belongs to ISO week 53 of 2026
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let expected = BuildSerial::from_iso_date(2026, 53, 5, 3);
        assert_eq!(serial_for(date, ArchiveVersion::V3), expected);
    }

    #[test]
    fn test_source_date_epoch_is_reproducible() {
        let a = resolve(ArchiveVersion::V3, Some(1_700_000_000), None, None).unwrap();
        let b = resolve(ArchiveVersion::V3, Some(1_700_000_000), None, None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mtime, 1_700_000_000);
    }

    #[test]
    fn test_overrides() {
        let stamp = resolve(ArchiveVersion::V3, Some(0), Some(42), Some(7)).unwrap();
        assert_eq!(stamp, ArchiveStamp::new(42u64, 7));
    }

    #[test]
    fn test_negative_epoch_rejected() {
        assert!(resolve(ArchiveVersion::V3, Some(-1), None, None).is_err());
    }
}
