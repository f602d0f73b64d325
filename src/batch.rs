//! Solar position and air mass for ordered sequences of date-times.
//!
//! A batch shares one location and one weather across all elements and is
//! handed to the kernel in a single call. The result is index aligned with
//! the input. Batches fail fast: the first rejected element is reported and
//! no partial results are returned.

use alloc::vec::Vec;

use crate::kernel::{Builtin, Kernel};
use crate::status::{PositionRequest, decode_position};
use crate::types::{AirMass, Angles, DateTime, Location, Weather};
use crate::{Error, Result};

#[cfg(feature = "chrono")]
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Hours in a common (non-leap) year.
pub const HOURS_PER_YEAR: usize = 8760;

/// Index-aligned solar positions of a batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchPositions {
    angles: Vec<Angles>,
    air_masses: Vec<AirMass>,
}

impl BatchPositions {
    /// Gets the angles, one per input date-time.
    #[must_use]
    pub fn angles(&self) -> &[Angles] {
        &self.angles
    }

    /// Gets the air masses, one per input date-time.
    #[must_use]
    pub fn air_masses(&self) -> &[AirMass] {
        &self.air_masses
    }

    /// Gets the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Checks if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Gets the angles and air mass of one element.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(Angles, AirMass)> {
        Some((*self.angles.get(index)?, *self.air_masses.get(index)?))
    }

    /// Iterates over `(angles, air mass)` pairs in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Angles, AirMass)> + '_ {
        self.angles
            .iter()
            .copied()
            .zip(self.air_masses.iter().copied())
    }
}

/// Calculates solar positions for many date-times with the built-in kernel.
///
/// # Errors
/// Returns [`Error::BatchPosition`] for the first rejected element.
///
/// # Example
/// ```
/// use solar_utils::{DateTime, Location, Weather, solar_positions};
///
/// let datetimes: Vec<DateTime> = (0..24)
///     .map(|hour| DateTime::new(2017, 1, 1, hour, 0, 0))
///     .collect();
/// let positions = solar_positions(
///     Location::new(35.56836, -119.2022, -8.0),
///     &datetimes,
///     Weather::new(1015.62055, 40.0),
/// )
/// .unwrap();
///
/// assert_eq!(positions.len(), 24);
/// assert!(!positions.air_masses()[0].is_defined());
/// assert!(positions.air_masses()[12].is_defined());
/// ```
pub fn solar_positions(
    location: Location,
    datetimes: &[DateTime],
    weather: Weather,
) -> Result<BatchPositions> {
    solar_positions_with(&Builtin, location, datetimes, weather)
}

/// Calculates solar positions for many date-times with the given kernel.
///
/// Every element is computed before statuses are scanned in index order.
///
/// # Errors
/// Returns [`Error::Engine`] if the kernel could not run the batch or
/// returned buffers that do not match the input length, and
/// [`Error::BatchPosition`] for the first rejected element otherwise.
pub fn solar_positions_with<K: Kernel + ?Sized>(
    kernel: &K,
    location: Location,
    datetimes: &[DateTime],
    weather: Weather,
) -> Result<BatchPositions> {
    let packed: Vec<[i32; 6]> = datetimes.iter().map(DateTime::to_array).collect();
    let output = kernel.solpos_am_batch(&location.to_array(), &packed, &weather.to_array())?;

    let count = datetimes.len();
    if output.status.len() != count || output.angles.len() != count || output.airmass.len() != count
    {
        return Err(Error::engine(
            "kernel returned buffers that do not match the batch length",
        ));
    }

    let failure = output
        .status
        .iter()
        .zip(datetimes)
        .enumerate()
        .find(|(_, (status, _))| **status != 0);
    if let Some((index, (&status, &datetime))) = failure {
        #[cfg(feature = "log")]
        log::debug!("batch of {count} failed at element {index} ({datetime:?}), status {status}");

        let request = PositionRequest::new(location, datetime, weather);
        if let Err(error) = decode_position(status, &request) {
            return Err(Error::batch_position(index, error));
        }
    }

    Ok(BatchPositions {
        angles: output.angles.into_iter().map(Angles::from).collect(),
        air_masses: output.airmass.into_iter().map(AirMass::from).collect(),
    })
}

/// Generates `count` date-times one hour apart, starting at `start`.
///
/// # Errors
/// Returns [`Error::InvalidDateTime`] if the sequence leaves chrono's
/// supported date range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_utils::DateTime;
/// use solar_utils::batch::hourly_datetimes;
///
/// let start = NaiveDate::from_ymd_opt(2016, 12, 31).unwrap().and_hms_opt(23, 0, 0).unwrap();
/// let hours = hourly_datetimes(start, 2).unwrap();
/// assert_eq!(hours, [DateTime::new(2016, 12, 31, 23, 0, 0), DateTime::new(2017, 1, 1, 0, 0, 0)]);
/// ```
#[cfg(feature = "chrono")]
pub fn hourly_datetimes(start: NaiveDateTime, count: usize) -> Result<Vec<DateTime>> {
    (0..count)
        .map(|hour| {
            i64::try_from(hour)
                .ok()
                .and_then(TimeDelta::try_hours)
                .and_then(|offset| start.checked_add_signed(offset))
                .map(DateTime::from)
                .ok_or(Error::invalid_datetime(
                    "hourly sequence exceeds the supported date range",
                ))
        })
        .collect()
}

/// Generates the 8760 hourly date-times of a common year, from January 1st 00:00:00.
///
/// # Errors
/// Returns [`Error::UnsupportedLeapYear`] for leap years, which have 8784
/// hours; use [`hourly_datetimes`] for those. Returns
/// [`Error::InvalidDateTime`] for years chrono cannot represent.
#[cfg(feature = "chrono")]
pub fn hourly_year(year: i32) -> Result<Vec<DateTime>> {
    if crate::types::is_leap_year(year) {
        return Err(Error::unsupported_leap_year(year));
    }
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(Error::invalid_datetime("year outside the supported date range"))?;
    hourly_datetimes(start, HOURS_PER_YEAR)
}

/// Calculates hourly solar positions for a whole common year.
///
/// # Errors
/// Returns the errors of [`hourly_year`] and [`solar_positions`].
#[cfg(feature = "chrono")]
pub fn solar_positions_for_year(
    location: Location,
    year: i32,
    weather: Weather,
) -> Result<BatchPositions> {
    solar_positions(location, &hourly_year(year)?, weather)
}
