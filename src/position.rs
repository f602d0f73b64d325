//! Single-point solar position and air mass.
//!
//! Inputs are passed to the kernel unchecked. The kernel validates them and
//! any failure is decoded into a [`PositionError`](crate::PositionError)
//! naming the rejected field.

use crate::kernel::{Builtin, Kernel, SolposOutput};
use crate::status::{PositionRequest, decode_position};
use crate::types::{AirMass, Angles, DateTime, Location, Weather};
use crate::{Error, Result};

/// Calculates the solar position and air mass with the built-in kernel.
///
/// The zenith angle is refraction corrected for the given weather. Both air
/// mass values are `-1` when the sun is far below the horizon.
///
/// # Errors
/// Returns [`Error::Position`] naming the first rule the inputs violate.
///
/// # Example
/// ```
/// use solar_utils::{DateTime, Location, Weather, solar_position};
///
/// let (angles, air_mass) = solar_position(
///     Location::new(35.56836, -119.2022, -8.0),
///     DateTime::new(2013, 6, 5, 12, 31, 0),
///     Weather::new(1015.62055, 40.0),
/// )
/// .unwrap();
///
/// assert!((angles.zenith() - 15.074).abs() < 0.001);
/// assert!((angles.azimuth() - 213.290).abs() < 0.001);
/// assert!((air_mass.relative() - 1.0352).abs() < 0.0001);
/// ```
pub fn solar_position(
    location: Location,
    datetime: DateTime,
    weather: Weather,
) -> Result<(Angles, AirMass)> {
    solar_position_with(&Builtin, location, datetime, weather)
}

/// Calculates the solar position and air mass with the given kernel.
///
/// # Errors
/// Returns [`Error::Position`] naming the first rule the inputs violate.
pub fn solar_position_with<K: Kernel + ?Sized>(
    kernel: &K,
    location: Location,
    datetime: DateTime,
    weather: Weather,
) -> Result<(Angles, AirMass)> {
    let output = solar_position_detailed_with(kernel, location, datetime, weather)?;
    Ok((Angles::from(output.angles), AirMass::from(output.airmass)))
}

/// Calculates the solar position and returns everything the kernel reports.
///
/// Besides angles and air mass, the output echoes the day of year, interval,
/// orientation and shadowband the kernel applied.
///
/// # Errors
/// Returns [`Error::Position`] naming the first rule the inputs violate.
pub fn solar_position_detailed(
    location: Location,
    datetime: DateTime,
    weather: Weather,
) -> Result<SolposOutput> {
    solar_position_detailed_with(&Builtin, location, datetime, weather)
}

/// Like [`solar_position_detailed`], with the given kernel.
///
/// # Errors
/// Returns [`Error::Position`] naming the first rule the inputs violate.
pub fn solar_position_detailed_with<K: Kernel + ?Sized>(
    kernel: &K,
    location: Location,
    datetime: DateTime,
    weather: Weather,
) -> Result<SolposOutput> {
    let output = kernel.solpos_am(
        &location.to_array(),
        &datetime.to_array(),
        &weather.to_array(),
    );
    #[cfg(feature = "log")]
    log::trace!("solpos_am {datetime:?} -> status {}", output.status);

    let request = PositionRequest::new(location, datetime, weather);
    decode_position(output.status, &request).map_err(Error::Position)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PositionError;
    use crate::kernel::Spectrl2Output;

    fn location() -> Location {
        Location::new(35.56836, -119.2022, -8.0)
    }

    fn weather() -> Weather {
        Weather::new(1015.62055, 40.0)
    }

    /// Reports the configured status and fixed outputs.
    struct Scripted {
        status: i64,
    }

    impl Kernel for Scripted {
        fn solpos_am(&self, _: &[f32; 3], _: &[i32; 6], _: &[f32; 2]) -> SolposOutput {
            SolposOutput {
                angles: [10.0, 20.0],
                airmass: [1.5, 1.4],
                ..SolposOutput::failed(self.status)
            }
        }

        fn spectrl2(
            &self,
            _: i32,
            _: &[f32; 3],
            _: &[i32; 6],
            _: &[f32; 2],
            _: &[f32; 2],
            _: &[f32; 5],
            _: &[f32; 12],
        ) -> Spectrl2Output {
            Spectrl2Output::failed(self.status)
        }
    }

    #[test]
    fn test_reference_position() {
        let (angles, air_mass) =
            solar_position(location(), DateTime::new(2013, 6, 5, 12, 31, 0), weather()).unwrap();

        assert!((angles.zenith() / 15.074 - 1.0).abs() < 1e-3);
        assert!((angles.azimuth() / 213.290 - 1.0).abs() < 1e-3);
        assert!((air_mass.relative() / 1.0352 - 1.0).abs() < 1e-3);
        assert!((air_mass.pressure_corrected() / 1.0379 - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_detailed_output() {
        let output =
            solar_position_detailed(location(), DateTime::new(2013, 6, 5, 12, 31, 0), weather())
                .unwrap();
        assert_eq!(output.settings, [156, 0]);
        assert_eq!(output.orientation, [0.0, 180.0]);
    }

    #[test]
    fn test_each_datetime_field_is_named() {
        let cases = [
            (DateTime::new(2051, 6, 5, 12, 31, 0), PositionError::Year { year: 2051 }),
            (DateTime::new(2013, 13, 5, 12, 31, 0), PositionError::Month { month: 13 }),
            (DateTime::new(2013, 6, 32, 12, 31, 0), PositionError::Day { day: 32 }),
            (DateTime::new(2013, 6, 5, 25, 31, 0), PositionError::Hour { hour: 25 }),
            (DateTime::new(2013, 6, 5, 12, 61, 0), PositionError::Minute { minute: 61 }),
            (DateTime::new(2013, 6, 5, 12, 31, 61), PositionError::Second { second: 61 }),
        ];
        for (datetime, expected) in cases {
            assert_eq!(
                solar_position(location(), datetime, weather()),
                Err(Error::Position(expected)),
                "{datetime:?}"
            );
        }
    }

    #[test]
    fn test_location_and_weather_fields_are_named() {
        let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);
        assert_eq!(
            solar_position(Location::new(91.0, 0.0, 0.0), datetime, weather()),
            Err(Error::Position(PositionError::Latitude { latitude: 91.0 }))
        );
        assert_eq!(
            solar_position(Location::new(0.0, 0.0, 13.0), datetime, weather()),
            Err(Error::Position(PositionError::TimeZone { utc_offset: 13.0 }))
        );
        assert_eq!(
            solar_position(location(), datetime, Weather::new(-1.0, 15.0)),
            Err(Error::Position(PositionError::Pressure { pressure: -1.0 }))
        );
    }

    #[test]
    fn test_custom_kernel() {
        let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);
        let (angles, air_mass) =
            solar_position_with(&Scripted { status: 0 }, location(), datetime, weather()).unwrap();
        assert_eq!(angles, Angles::new(10.0, 20.0));
        assert_eq!(air_mass, AirMass::new(1.5, 1.4));

        assert_eq!(
            solar_position_with(&Scripted { status: 1 << 7 }, location(), datetime, weather()),
            Err(Error::Position(PositionError::TimeZone { utc_offset: -8.0 }))
        );
        assert_eq!(
            solar_position_with(&Scripted { status: 1 << 20 }, location(), datetime, weather()),
            Err(Error::Position(PositionError::Unrecognized { code: 1 << 20 }))
        );
    }

    #[test]
    fn test_identical_inputs_give_identical_outputs() {
        let datetime = DateTime::new(2017, 1, 1, 7, 0, 0);
        assert_eq!(
            solar_position(location(), datetime, weather()),
            solar_position(location(), datetime, weather())
        );
    }
}
