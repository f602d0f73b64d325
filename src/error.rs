//! Error types for solar position and spectral calculations.
//!
//! Kernel failures arrive as packed status codes. The [`status`](crate::status)
//! module turns them into one of the typed errors below, each carrying the
//! value of the field that was rejected.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Validation rules of the shared solar geometry, one per status bit.
///
/// The discriminant is the bit position in a position status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionRule {
    /// Year must be 1950 to 2050.
    Year = 0,
    /// Month must be 1 to 12.
    Month = 1,
    /// Day of month must be 1 to 31.
    Day = 2,
    /// Day of year must be 1 to 366 (365 in common years).
    DayOfYear = 3,
    /// Hour must be 0 to 24, and 24 only at 24:00:00.
    Hour = 4,
    /// Minute must be 0 to 59.
    Minute = 5,
    /// Second must be 0 to 59.
    Second = 6,
    /// UTC offset must be -12 to +12 hours.
    TimeZone = 7,
    /// Measurement interval must be 0 to 28800 seconds.
    Interval = 8,
    /// Latitude must be -90 to +90 degrees.
    Latitude = 9,
    /// Longitude must be -180 to +180 degrees.
    Longitude = 10,
    /// Temperature must be -100 to +100 °C.
    Temperature = 11,
    /// Pressure must be 0 to 2000 millibars.
    Pressure = 12,
    /// Tilt must be -180 to +180 degrees.
    Tilt = 13,
    /// Aspect must be -360 to +360 degrees.
    Aspect = 14,
    /// Shadowband width must be 1 to 100 cm.
    ShadowbandWidth = 15,
    /// Shadowband radius must be 1 to 100 cm.
    ShadowbandRadius = 16,
    /// Shadowband sky factor must be -1 to +1.
    ShadowbandSkyFactor = 17,
}

impl PositionRule {
    /// Gets the bit position of this rule in a status code.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Gets the status code with only this rule's bit set.
    #[must_use]
    pub const fn mask(self) -> i64 {
        1 << self.bit()
    }

    /// Gets the name of the input field checked by this rule.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::DayOfYear => "day of year",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::TimeZone => "time zone",
            Self::Interval => "interval",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::Tilt => "tilt",
            Self::Aspect => "aspect",
            Self::ShadowbandWidth => "shadowband width",
            Self::ShadowbandRadius => "shadowband radius",
            Self::ShadowbandSkyFactor => "shadowband sky factor",
        }
    }
}

/// A rejected input of the shared solar geometry.
///
/// Each rule variant carries the offending value exactly as the caller
/// supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionError {
    /// Year outside 1950 to 2050.
    Year {
        /// The rejected year.
        year: i32,
    },
    /// Month outside 1 to 12.
    Month {
        /// The rejected month.
        month: i32,
    },
    /// Day outside 1 to 31.
    Day {
        /// The rejected day of month.
        day: i32,
    },
    /// Day of year outside the year.
    DayOfYear {
        /// The year the day belongs to.
        year: i32,
        /// The rejected day of year.
        day_of_year: i32,
    },
    /// Hour outside 0 to 24, or 24 with non-zero minutes or seconds.
    Hour {
        /// The rejected hour.
        hour: i32,
    },
    /// Minute outside 0 to 59.
    Minute {
        /// The rejected minute.
        minute: i32,
    },
    /// Second outside 0 to 59.
    Second {
        /// The rejected second.
        second: i32,
    },
    /// UTC offset outside -12 to +12 hours.
    TimeZone {
        /// The rejected offset in hours.
        utc_offset: f32,
    },
    /// Interval outside 0 to 28800 seconds.
    Interval {
        /// The rejected interval in seconds.
        interval: i32,
    },
    /// Latitude outside -90 to +90 degrees.
    Latitude {
        /// The rejected latitude.
        latitude: f32,
    },
    /// Longitude outside -180 to +180 degrees.
    Longitude {
        /// The rejected longitude.
        longitude: f32,
    },
    /// Temperature outside -100 to +100 °C.
    Temperature {
        /// The rejected temperature.
        temperature: f32,
    },
    /// Pressure outside 0 to 2000 millibars.
    Pressure {
        /// The rejected pressure.
        pressure: f32,
    },
    /// Tilt outside -180 to +180 degrees.
    Tilt {
        /// The rejected tilt.
        tilt: f32,
    },
    /// Aspect outside -360 to +360 degrees.
    Aspect {
        /// The rejected aspect.
        aspect: f32,
    },
    /// Shadowband width outside 1 to 100 cm.
    ShadowbandWidth {
        /// The rejected width.
        width: f32,
    },
    /// Shadowband radius outside 1 to 100 cm.
    ShadowbandRadius {
        /// The rejected radius.
        radius: f32,
    },
    /// Shadowband sky factor outside -1 to +1.
    ShadowbandSkyFactor {
        /// The rejected sky factor.
        sky_factor: f32,
    },
    /// More than one rule was violated at once.
    MultipleViolations {
        /// The packed status code; see [`PositionError::rules`].
        code: u64,
    },
    /// The status code has bits that match no known rule.
    Unrecognized {
        /// The raw status code.
        code: i64,
    },
}

impl PositionError {
    /// Gets the single violated rule, or `None` for multiple or unknown violations.
    #[must_use]
    pub const fn rule(&self) -> Option<PositionRule> {
        Some(match self {
            Self::Year { .. } => PositionRule::Year,
            Self::Month { .. } => PositionRule::Month,
            Self::Day { .. } => PositionRule::Day,
            Self::DayOfYear { .. } => PositionRule::DayOfYear,
            Self::Hour { .. } => PositionRule::Hour,
            Self::Minute { .. } => PositionRule::Minute,
            Self::Second { .. } => PositionRule::Second,
            Self::TimeZone { .. } => PositionRule::TimeZone,
            Self::Interval { .. } => PositionRule::Interval,
            Self::Latitude { .. } => PositionRule::Latitude,
            Self::Longitude { .. } => PositionRule::Longitude,
            Self::Temperature { .. } => PositionRule::Temperature,
            Self::Pressure { .. } => PositionRule::Pressure,
            Self::Tilt { .. } => PositionRule::Tilt,
            Self::Aspect { .. } => PositionRule::Aspect,
            Self::ShadowbandWidth { .. } => PositionRule::ShadowbandWidth,
            Self::ShadowbandRadius { .. } => PositionRule::ShadowbandRadius,
            Self::ShadowbandSkyFactor { .. } => PositionRule::ShadowbandSkyFactor,
            Self::MultipleViolations { .. } | Self::Unrecognized { .. } => return None,
        })
    }

    /// Iterates over every violated rule in bit order.
    ///
    /// Yields one rule for single violations, all of them for
    /// [`PositionError::MultipleViolations`], and nothing for
    /// [`PositionError::Unrecognized`].
    pub fn rules(&self) -> impl Iterator<Item = PositionRule> {
        let code = match self {
            Self::MultipleViolations { code } => *code,
            Self::Unrecognized { .. } => 0,
            single => single.rule().map_or(0, |rule| 1 << rule.bit()),
        };
        crate::status::violated_rules(code)
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year { year } => {
                write!(f, "invalid year {year} (must be between 1950 and 2050)")
            }
            Self::Month { month } => {
                write!(f, "invalid month {month} (must be between 1 and 12)")
            }
            Self::Day { day } => write!(f, "invalid day {day} (must be between 1 and 31)"),
            Self::DayOfYear { year, day_of_year } => {
                write!(f, "invalid day of year {day_of_year} for year {year}")
            }
            Self::Hour { hour } => write!(
                f,
                "invalid hour {hour} (must be between 0 and 24, and 24 only at 24:00:00)"
            ),
            Self::Minute { minute } => {
                write!(f, "invalid minute {minute} (must be between 0 and 59)")
            }
            Self::Second { second } => {
                write!(f, "invalid second {second} (must be between 0 and 59)")
            }
            Self::TimeZone { utc_offset } => write!(
                f,
                "invalid time zone {utc_offset} h (must be between -12 and +12 hours)"
            ),
            Self::Interval { interval } => write!(
                f,
                "invalid interval {interval} s (must be between 0 and 28800 seconds)"
            ),
            Self::Latitude { latitude } => write!(
                f,
                "invalid latitude {latitude}° (must be between -90° and +90°)"
            ),
            Self::Longitude { longitude } => write!(
                f,
                "invalid longitude {longitude}° (must be between -180° and +180°)"
            ),
            Self::Temperature { temperature } => write!(
                f,
                "invalid temperature {temperature}°C (must be between -100°C and +100°C)"
            ),
            Self::Pressure { pressure } => write!(
                f,
                "invalid pressure {pressure} mbar (must be between 0 and 2000 mbar)"
            ),
            Self::Tilt { tilt } => {
                write!(f, "invalid tilt {tilt}° (must be between -180° and +180°)")
            }
            Self::Aspect { aspect } => write!(
                f,
                "invalid aspect {aspect}° (must be between -360° and +360°)"
            ),
            Self::ShadowbandWidth { width } => write!(
                f,
                "invalid shadowband width {width} cm (must be between 1 and 100 cm)"
            ),
            Self::ShadowbandRadius { radius } => write!(
                f,
                "invalid shadowband radius {radius} cm (must be between 1 and 100 cm)"
            ),
            Self::ShadowbandSkyFactor { sky_factor } => write!(
                f,
                "invalid shadowband sky factor {sky_factor} (must be between -1 and +1)"
            ),
            Self::MultipleViolations { code } => {
                write!(f, "multiple invalid inputs (status {code}):")?;
                for rule in self.rules() {
                    write!(f, " {}", rule.field())?;
                }
                Ok(())
            }
            Self::Unrecognized { code } => {
                write!(f, "unrecognized position status code {code}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

/// Validation rules of the spectral model, keyed by their negative status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralRule {
    /// Units must be 1, 2 or 3.
    Units = -1,
    /// `tau500` must be 0 to 10.
    Tau500 = -2,
    /// `watvap` must be 0 to 100.
    Watvap = -3,
    /// `assym` must lie strictly between 0 and 1.
    Assym = -4,
}

impl SpectralRule {
    /// Gets the status code reported for this rule.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up the rule for a status code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Units),
            -2 => Some(Self::Tau500),
            -3 => Some(Self::Watvap),
            -4 => Some(Self::Assym),
            _ => None,
        }
    }
}

/// A rejected input of the spectral model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpectralError {
    /// Units other than 1, 2 or 3.
    Units {
        /// The rejected units code.
        units: i32,
    },
    /// Aerosol optical depth outside 0 to 10.
    Tau500 {
        /// The rejected optical depth.
        tau500: f32,
    },
    /// Precipitable water vapor outside 0 to 100 cm.
    Watvap {
        /// The rejected water vapor.
        watvap: f32,
    },
    /// Aerosol asymmetry factor not strictly between 0 and 1.
    Assym {
        /// The rejected asymmetry factor.
        assym: f32,
    },
    /// Negative status code that matches no known rule.
    Unrecognized {
        /// The raw status code.
        code: i64,
    },
}

impl SpectralError {
    /// Gets the violated rule, or `None` for unknown codes.
    #[must_use]
    pub const fn rule(&self) -> Option<SpectralRule> {
        match self {
            Self::Units { .. } => Some(SpectralRule::Units),
            Self::Tau500 { .. } => Some(SpectralRule::Tau500),
            Self::Watvap { .. } => Some(SpectralRule::Watvap),
            Self::Assym { .. } => Some(SpectralRule::Assym),
            Self::Unrecognized { .. } => None,
        }
    }
}

impl fmt::Display for SpectralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units { units } => write!(
                f,
                "invalid units {units} (must be 1 = irradiance, 2 = photon flux \
                 or 3 = photon flux density)"
            ),
            Self::Tau500 { tau500 } => {
                write!(f, "invalid tau500 {tau500} (must be between 0 and 10)")
            }
            Self::Watvap { watvap } => {
                write!(f, "invalid watvap {watvap} cm (must be between 0 and 100 cm)")
            }
            Self::Assym { assym } => write!(
                f,
                "invalid assym {assym} (must be greater than 0 and less than 1)"
            ),
            Self::Unrecognized { code } => {
                write!(f, "unrecognized spectral status code {code}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpectralError {}

/// Errors that can occur during solar position and spectral calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The shared solar geometry rejected an input.
    Position(PositionError),
    /// An element of a batch was rejected. Later elements are not checked.
    BatchPosition {
        /// Index of the first rejected element.
        index: usize,
        /// Why the element was rejected.
        error: PositionError,
    },
    /// The spectral model rejected an input.
    Spectral(SpectralError),
    /// The kernel call itself could not be executed.
    Engine {
        /// Description of the failure.
        message: &'static str,
    },
    /// A calendar date could not be constructed.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// The fixed 8760-hour year was requested for a leap year.
    UnsupportedLeapYear {
        /// The rejected year.
        year: i32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(error) => write!(f, "{error}"),
            Self::BatchPosition { index, error } => {
                write!(f, "batch element {index}: {error}")
            }
            Self::Spectral(error) => write!(f, "{error}"),
            Self::Engine { message } => write!(f, "engine failure: {message}"),
            Self::InvalidDateTime { message } => write!(f, "invalid date/time: {message}"),
            Self::UnsupportedLeapYear { year } => write!(
                f,
                "{year} is a leap year (8784 hours); use an explicit hourly sequence instead"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position(error) | Self::BatchPosition { error, .. } => Some(error),
            Self::Spectral(error) => Some(error),
            _ => None,
        }
    }
}

impl From<PositionError> for Error {
    fn from(error: PositionError) -> Self {
        Self::Position(error)
    }
}

impl From<SpectralError> for Error {
    fn from(error: SpectralError) -> Self {
        Self::Spectral(error)
    }
}

impl Error {
    /// Creates a batch element error.
    #[must_use]
    pub const fn batch_position(index: usize, error: PositionError) -> Self {
        Self::BatchPosition { index, error }
    }

    /// Creates an engine failure.
    #[must_use]
    pub const fn engine(message: &'static str) -> Self {
        Self::Engine { message }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an unsupported leap year error.
    #[must_use]
    pub const fn unsupported_leap_year(year: i32) -> Self {
        Self::UnsupportedLeapYear { year }
    }

    /// Gets the position error of single-point and batch failures.
    #[must_use]
    pub const fn position_error(&self) -> Option<&PositionError> {
        match self {
            Self::Position(error) | Self::BatchPosition { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Gets the spectral error of spectral failures.
    #[must_use]
    pub const fn spectral_error(&self) -> Option<&SpectralError> {
        match self {
            Self::Spectral(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_bits_are_contiguous() {
        assert_eq!(PositionRule::Year.mask(), 1);
        assert_eq!(PositionRule::Minute.mask(), 32);
        assert_eq!(PositionRule::ShadowbandSkyFactor.bit(), 17);
        assert_eq!(PositionRule::ShadowbandSkyFactor.mask(), 131_072);
    }

    #[test]
    fn test_single_rule_lookup() {
        let error = PositionError::Second { second: 61 };
        assert_eq!(error.rule(), Some(PositionRule::Second));
        assert_eq!(error.rules().collect::<Vec<_>>(), [PositionRule::Second]);

        let multiple = PositionError::MultipleViolations { code: 48 };
        assert_eq!(multiple.rule(), None);
        assert_eq!(
            multiple.rules().collect::<Vec<_>>(),
            [PositionRule::Hour, PositionRule::Minute]
        );

        let unknown = PositionError::Unrecognized { code: 1 << 20 };
        assert_eq!(unknown.rule(), None);
        assert_eq!(unknown.rules().count(), 0);
    }

    #[test]
    fn test_spectral_rule_codes() {
        assert_eq!(SpectralRule::Units.code(), -1);
        assert_eq!(SpectralRule::from_code(-4), Some(SpectralRule::Assym));
        assert_eq!(SpectralRule::from_code(-5), None);
        assert_eq!(
            SpectralError::Tau500 { tau500: -1.0 }.rule(),
            Some(SpectralRule::Tau500)
        );
    }

    #[test]
    fn test_position_error_accessor() {
        let error = Error::batch_position(10, PositionError::Second { second: 61 });
        assert_eq!(
            error.position_error(),
            Some(&PositionError::Second { second: 61 })
        );
        assert_eq!(error.spectral_error(), None);

        let error = Error::from(SpectralError::Units { units: 4 });
        assert_eq!(error.position_error(), None);
        assert_eq!(
            error.spectral_error(),
            Some(&SpectralError::Units { units: 4 })
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::from(PositionError::Year { year: 2051 });
        assert_eq!(
            err.to_string(),
            "invalid year 2051 (must be between 1950 and 2050)"
        );

        let err = Error::batch_position(10, PositionError::Second { second: 61 });
        assert_eq!(
            err.to_string(),
            "batch element 10: invalid second 61 (must be between 0 and 59)"
        );

        let err = Error::from(PositionError::MultipleViolations { code: 48 });
        assert_eq!(
            err.to_string(),
            "multiple invalid inputs (status 48): hour minute"
        );

        let err = Error::from(SpectralError::Unrecognized { code: -9 });
        assert_eq!(err.to_string(), "unrecognized spectral status code -9");

        let err = Error::engine("too many elements");
        assert_eq!(err.to_string(), "engine failure: too many elements");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_source() {
        use std::error::Error as _;

        let err = Error::from(PositionError::Latitude { latitude: 91.0 });
        assert!(err.source().is_some());
        assert!(Error::unsupported_leap_year(2016).source().is_none());
    }
}
