//! Decoding of packed kernel status codes into typed errors.
//!
//! A status code is zero on success, a bitmask over the 18 position rules
//! when positive, and a small negative enumeration of spectral rules when
//! negative. Payloads are taken from the request the caller made, never
//! from kernel outputs (which are not written on failure).

use crate::error::{Error, PositionError, PositionRule, SpectralError, SpectralRule};
use crate::types::{AtmosphericConditions, DateTime, Location, Orientation, Shadowband, Weather};

/// Position rules in bit order.
pub const POSITION_RULES: [(u32, PositionRule); 18] = [
    (0, PositionRule::Year),
    (1, PositionRule::Month),
    (2, PositionRule::Day),
    (3, PositionRule::DayOfYear),
    (4, PositionRule::Hour),
    (5, PositionRule::Minute),
    (6, PositionRule::Second),
    (7, PositionRule::TimeZone),
    (8, PositionRule::Interval),
    (9, PositionRule::Latitude),
    (10, PositionRule::Longitude),
    (11, PositionRule::Temperature),
    (12, PositionRule::Pressure),
    (13, PositionRule::Tilt),
    (14, PositionRule::Aspect),
    (15, PositionRule::ShadowbandWidth),
    (16, PositionRule::ShadowbandRadius),
    (17, PositionRule::ShadowbandSkyFactor),
];

/// Union of all known position rule bits.
const KNOWN_POSITION_BITS: u64 = (1 << POSITION_RULES.len()) - 1;

/// Coarse classification of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// The call succeeded.
    Success,
    /// One or more position rules failed; the value is the bitmask.
    PositionBits(u64),
    /// A spectral rule failed; the value is the negative code.
    SpectralCode(i64),
}

impl StatusCode {
    /// Classifies a raw status code by its sign.
    #[must_use]
    pub const fn classify(code: i64) -> Self {
        if code == 0 {
            Self::Success
        } else if code > 0 {
            Self::PositionBits(code.unsigned_abs())
        } else {
            Self::SpectralCode(code)
        }
    }

    /// Checks if the code signals success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Iterates over the known rules whose bits are set in `bits`, in bit order.
pub fn violated_rules(bits: u64) -> impl Iterator<Item = PositionRule> {
    POSITION_RULES
        .into_iter()
        .filter(move |(bit, _)| bits & (1 << bit) != 0)
        .map(|(_, rule)| rule)
}

/// Everything the shared solar geometry is asked to validate.
///
/// Built by each engine from the caller's inputs plus the settings the
/// engine applies on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRequest {
    location: Location,
    datetime: DateTime,
    weather: Weather,
    orientation: Orientation,
    shadowband: Shadowband,
    interval: i32,
}

impl PositionRequest {
    /// Creates a request for a horizontal surface, default shadowband and an instantaneous reading.
    #[must_use]
    pub fn new(location: Location, datetime: DateTime, weather: Weather) -> Self {
        Self {
            location,
            datetime,
            weather,
            orientation: Orientation::horizontal(),
            shadowband: Shadowband::default(),
            interval: 0,
        }
    }

    /// Replaces the surface orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Replaces the shadowband geometry.
    #[must_use]
    pub const fn with_shadowband(mut self, shadowband: Shadowband) -> Self {
        self.shadowband = shadowband;
        self
    }

    /// Replaces the measurement interval in seconds (0 for instantaneous values).
    #[must_use]
    pub const fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    /// Gets the location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Gets the local standard date and time.
    #[must_use]
    pub const fn datetime(&self) -> DateTime {
        self.datetime
    }

    /// Gets the weather.
    #[must_use]
    pub const fn weather(&self) -> Weather {
        self.weather
    }

    /// Gets the surface orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Gets the shadowband geometry.
    #[must_use]
    pub const fn shadowband(&self) -> Shadowband {
        self.shadowband
    }

    /// Gets the measurement interval in seconds.
    #[must_use]
    pub const fn interval(&self) -> i32 {
        self.interval
    }

    /// Builds the error for a single violated rule with this request's value.
    #[must_use]
    pub const fn error_for(&self, rule: PositionRule) -> PositionError {
        let datetime = &self.datetime;
        match rule {
            PositionRule::Year => PositionError::Year {
                year: datetime.year(),
            },
            PositionRule::Month => PositionError::Month {
                month: datetime.month(),
            },
            PositionRule::Day => PositionError::Day {
                day: datetime.day(),
            },
            PositionRule::DayOfYear => PositionError::DayOfYear {
                year: datetime.year(),
                day_of_year: datetime.day_of_year(),
            },
            PositionRule::Hour => PositionError::Hour {
                hour: datetime.hour(),
            },
            PositionRule::Minute => PositionError::Minute {
                minute: datetime.minute(),
            },
            PositionRule::Second => PositionError::Second {
                second: datetime.second(),
            },
            PositionRule::TimeZone => PositionError::TimeZone {
                utc_offset: self.location.utc_offset(),
            },
            PositionRule::Interval => PositionError::Interval {
                interval: self.interval,
            },
            PositionRule::Latitude => PositionError::Latitude {
                latitude: self.location.latitude(),
            },
            PositionRule::Longitude => PositionError::Longitude {
                longitude: self.location.longitude(),
            },
            PositionRule::Temperature => PositionError::Temperature {
                temperature: self.weather.temperature(),
            },
            PositionRule::Pressure => PositionError::Pressure {
                pressure: self.weather.pressure(),
            },
            PositionRule::Tilt => PositionError::Tilt {
                tilt: self.orientation.tilt(),
            },
            PositionRule::Aspect => PositionError::Aspect {
                aspect: self.orientation.aspect(),
            },
            PositionRule::ShadowbandWidth => PositionError::ShadowbandWidth {
                width: self.shadowband.width(),
            },
            PositionRule::ShadowbandRadius => PositionError::ShadowbandRadius {
                radius: self.shadowband.radius(),
            },
            PositionRule::ShadowbandSkyFactor => PositionError::ShadowbandSkyFactor {
                sky_factor: self.shadowband.sky_factor(),
            },
        }
    }
}

/// The spectral-only inputs of a spectral request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralRequest {
    units: i32,
    atmosphere: AtmosphericConditions,
}

impl SpectralRequest {
    /// Creates a spectral request snapshot.
    #[must_use]
    pub const fn new(units: i32, atmosphere: AtmosphericConditions) -> Self {
        Self { units, atmosphere }
    }

    /// Gets the requested units code.
    #[must_use]
    pub const fn units(&self) -> i32 {
        self.units
    }

    /// Gets the atmospheric conditions.
    #[must_use]
    pub const fn atmosphere(&self) -> AtmosphericConditions {
        self.atmosphere
    }

    /// Builds the error for a spectral rule with this request's value.
    #[must_use]
    pub const fn error_for(&self, rule: SpectralRule) -> SpectralError {
        match rule {
            SpectralRule::Units => SpectralError::Units { units: self.units },
            SpectralRule::Tau500 => SpectralError::Tau500 {
                tau500: self.atmosphere.tau500(),
            },
            SpectralRule::Watvap => SpectralError::Watvap {
                watvap: self.atmosphere.watvap(),
            },
            SpectralRule::Assym => SpectralError::Assym {
                assym: self.atmosphere.assym(),
            },
        }
    }
}

/// Decodes a status code of the shared solar geometry.
///
/// Exactly one known bit yields that rule's error, several known bits yield
/// [`PositionError::MultipleViolations`], and anything else non-zero yields
/// [`PositionError::Unrecognized`].
///
/// # Errors
/// Returns the decoded error for every non-zero code.
///
/// # Example
/// ```
/// # use solar_utils::{DateTime, Location, PositionError, Weather};
/// # use solar_utils::status::{decode_position, PositionRequest};
/// let request = PositionRequest::new(
///     Location::new(35.56836, -119.2022, -8.0),
///     DateTime::new(2013, 6, 5, 12, 31, 61),
///     Weather::new(1015.62055, 40.0),
/// );
/// assert_eq!(decode_position(0, &request), Ok(()));
/// assert_eq!(
///     decode_position(64, &request),
///     Err(PositionError::Second { second: 61 })
/// );
/// ```
pub fn decode_position(code: i64, request: &PositionRequest) -> Result<(), PositionError> {
    let bits = match StatusCode::classify(code) {
        StatusCode::Success => return Ok(()),
        StatusCode::PositionBits(bits) => bits,
        StatusCode::SpectralCode(code) => return Err(PositionError::Unrecognized { code }),
    };
    if bits & !KNOWN_POSITION_BITS != 0 {
        return Err(PositionError::Unrecognized { code });
    }

    let mut rules = violated_rules(bits);
    match (rules.next(), rules.next()) {
        (Some(rule), None) => Err(request.error_for(rule)),
        _ => Err(PositionError::MultipleViolations { code: bits }),
    }
}

/// Decodes a negative spectral status code.
///
/// # Errors
/// Returns the decoded error for every non-zero code. Positive codes are
/// reported as [`SpectralError::Unrecognized`]; use [`decode_spectral`] to
/// route them to the position decoder.
pub fn decode_spectral_rule(code: i64, request: &SpectralRequest) -> Result<(), SpectralError> {
    if code == 0 {
        return Ok(());
    }
    match SpectralRule::from_code(code) {
        Some(rule) => Err(request.error_for(rule)),
        None => Err(SpectralError::Unrecognized { code }),
    }
}

/// Decodes a status code returned by a spectral call.
///
/// Negative codes are spectral failures, positive codes come from the
/// shared solar geometry and are decoded against `position`.
///
/// # Errors
/// Returns [`Error::Spectral`] or [`Error::Position`] for every non-zero code.
pub fn decode_spectral(
    code: i64,
    spectral: &SpectralRequest,
    position: &PositionRequest,
) -> crate::Result<()> {
    match StatusCode::classify(code) {
        StatusCode::Success => Ok(()),
        StatusCode::PositionBits(_) => decode_position(code, position).map_err(Error::Position),
        StatusCode::SpectralCode(_) => {
            decode_spectral_rule(code, spectral).map_err(Error::Spectral)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(datetime: DateTime) -> PositionRequest {
        PositionRequest::new(
            Location::new(35.56836, -119.2022, -8.0),
            datetime,
            Weather::new(1015.62055, 40.0),
        )
    }

    #[test]
    fn test_classify() {
        assert_eq!(StatusCode::classify(0), StatusCode::Success);
        assert!(StatusCode::classify(0).is_success());
        assert_eq!(StatusCode::classify(48), StatusCode::PositionBits(48));
        assert_eq!(StatusCode::classify(-3), StatusCode::SpectralCode(-3));
    }

    #[test]
    fn test_rule_table_matches_discriminants() {
        for (bit, rule) in POSITION_RULES {
            assert_eq!(rule.bit(), bit);
        }
        assert_eq!(KNOWN_POSITION_BITS, 0x3_FFFF);
    }

    #[test]
    fn test_every_single_bit_decodes_to_its_rule() {
        let request = request(DateTime::new(2013, 6, 5, 12, 31, 0));
        for (bit, rule) in POSITION_RULES {
            let error = decode_position(1 << bit, &request).unwrap_err();
            assert_eq!(error.rule(), Some(rule), "bit {bit}");
        }
    }

    #[test]
    fn test_payloads_come_from_request() {
        let request = request(DateTime::new(2051, 13, 32, 25, 61, 61));
        assert_eq!(
            decode_position(1, &request),
            Err(PositionError::Year { year: 2051 })
        );
        assert_eq!(
            decode_position(2, &request),
            Err(PositionError::Month { month: 13 })
        );
        assert_eq!(
            decode_position(4, &request),
            Err(PositionError::Day { day: 32 })
        );
        assert_eq!(
            decode_position(16, &request),
            Err(PositionError::Hour { hour: 25 })
        );
        assert_eq!(
            decode_position(1 << 9, &request),
            Err(PositionError::Latitude { latitude: 35.56836 })
        );
        assert_eq!(
            decode_position(1 << 12, &request),
            Err(PositionError::Pressure {
                pressure: 1015.62055
            })
        );
        assert_eq!(
            decode_position(1 << 14, &request),
            Err(PositionError::Aspect { aspect: 180.0 })
        );
        assert_eq!(
            decode_position(1 << 15, &request),
            Err(PositionError::ShadowbandWidth { width: 7.6 })
        );
    }

    #[test]
    fn test_multiple_and_unknown_bits() {
        let request = request(DateTime::new(2013, 6, 5, 24, 31, 0));
        assert_eq!(
            decode_position(48, &request),
            Err(PositionError::MultipleViolations { code: 48 })
        );
        assert_eq!(
            decode_position(1 << 18, &request),
            Err(PositionError::Unrecognized { code: 1 << 18 })
        );
        assert_eq!(
            decode_position((1 << 18) | 1, &request),
            Err(PositionError::Unrecognized {
                code: (1 << 18) | 1
            })
        );
        assert_eq!(
            decode_position(-1, &request),
            Err(PositionError::Unrecognized { code: -1 })
        );
    }

    #[test]
    fn test_spectral_codes() {
        let spectral = SpectralRequest::new(
            4,
            AtmosphericConditions::new(1.14, 1.5, -1.0, 11.0, 101.0),
        );
        let position = request(DateTime::new(2013, 6, 5, 12, 31, 0));

        assert_eq!(decode_spectral(0, &spectral, &position), Ok(()));
        assert_eq!(
            decode_spectral(-1, &spectral, &position),
            Err(Error::Spectral(SpectralError::Units { units: 4 }))
        );
        assert_eq!(
            decode_spectral(-2, &spectral, &position),
            Err(Error::Spectral(SpectralError::Tau500 { tau500: 11.0 }))
        );
        assert_eq!(
            decode_spectral(-3, &spectral, &position),
            Err(Error::Spectral(SpectralError::Watvap { watvap: 101.0 }))
        );
        assert_eq!(
            decode_spectral(-4, &spectral, &position),
            Err(Error::Spectral(SpectralError::Assym { assym: 1.5 }))
        );
        assert_eq!(
            decode_spectral(-7, &spectral, &position),
            Err(Error::Spectral(SpectralError::Unrecognized { code: -7 }))
        );
        assert_eq!(
            decode_spectral(1, &spectral, &position),
            Err(Error::Position(PositionError::Year { year: 2013 }))
        );
    }
}
