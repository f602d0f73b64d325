//! SOLPOS 2.0 solar position kernel.
//!
//! Port of the NREL SOLPOS routines: Michalsky (1988) almanac algorithm for
//! solar position, Spencer (1971) Earth radius vector, Zimmerman refraction
//! correction and Kasten & Young (1989) air mass, plus extraterrestrial
//! radiation, tilted-surface incidence and the shadowband correction.
//!
//! Intermediate values are stored in single precision between steps, as in
//! NREL's C code, so that results agree with published reference data.
//!
//! References:
//! - Michalsky, J. (1988). The Astronomical Almanac's algorithm for approximate
//!   solar position (1950-2050). Solar Energy, 40(3), 227-235.
//! - Kasten, F.; Young, A. (1989). Revised optical air mass tables and
//!   approximation formula. Applied Optics, 28(22), 4735-4738.

#![allow(clippy::excessive_precision)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::PositionRule;
use crate::math::{acos, asin, atan2, cos, exp, powf, powi, sin, tan, wrap_to_period};
use crate::status::PositionRequest;

/// Degrees to radians in single precision.
pub const RADDEG: f32 = 0.017_453_292_5;

/// Radians to degrees in single precision.
pub const DEGRAD: f32 = 57.295_779_513;

/// Solar constant in W/m².
pub const SOLAR_CONSTANT: f32 = 1367.0;

/// Sunrise/sunset marker for days without sunrise (polar night) or sunset (midnight sun).
pub const NO_SUNRISE_SUNSET: f32 = 2999.0;

/// Which input groups are validated before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stages {
    /// Date, time, location, interval and weather.
    ///
    /// Enough for zenith, azimuth, refraction and air mass.
    Position,
    /// Everything in [`Stages::Position`] plus tilt, aspect and shadowband.
    All,
}

/// Complete solar geometry for one instant.
///
/// Angles are in degrees and times in minutes from local standard midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// Day of year (1 = January 1st)
    pub day_of_year: i32,
    /// Earth radius vector (multiplied to the solar constant)
    pub erv: f32,
    /// Solar declination
    pub declination: f32,
    /// Hour angle (-180 to 180, negative before solar noon)
    pub hour_angle: f32,
    /// Zenith angle without refraction, capped at 99°
    pub zenith_etr: f32,
    /// Elevation angle without refraction
    pub elevation_etr: f32,
    /// Azimuth angle (N=0, E=90, S=180, W=270)
    pub azimuth: f32,
    /// Refraction corrected zenith angle
    pub zenith: f32,
    /// Refraction corrected elevation angle
    pub elevation: f32,
    /// Cosine of the refraction corrected zenith angle
    pub cos_zenith: f32,
    /// Relative optical air mass, -1 above 93° zenith
    pub air_mass: f32,
    /// Pressure corrected air mass, -1 above 93° zenith
    pub air_mass_pressure: f32,
    /// Extraterrestrial direct normal irradiance (W/m²), 0 below the horizon
    pub etrn: f32,
    /// Extraterrestrial global horizontal irradiance (W/m²)
    pub etr: f32,
    /// Extraterrestrial irradiance on the tilted surface (W/m²)
    pub etr_tilt: f32,
    /// Cosine of the angle of incidence on the tilted surface
    pub cos_incidence: f32,
    /// Shadowband correction factor
    pub shadowband_correction: f32,
    /// Sunset hour angle
    pub sunset_hour_angle: f32,
    /// True solar time minus local standard time, in minutes
    pub true_solar_time_offset: f32,
    /// Equation of time in minutes
    pub equation_of_time: f32,
    /// Sunrise, or `±2999` when the sun never rises or never sets
    pub sunrise: f32,
    /// Sunset, or `±2999` when the sun never rises or never sets
    pub sunset: f32,
    /// Perez global-to-direct conversion factor
    pub prime: f32,
    /// Reciprocal of [`SolarGeometry::prime`]
    pub unprime: f32,
}

/// Validates the request and computes its solar geometry.
///
/// # Errors
/// Returns the packed status code (a bitmask over [`PositionRule`]) if any
/// validated input is out of range. All violations are reported, not just
/// the first.
///
/// # Example
/// ```
/// use solar_utils::{DateTime, Location, Weather};
/// use solar_utils::kernel::solpos::{solpos, Stages};
/// use solar_utils::status::PositionRequest;
///
/// let request = PositionRequest::new(
///     Location::new(35.56836, -119.2022, -8.0),
///     DateTime::new(2013, 6, 5, 12, 31, 0),
///     Weather::new(1015.62055, 40.0),
/// );
/// let geometry = solpos(&request, Stages::Position).unwrap();
/// assert!((geometry.zenith - 15.074).abs() < 0.001);
/// assert!((geometry.azimuth - 213.290).abs() < 0.001);
/// ```
pub fn solpos(request: &PositionRequest, stages: Stages) -> Result<SolarGeometry, i64> {
    match validate(request, stages) {
        0 => Ok(solar_geometry(request)),
        status => Err(status),
    }
}

/// Checks every input of the given stages and returns the packed status code.
#[must_use]
pub fn validate(request: &PositionRequest, stages: Stages) -> i64 {
    let datetime = request.datetime();
    let location = request.location();
    let weather = request.weather();
    let (hour, minute, second) = (datetime.hour(), datetime.minute(), datetime.second());

    let mut status = violations(&[
        (PositionRule::Year, !(1950..=2050).contains(&datetime.year())),
        (PositionRule::Month, !(1..=12).contains(&datetime.month())),
        (PositionRule::Day, !(1..=31).contains(&datetime.day())),
        (PositionRule::Hour, !(0..=24).contains(&hour)),
        (PositionRule::Minute, !(0..=59).contains(&minute)),
        (PositionRule::Second, !(0..=59).contains(&second)),
        (PositionRule::TimeZone, location.utc_offset().abs() > 12.0),
        (
            PositionRule::Interval,
            !(0..=28_800).contains(&request.interval()),
        ),
        (PositionRule::Latitude, location.latitude().abs() > 90.0),
        (PositionRule::Longitude, location.longitude().abs() > 180.0),
        (PositionRule::Temperature, weather.temperature().abs() > 100.0),
        (
            PositionRule::Pressure,
            weather.pressure() < 0.0 || weather.pressure() > 2000.0,
        ),
    ]);

    // 24:00:00 is the only valid time in hour 24
    if hour == 24 && minute > 0 {
        status |= PositionRule::Hour.mask() | PositionRule::Minute.mask();
    }
    if hour == 24 && second > 0 {
        status |= PositionRule::Hour.mask() | PositionRule::Second.mask();
    }

    if stages == Stages::All {
        let orientation = request.orientation();
        let shadowband = request.shadowband();
        status |= violations(&[
            (PositionRule::Tilt, orientation.tilt().abs() > 180.0),
            (PositionRule::Aspect, orientation.aspect().abs() > 360.0),
            (
                PositionRule::ShadowbandWidth,
                shadowband.width() < 1.0 || shadowband.width() > 100.0,
            ),
            (
                PositionRule::ShadowbandRadius,
                shadowband.radius() < 1.0 || shadowband.radius() > 100.0,
            ),
            (
                PositionRule::ShadowbandSkyFactor,
                shadowband.sky_factor().abs() > 1.0,
            ),
        ]);
    }

    status
}

fn violations(checks: &[(PositionRule, bool)]) -> i64 {
    checks
        .iter()
        .filter(|(_, violated)| *violated)
        .fold(0, |status, (rule, _)| status | rule.mask())
}

/// Computes the solar geometry of an already validated request.
#[must_use]
pub fn solar_geometry(request: &PositionRequest) -> SolarGeometry {
    let location = request.location();
    let datetime = request.datetime();
    let weather = request.weather();
    let orientation = request.orientation();
    let shadowband = request.shadowband();
    let interval = f64::from(request.interval());
    let latitude = location.latitude();
    let longitude = location.longitude();
    let utc_offset = location.utc_offset();
    let (hour, minute, second) = (
        f64::from(datetime.hour()),
        f64::from(datetime.minute()),
        f64::from(datetime.second()),
    );

    let day_of_year = datetime.day_of_year();

    // Earth radius vector (Spencer 1971)
    let dayang = (360.0 * f64::from(day_of_year - 1) / 365.0) as f32;
    let (sin_day, cos_day) = (sin(radians(dayang)), cos(radians(dayang)));
    let dayang2 = 2.0 * dayang;
    let (sin_day2, cos_day2) = (sin(radians(dayang2)), cos(radians(dayang2)));
    let erv = (1.000_110 + 0.034_221 * cos_day + 0.001_280 * sin_day) as f32;
    let erv = (f64::from(erv) + 0.000_719 * cos_day2 + 0.000_077 * sin_day2) as f32;

    // Universal time, Julian day and ecliptic coordinates (Michalsky 1988)
    let seconds = hour * 3600.0 + minute * 60.0 + second - interval / 2.0;
    let utime = (round_f32(seconds) / 3600.0 - f64::from(utc_offset)) as f32;
    let delta = (datetime.year() - 1949) as f32;
    let leap = (f64::from(delta) / 4.0) as i32;
    let julday = (32_916.5
        + f64::from(delta) * 365.0
        + f64::from(leap)
        + f64::from(day_of_year)
        + f64::from(utime) / 24.0) as f32;
    let ectime = round_f32(f64::from(julday) - 51_545.0);

    let mean_longitude = wrap(280.460 + 0.985_647_4 * ectime, 360.0);
    let mean_anomaly = wrap(357.528 + 0.985_600_3 * ectime, 360.0);
    let ecliptic_longitude = wrap(
        f64::from(mean_longitude)
            + 1.915 * sin(radians(mean_anomaly))
            + 0.020 * sin(2.0 * f64::from(mean_anomaly) * f64::from(RADDEG)),
        360.0,
    );
    let obliquity = (23.439 - 4.0e-07 * ectime) as f32;

    let declination = degrees(asin(
        sin(radians(obliquity)) * sin(radians(ecliptic_longitude)),
    ));
    let top = round_f32(cos(radians(obliquity)) * sin(radians(ecliptic_longitude)));
    let bottom = round_f32(cos(radians(ecliptic_longitude)));
    let mut right_ascension = degrees(atan2(top, bottom));
    if right_ascension < 0.0 {
        right_ascension += 360.0;
    }

    let gmst = wrap(6.697_375 + 0.065_709_824_2 * ectime + f64::from(utime), 24.0);
    let lmst = wrap(f64::from(gmst) * 15.0 + f64::from(longitude), 360.0);
    let mut hour_angle = lmst - right_ascension;
    if hour_angle < -180.0 {
        hour_angle += 360.0;
    } else if hour_angle > 180.0 {
        hour_angle -= 360.0;
    }

    let cos_dec = round_f32(cos(radians(declination)));
    let sin_dec = round_f32(sin(radians(declination)));
    let cos_lat = round_f32(cos(radians(latitude)));
    let sin_lat = round_f32(sin(radians(latitude)));
    let cos_ha = round_f32(cos(radians(hour_angle)));

    // Zenith angle without refraction
    let cos_zenith_etr =
        round_f32(sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let zenith_etr = degrees(acos(cos_zenith_etr)).min(99.0);
    let elevation_etr = 90.0 - zenith_etr;

    // Azimuth, measured clockwise from north
    let cos_elev = round_f32(cos(radians(elevation_etr)));
    let sin_elev = round_f32(sin(radians(elevation_etr)));
    let cecl = round_f32(cos_elev * cos_lat);
    let azimuth = if cecl.abs() >= 0.001 {
        let cos_azimuth = round_f32((sin_elev * sin_lat - sin_dec) / cecl).clamp(-1.0, 1.0);
        let azimuth = (180.0 - f64::from(DEGRAD) * acos(cos_azimuth)) as f32;
        if hour_angle > 0.0 {
            360.0 - azimuth
        } else {
            azimuth
        }
    } else {
        180.0
    };

    // Refraction correction
    let refraction =
        refraction_correction(elevation_etr, weather.pressure(), weather.temperature());
    let elevation = ((f64::from(elevation_etr) + f64::from(refraction)) as f32).max(-9.0);
    let zenith = 90.0 - elevation;
    let cos_zenith = cos(radians(zenith)) as f32;

    // Air mass (Kasten & Young 1989)
    let (air_mass, air_mass_pressure) = if zenith > 93.0 {
        (-1.0, -1.0)
    } else {
        let air_mass = (1.0
            / (cos(radians(zenith)) + 0.505_72 * powf(96.079_95 - f64::from(zenith), -1.6364)))
            as f32;
        let air_mass_pressure =
            (f64::from(air_mass) * f64::from(weather.pressure()) / 1013.0) as f32;
        (air_mass, air_mass_pressure)
    };

    // Perez global-to-direct conversion factor
    let unprime = (1.031 * exp(-1.4 / (0.9 + 9.4 / f64::from(air_mass))) + 0.1) as f32;
    let prime = 1.0 / unprime;

    // Extraterrestrial radiation
    let (etrn, etr) = if cos_zenith > 0.0 {
        let etrn = SOLAR_CONSTANT * erv;
        (etrn, etrn * cos_zenith)
    } else {
        (0.0, 0.0)
    };

    // Sunset hour angle
    let cos_dec_cos_lat = round_f32(cos_dec * cos_lat);
    let sunset_hour_angle = if cos_dec_cos_lat.abs() >= 0.001 {
        let cos_ssha = round_f32(-sin_lat * sin_dec / cos_dec_cos_lat);
        if cos_ssha < -1.0 {
            180.0
        } else if cos_ssha > 1.0 {
            0.0
        } else {
            degrees(acos(cos_ssha))
        }
    } else if (declination >= 0.0 && latitude > 0.0) || (declination < 0.0 && latitude < 0.0) {
        180.0
    } else {
        0.0
    };

    // Shadowband correction factor (Drummond 1956)
    let band = 0.636_619_8 * f64::from(shadowband.width()) / f64::from(shadowband.radius())
        * powi(cos_dec, 3);
    let t1 = sin_lat * sin_dec * f64::from(sunset_hour_angle) * f64::from(RADDEG);
    let t2 = cos_lat * cos_dec * sin(radians(sunset_hour_angle));
    let shadowband_correction =
        (f64::from(shadowband.sky_factor()) + 1.0 / (1.0 - band * (t1 + t2))) as f32;

    // True solar time and equation of time
    let true_solar_time = (180.0 + hour_angle) * 4.0;
    let mut true_solar_time_offset = (f64::from(true_solar_time) - hour * 60.0 - minute
        - second / 60.0
        + interval / 120.0) as f32;
    while true_solar_time_offset > 720.0 {
        true_solar_time_offset -= 1440.0;
    }
    while true_solar_time_offset < -720.0 {
        true_solar_time_offset += 1440.0;
    }
    let equation_of_time = true_solar_time_offset + 60.0 * utc_offset - 4.0 * longitude;

    // Sunrise and sunset
    let (sunrise, sunset) = if sunset_hour_angle <= 1.0 {
        (NO_SUNRISE_SUNSET, -NO_SUNRISE_SUNSET)
    } else if sunset_hour_angle >= 179.0 {
        (-NO_SUNRISE_SUNSET, NO_SUNRISE_SUNSET)
    } else {
        (
            720.0 - 4.0 * sunset_hour_angle - true_solar_time_offset,
            720.0 + 4.0 * sunset_hour_angle - true_solar_time_offset,
        )
    };

    // Incidence on the tilted surface
    let cos_incidence = cos_incidence(
        azimuth,
        zenith,
        cos_zenith,
        orientation.tilt(),
        orientation.aspect(),
    );
    let etr_tilt = if cos_incidence > 0.0 {
        etrn * cos_incidence
    } else {
        0.0
    };

    SolarGeometry {
        day_of_year,
        erv,
        declination,
        hour_angle,
        zenith_etr,
        elevation_etr,
        azimuth,
        zenith,
        elevation,
        cos_zenith,
        air_mass,
        air_mass_pressure,
        etrn,
        etr,
        etr_tilt,
        cos_incidence,
        shadowband_correction,
        sunset_hour_angle,
        true_solar_time_offset,
        equation_of_time,
        sunrise,
        sunset,
        prime,
        unprime,
    }
}

/// Refraction correction in degrees for an unrefracted elevation angle.
fn refraction_correction(elevation_etr: f32, pressure: f32, temperature: f32) -> f32 {
    if elevation_etr > 85.0 {
        return 0.0;
    }

    let tan_elev = round_f32(tan(radians(elevation_etr)));
    let elev = f64::from(elevation_etr);
    let correction = if elevation_etr >= 5.0 {
        58.1 / tan_elev - 0.07 / powi(tan_elev, 3) + 0.000_086 / powi(tan_elev, 5)
    } else if elevation_etr >= -0.575 {
        1735.0 + elev * (-518.2 + elev * (103.4 + elev * (-12.79 + elev * 0.711)))
    } else {
        -20.774 / tan_elev
    };
    let pressure_temperature =
        round_f32(f64::from(pressure) * 283.0 / (1013.0 * (273.0 + f64::from(temperature))));
    (round_f32(correction) * pressure_temperature / 3600.0) as f32
}

/// Cosine of the angle of incidence on a surface.
fn cos_incidence(azimuth: f32, zenith: f32, cos_zenith: f32, tilt: f32, aspect: f32) -> f32 {
    let cos_azimuth = round_f32(cos(radians(azimuth)));
    let sin_azimuth = round_f32(sin(radians(azimuth)));
    let cos_aspect = round_f32(cos(radians(aspect)));
    let sin_aspect = round_f32(sin(radians(aspect)));
    let cos_tilt = round_f32(cos(radians(tilt)));
    let sin_tilt = round_f32(sin(radians(tilt)));
    let sin_zenith = round_f32(sin(radians(zenith)));
    (f64::from(cos_zenith) * cos_tilt
        + sin_zenith * sin_tilt * (cos_azimuth * cos_aspect + sin_azimuth * sin_aspect)) as f32
}

fn radians(degrees: f32) -> f64 {
    f64::from(RADDEG * degrees)
}

fn degrees(radians: f64) -> f32 {
    (f64::from(DEGRAD) * radians) as f32
}

/// Rounds to single precision and widens again.
fn round_f32(value: f64) -> f64 {
    f64::from(value as f32)
}

fn wrap(value: f64, period: f64) -> f32 {
    wrap_to_period(round_f32(value), period) as f32
}
