//! Core data types for solar position and spectral irradiance calculations.
//!
//! All types are small `Copy` value types. Floating point fields are `f32`,
//! matching the buffers exchanged with a [`Kernel`](crate::kernel::Kernel).
//! None of the constructors validate values: the kernel is the single
//! authority on what is in range, and reports violations through its status
//! code.

use crate::error::SpectralError;

/// Number of wavelength (or energy) bins in a [`Spectrum`].
pub const SPECTRUM_BINS: usize = 122;

/// Geographic position of the observer.
///
/// # Example
/// ```
/// # use solar_utils::Location;
/// // Bakersfield, California (UTC-8)
/// let location = Location::new(35.56836, -119.2022, -8.0);
/// assert_eq!(location.utc_offset(), -8.0);
/// assert_eq!(location.to_array(), [35.56836, -119.2022, -8.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive
    latitude: f32,
    /// Longitude in degrees, east positive
    longitude: f32,
    /// Offset of the local standard time from UTC in hours, east positive
    utc_offset: f32,
}

impl Location {
    /// Creates a location from latitude, longitude (degrees) and UTC offset (hours).
    ///
    /// Daylight saving time must not be applied to `utc_offset`.
    #[must_use]
    pub const fn new(latitude: f32, longitude: f32, utc_offset: f32) -> Self {
        Self {
            latitude,
            longitude,
            utc_offset,
        }
    }

    /// Gets the latitude in degrees (-90 to +90 are accepted by the kernel).
    #[must_use]
    pub const fn latitude(&self) -> f32 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180 are accepted by the kernel).
    #[must_use]
    pub const fn longitude(&self) -> f32 {
        self.longitude
    }

    /// Gets the UTC offset in hours (-12 to +12 are accepted by the kernel).
    #[must_use]
    pub const fn utc_offset(&self) -> f32 {
        self.utc_offset
    }

    /// Packs the location into the `[latitude, longitude, utc_offset]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.latitude, self.longitude, self.utc_offset]
    }
}

impl From<[f32; 3]> for Location {
    fn from([latitude, longitude, utc_offset]: [f32; 3]) -> Self {
        Self::new(latitude, longitude, utc_offset)
    }
}

/// Local standard date and time, one integer per calendar component.
///
/// Components are deliberately unchecked integers: out-of-range values are
/// passed through to the kernel, which reports the first offending field.
///
/// # Example
/// ```
/// # use solar_utils::DateTime;
/// let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);
/// assert_eq!(datetime.day_of_year(), 156);
/// assert_eq!(datetime.to_array(), [2013, 6, 5, 12, 31, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

/// Cumulative day count at the start of each month (index 1 = January) for common years.
const MONTH_START_DAYS: [i32; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

impl DateTime {
    /// Creates a date-time from its six components.
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Gets the four-digit year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1 = January).
    #[must_use]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Gets the hour of day.
    #[must_use]
    pub const fn hour(&self) -> i32 {
        self.hour
    }

    /// Gets the minute of hour.
    #[must_use]
    pub const fn minute(&self) -> i32 {
        self.minute
    }

    /// Gets the second of minute.
    #[must_use]
    pub const fn second(&self) -> i32 {
        self.second
    }

    /// Packs the date-time into the `[year, month, day, hour, minute, second]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [i32; 6] {
        [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
    }

    /// Day of year (1 = January 1st) following the Gregorian leap year rule.
    ///
    /// Months outside 1-12 are clamped so that the result is always defined;
    /// the kernel rejects such months anyway.
    #[must_use]
    pub const fn day_of_year(&self) -> i32 {
        let month = if self.month < 1 {
            1
        } else if self.month > 12 {
            12
        } else {
            self.month
        };
        let day_of_year = self.day.saturating_add(MONTH_START_DAYS[month as usize]);
        if is_leap_year(self.year) && month > 2 {
            day_of_year.saturating_add(1)
        } else {
            day_of_year
        }
    }
}

impl From<[i32; 6]> for DateTime {
    fn from([year, month, day, hour, minute, second]: [i32; 6]) -> Self {
        Self::new(year, month, day, hour, minute, second)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for DateTime {
    #[allow(clippy::cast_possible_wrap)]
    fn from(datetime: chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self::new(
            datetime.year(),
            datetime.month() as i32,
            datetime.day() as i32,
            datetime.hour() as i32,
            datetime.minute() as i32,
            datetime.second() as i32,
        )
    }
}

/// Returns true for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Ambient weather used for refraction and pressure-corrected air mass.
///
/// # Example
/// ```
/// # use solar_utils::Weather;
/// let weather = Weather::new(1015.62055, 40.0);
/// assert_eq!(weather.to_array(), [1015.62055, 40.0]);
/// assert_eq!(Weather::standard().pressure(), 1013.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    /// Surface pressure in millibars
    pressure: f32,
    /// Ambient dry-bulb temperature in degrees Celsius
    temperature: f32,
}

impl Weather {
    /// Creates weather conditions from pressure (millibars) and temperature (°C).
    #[must_use]
    pub const fn new(pressure: f32, temperature: f32) -> Self {
        Self {
            pressure,
            temperature,
        }
    }

    /// Standard conditions assumed by SOLPOS when none are supplied: 1013 mb and 15 °C.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(1013.0, 15.0)
    }

    /// Gets the surface pressure in millibars.
    #[must_use]
    pub const fn pressure(&self) -> f32 {
        self.pressure
    }

    /// Gets the temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Packs the weather into the `[pressure, temperature]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 2] {
        [self.pressure, self.temperature]
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<[f32; 2]> for Weather {
    fn from([pressure, temperature]: [f32; 2]) -> Self {
        Self::new(pressure, temperature)
    }
}

/// Orientation of the receiving surface.
///
/// A negative tilt selects a two-axis sun-tracking surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Degrees tilt from horizontal
    tilt: f32,
    /// Direction the surface faces: N=0, E=90, S=180, W=270
    aspect: f32,
}

impl Orientation {
    /// Creates an orientation from tilt and aspect in degrees.
    #[must_use]
    pub const fn new(tilt: f32, aspect: f32) -> Self {
        Self { tilt, aspect }
    }

    /// A horizontal surface (tilt 0°, aspect 180°), the position engine's default.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(0.0, 180.0)
    }

    /// A surface that tracks the sun on two axes.
    #[must_use]
    pub const fn tracking() -> Self {
        Self::new(-1.0, 180.0)
    }

    /// Gets the tilt in degrees.
    #[must_use]
    pub const fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Gets the aspect in degrees.
    #[must_use]
    pub const fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Checks if the surface tracks the sun (negative tilt).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tilt < 0.0
    }

    /// Packs the orientation into the `[tilt, aspect]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 2] {
        [self.tilt, self.aspect]
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl From<[f32; 2]> for Orientation {
    fn from([tilt, aspect]: [f32; 2]) -> Self {
        Self::new(tilt, aspect)
    }
}

/// Shadowband geometry used for diffuse pyranometer corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadowband {
    width: f32,
    radius: f32,
    sky_factor: f32,
}

impl Shadowband {
    /// Creates a shadowband from width (cm), radius (cm) and sky factor.
    #[must_use]
    pub const fn new(width: f32, radius: f32, sky_factor: f32) -> Self {
        Self {
            width,
            radius,
            sky_factor,
        }
    }

    /// Gets the band width in centimeters.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Gets the band radius in centimeters.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Gets the sky anisotropy correction factor.
    #[must_use]
    pub const fn sky_factor(&self) -> f32 {
        self.sky_factor
    }

    /// Packs the shadowband into the `[width, radius, sky_factor]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.width, self.radius, self.sky_factor]
    }
}

impl Default for Shadowband {
    /// Eppley shadowband: 7.6 cm wide, 31.7 cm radius, sky factor 0.04.
    fn default() -> Self {
        Self::new(7.6, 31.7, 0.04)
    }
}

impl From<[f32; 3]> for Shadowband {
    fn from([width, radius, sky_factor]: [f32; 3]) -> Self {
        Self::new(width, radius, sky_factor)
    }
}

/// Atmospheric conditions for the spectral model.
///
/// Sentinels understood by the kernel: `assym == -1` selects the rural
/// default of 0.65, a negative `alpha` selects 1.14 and a negative `ozone`
/// lets the kernel estimate ozone from location and season.
///
/// # Example
/// ```
/// # use solar_utils::AtmosphericConditions;
/// let atmosphere = AtmosphericConditions::new(1.14, 0.65, -1.0, 0.2, 1.36);
/// assert_eq!(atmosphere.tau500(), 0.2);
/// assert_eq!(atmosphere.to_array(), [1.14, 0.65, -1.0, 0.2, 1.36]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    /// Power on Angstrom turbidity
    alpha: f32,
    /// Aerosol asymmetry factor
    assym: f32,
    /// Atmospheric ozone in atm-cm
    ozone: f32,
    /// Aerosol optical depth at 0.5 microns, base e
    tau500: f32,
    /// Precipitable water vapor in cm
    watvap: f32,
}

impl AtmosphericConditions {
    /// Creates atmospheric conditions from `alpha`, `assym`, `ozone`, `tau500` and `watvap`.
    #[must_use]
    pub const fn new(alpha: f32, assym: f32, ozone: f32, tau500: f32, watvap: f32) -> Self {
        Self {
            alpha,
            assym,
            ozone,
            tau500,
            watvap,
        }
    }

    /// Gets the power on Angstrom turbidity.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Gets the aerosol asymmetry factor.
    #[must_use]
    pub const fn assym(&self) -> f32 {
        self.assym
    }

    /// Gets the ozone amount in atm-cm (negative: estimated by the kernel).
    #[must_use]
    pub const fn ozone(&self) -> f32 {
        self.ozone
    }

    /// Gets the aerosol optical depth at 0.5 microns.
    #[must_use]
    pub const fn tau500(&self) -> f32 {
        self.tau500
    }

    /// Gets the precipitable water vapor in cm.
    #[must_use]
    pub const fn watvap(&self) -> f32 {
        self.watvap
    }

    /// Packs the conditions into the `[alpha, assym, ozone, tau500, watvap]` kernel buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 5] {
        [self.alpha, self.assym, self.ozone, self.tau500, self.watvap]
    }
}

impl From<[f32; 5]> for AtmosphericConditions {
    fn from([alpha, assym, ozone, tau500, watvap]: [f32; 5]) -> Self {
        Self::new(alpha, assym, ozone, tau500, watvap)
    }
}

/// Ground reflectivity over six wavelength regions.
///
/// The kernel interpolates linearly between the given points. A first
/// wavelength of `-1` (or a negative first reflectivity) selects the default
/// albedo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Albedo {
    /// Wavelengths in microns, ascending
    wavelengths: [f32; 6],
    /// Reflectivities (0 to 1) at each wavelength
    reflectivities: [f32; 6],
}

impl Albedo {
    /// Creates an albedo profile from six wavelengths (microns) and six reflectivities.
    #[must_use]
    pub const fn new(wavelengths: [f32; 6], reflectivities: [f32; 6]) -> Self {
        Self {
            wavelengths,
            reflectivities,
        }
    }

    /// Gets the wavelengths in microns.
    #[must_use]
    pub const fn wavelengths(&self) -> &[f32; 6] {
        &self.wavelengths
    }

    /// Gets the reflectivities.
    #[must_use]
    pub const fn reflectivities(&self) -> &[f32; 6] {
        &self.reflectivities
    }

    /// Packs the albedo into the 12-element kernel buffer, wavelengths first.
    #[must_use]
    pub fn to_array(&self) -> [f32; 12] {
        let mut packed = [0.0; 12];
        packed[..6].copy_from_slice(&self.wavelengths);
        packed[6..].copy_from_slice(&self.reflectivities);
        packed
    }
}

impl Default for Albedo {
    /// Uniform reflectivity of 0.2 at 0.3, 0.7, 0.8, 1.3, 2.5 and 4.0 microns.
    fn default() -> Self {
        Self::new([0.3, 0.7, 0.8, 1.3, 2.5, 4.0], [0.2; 6])
    }
}

impl From<[f32; 12]> for Albedo {
    fn from(packed: [f32; 12]) -> Self {
        let mut wavelengths = [0.0; 6];
        let mut reflectivities = [0.0; 6];
        wavelengths.copy_from_slice(&packed[..6]);
        reflectivities.copy_from_slice(&packed[6..]);
        Self::new(wavelengths, reflectivities)
    }
}

/// Output units of a [`Spectrum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    /// Irradiance (W/m²/µm) per wavelength (µm)
    Irradiance = 1,
    /// Photon flux (10¹⁶/cm²/s/µm) per wavelength (µm)
    PhotonFlux = 2,
    /// Photon flux density (10¹⁶/cm²/s/eV) per energy (eV)
    PhotonFluxDensity = 3,
}

impl Units {
    /// Gets the integer code understood by the kernel.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<Units> for i32 {
    fn from(units: Units) -> Self {
        units.code()
    }
}

impl TryFrom<i32> for Units {
    type Error = SpectralError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Irradiance),
            2 => Ok(Self::PhotonFlux),
            3 => Ok(Self::PhotonFluxDensity),
            units => Err(SpectralError::Units { units }),
        }
    }
}

/// Solar zenith and azimuth angles.
///
/// The zenith angle is refraction corrected. Azimuth is measured clockwise
/// from north (0° = N, 90° = E, 180° = S, 270° = W).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    zenith: f32,
    azimuth: f32,
}

impl Angles {
    /// Creates angles from zenith and azimuth in degrees.
    #[must_use]
    pub const fn new(zenith: f32, azimuth: f32) -> Self {
        Self { zenith, azimuth }
    }

    /// Gets the refracted zenith angle in degrees.
    #[must_use]
    pub const fn zenith(&self) -> f32 {
        self.zenith
    }

    /// Gets the azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Gets the refracted elevation angle in degrees (90° - zenith).
    #[must_use]
    pub fn elevation(&self) -> f32 {
        90.0 - self.zenith
    }

    /// Packs the angles as `[zenith, azimuth]`.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 2] {
        [self.zenith, self.azimuth]
    }
}

impl From<[f32; 2]> for Angles {
    fn from([zenith, azimuth]: [f32; 2]) -> Self {
        Self::new(zenith, azimuth)
    }
}

/// Relative and pressure-corrected optical air mass.
///
/// Both values are [`AirMass::BELOW_HORIZON`] when the refracted zenith angle
/// exceeds 93°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirMass {
    relative: f32,
    pressure_corrected: f32,
}

impl AirMass {
    /// Sentinel reported when the sun is too far below the horizon.
    pub const BELOW_HORIZON: f32 = -1.0;

    /// Creates an air mass pair.
    #[must_use]
    pub const fn new(relative: f32, pressure_corrected: f32) -> Self {
        Self {
            relative,
            pressure_corrected,
        }
    }

    /// Gets the relative air mass.
    #[must_use]
    pub const fn relative(&self) -> f32 {
        self.relative
    }

    /// Gets the air mass corrected to the surface pressure.
    #[must_use]
    pub const fn pressure_corrected(&self) -> f32 {
        self.pressure_corrected
    }

    /// Checks if the air mass was computed (the sun is not too far below the horizon).
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.relative >= 0.0
    }

    /// Packs the air mass as `[relative, pressure_corrected]`.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 2] {
        [self.relative, self.pressure_corrected]
    }
}

impl From<[f32; 2]> for AirMass {
    fn from([relative, pressure_corrected]: [f32; 2]) -> Self {
        Self::new(relative, pressure_corrected)
    }
}

/// Clear-sky spectrum on the receiving surface.
///
/// The five sequences are index aligned: element `k` of each belongs to the
/// bin whose coordinate is `x()[k]` (a wavelength in microns, or a photon
/// energy in eV for [`Units::PhotonFluxDensity`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    specdif: [f32; SPECTRUM_BINS],
    specdir: [f32; SPECTRUM_BINS],
    specetr: [f32; SPECTRUM_BINS],
    specglo: [f32; SPECTRUM_BINS],
    specx: [f32; SPECTRUM_BINS],
}

impl Spectrum {
    /// Creates a spectrum from its five aligned sequences.
    #[must_use]
    pub const fn new(
        specdif: [f32; SPECTRUM_BINS],
        specdir: [f32; SPECTRUM_BINS],
        specetr: [f32; SPECTRUM_BINS],
        specglo: [f32; SPECTRUM_BINS],
        specx: [f32; SPECTRUM_BINS],
    ) -> Self {
        Self {
            specdif,
            specdir,
            specetr,
            specglo,
            specx,
        }
    }

    /// Diffuse component on the surface (`specdif`).
    #[must_use]
    pub const fn diffuse(&self) -> &[f32; SPECTRUM_BINS] {
        &self.specdif
    }

    /// Direct normal component (`specdir`).
    #[must_use]
    pub const fn direct(&self) -> &[f32; SPECTRUM_BINS] {
        &self.specdir
    }

    /// Extraterrestrial spectrum (`specetr`).
    #[must_use]
    pub const fn extraterrestrial(&self) -> &[f32; SPECTRUM_BINS] {
        &self.specetr
    }

    /// Global component on the surface (`specglo`).
    #[must_use]
    pub const fn global(&self) -> &[f32; SPECTRUM_BINS] {
        &self.specglo
    }

    /// Bin coordinates (`specx`): wavelength in microns or energy in eV.
    #[must_use]
    pub const fn x(&self) -> &[f32; SPECTRUM_BINS] {
        &self.specx
    }

    /// Iterates over the bins in order.
    pub fn bins(&self) -> impl ExactSizeIterator<Item = SpectralBin> + '_ {
        (0..SPECTRUM_BINS).map(move |k| SpectralBin {
            x: self.specx[k],
            diffuse: self.specdif[k],
            direct: self.specdir[k],
            extraterrestrial: self.specetr[k],
            global: self.specglo[k],
        })
    }
}

/// One aligned row of a [`Spectrum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralBin {
    /// Bin coordinate (wavelength or energy)
    pub x: f32,
    /// Diffuse component
    pub diffuse: f32,
    /// Direct normal component
    pub direct: f32,
    /// Extraterrestrial component
    pub extraterrestrial: f32,
    /// Global component
    pub global: f32,
}
