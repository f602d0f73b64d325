//! Clear-sky spectral irradiance on a surface.
//!
//! The kernel computes solar position itself, with every geometry rule
//! enabled, so a spectral call also validates the surface orientation.

use crate::kernel::{Builtin, Kernel};
use crate::status::{PositionRequest, SpectralRequest, decode_spectral};
use crate::types::{
    Albedo, AtmosphericConditions, DateTime, Location, Orientation, Spectrum, Weather,
};
use crate::Result;

/// Calculates the spectrum on a surface with the built-in kernel.
///
/// `units` selects the output: 1 ([`Units::Irradiance`](crate::Units::Irradiance))
/// gives W/m²/µm per wavelength, 2 gives 10¹⁶ photons/cm²/s/µm per
/// wavelength and 3 gives 10¹⁶ photons/cm²/s/eV per photon energy in eV.
///
/// # Errors
/// Returns [`Error::Spectral`](crate::Error::Spectral) if units,
/// `tau500`, `watvap` or `assym` are rejected (checked in that order), and
/// [`Error::Position`](crate::Error::Position) if the solar geometry is.
///
/// # Example
/// ```
/// use solar_utils::{
///     Albedo, AtmosphericConditions, DateTime, Location, Orientation, Units, Weather, spectrum,
/// };
///
/// let spectrum = spectrum(
///     Units::Irradiance,
///     Location::new(33.65, -84.43, -5.0),
///     DateTime::new(1999, 7, 22, 9, 45, 37),
///     Weather::new(1006.0, 27.0),
///     Orientation::new(33.65, 135.0),
///     AtmosphericConditions::new(1.14, 0.65, -1.0, 0.2, 1.36),
///     Albedo::default(),
/// )
/// .unwrap();
///
/// let peak = spectrum.bins().max_by(|a, b| a.global.total_cmp(&b.global)).unwrap();
/// assert!(peak.x > 0.4 && peak.x < 0.7);
/// ```
pub fn spectrum(
    units: impl Into<i32>,
    location: Location,
    datetime: DateTime,
    weather: Weather,
    orientation: Orientation,
    atmosphere: AtmosphericConditions,
    albedo: Albedo,
) -> Result<Spectrum> {
    spectrum_with(
        &Builtin,
        units,
        location,
        datetime,
        weather,
        orientation,
        atmosphere,
        albedo,
    )
}

/// Calculates the spectrum on a surface with the given kernel.
///
/// # Errors
/// See [`spectrum`].
#[allow(clippy::too_many_arguments)]
pub fn spectrum_with<K: Kernel + ?Sized>(
    kernel: &K,
    units: impl Into<i32>,
    location: Location,
    datetime: DateTime,
    weather: Weather,
    orientation: Orientation,
    atmosphere: AtmosphericConditions,
    albedo: Albedo,
) -> Result<Spectrum> {
    let units = units.into();
    let output = kernel.spectrl2(
        units,
        &location.to_array(),
        &datetime.to_array(),
        &weather.to_array(),
        &orientation.to_array(),
        &atmosphere.to_array(),
        &albedo.to_array(),
    );
    #[cfg(feature = "log")]
    log::trace!("spectrl2 units {units} {datetime:?} -> status {}", output.status);

    let spectral = SpectralRequest::new(units, atmosphere);
    let position =
        PositionRequest::new(location, datetime, weather).with_orientation(orientation);
    decode_spectral(output.status, &spectral, &position)?;

    Ok(Spectrum::new(
        output.specdif,
        output.specdir,
        output.specetr,
        output.specglo,
        output.specx,
    ))
}
