//! The numerical kernel behind the position and spectral engines.
//!
//! A [`Kernel`] exposes three entry points with fixed-size `f32` buffers and a
//! packed status code, mirroring the NREL SOLPOS/SPECTRL2 calling convention.
//! [`Builtin`] is the pure-Rust implementation shipped with this crate; other
//! implementations can be passed to the `*_with` functions of the engines.

use crate::status::{PositionRequest, SpectralRequest};
use crate::types::{
    Albedo, AtmosphericConditions, DateTime, Location, Orientation, SPECTRUM_BINS, Weather,
};
use crate::{Error, Result};
use alloc::vec::Vec;

pub mod solpos;
pub mod spectrl2;

pub use solpos::{SolarGeometry, Stages};

/// Kernel outputs of a single solar position call.
///
/// Outputs are only meaningful when `status` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolposOutput {
    /// `[zenith, azimuth]` in degrees, zenith refraction corrected
    pub angles: [f32; 2],
    /// `[relative, pressure_corrected]` air mass, `-1` below the horizon
    pub airmass: [f32; 2],
    /// `[day_of_year, interval]` settings applied by the kernel
    pub settings: [i32; 2],
    /// `[tilt, aspect]` applied by the kernel
    pub orientation: [f32; 2],
    /// `[width, radius, sky_factor]` applied by the kernel
    pub shadowband: [f32; 3],
    /// Packed status code, zero on success
    pub status: i64,
}

impl SolposOutput {
    /// An output carrying only a status code.
    #[must_use]
    pub const fn failed(status: i64) -> Self {
        Self {
            angles: [0.0; 2],
            airmass: [0.0; 2],
            settings: [0; 2],
            orientation: [0.0; 2],
            shadowband: [0.0; 3],
            status,
        }
    }
}

/// Kernel outputs of a batch solar position call, index aligned with the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolposBatchOutput {
    /// `[zenith, azimuth]` per element
    pub angles: Vec<[f32; 2]>,
    /// `[relative, pressure_corrected]` air mass per element
    pub airmass: Vec<[f32; 2]>,
    /// Status code per element
    pub status: Vec<i64>,
}

impl SolposBatchOutput {
    /// Creates an empty output with room for `count` elements.
    #[must_use]
    pub fn with_capacity(count: usize) -> Self {
        Self {
            angles: Vec::with_capacity(count),
            airmass: Vec::with_capacity(count),
            status: Vec::with_capacity(count),
        }
    }

    /// Appends the result of one element.
    pub fn push(&mut self, output: &SolposOutput) {
        self.angles.push(output.angles);
        self.airmass.push(output.airmass);
        self.status.push(output.status);
    }
}

/// Kernel outputs of a spectral call.
///
/// Outputs are only meaningful when `status` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrl2Output {
    /// Diffuse spectrum on the surface
    pub specdif: [f32; SPECTRUM_BINS],
    /// Direct normal spectrum
    pub specdir: [f32; SPECTRUM_BINS],
    /// Extraterrestrial spectrum
    pub specetr: [f32; SPECTRUM_BINS],
    /// Global spectrum on the surface
    pub specglo: [f32; SPECTRUM_BINS],
    /// Bin wavelengths (µm) or photon energies (eV)
    pub specx: [f32; SPECTRUM_BINS],
    /// `[zenith, azimuth]` in degrees
    pub angles: [f32; 2],
    /// `[relative, pressure_corrected]` air mass
    pub airmass: [f32; 2],
    /// `[day_of_year, interval]` settings applied by the kernel
    pub settings: [i32; 2],
    /// `[tilt, aspect]` applied by the kernel; a tracking surface reports its tilt
    pub orientation: [f32; 2],
    /// `[width, radius, sky_factor]` applied by the kernel
    pub shadowband: [f32; 3],
    /// Packed status code, zero on success
    pub status: i64,
}

impl Spectrl2Output {
    /// An output carrying only a status code.
    #[must_use]
    pub const fn failed(status: i64) -> Self {
        Self {
            specdif: [0.0; SPECTRUM_BINS],
            specdir: [0.0; SPECTRUM_BINS],
            specetr: [0.0; SPECTRUM_BINS],
            specglo: [0.0; SPECTRUM_BINS],
            specx: [0.0; SPECTRUM_BINS],
            angles: [0.0; 2],
            airmass: [0.0; 2],
            settings: [0; 2],
            orientation: [0.0; 2],
            shadowband: [0.0; 3],
            status,
        }
    }
}

/// The computation unit behind the engines.
///
/// Implementations validate every input before computing and report
/// violations through the status code of their output: a bitmask over the
/// position rules when positive, a spectral rule code when negative.
pub trait Kernel {
    /// Computes solar position and air mass for one point in time.
    fn solpos_am(
        &self,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
    ) -> SolposOutput;

    /// Computes solar position and air mass for many points in time at one location.
    ///
    /// The default implementation calls [`Kernel::solpos_am`] once per element.
    ///
    /// # Errors
    /// Returns [`Error::Engine`] when the call cannot be executed at all, for
    /// example when the element count exceeds the native `int` range.
    fn solpos_am_batch(
        &self,
        location: &[f32; 3],
        datetimes: &[[i32; 6]],
        weather: &[f32; 2],
    ) -> Result<SolposBatchOutput> {
        if i32::try_from(datetimes.len()).is_err() {
            return Err(Error::engine("element count exceeds the native int range"));
        }
        let mut output = SolposBatchOutput::with_capacity(datetimes.len());
        for datetime in datetimes {
            output.push(&self.solpos_am(location, datetime, weather));
        }
        Ok(output)
    }

    /// Computes the clear-sky spectrum on a surface.
    #[allow(clippy::too_many_arguments)]
    fn spectrl2(
        &self,
        units: i32,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
        orientation: &[f32; 2],
        atmosphere: &[f32; 5],
        albedo: &[f32; 12],
    ) -> Spectrl2Output;
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn solpos_am(
        &self,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
    ) -> SolposOutput {
        (**self).solpos_am(location, datetime, weather)
    }

    fn solpos_am_batch(
        &self,
        location: &[f32; 3],
        datetimes: &[[i32; 6]],
        weather: &[f32; 2],
    ) -> Result<SolposBatchOutput> {
        (**self).solpos_am_batch(location, datetimes, weather)
    }

    fn spectrl2(
        &self,
        units: i32,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
        orientation: &[f32; 2],
        atmosphere: &[f32; 5],
        albedo: &[f32; 12],
    ) -> Spectrl2Output {
        (**self).spectrl2(
            units,
            location,
            datetime,
            weather,
            orientation,
            atmosphere,
            albedo,
        )
    }
}

/// Pure-Rust port of NREL SOLPOS 2.0 and SPECTRL2.
///
/// Stateless, so one value can be shared freely between threads.
///
/// # Example
/// ```
/// use solar_utils::kernel::{Builtin, Kernel};
///
/// let output = Builtin.solpos_am(
///     &[35.56836, -119.2022, -8.0],
///     &[2013, 6, 5, 12, 31, 0],
///     &[1015.62055, 40.0],
/// );
/// assert_eq!(output.status, 0);
/// assert!((output.angles[0] - 15.074).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Builtin;

impl Kernel for Builtin {
    fn solpos_am(
        &self,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
    ) -> SolposOutput {
        let request = PositionRequest::new(
            Location::from(*location),
            DateTime::from(*datetime),
            Weather::from(*weather),
        );
        match solpos::solpos(&request, Stages::Position) {
            Ok(geometry) => SolposOutput {
                angles: [geometry.zenith, geometry.azimuth],
                airmass: [geometry.air_mass, geometry.air_mass_pressure],
                settings: [geometry.day_of_year, request.interval()],
                orientation: request.orientation().to_array(),
                shadowband: request.shadowband().to_array(),
                status: 0,
            },
            Err(status) => SolposOutput::failed(status),
        }
    }

    fn spectrl2(
        &self,
        units: i32,
        location: &[f32; 3],
        datetime: &[i32; 6],
        weather: &[f32; 2],
        orientation: &[f32; 2],
        atmosphere: &[f32; 5],
        albedo: &[f32; 12],
    ) -> Spectrl2Output {
        let position = PositionRequest::new(
            Location::from(*location),
            DateTime::from(*datetime),
            Weather::from(*weather),
        )
        .with_orientation(Orientation::from(*orientation));
        let spectral = SpectralRequest::new(units, AtmosphericConditions::from(*atmosphere));
        spectrl2::spectrl2(&spectral, &position, &Albedo::from(*albedo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION: [f32; 3] = [35.56836, -119.2022, -8.0];
    const WEATHER: [f32; 2] = [1015.62055, 40.0];

    /// Reports a fixed status for every element.
    struct FixedStatus(i64);

    impl Kernel for FixedStatus {
        fn solpos_am(&self, _: &[f32; 3], _: &[i32; 6], _: &[f32; 2]) -> SolposOutput {
            SolposOutput::failed(self.0)
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
            Spectrl2Output::failed(self.0)
        }
    }

    #[test]
    fn test_builtin_echoes_settings() {
        let output = Builtin.solpos_am(&LOCATION, &[2013, 6, 5, 12, 31, 0], &WEATHER);
        assert_eq!(output.status, 0);
        assert_eq!(output.settings, [156, 0]);
        assert_eq!(output.orientation, [0.0, 180.0]);
        assert_eq!(output.shadowband, [7.6, 31.7, 0.04]);
    }

    #[test]
    fn test_builtin_reports_status_without_outputs() {
        let output = Builtin.solpos_am(&LOCATION, &[2013, 6, 5, 12, 31, 61], &WEATHER);
        assert_eq!(output.status, 64);
        assert_eq!(output.angles, [0.0, 0.0]);
    }

    #[test]
    fn test_default_batch_loops_over_single_calls() {
        let datetimes = [[2013, 6, 5, 12, 31, 0], [2013, 6, 5, 12, 31, 61]];
        let output = Builtin
            .solpos_am_batch(&LOCATION, &datetimes, &WEATHER)
            .unwrap();
        assert_eq!(output.status, [0, 64]);
        assert_eq!(
            output.angles[0],
            Builtin.solpos_am(&LOCATION, &datetimes[0], &WEATHER).angles
        );

        let output = FixedStatus(3)
            .solpos_am_batch(&LOCATION, &datetimes, &WEATHER)
            .unwrap();
        assert_eq!(output.status, [3, 3]);
    }

    #[test]
    fn test_kernel_by_reference() {
        let kernel = &Builtin;
        let direct = Builtin.solpos_am(&LOCATION, &[2017, 1, 1, 7, 0, 0], &WEATHER);
        let borrowed = kernel.solpos_am(&LOCATION, &[2017, 1, 1, 7, 0, 0], &WEATHER);
        assert_eq!(direct, borrowed);
    }
}
