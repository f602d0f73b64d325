//! # Solar Utilities
//!
//! Solar position, air mass and clear-sky spectral irradiance, based on the NREL SOLPOS and
//! SPECTRL2 models.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides:
//! - **Solar position**: refraction corrected zenith and azimuth angles plus relative and
//!   pressure-corrected air mass for a single point in time
//! - **Batch position**: the same for ordered sequences of date-times, such as one year of
//!   hourly samples, with fail-fast validation
//! - **Spectrum**: direct, diffuse, extraterrestrial and global irradiance on a tilted or
//!   sun-tracking surface over 122 bins from 0.3 to 4.0 µm
//!
//! Every input is validated by the computation kernel. A failure is reported as a typed error
//! naming the rejected field and its value, decoded from the kernel's packed status code.
//!
//! ## Features
//!
//! - Deterministic: identical inputs give bit-identical outputs
//! - Pluggable kernel: the built-in pure-Rust kernel can be replaced through the
//!   [`Kernel`](kernel::Kernel) trait
//! - Thread-safe: stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions and `std::error::Error`
//! - `chrono` (default): Enable `NaiveDateTime` conversion and hourly sequence helpers
//! - `libm`: Use pure Rust math for `no_std` environments (requires `alloc`)
//! - `log`: Emit `log` records for kernel calls and batch failures
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-utils = "0.1"
//!
//! # no_std
//! solar-utils = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Michalsky, J. (1988). The Astronomical Almanac's algorithm for approximate solar position
//!   (1950-2050). Solar Energy, 40(3), 227-235.
//! - Bird, R.; Riordan, C. (1984). Simple solar spectral model for direct and diffuse irradiance
//!   on horizontal and tilted planes at the Earth's surface for cloudless atmospheres.
//!   SERI/TR-215-2436.
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! use solar_utils::{DateTime, Location, Weather, solar_position};
//!
//! // Bakersfield, California, local standard time (UTC-8)
//! let (angles, air_mass) = solar_position(
//!     Location::new(35.56836, -119.2022, -8.0),
//!     DateTime::new(2013, 6, 5, 12, 31, 0),
//!     Weather::new(1015.62055, 40.0),
//! )
//! .unwrap();
//!
//! println!("Zenith: {:.3}°", angles.zenith());
//! println!("Azimuth: {:.3}°", angles.azimuth());
//! println!("Air mass: {:.4}", air_mass.relative());
//! ```
//!
//! ### Hourly positions for a year (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_utils::{Location, Weather, batch};
//!
//! let positions = batch::solar_positions_for_year(
//!     Location::new(35.56836, -119.2022, -8.0),
//!     2017,
//!     Weather::new(1015.62055, 40.0),
//! )
//! .unwrap();
//!
//! let daylight = positions.iter().filter(|(_, air_mass)| air_mass.is_defined()).count();
//! println!("{daylight} of {} hours with a defined air mass", positions.len());
//! # }
//! ```
//!
//! ### Handling validation errors
//! ```rust
//! use solar_utils::{DateTime, Error, Location, PositionError, Weather, solar_position};
//!
//! let result = solar_position(
//!     Location::new(35.56836, -119.2022, -8.0),
//!     DateTime::new(2013, 6, 5, 12, 31, 61),
//!     Weather::new(1015.62055, 40.0),
//! );
//!
//! assert_eq!(result, Err(Error::Position(PositionError::Second { second: 61 })));
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead, refraction corrected
//! - **Time**: local standard time; the UTC offset must not include daylight saving time

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Sentinel values are compared exactly
)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::batch::{BatchPositions, solar_positions};
pub use crate::error::{Error, PositionError, PositionRule, Result, SpectralError, SpectralRule};
pub use crate::kernel::{Builtin, Kernel};
pub use crate::position::solar_position;
pub use crate::spectrum::spectrum;
pub use crate::status::StatusCode;
pub use crate::types::{
    AirMass, Albedo, Angles, AtmosphericConditions, DateTime, Location, Orientation, Shadowband,
    SpectralBin, Spectrum, Units, Weather,
};

// Engines
pub mod batch;
pub mod position;
pub mod spectrum;

// Core modules
pub mod error;
pub mod kernel;
pub mod status;
pub mod types;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engines_share_geometry() {
        let location = Location::new(33.65, -84.43, -5.0);
        let datetime = DateTime::new(1999, 7, 22, 9, 45, 37);
        let weather = Weather::new(1006.0, 27.0);

        let (angles, air_mass) = solar_position(location, datetime, weather).unwrap();
        let output = Builtin.spectrl2(
            Units::Irradiance.code(),
            &location.to_array(),
            &datetime.to_array(),
            &weather.to_array(),
            &Orientation::horizontal().to_array(),
            &AtmosphericConditions::new(1.14, 0.65, -1.0, 0.2, 1.36).to_array(),
            &Albedo::default().to_array(),
        );

        assert_eq!(output.status, 0);
        assert_eq!(output.angles, angles.to_array());
        assert_eq!(output.airmass, air_mass.to_array());
    }

    #[test]
    fn test_builtin_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Builtin>();
        assert_send_sync::<Error>();
    }
}
