//! SPECTRL2 clear-sky spectral irradiance kernel.
//!
//! Port of the NREL SPECTRL2 model (Bird & Riordan, SERI/TR-215-2436): direct
//! and diffuse irradiance on horizontal and tilted surfaces over 122 bins
//! from 0.3 to 4.0 microns, from Rayleigh, ozone, water vapor, mixed gas and
//! aerosol transmittances. Solar geometry comes from the SOLPOS kernel with
//! every stage enabled.
//!
//! Equation numbers refer to SERI/TR-215-2436.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use super::Spectrl2Output;
use super::solpos::{self, SolarGeometry, Stages};
use crate::error::SpectralRule;
use crate::math::{PI, cos, exp, ln, powf, powi, sin, sqrt};
use crate::status::{PositionRequest, SpectralRequest};
use crate::types::{Albedo, SPECTRUM_BINS, Units};

pub mod coefficients;
use coefficients::{EXTRATERRESTRIAL, MIXED_GAS, OZONE, WATER_VAPOR, WAVELENGTH};

/// Planck's constant in J·s.
const PLANCK: f64 = 6.626_176_2e-34;

/// Speed of light in µm/s.
const LIGHT_SPEED: f64 = 2.997_924_4e14;

/// Joules per electron volt.
const ELECTRON_VOLT: f64 = 1.602_189_1e-19;

/// Converts W/m²/µm times µm to 10¹⁶ photons/cm²/s/µm.
const PHOTON_FLUX: f64 = 5.034_036_5e14;

/// Aerosol single-scattering albedo at 0.4 µm (Equation 3-16).
const OMEGA: f64 = 0.945;

/// Wavelength variation of the single-scattering albedo (Equation 3-16).
const OMEGA_PRIME: f64 = 0.095;

/// Asymmetry factor of rural aerosols, used when `assym` is the `-1` sentinel.
pub const DEFAULT_ASSYM: f32 = 0.65;

/// Angstrom turbidity exponent of rural aerosols, used when `alpha` is negative.
pub const DEFAULT_ALPHA: f32 = 1.14;

/// The asymmetry factor the kernel works with, after sentinel substitution.
#[must_use]
pub fn effective_assym(assym: f32) -> f32 {
    if assym == -1.0 { DEFAULT_ASSYM } else { assym }
}

/// The albedo the kernel works with, after sentinel substitution.
#[must_use]
pub fn effective_albedo(albedo: &Albedo) -> Albedo {
    if albedo.wavelengths()[0] as i32 == -1 || albedo.reflectivities()[0] < 0.0 {
        Albedo::default()
    } else {
        *albedo
    }
}

/// Checks the spectral inputs in order (units, tau500, watvap, assym).
///
/// # Errors
/// Returns the negative status code of the first rule that fails.
pub fn validate(request: &SpectralRequest) -> Result<Units, i64> {
    let atmosphere = request.atmosphere();
    let units = Units::try_from(request.units()).map_err(|_| SpectralRule::Units.code())?;
    if !(0.0..=10.0).contains(&atmosphere.tau500()) {
        return Err(SpectralRule::Tau500.code());
    }
    if !(0.0..=100.0).contains(&atmosphere.watvap()) {
        return Err(SpectralRule::Watvap.code());
    }
    let assym = effective_assym(atmosphere.assym());
    if assym >= 1.0 || assym <= 0.0 {
        return Err(SpectralRule::Assym.code());
    }
    Ok(units)
}

/// Validates the request and computes the spectrum on the requested surface.
///
/// Spectral inputs are checked before the solar geometry. The returned
/// status is zero on success, negative for spectral failures and a position
/// bitmask otherwise.
#[must_use]
pub fn spectrl2(
    spectral: &SpectralRequest,
    position: &PositionRequest,
    albedo: &Albedo,
) -> Spectrl2Output {
    let units = match validate(spectral) {
        Ok(units) => units,
        Err(status) => return Spectrl2Output::failed(status),
    };
    let geometry = match solpos::solpos(position, Stages::All) {
        Ok(geometry) => geometry,
        Err(status) => return Spectrl2Output::failed(status),
    };
    compute(units, spectral, position, &geometry, &effective_albedo(albedo))
}

fn compute(
    units: Units,
    spectral: &SpectralRequest,
    position: &PositionRequest,
    geometry: &SolarGeometry,
    albedo: &Albedo,
) -> Spectrl2Output {
    let atmosphere = spectral.atmosphere();
    let orientation = position.orientation();
    let location = position.location();
    let raddeg = round_f32(180.0 / PI);

    // A tracking surface faces the sun
    let (tilt, cos_incidence) = if orientation.is_tracking() {
        (geometry.zenith, 1.0)
    } else {
        (orientation.tilt(), f64::from(geometry.cos_incidence))
    };
    let ct = round_f32(cos(f64::from(tilt) / raddeg));
    let cz = round_f32(cos(f64::from(geometry.zenith) / raddeg));

    let alpha = f64::from(if atmosphere.alpha() < 0.0 {
        DEFAULT_ALPHA
    } else {
        atmosphere.alpha()
    });
    let assym = f64::from(effective_assym(atmosphere.assym()));
    let tau500 = f64::from(atmosphere.tau500());
    let w = f64::from(atmosphere.watvap());
    let ozone = if atmosphere.ozone() < 0.0 {
        estimated_ozone(location.latitude(), location.longitude(), geometry.day_of_year)
    } else {
        f64::from(atmosphere.ozone())
    };
    let wv = albedo.wavelengths().map(f64::from);
    let rf = albedo.reflectivities().map(f64::from);

    // Equations 3-14, 3-12, 3-13, 3-15 and 3-11: aerosol forward scattering
    let alg = round_f32(ln(1.0 - assym));
    let afs = round_f32(alg * (1.459 + alg * (0.1595 + alg * 0.4129)));
    let bfs = round_f32(alg * (0.0783 + alg * (-0.3824 - alg * 0.5874)));
    let fsp = round_f32(1.0 - 0.5 * exp((afs + bfs / 1.8) / 1.8));
    let fs = round_f32(1.0 - 0.5 * exp((afs + bfs * cz) * cz));

    // Ozone mass
    let amo = round_f32(1.003_454 / sqrt(powi(cz, 2) + 0.006_908));

    let am = f64::from(geometry.air_mass);
    let amp = f64::from(geometry.air_mass_pressure);
    let sun_up = cz > 0.0;
    let energy = round_f32(PLANCK * LIGHT_SPEED / ELECTRON_VOLT);

    let mut output = Spectrl2Output::failed(0);
    let mut nr = 1;
    for (k, &wavelength) in WAVELENGTH.iter().enumerate() {
        let wvl = f64::from(wavelength);
        let h0 = round_f32(f64::from(EXTRATERRESTRIAL[k]) * f64::from(geometry.erv));
        let aw = f64::from(WATER_VAPOR[k]);
        let ao = f64::from(OZONE[k]);
        let au = f64::from(MIXED_GAS[k]);
        output.specetr[k] = h0 as f32;

        // Advance to the next albedo interval, extrapolating past the last one
        if wvl > wv[nr] && nr + 1 < wv.len() {
            nr += 1;
        }

        let (dir, dif, dtot) = if sun_up {
            // Equation 3-16
            let omegl = round_f32(OMEGA * exp(-OMEGA_PRIME * powi(ln(wvl / 0.4), 2)));
            // Equation 2-7
            let c1 = round_f32(tau500 * powf(wvl * 2.0, -alpha));
            let rayleigh = powi(wvl, 4) * (115.6406 - 1.3366 / powi(wvl, 2));

            // Equations 2-4, 2-9, 2-8, 2-11, 3-9, 3-10 and 2-6
            let tr = round_f32(exp(-amp / rayleigh));
            let to = round_f32(exp(-ao * ozone * amo));
            let tw = round_f32(exp(-0.2385 * aw * w * am / powf(1.0 + 20.07 * aw * w * am, 0.45)));
            let tu = round_f32(exp(-1.41 * au * amp / powf(1.0 + 118.3 * au * amp, 0.45)));
            let tas = round_f32(exp(-omegl * c1 * am));
            let taa = round_f32(exp((omegl - 1.0) * c1 * am));
            let ta = round_f32(exp(-c1 * am));

            // The same transmittances at the primed air mass M = 1.8
            let trp = round_f32(exp(-1.8 / rayleigh));
            let twp = round_f32(exp(-0.4293 * aw * w / powf(1.0 + 36.126 * aw * w, 0.45)));
            let tup = round_f32(exp(-2.538 * au / powf(1.0 + 212.94 * au, 0.45)));
            let tasp = round_f32(exp(-omegl * c1 * 1.8));
            let taap = round_f32(exp((omegl - 1.0) * c1 * 1.8));

            // Equation 2-1: direct normal
            let c2 = round_f32(h0 * to * tw * tu);
            let dir = round_f32(c2 * tr * ta);

            // Diffuse
            let c2 = round_f32(c2 * cz * taa);
            let slope = round_f32((rf[nr] - rf[nr - 1]) / (wv[nr] - wv[nr - 1]));
            // Equation 3-17
            let cs = if wvl <= 0.45 {
                round_f32(powf(wvl + 0.55, 1.8))
            } else {
                1.0
            };
            // Equation 3-8
            let rhoa = round_f32(
                tup * twp * taap * (0.5 * (1.0 - trp) + (1.0 - fsp) * trp * (1.0 - tasp)),
            );
            let rho = round_f32(slope * (wvl - wv[nr - 1]) + rf[nr - 1]);
            // Equations 3-5, 3-6 and 3-7
            let dray = round_f32(c2 * (1.0 - powf(tr, 0.95)) / 2.0);
            let daer = round_f32(c2 * powf(tr, 1.5) * (1.0 - tas) * fs);
            let drgd = round_f32((dir * cz + dray + daer) * rho * rhoa / (1.0 - rho * rhoa));
            // Equation 3-1
            let mut dif = round_f32((dray + daer + drgd) * cs);
            let mut dtot = round_f32(dir * cz + dif);

            // Equation 3-18: transposition to the tilted surface
            if f64::from(tilt) > 1.0e-4 {
                let ground = round_f32(dtot * rho * (1.0 - ct) / 2.0);
                let beam_fraction = round_f32(dir / h0);
                let circumsolar = round_f32(dif * beam_fraction * cos_incidence / cz);
                let isotropic = round_f32(dif * (1.0 - beam_fraction) * (1.0 + ct) / 2.0);
                dif = round_f32(ground + circumsolar + isotropic);
                dtot = round_f32(dir * cos_incidence + dif);
            }
            (dir, dif, dtot)
        } else {
            (0.0, 0.0, 0.0)
        };

        let (x, factor) = match units {
            Units::Irradiance => (wvl, 1.0),
            Units::PhotonFlux => (wvl, round_f32(wvl * PHOTON_FLUX)),
            Units::PhotonFluxDensity => {
                let x = round_f32(energy / wvl);
                (x, round_f32(round_f32(wvl * PHOTON_FLUX) * wvl / x))
            }
        };
        output.specx[k] = x as f32;
        output.specglo[k] = (dtot * factor) as f32;
        output.specdir[k] = (dir * factor) as f32;
        output.specdif[k] = (dif * factor) as f32;
    }

    output.angles = [geometry.zenith, geometry.azimuth];
    output.airmass = [geometry.air_mass, geometry.air_mass_pressure];
    output.settings = [geometry.day_of_year, position.interval()];
    output.orientation = [tilt, orientation.aspect()];
    output.shadowband = position.shadowband().to_array();
    output
}

/// Seasonal ozone estimate in atm-cm from location and day of year.
///
/// Used when the caller passes a negative ozone amount.
#[must_use]
pub fn estimated_ozone(latitude: f32, longitude: f32, day_of_year: i32) -> f64 {
    let raddeg = round_f32(180.0 / PI);
    let (c1, c2, c3, c4, c5, c6) = if latitude >= 0.0 {
        let c6 = if longitude > 0.0 { 20.0 } else { 0.0 };
        (150.0, 1.28, 40.0, -30.0, 3.0, c6)
    } else {
        (100.0, 1.5, 30.0, 152.625, 2.0, -75.0)
    };
    let s1 = round_f32(sin(0.9865 * (f64::from(day_of_year) + c4) / raddeg));
    let s2 = round_f32(sin(c5 * (f64::from(longitude) + c6) / raddeg));
    let s3 = round_f32(sin(c2 * f64::from(latitude) / raddeg));
    round_f32(0.235 + (c1 + c3 * s1 + 20.0 * s2) * powi(s3, 2) / 1000.0)
}

/// Rounds to single precision and widens again.
fn round_f32(value: f64) -> f64 {
    f64::from(value as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AtmosphericConditions, DateTime, Location, Orientation, Weather};

    fn atlanta() -> PositionRequest {
        PositionRequest::new(
            Location::new(33.65, -84.43, -5.0),
            DateTime::new(1999, 7, 22, 9, 45, 37),
            Weather::new(1006.0, 27.0),
        )
        .with_orientation(Orientation::new(33.65, 135.0))
    }

    fn rural(units: i32) -> SpectralRequest {
        SpectralRequest::new(
            units,
            AtmosphericConditions::new(1.14, 0.65, -1.0, 0.2, 1.36),
        )
    }

    fn run(spectral: &SpectralRequest, position: &PositionRequest) -> Spectrl2Output {
        spectrl2(spectral, position, &Albedo::default())
    }

    #[test]
    fn test_validation_order() {
        let all_bad = SpectralRequest::new(
            4,
            AtmosphericConditions::new(1.14, 1.5, -1.0, 11.0, 101.0),
        );
        assert_eq!(validate(&all_bad), Err(-1));

        let bad_atmosphere = SpectralRequest::new(
            1,
            AtmosphericConditions::new(1.14, 1.5, -1.0, 11.0, 101.0),
        );
        assert_eq!(validate(&bad_atmosphere), Err(-2));

        let bad_water = SpectralRequest::new(
            1,
            AtmosphericConditions::new(1.14, 1.5, -1.0, 0.2, 101.0),
        );
        assert_eq!(validate(&bad_water), Err(-3));

        let bad_assym = SpectralRequest::new(
            1,
            AtmosphericConditions::new(1.14, 1.5, -1.0, 0.2, 1.36),
        );
        assert_eq!(validate(&bad_assym), Err(-4));

        assert_eq!(validate(&rural(3)), Ok(Units::PhotonFluxDensity));
    }

    #[test]
    fn test_assym_sentinel() {
        assert_eq!(effective_assym(-1.0), DEFAULT_ASSYM);
        assert_eq!(effective_assym(0.7), 0.7);
        let sentinel = SpectralRequest::new(
            1,
            AtmosphericConditions::new(1.14, -1.0, -1.0, 0.2, 1.36),
        );
        assert_eq!(
            run(&sentinel, &atlanta()).specglo,
            run(&rural(1), &atlanta()).specglo
        );
    }

    #[test]
    fn test_alpha_and_albedo_sentinels() {
        let negative_alpha = SpectralRequest::new(
            1,
            AtmosphericConditions::new(-1.0, 0.65, -1.0, 0.2, 1.36),
        );
        let expected = run(&rural(1), &atlanta());
        assert_eq!(run(&negative_alpha, &atlanta()).specglo, expected.specglo);

        let sentinel = Albedo::new([-1.0, 0.0, 0.0, 0.0, 0.0, 0.0], [0.9; 6]);
        assert_eq!(effective_albedo(&sentinel), Albedo::default());
        let negative = Albedo::new([0.3, 0.7, 0.8, 1.3, 2.5, 4.0], [-0.5; 6]);
        assert_eq!(effective_albedo(&negative), Albedo::default());
        assert_eq!(
            spectrl2(&rural(1), &atlanta(), &sentinel).specglo,
            expected.specglo
        );
    }

    #[test]
    fn test_estimated_ozone() {
        let ozone = estimated_ozone(33.65, -84.43, 203);
        assert!(ozone > 0.25 && ozone < 0.4, "ozone {ozone}");
        let southern = estimated_ozone(-33.65, 151.2, 203);
        assert!(southern > 0.235 && southern < 0.4, "ozone {southern}");
        assert!((estimated_ozone(0.0, 0.0, 100) - 0.235).abs() < 1e-6);
    }

    #[test]
    fn test_components_are_consistent() {
        let output = run(&rural(1), &atlanta());
        assert_eq!(output.status, 0);
        for k in 0..SPECTRUM_BINS {
            assert!(output.specetr[k] > 0.0);
            assert!(output.specdir[k] >= 0.0);
            assert!(output.specdir[k] <= output.specetr[k]);
            assert!(output.specdif[k] >= 0.0);
            assert!(output.specglo[k] >= output.specdif[k]);
        }
        assert_eq!(output.specx, WAVELENGTH);
    }

    #[test]
    fn test_photon_units() {
        let irradiance = run(&rural(1), &atlanta());
        let flux = run(&rural(2), &atlanta());
        let density = run(&rural(3), &atlanta());

        let k = 30;
        let wavelength = f64::from(WAVELENGTH[k]);
        let expected = f64::from(irradiance.specglo[k]) * wavelength * PHOTON_FLUX;
        assert!((f64::from(flux.specglo[k]) / expected - 1.0).abs() < 1e-5);
        assert_eq!(flux.specx, WAVELENGTH);

        // Photon energy in eV is about 1.24 / wavelength in µm
        assert!((f64::from(density.specx[k]) * wavelength - 1.239_85).abs() < 1e-3);
        assert!(density.specx[0] > density.specx[SPECTRUM_BINS - 1]);
        let expected = f64::from(flux.specglo[k]) * wavelength / f64::from(density.specx[k]);
        assert!((f64::from(density.specglo[k]) / expected - 1.0).abs() < 1e-5);
        assert_eq!(density.specetr, irradiance.specetr);
    }

    #[test]
    fn test_tracking_surface() {
        let tracking = atlanta().with_orientation(Orientation::tracking());
        let output = run(&rural(1), &tracking);
        let fixed = run(&rural(1), &atlanta());

        assert_eq!(output.status, 0);
        assert_eq!(output.orientation[0], output.angles[0]);
        assert_eq!(output.specdir, fixed.specdir);
        // A surface facing the sun receives at least the direct beam
        for k in 0..SPECTRUM_BINS {
            assert!(output.specglo[k] >= output.specdir[k]);
        }
    }

    #[test]
    fn test_position_failures_pass_through() {
        let bad_year = PositionRequest::new(
            Location::new(33.65, -84.43, -5.0),
            DateTime::new(2051, 7, 22, 9, 45, 37),
            Weather::new(1006.0, 27.0),
        );
        assert_eq!(run(&rural(1), &bad_year).status, 1);

        let bad_tilt = atlanta().with_orientation(Orientation::new(181.0, 135.0));
        assert_eq!(run(&rural(1), &bad_tilt).status, 1 << 13);

        // Spectral rules are checked first
        assert_eq!(run(&rural(0), &bad_year).status, -1);
    }

    #[test]
    fn test_sun_below_horizon_gives_dark_surface() {
        let night = PositionRequest::new(
            Location::new(33.65, -84.43, -5.0),
            DateTime::new(1999, 7, 22, 0, 0, 0),
            Weather::new(1006.0, 27.0),
        );
        let output = run(&rural(1), &night);
        assert_eq!(output.status, 0);
        assert_eq!(output.airmass, [-1.0, -1.0]);
        assert!(output.specetr.iter().all(|&value| value > 0.0));
        assert!(output.specglo.iter().all(|&value| value == 0.0));
        assert!(output.specdif.iter().all(|&value| value == 0.0));
    }
}
