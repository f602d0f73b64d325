//! Clear-sky spectrum on a tilted surface, printed as a table.

use solar_utils::{
    Albedo, AtmosphericConditions, DateTime, Location, Orientation, Units, Weather, spectrum,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Atlanta, Georgia on a south-east facing surface tilted at the latitude
    let spectrum = spectrum(
        Units::Irradiance,
        Location::new(33.65, -84.43, -5.0),
        DateTime::new(1999, 7, 22, 9, 45, 37),
        Weather::new(1006.0, 27.0),
        Orientation::new(33.65, 135.0),
        // alpha, assym, ozone (negative: estimate), tau500, watvap (cm)
        AtmosphericConditions::new(1.14, 0.65, -1.0, 0.2, 1.36),
        Albedo::default(),
    )?;

    println!("Wavelength (µm)   Extraterrestrial      Direct     Diffuse      Global");
    for bin in spectrum.bins().step_by(6) {
        println!(
            "{:>15.3} {:>18.3} {:>11.3} {:>11.3} {:>11.3}",
            bin.x, bin.extraterrestrial, bin.direct, bin.diffuse, bin.global
        );
    }

    // Trapezoidal integration of the global spectrum
    let x = spectrum.x();
    let global = spectrum.global();
    let total: f32 = (1..x.len())
        .map(|k| 0.5 * (global[k] + global[k - 1]) * (x[k] - x[k - 1]))
        .sum();
    println!("\nIntegrated global irradiance: {total:.1} W/m²");

    Ok(())
}
