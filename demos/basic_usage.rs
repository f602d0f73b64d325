//! Basic solar position and error handling example.

use solar_utils::position::solar_position_detailed;
use solar_utils::{DateTime, Error, Location, Weather, solar_position};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bakersfield, California in local standard time (UTC-8, no daylight saving)
    let location = Location::new(35.56836, -119.2022, -8.0);
    let weather = Weather::new(1015.62055, 40.0); // pressure (mbar), temperature (°C)
    let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);

    let (angles, air_mass) = solar_position(location, datetime, weather)?;
    println!("Solar position at {datetime:?}:");
    println!("  Zenith angle: {:.5}°", angles.zenith());
    println!("  Elevation:    {:.5}°", angles.elevation());
    println!("  Azimuth:      {:.5}°", angles.azimuth());
    println!("  Air mass:     {:.6}", air_mass.relative());
    println!("  Air mass (pressure corrected): {:.6}", air_mass.pressure_corrected());

    let detailed = solar_position_detailed(location, datetime, weather)?;
    println!("  Day of year:  {}", detailed.settings[0]);

    // Midnight in winter: the sun is far below the horizon and air mass is undefined
    let (angles, air_mass) =
        solar_position(location, DateTime::new(2017, 1, 1, 0, 0, 0), weather)?;
    println!(
        "\nAt midnight: zenith {:.2}°, air mass defined: {}",
        angles.zenith(),
        air_mass.is_defined()
    );

    // Invalid inputs name the rejected field
    println!("\nValidation:");
    for datetime in [
        DateTime::new(2051, 6, 5, 12, 31, 0),
        DateTime::new(2013, 6, 5, 12, 61, 0),
        DateTime::new(2013, 6, 5, 24, 30, 0),
    ] {
        match solar_position(location, datetime, weather) {
            Ok(_) => println!("  {datetime:?}: ok"),
            Err(Error::Position(error)) => println!("  {datetime:?}: {error}"),
            Err(other) => return Err(other.into()),
        }
    }

    Ok(())
}
