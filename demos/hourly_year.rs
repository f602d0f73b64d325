//! Hourly solar positions for a whole year, summarised per month.

use solar_utils::batch::{hourly_year, solar_positions_for_year};
use solar_utils::{Error, Location, Weather};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let location = Location::new(35.56836, -119.2022, -8.0);
    let weather = Weather::new(1015.62055, 40.0);
    let year = 2017;

    let datetimes = hourly_year(year)?;
    let positions = solar_positions_for_year(location, year, weather)?;
    println!("{} hourly positions for {year}\n", positions.len());

    println!("Month  Daylight hours  Min zenith  Min air mass");
    for month in 1..=12 {
        let (mut daylight, mut min_zenith, mut min_air_mass) = (0, f32::MAX, f32::MAX);
        for (datetime, (angles, air_mass)) in datetimes.iter().zip(positions.iter()) {
            if datetime.month() != month {
                continue;
            }
            if angles.zenith() < 90.0 {
                daylight += 1;
            }
            min_zenith = min_zenith.min(angles.zenith());
            if air_mass.is_defined() {
                min_air_mass = min_air_mass.min(air_mass.relative());
            }
        }
        println!("{month:>5}  {daylight:>14}  {min_zenith:>9.2}°  {min_air_mass:>12.4}");
    }

    // Leap years do not fit the fixed 8760-hour layout
    match solar_positions_for_year(location, 2016, weather) {
        Err(error @ Error::UnsupportedLeapYear { .. }) => println!("\n2016: {error}"),
        other => println!("\n2016: unexpected {other:?}"),
    }

    Ok(())
}
