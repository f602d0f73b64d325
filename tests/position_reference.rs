//! Validation of single-point solar position against stored SOLPOS values.

use solar_utils::position::solar_position_detailed;
use solar_utils::{DateTime, Error, Location, PositionError, Weather, solar_position};

const ANGLE_EPSILON: f32 = 1e-3; // degrees
const AIRMASS_RELATIVE_EPSILON: f32 = 1e-4;

fn reader(path: &str) -> csv::Reader<std::fs::File> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("reference CSV file should exist")
}

fn airmass_matches(actual: f32, expected: f32) -> bool {
    if expected < 0.0 {
        actual == expected
    } else {
        (actual / expected - 1.0).abs() < AIRMASS_RELATIVE_EPSILON
    }
}

#[test]
fn validate_against_position_reference_data() {
    let mut test_count = 0;
    let mut max_zenith_error = 0.0_f32;
    let mut max_azimuth_error = 0.0_f32;

    for record in reader("tests/data/position_reference.csv").records() {
        let record = record.unwrap();
        let float = |i: usize| record[i].parse::<f32>().unwrap();
        let int = |i: usize| record[i].parse::<i32>().unwrap();

        let site = &record[0];
        let location = Location::new(float(1), float(2), float(3));
        let weather = Weather::new(float(4), float(5));
        let datetime = DateTime::new(int(6), int(7), int(8), int(9), int(10), int(11));

        let (angles, air_mass) = solar_position(location, datetime, weather)
            .unwrap_or_else(|e| panic!("{site} {datetime:?} rejected: {e}"));

        let zenith_error = (angles.zenith() - float(12)).abs();
        let azimuth_error = (angles.azimuth() - float(13)).abs();
        max_zenith_error = max_zenith_error.max(zenith_error);
        max_azimuth_error = max_azimuth_error.max(azimuth_error);

        assert!(
            zenith_error < ANGLE_EPSILON,
            "Zenith {:.5}° (exp {:.5}°) for {site} {datetime:?}",
            angles.zenith(),
            float(12)
        );
        assert!(
            azimuth_error < ANGLE_EPSILON,
            "Azimuth {:.5}° (exp {:.5}°) for {site} {datetime:?}",
            angles.azimuth(),
            float(13)
        );
        assert!(
            airmass_matches(air_mass.relative(), float(14)),
            "Air mass {} (exp {}) for {site} {datetime:?}",
            air_mass.relative(),
            float(14)
        );
        assert!(
            airmass_matches(air_mass.pressure_corrected(), float(15)),
            "Pressure-corrected air mass {} (exp {}) for {site} {datetime:?}",
            air_mass.pressure_corrected(),
            float(15)
        );

        test_count += 1;
    }

    println!(
        "Validated {test_count} positions: max zenith error {max_zenith_error:.6}°, \
         max azimuth error {max_azimuth_error:.6}°"
    );
    assert!(test_count >= 20, "expected at least 20 reference rows");
}

#[test]
fn standard_case() {
    // Bakersfield, 2013-06-05 12:31:00 UTC-8
    let location = Location::new(35.56836, -119.2022, -8.0);
    let weather = Weather::new(1015.62055, 40.0);
    let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);

    let (angles, air_mass) = solar_position(location, datetime, weather).unwrap();
    assert!((angles.zenith() / 15.074_04 - 1.0).abs() < 1e-3);
    assert!((angles.azimuth() / 213.290_42 - 1.0).abs() < 1e-3);
    assert!((air_mass.relative() / 1.035_227 - 1.0).abs() < 1e-3);
    assert!((air_mass.pressure_corrected() / 1.037_905 - 1.0).abs() < 1e-3);

    let detailed = solar_position_detailed(location, datetime, weather).unwrap();
    assert_eq!(detailed.angles, angles.to_array());
    assert_eq!(detailed.settings, [156, 0]);
    assert_eq!(detailed.status, 0);
}

#[test]
fn validation_cases() {
    let location = Location::new(35.56836, -119.2022, -8.0);
    let weather = Weather::new(1015.62055, 40.0);

    let cases = [
        (
            DateTime::new(2051, 6, 5, 12, 31, 0),
            PositionError::Year { year: 2051 },
        ),
        (
            DateTime::new(2013, 13, 5, 12, 31, 0),
            PositionError::Month { month: 13 },
        ),
        (
            DateTime::new(2013, 6, 32, 12, 31, 0),
            PositionError::Day { day: 32 },
        ),
        (
            DateTime::new(2013, 6, 5, 25, 31, 0),
            PositionError::Hour { hour: 25 },
        ),
        (
            DateTime::new(2013, 6, 5, 12, 61, 0),
            PositionError::Minute { minute: 61 },
        ),
        (
            DateTime::new(2013, 6, 5, 12, 31, 61),
            PositionError::Second { second: 61 },
        ),
    ];

    for (datetime, expected) in cases {
        let result = solar_position(location, datetime, weather);
        assert_eq!(result, Err(Error::Position(expected)), "{datetime:?}");

        let message = result.unwrap_err().to_string();
        assert!(!message.is_empty());
    }
}

#[test]
fn midnight_as_hour_24() {
    let location = Location::new(35.56836, -119.2022, -8.0);
    let weather = Weather::new(1015.62055, 40.0);

    assert!(solar_position(location, DateTime::new(2013, 6, 5, 24, 0, 0), weather).is_ok());
    assert!(matches!(
        solar_position(location, DateTime::new(2013, 6, 5, 24, 30, 0), weather),
        Err(Error::Position(PositionError::MultipleViolations { .. }))
    ));
}

#[test]
fn sun_far_below_horizon() {
    let (angles, air_mass) = solar_position(
        Location::new(35.56836, -119.2022, -8.0),
        DateTime::new(2017, 1, 1, 0, 0, 0),
        Weather::new(1015.62055, 40.0),
    )
    .unwrap();

    assert!(angles.zenith() > 93.0);
    assert_eq!(air_mass.relative(), -1.0);
    assert_eq!(air_mass.pressure_corrected(), -1.0);
    assert!(!air_mass.is_defined());
}
