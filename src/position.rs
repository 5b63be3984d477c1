//! Positions built from the raw text of NMEA position fields.

use std::error;
use std::fmt;
use std::str::FromStr;

use err::CoordinateParseError;

const LAT_SPLIT: usize = 2;
const ABS_MAX_LAT: f64 = 90.0;
const LONG_SPLIT: usize = 3;
const ABS_MAX_LONG: f64 = 180.0;
const MINUTES_PER_DEGREE: f64 = 60.0;

/// Construction of a position from the text of its sentence fields.
///
/// The decoder hands over the fields untouched: coordinates in
/// degrees-and-decimal-minutes, the first character of each hemisphere field
/// (`'\0'` for an empty field) and the elevation, which is `"0"` for
/// sentence types without one. Any error makes the sentence count as having
/// malformed fields.
pub trait FromNmea: Sized {
    type Err: error::Error + Send + Sync + 'static;

    fn from_nmea(
        latitude: &str,
        north_south: char,
        longitude: &str,
        east_west: char,
        elevation: &str,
    ) -> Result<Self, Self::Err>;
}

/// The cardinal directions.
#[derive(Debug, Clone, Copy)]
enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    fn latitude(c: char) -> Result<Self, CoordinateParseError> {
        match c {
            'N' => Ok(CardDir::North),
            'S' => Ok(CardDir::South),
            _ => Err(CoordinateParseError::InvalidHemisphere(c)),
        }
    }

    fn longitude(c: char) -> Result<Self, CoordinateParseError> {
        match c {
            'E' => Ok(CardDir::East),
            'W' => Ok(CardDir::West),
            _ => Err(CoordinateParseError::InvalidHemisphere(c)),
        }
    }

    #[inline]
    fn get_sign(self) -> f64 {
        match self {
            CardDir::North | CardDir::East => 1.0,
            CardDir::South | CardDir::West => -1.0,
        }
    }
}

/// A fix on the WGS-84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in decimal degrees, positive in the northern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive in the eastern hemisphere.
    pub longitude: f64,
    /// Antenna altitude in meters.
    pub elevation: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        GeoPosition {
            latitude,
            longitude,
            elevation,
        }
    }
}

impl FromNmea for GeoPosition {
    type Err = CoordinateParseError;

    fn from_nmea(
        latitude: &str,
        north_south: char,
        longitude: &str,
        east_west: char,
        elevation: &str,
    ) -> Result<Self, Self::Err> {
        let latitude = parse_coord(latitude, CardDir::latitude(north_south)?, LAT_SPLIT, ABS_MAX_LAT)?;
        let longitude = parse_coord(longitude, CardDir::longitude(east_west)?, LONG_SPLIT, ABS_MAX_LONG)?;
        let elevation = f64::from_str(elevation).map_err(CoordinateParseError::Elevation)?;
        if !elevation.is_finite() {
            return Err(CoordinateParseError::InvalidInput("elevation has to be finite"));
        }

        Ok(GeoPosition::new(latitude, longitude, elevation))
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.1}", self.latitude, self.longitude, self.elevation)
    }
}

/// Parse `coord` as a coordinate in decimal degrees.
/// `dir` will be converted to 1 or -1 to be multiplied with the degrees.
/// `deg_split` is the number of digits that make up the degrees.
/// `abs_max` is maximum value in degree, e.g. 180 for longitude.
fn parse_coord(coord: &str, dir: CardDir, deg_split: usize, abs_max: f64) -> Result<f64, CoordinateParseError> {
    // This check is needed to ensure we don't panic
    if deg_split >= coord.len() || !coord.is_char_boundary(deg_split) {
        return Err(CoordinateParseError::InvalidInput("the value is too short for a coordinate"));
    }

    let (deg, min) = coord.split_at(deg_split);
    if !deg.bytes().all(|c| c.is_ascii_digit()) {
        return Err(CoordinateParseError::InvalidInput("degrees have to be digits"));
    }
    let degrees = f64::from(u16::from_str(deg)?);
    let minutes = f64::from_str(min)?;
    if !(0.0..MINUTES_PER_DEGREE).contains(&minutes) {
        return Err(CoordinateParseError::InvalidInput("minutes have to be between 0 and 60"));
    }

    let dec_deg = degrees + minutes / MINUTES_PER_DEGREE;
    if dec_deg > abs_max {
        return Err(CoordinateParseError::InvalidCoord(dec_deg, abs_max));
    }
    Ok(dec_deg * dir.get_sign())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn degrees_and_minutes() {
        let p = GeoPosition::from_nmea("4916.45", 'N', "12311.12", 'W', "0").unwrap();
        assert!(close(p.latitude, 49.0 + 16.45 / 60.0));
        assert!(close(p.longitude, -(123.0 + 11.12 / 60.0)));
        assert_eq!(p.elevation, 0.0);

        let p = GeoPosition::from_nmea("4807.038", 'S', "01131.000", 'E', "545.4").unwrap();
        assert!(close(p.latitude, -(48.0 + 7.038 / 60.0)));
        assert!(close(p.longitude, 11.0 + 31.0 / 60.0));
        assert_eq!(p.elevation, 545.4);
    }

    #[test]
    fn negative_elevation() {
        let p = GeoPosition::from_nmea("0000.00", 'N', "00000.00", 'E', "-12.5").unwrap();
        assert_eq!(p, GeoPosition::new(0.0, 0.0, -12.5));
    }

    #[test]
    fn hemisphere_letters() {
        assert_matches!(
            GeoPosition::from_nmea("4916.45", 'E', "12311.12", 'W', "0"),
            Err(CoordinateParseError::InvalidHemisphere('E'))
        );
        assert_matches!(
            GeoPosition::from_nmea("4916.45", 'N', "12311.12", '\0', "0"),
            Err(CoordinateParseError::InvalidHemisphere('\0'))
        );
    }

    #[test]
    fn invalid_coordinates() {
        assert_matches!(
            GeoPosition::from_nmea("", 'N', "12311.12", 'W', "0"),
            Err(CoordinateParseError::InvalidInput(_))
        );
        assert_matches!(
            GeoPosition::from_nmea("4x16.45", 'N', "12311.12", 'W', "0"),
            Err(CoordinateParseError::InvalidInput(_))
        );
        assert_matches!(
            GeoPosition::from_nmea("4916.4.5", 'N', "12311.12", 'W', "0"),
            Err(CoordinateParseError::DecimalMin(_))
        );
        assert_matches!(
            GeoPosition::from_nmea("4961.00", 'N', "12311.12", 'W', "0"),
            Err(CoordinateParseError::InvalidInput(_))
        );
        assert_matches!(
            GeoPosition::from_nmea("9100.00", 'N', "12311.12", 'W', "0"),
            Err(CoordinateParseError::InvalidCoord(..))
        );
        assert_matches!(
            GeoPosition::from_nmea("4916.45", 'N', "18100.00", 'W', "0"),
            Err(CoordinateParseError::InvalidCoord(..))
        );
    }

    #[test]
    fn invalid_elevation() {
        assert_matches!(
            GeoPosition::from_nmea("4916.45", 'N', "12311.12", 'W', ""),
            Err(CoordinateParseError::Elevation(_))
        );
        assert_matches!(
            GeoPosition::from_nmea("4916.45", 'N', "12311.12", 'W', "inf"),
            Err(CoordinateParseError::InvalidInput(_))
        );
    }

    #[test]
    fn display() {
        let p = GeoPosition::new(49.274166666, -123.185333333, 545.4);
        assert_eq!(p.to_string(), "49.274167 -123.185333 545.4");
    }
}
