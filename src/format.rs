//! Field layouts of the sentence types that carry a position.

/// Where the position fields of one sentence type live, as zero-based field
/// indices. Every index is smaller than `min_fields`, which is checked when
/// the layout is constructed (at compile time for the statics below).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionFormat {
    pub latitude: usize,
    pub north_south: usize,
    pub longitude: usize,
    pub east_west: usize,
    pub elevation: Option<usize>,
    pub min_fields: usize,
}

impl PositionFormat {
    pub const fn new(
        latitude: usize,
        north_south: usize,
        longitude: usize,
        east_west: usize,
        elevation: Option<usize>,
        min_fields: usize,
    ) -> Self {
        assert!(latitude < min_fields);
        assert!(north_south < min_fields);
        assert!(longitude < min_fields);
        assert!(east_west < min_fields);
        if let Some(elevation) = elevation {
            assert!(elevation < min_fields);
        }

        PositionFormat {
            latitude,
            north_south,
            longitude,
            east_west,
            elevation,
            min_fields,
        }
    }
}

/// Immutable lookup table from format code to field layout.
#[derive(Debug)]
pub struct FormatRegistry {
    formats: &'static [(&'static str, PositionFormat)],
}

impl FormatRegistry {
    pub const fn new(formats: &'static [(&'static str, PositionFormat)]) -> Self {
        FormatRegistry { formats }
    }

    /// GLL, GGA and RMC.
    pub fn gps() -> &'static FormatRegistry {
        &GPS
    }

    pub fn get(&self, code: &str) -> Option<&PositionFormat> {
        self.formats
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, ref format)| format)
    }

    pub fn codes<'a>(&'a self) -> impl Iterator<Item = &'static str> + 'a {
        self.formats.iter().map(|&(c, _)| c)
    }
}

static GPS_FORMATS: [(&str, PositionFormat); 3] = [
    ("GLL", PositionFormat::new(0, 1, 2, 3, None, 5)),
    ("GGA", PositionFormat::new(1, 2, 3, 4, Some(8), 14)),
    ("RMC", PositionFormat::new(2, 3, 4, 5, None, 11)),
];

static GPS: FormatRegistry = FormatRegistry::new(&GPS_FORMATS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_table() {
        let gps = FormatRegistry::gps();
        assert_eq!(gps.codes().collect::<Vec<_>>(), vec!["GLL", "GGA", "RMC"]);

        let gga = gps.get("GGA").unwrap();
        assert_eq!(
            (gga.latitude, gga.north_south, gga.longitude, gga.east_west),
            (1, 2, 3, 4)
        );
        assert_eq!(gga.elevation, Some(8));
        assert_eq!(gga.min_fields, 14);

        assert_eq!(gps.get("GLL").unwrap().elevation, None);
        assert_eq!(gps.get("RMC").unwrap().latitude, 2);
    }

    #[test]
    fn unknown_codes() {
        let gps = FormatRegistry::gps();
        assert!(gps.get("GSV").is_none());
        assert!(gps.get("gll").is_none());
        assert!(gps.get("").is_none());
    }

    #[test]
    fn custom_registry() {
        static FORMATS: [(&str, PositionFormat); 1] =
            [("GNS", PositionFormat::new(1, 2, 3, 4, Some(8), 12))];
        static REGISTRY: FormatRegistry = FormatRegistry::new(&FORMATS);

        assert_eq!(REGISTRY.get("GNS").unwrap().elevation, Some(8));
        assert!(REGISTRY.get("GLL").is_none());
    }

    #[test]
    #[should_panic]
    fn index_beyond_min_fields() {
        PositionFormat::new(0, 1, 2, 5, None, 5);
    }
}
