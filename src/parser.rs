//! Turns sentences into positions, and logs into routes.

use std::io;
use std::marker::PhantomData;
use std::str;

use err::{DecodeError, FieldError, RouteError};
use format::FormatRegistry;
use lexer::{self, SentenceData};
use position::{FromNmea, GeoPosition};

/// Elevation handed to the position constructor for sentence types that do
/// not report one.
const NO_ELEVATION: &str = "0";

/// The fixes of a log, in log order.
pub type Route<P = GeoPosition> = Vec<P>;

/// Builds positions from sentence data, using the field layouts of a
/// `FormatRegistry`.
#[derive(Debug, Clone, Copy)]
pub struct PositionDecoder<'r> {
    registry: &'r FormatRegistry,
}

impl<'r> PositionDecoder<'r> {
    pub fn new(registry: &'r FormatRegistry) -> Self {
        PositionDecoder { registry }
    }

    /// Decode the position carried by `data`.
    ///
    /// Fails with `DecodeError::UnsupportedFormat` if the registry has no
    /// layout for the format code and with `DecodeError::MalformedFields` if
    /// the sentence has fewer fields than the layout requires or the position
    /// constructor rejects the field text.
    pub fn decode<P: FromNmea>(&self, data: &SentenceData) -> Result<P, DecodeError> {
        let format = data.format();
        let layout = match self.registry.get(format.as_str()) {
            Some(layout) => layout,
            None => return Err(DecodeError::UnsupportedFormat(format)),
        };
        let fields = data.fields();
        if fields.len() < layout.min_fields {
            return Err(FieldError::TooFew(fields.len(), layout.min_fields).into());
        }

        let latitude = field!(fields, layout.latitude);
        let north_south = hemisphere(field!(fields, layout.north_south));
        let longitude = field!(fields, layout.longitude);
        let east_west = hemisphere(field!(fields, layout.east_west));
        let elevation = match layout.elevation {
            Some(index) => field!(fields, index),
            None => NO_ELEVATION,
        };

        P::from_nmea(latitude, north_south, longitude, east_west, elevation)
            .map_err(|e| FieldError::Position(Box::new(e)).into())
    }
}

impl Default for PositionDecoder<'static> {
    fn default() -> Self {
        PositionDecoder::new(FormatRegistry::gps())
    }
}

/// Decode `data` with the GLL, GGA and RMC layouts.
pub fn decode<P: FromNmea>(data: &SentenceData) -> Result<P, DecodeError> {
    PositionDecoder::default().decode(data)
}

/// First character of a hemisphere field, `'\0'` if the field is empty.
#[inline]
fn hemisphere(field: &str) -> char {
    field.chars().next().unwrap_or_default()
}

/// Iterator over the fixes of a log.
///
/// Lines may be raw bytes; a trailing `\r` is dropped. Lines that are not
/// UTF-8, are not well-formed, fail their checksum, name an unsupported
/// sentence type or lack valid position fields are skipped. Read errors and
/// misuse of the sentence layer are yielded as errors.
#[derive(Debug)]
pub struct Fixes<'r, I, P = GeoPosition> {
    lines: I,
    decoder: PositionDecoder<'r>,
    read: usize,
    kept: usize,
    _position: PhantomData<fn() -> P>,
}

impl<I, P> Fixes<'static, I, P> {
    pub fn new(lines: I) -> Self {
        Fixes::with_registry(lines, FormatRegistry::gps())
    }
}

impl<'r, I, P> Fixes<'r, I, P> {
    pub fn with_registry(lines: I, registry: &'r FormatRegistry) -> Self {
        Fixes {
            lines,
            decoder: PositionDecoder::new(registry),
            read: 0,
            kept: 0,
            _position: PhantomData,
        }
    }
}

impl<'r, I, S, P> Iterator for Fixes<'r, I, P>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<[u8]>,
    P: FromNmea,
{
    type Item = Result<P, RouteError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(line) => try_some!(line),
                None => {
                    debug!("log exhausted: {} lines read, {} fixes kept", self.read, self.kept);
                    return None;
                }
            };
            self.read += 1;
            let bytes = line.as_ref();
            let bytes = match bytes.split_last() {
                Some((&b'\r', rest)) => rest,
                _ => bytes,
            };
            let line = match str::from_utf8(bytes) {
                Ok(line) => line,
                Err(_) => {
                    trace!("line {}: not valid UTF-8", self.read);
                    continue;
                }
            };

            if !lexer::is_well_formed(line) {
                trace!("line {}: not a well-formed sentence", self.read);
                continue;
            }
            if !try_some!(lexer::has_valid_checksum(line)) {
                trace!("line {}: checksum mismatch", self.read);
                continue;
            }

            let data = try_some!(lexer::extract_sentence_data(line));
            match self.decoder.decode(&data) {
                Ok(position) => {
                    self.kept += 1;
                    return Some(Ok(position));
                }
                Err(e @ DecodeError::UnsupportedFormat(_))
                | Err(e @ DecodeError::MalformedFields(_)) => {
                    trace!("line {}: {}", self.read, e);
                }
            }
        }
    }
}

/// Read `log` line by line and collect every fix it contains.
///
/// Noise in the log never fails the call; only read errors do.
pub fn route_from_log<R, P>(log: R) -> Result<Route<P>, RouteError>
where
    R: io::BufRead,
    P: FromNmea,
{
    Fixes::new(log.split(b'\n')).collect()
}

/// Like `route_from_log`, for lines that are already in memory.
pub fn route_from_lines<L, S, P>(lines: L) -> Result<Route<P>, RouteError>
where
    L: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
    P: FromNmea,
{
    Fixes::new(lines.into_iter().map(Ok::<S, io::Error>)).collect()
}
