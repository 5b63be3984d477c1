//! Reads *NMEA 0183* logs into routes of GPS fixes.
//!
//! Every line of a log goes through the same steps: grammar check
//! ([`is_well_formed`]), checksum check ([`has_valid_checksum`]), field
//! extraction ([`extract_sentence_data`]) and decoding of the position fields
//! ([`decode`]). A line that fails any of these is dropped and reading
//! continues with the next one, so [`route_from_log`] returns the fixes of
//! all GLL, GGA and RMC sentences that survived.
//!
//! [`is_well_formed`]: lexer/fn.is_well_formed.html
//! [`has_valid_checksum`]: lexer/fn.has_valid_checksum.html
//! [`extract_sentence_data`]: lexer/fn.extract_sentence_data.html
//! [`decode`]: parser/fn.decode.html
//! [`route_from_log`]: parser/fn.route_from_log.html

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod err;
#[macro_use]
mod macros;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod position;

pub use err::{CoordinateParseError, DecodeError, FieldError, RouteError, SentenceError};
pub use format::{FormatRegistry, PositionFormat};
pub use lexer::{extract_sentence_data, has_valid_checksum, is_well_formed, FormatCode, SentenceData};
pub use parser::{decode, route_from_lines, route_from_log, Fixes, PositionDecoder, Route};
pub use position::{FromNmea, GeoPosition};
