//! Sentence level of the *NMEA 0183* protocol: grammar, checksum and field
//! splitting for `$GP` sentences of the form `$GPFFF,f1,f2,...,fn*HH`.

use arrayvec::ArrayString;

use std::fmt;
use std::str::FromStr;

use err::SentenceError;

const START: u8 = b'$';
const TALKER: &[u8] = b"GP";
const CODE_LENGTH: usize = 3;
const CHECKSUM_LENGTH: usize = 2;
const SEPARATOR: u8 = b',';
const CHECKSUM_DELIMITER: u8 = b'*';
/// `$`, talker and format code.
const HEADER_LENGTH: usize = 1 + 2 + CODE_LENGTH;

/// Three uppercase letters naming the sentence type, e.g. `GGA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatCode(ArrayString<CODE_LENGTH>);

impl FormatCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FormatCode {
    type Err = SentenceError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.len() != CODE_LENGTH || !code.bytes().all(|c| c.is_ascii_uppercase()) {
            return Err(SentenceError::InvalidFormatCode(code.to_owned()));
        }
        ArrayString::from(code)
            .map(FormatCode)
            .map_err(|_| SentenceError::InvalidFormatCode(code.to_owned()))
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format code and data fields of one sentence, in order. Empty fields are
/// kept as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceData {
    format: FormatCode,
    fields: Vec<String>,
}

impl SentenceData {
    pub fn new(format: FormatCode, fields: Vec<String>) -> Self {
        SentenceData { format, fields }
    }

    pub fn format(&self) -> FormatCode {
        self.format
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Checks `line` against the sentence grammar
/// `$GP<3 uppercase letters>(,<field>)*\*<2 hex digits>`, where a field is any
/// run of characters other than `,`, `*` and `$`. The whole line has to match.
pub fn is_well_formed(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < HEADER_LENGTH + 1 + CHECKSUM_LENGTH {
        return false;
    }
    if bytes[0] != START || &bytes[1..3] != TALKER {
        return false;
    }
    if !bytes[3..HEADER_LENGTH].iter().all(u8::is_ascii_uppercase) {
        return false;
    }

    let delimiter = bytes.len() - CHECKSUM_LENGTH - 1;
    if bytes[delimiter] != CHECKSUM_DELIMITER
        || !bytes[delimiter + 1..].iter().all(u8::is_ascii_hexdigit)
    {
        return false;
    }

    // every field is introduced by a separator
    let blob = &bytes[HEADER_LENGTH..delimiter];
    (blob.is_empty() || blob[0] == SEPARATOR)
        && !blob.iter().any(|&c| c == CHECKSUM_DELIMITER || c == START)
}

/// Compares the XOR parity of everything between `$` and `*` with the
/// hexadecimal checksum after `*`.
///
/// Returns `SentenceError::Malformed` if `line` is not well-formed.
pub fn has_valid_checksum(line: &str) -> Result<bool, SentenceError> {
    let (body, checksum) = split_checksum(line)?;
    let parity = body.bytes().fold(0u8, |acc, c| acc ^ c);
    let expected = u8::from_str_radix(checksum, 16)?;

    Ok(parity == expected)
}

/// Splits a well-formed sentence into its format code and data fields.
///
/// The separator right after the format code does not open an extra field,
/// while a separator right before `*` is followed by an empty last field.
pub fn extract_sentence_data(line: &str) -> Result<SentenceData, SentenceError> {
    let (body, _) = split_checksum(line)?;
    let (code, blob) = body[TALKER.len()..].split_at(CODE_LENGTH);
    let format = code.parse()?;

    let fields = blob.split(SEPARATOR as char).skip(1).map(String::from).collect();

    Ok(SentenceData::new(format, fields))
}

/// Returns the text between `$` and `*` and the checksum digits.
fn split_checksum(line: &str) -> Result<(&str, &str), SentenceError> {
    if !is_well_formed(line) {
        return Err(SentenceError::Malformed(line.to_owned()));
    }
    let delimiter = line.len() - CHECKSUM_LENGTH - 1;

    Ok((&line[1..delimiter], &line[delimiter + 1..]))
}
