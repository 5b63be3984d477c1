use std::{error, io, num};

use lexer::FormatCode;

quick_error! {
    /// Misuse of the sentence layer: a checksum or field extraction was
    /// requested for a line that never passed `is_well_formed`.
    #[derive(Debug)]
    pub enum SentenceError {
        Malformed(line: String) {
            description("Malformed sentence")
            display("Not a well-formed GPS sentence: {:?}", line)
        }
        InvalidFormatCode(code: String) {
            description("Invalid format code")
            display("Format code {:?} is not three uppercase letters", code)
        }
        Checksum(err: num::ParseIntError) {
            from()
            description("Checksum parsing error")
            display("Could not read checksum digits: {}", err)
            cause(err)
        }
    }
}

quick_error! {
    /// The two ways a well-formed sentence can fail to yield a position.
    #[derive(Debug)]
    pub enum DecodeError {
        UnsupportedFormat(code: FormatCode) {
            description("Unsupported format")
            display("Sentence type {} does not carry a supported position", code)
        }
        MalformedFields(err: FieldError) {
            from()
            description("Malformed fields")
            display("Necessary fields are missing or invalid: {}", err)
            cause(err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum FieldError {
        TooFew(count: usize, min: usize) {
            description("Too few fields")
            display("The sentence has {} fields but at least {} are required", count, min)
        }
        Missing(index: usize, count: usize) {
            description("Missing field")
            display("Field {} is required but the sentence has only {} fields", index, count)
        }
        Position(err: Box<dyn error::Error + Send + Sync>) {
            description("Invalid position fields")
            display("{}", err)
            cause(&**err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum CoordinateParseError {
        InvalidInput(msg: &'static str) {
            description("Invalid input")
            display("Invalid input: {}", msg)
        }
        InvalidHemisphere(c: char) {
            description("Invalid hemisphere")
            display("Invalid hemisphere letter {:?}", c)
        }
        Degrees(err: num::ParseIntError) {
            from()
            description("Degrees parsing error")
            display("{}", err)
            cause(err)
        }
        DecimalMin(err: num::ParseFloatError) {
            from()
            description("Minutes parsing error")
            display("{}", err)
            cause(err)
        }
        Elevation(err: num::ParseFloatError) {
            description("Elevation parsing error")
            display("Could not parse elevation: {}", err)
            cause(err)
        }
        InvalidCoord(val: f64, max: f64) {
            description("Invalid coordinate")
            display("Invalid coordinate: {} should be between {} and {}", val, max*-1.0, max)
        }
    }
}

quick_error! {
    /// Failures that abort `route_from_log`. Skipped lines never end up here.
    #[derive(Debug)]
    pub enum RouteError {
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("Encountered I/O error while reading the log: {}", err)
            cause(err)
        }
        Sentence(err: SentenceError) {
            from()
            description("Sentence error")
            display("{}", err)
            cause(err)
        }
    }
}
