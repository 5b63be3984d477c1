/// Unwraps a `Result` inside `Iterator::next`, yielding the converted error
/// as the next item instead of returning it.
#[macro_export]
macro_rules! try_some {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => return Some(Err(From::from(e))),
        }
    };
}

/// Looks up a required field by index, failing with
/// `FieldError::Missing` when the sentence is too short.
macro_rules! field {
    ($fields:expr, $index:expr) => {
        match $fields.get($index) {
            Some(f) => f.as_str(),
            None => return Err(FieldError::Missing($index, $fields.len()).into()),
        }
    };
}
