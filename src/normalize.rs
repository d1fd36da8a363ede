use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref LEADING_RUN: Regex = Regex::new(r"^[^#?\s]+").unwrap();
}

#[derive(Error, Debug)]
#[error("cannot normalize invalid path")]
pub struct InvalidPathError;

/// Produces the canonical form of a path used for compiling and matching:
/// everything from the first `?`, `#`, or whitespace character onward is
/// dropped, along with a single trailing slash.
///
/// The root path `/` is returned unchanged. An input with no leading run
/// before the cut (empty, or starting with `?`, `#`, or whitespace) has no
/// usable path and is an error.
pub fn normalize(raw: &str) -> Result<String, InvalidPathError> {
    let cleaned = LEADING_RUN.find(raw).ok_or(InvalidPathError)?.as_str();
    if cleaned == "/" {
        return Ok(cleaned.to_owned());
    }
    Ok(cleaned.strip_suffix('/').unwrap_or(cleaned).to_owned())
}
