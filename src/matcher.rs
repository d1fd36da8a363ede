use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::normalize::normalize;

lazy_static! {
    static ref CAPTURE_TOKEN: Regex = Regex::new(r":([^/\s]*)(/?)").unwrap();
}

#[derive(Error, Debug)]
#[error("cannot compile invalid pattern")]
pub struct InvalidPatternError;

#[derive(Error, Debug)]
#[error("path does not match pattern")]
pub struct NoMatchError;

/// Parameter names mapped to the values extracted from a matching path.
pub type ParamsMap = HashMap<String, String>;

/// An anchored regex compiled from a path pattern, plus the capture names
/// in their order of appearance. Immutable once built; compile a pattern
/// once at registration time and reuse the matcher for every resolution.
#[derive(Debug)]
pub struct CompiledMatcher {
    regex: Regex,
    keys: Vec<String>,
}

impl CompiledMatcher {
    /// Returns true if and only if the whole path satisfies the pattern.
    pub fn test(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Extracts the named parameter values from a path that satisfies the
    /// pattern. Callers must check `test` first; a non-matching path is an
    /// error. Extraction is positional, so a duplicated name keeps the value
    /// of its last occurrence.
    pub fn parse(&self, path: &str) -> Result<ParamsMap, NoMatchError> {
        if self.keys.is_empty() {
            return Ok(ParamsMap::new());
        }
        let caps = self.regex.captures(path).ok_or(NoMatchError)?;
        Ok(self
            .keys
            .iter()
            .enumerate()
            .map(|(idx, key)| (key.clone(), caps[idx + 1].to_owned()))
            .collect())
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiles a path pattern into a reusable matcher.
///
/// A segment written `:name` captures one non-empty run of non-slash,
/// non-whitespace characters; everything else is matched literally. The
/// resulting regex is anchored at both ends, so a prefix or suffix match
/// never counts (`/users/1` does not match the pattern `/users`).
pub fn compile(pattern: &str) -> anyhow::Result<CompiledMatcher> {
    let path = normalize(pattern)?;

    let mut source = String::from("^");
    let mut keys = Vec::new();
    let mut tail = 0;
    for caps in CAPTURE_TOKEN.captures_iter(&path) {
        // A bare `:` would compile to a zero-width capture.
        if caps[1].is_empty() {
            Err(InvalidPatternError)?
        }
        let token = caps.get(0).unwrap();
        source.push_str(&regex::escape(&path[tail..token.start()]));
        source.push_str(r"([^/\s]+)");
        source.push_str(&caps[2]);
        keys.push(caps[1].to_owned());
        tail = token.end();
    }
    source.push_str(&regex::escape(&path[tail..]));
    source.push('$');

    let regex = Regex::new(&source).map_err(|_| InvalidPatternError)?;
    debug!(pattern = %path, regex = %source, "compiled path pattern");
    Ok(CompiledMatcher { regex, keys })
}
