//! Path pattern matching for routers.
//!
//! Patterns are `/`-delimited paths where a segment written `:name` captures
//! a dynamic value (`/users/:id/posts/:postId`). [`compile`] turns a pattern
//! into a reusable [`CompiledMatcher`] that tests candidate paths and
//! extracts named parameters; [`score`] ranks segment sequences by literal
//! overlap so a router can prefer the most specific of several candidate
//! patterns. All operations are pure; the owning router keeps the route
//! table and caches compiled matchers.

pub use matcher::{compile, CompiledMatcher, InvalidPatternError, NoMatchError, ParamsMap};
pub use normalize::{normalize, InvalidPathError};
pub use segment::{is_dynamic_segment, score, split_segments, MatchScore};

mod matcher;
mod normalize;
mod segment;
