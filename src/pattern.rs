//! Path pattern model: parsing, matching, and specificity ordering.
//!
//! A pattern is a `/`-separated sequence of segments. A segment starting
//! with `:` is dynamic and captures the corresponding non-empty segment of a
//! concrete path; any other segment is static and must match exactly. The
//! root pattern `/` is the empty segment sequence.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned by [`PathPattern::parse`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern did not start with `/`.
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    /// The pattern contained an empty segment (`//` or a trailing `/`).
    #[error("path pattern `{0}` contains an empty segment")]
    EmptySegment(String),
    /// A dynamic segment had no name (`/:`).
    #[error("path pattern `{0}` contains a dynamic segment with no name")]
    EmptyParamName(String),
    /// The same parameter name was bound by two segments.
    #[error("path pattern `{0}` binds parameter `{1}` more than once")]
    DuplicateParam(String, String),
    /// A `:` appeared anywhere other than the start of a segment.
    #[error("path pattern `{0}`: `:` is only valid at the start of a segment")]
    InvalidParamPosition(String),
}

/// One segment of a path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Literal segment, matched exactly and case-sensitively.
    Static(String),
    /// Named dynamic segment, capturing one non-empty concrete segment.
    Param(String),
}

/// A validated, immutable path pattern such as `/answers/:task_number`.
///
/// Displays and serializes as its source string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] describing the first malformed piece of the
    /// input: missing leading slash, empty segment, unnamed or repeated
    /// parameter, or a misplaced `:`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for piece in rest.split('/') {
                segments.push(parse_segment(raw, piece)?);
            }
        }

        // Reject `/x/:a/:a` style rebinding.
        for (index, segment) in segments.iter().enumerate() {
            if let Segment::Param(name) = segment {
                let repeated = segments[..index]
                    .iter()
                    .any(|earlier| matches!(earlier, Segment::Param(other) if other == name));
                if repeated {
                    return Err(PatternError::DuplicateParam(raw.to_owned(), name.clone()));
                }
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// The pattern's source string, e.g. `/answers/:task_number`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this is the root pattern `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The parsed segments, root-first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the dynamic segments, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a concrete path against this pattern.
    ///
    /// Returns the captured parameters on a match, `None` otherwise. Query
    /// (`?...`) and fragment (`#...`) suffixes on the concrete path are
    /// ignored. A dynamic segment never matches an empty concrete segment,
    /// so `/answers/` does not satisfy `/answers/:task_number`. Captured
    /// values are the verbatim path substrings; no percent-decoding happens
    /// at this layer.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let path = strip_query_and_fragment(path);
        let rest = path.strip_prefix('/')?;

        let concrete: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, got) in self.segments.iter().zip(&concrete) {
            match segment {
                Segment::Static(want) if want == got => {}
                Segment::Param(name) if !got.is_empty() => {
                    params.insert(name.clone(), (*got).to_owned());
                }
                _ => return None,
            }
        }
        Some(params)
    }

    /// Specificity ordering used by the route table.
    ///
    /// Segments are compared position by position with static segments
    /// ordering before dynamic ones, so a first-match scan over a sorted
    /// table realizes static-before-dynamic resolution. Content comparisons
    /// and the final length comparison only make the order total, which
    /// keeps resolution independent of registration order.
    #[must_use]
    pub fn cmp_specificity(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(&other.segments) {
            let ord = match (a, b) {
                (Segment::Static(x), Segment::Static(y)) => x.cmp(y),
                (Segment::Static(_), Segment::Param(_)) => Ordering::Less,
                (Segment::Param(_), Segment::Static(_)) => Ordering::Greater,
                (Segment::Param(x), Segment::Param(y)) => x.cmp(y),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.segments.len().cmp(&other.segments.len())
    }

    /// Whether two patterns match exactly the same set of concrete paths,
    /// i.e. they are identical up to parameter names.
    #[must_use]
    pub fn shadows(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Static(x), Segment::Static(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PathPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn parse_segment(raw: &str, piece: &str) -> Result<Segment, PatternError> {
    if piece.is_empty() {
        return Err(PatternError::EmptySegment(raw.to_owned()));
    }
    if let Some(name) = piece.strip_prefix(':') {
        if name.is_empty() {
            return Err(PatternError::EmptyParamName(raw.to_owned()));
        }
        if name.contains(':') {
            return Err(PatternError::InvalidParamPosition(raw.to_owned()));
        }
        return Ok(Segment::Param(name.to_owned()));
    }
    if piece.contains(':') {
        return Err(PatternError::InvalidParamPosition(raw.to_owned()));
    }
    Ok(Segment::Static(piece.to_owned()))
}

/// Cut a `?query` or `#fragment` suffix off a concrete path.
fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(index) => &path[..index],
        None => path,
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
