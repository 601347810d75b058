//! Route definitions: a pattern bound to a named view.

use serde::{Deserialize, Serialize};

use crate::pattern::{PathPattern, PatternError};

/// A single binding from a path pattern to a view.
///
/// The view handle `V` is opaque to this crate; rendering is owned by the
/// surrounding application. `props_from_params` controls whether captured
/// path parameters are forwarded to the view as inputs.
#[derive(Clone, Debug)]
pub struct Route<V> {
    pattern: PathPattern,
    name: String,
    view: V,
    props_from_params: bool,
}

impl<V> Route<V> {
    /// Create a route from a pattern string, a unique name, and a view.
    ///
    /// Parameter forwarding is off by default; enable it with
    /// [`Route::with_props_from_params`].
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if `path` is not a valid pattern.
    pub fn new(path: &str, name: impl Into<String>, view: V) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(path)?,
            name: name.into(),
            view,
            props_from_params: false,
        })
    }

    /// Forward captured path parameters to the view as inputs.
    #[must_use]
    pub fn with_props_from_params(mut self) -> Self {
        self.props_from_params = true;
        self
    }

    /// The route's path pattern.
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The route's unique symbolic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view this route renders.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether captured parameters are forwarded to the view.
    #[must_use]
    pub fn props_from_params(&self) -> bool {
        self.props_from_params
    }
}

/// Data-only description of a route, with the view identified by name.
///
/// This is the serializable form of the table: a config document carries
/// `RouteSpec`s, and view names are bound to concrete handles when the
/// table is built (see [`crate::config::RouterConfig::from_specs`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Path pattern string, e.g. `/answers/:task_number`.
    pub path: String,
    /// Unique route name.
    pub name: String,
    /// Name of the view to bind.
    pub view: String,
    /// Forward captured parameters to the view.
    #[serde(default, rename = "props")]
    pub props_from_params: bool,
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
