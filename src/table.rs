//! Immutable route table: validation, resolution, and reverse lookup.
//!
//! DESIGN
//! ======
//! The table is the single place where every path/view pair of the client
//! is declared. Construction validates the table invariants and sorts the
//! routes by pattern specificity, so resolution is a first-match scan that
//! does not depend on registration order. Once built, the table is never
//! mutated; navigation state lives in the external runtime.

use std::collections::{BTreeMap, HashSet};

use crate::pattern::{PatternError, Segment};
use crate::route::Route;

/// Error returned when building or querying a [`RouteTable`].
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A route carried a malformed path pattern.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// Two routes declared the same name.
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),
    /// Two routes declared the same path pattern.
    #[error("path pattern `{0}` is declared more than once")]
    DuplicatePath(String),
    /// Two patterns match the same set of paths and differ only in
    /// parameter names, which would make resolution order-dependent.
    #[error("path patterns `{0}` and `{1}` match the same paths")]
    AmbiguousPattern(String, String),
    /// No route matches `/`.
    #[error("no root route: exactly one route must match `/`")]
    NoRootRoute,
    /// A reverse lookup named a route that does not exist.
    #[error("no route named `{0}`")]
    UnknownRoute(String),
    /// A reverse lookup omitted a required parameter.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam {
        /// Name of the route being expanded.
        route: String,
        /// Name of the missing parameter.
        param: String,
    },
    /// A route spec referenced a view name with no bound handle.
    #[error("route `{route}` references unknown view `{view}`")]
    UnknownView {
        /// Name of the offending route.
        route: String,
        /// The unresolved view name.
        view: String,
    },
}

/// The static mapping from path patterns to named views.
///
/// Built once at application start; immutable thereafter.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    /// Routes sorted by pattern specificity, most specific first.
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table, validating the declared routes.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if route names or path patterns repeat, if
    /// two patterns match the same paths, or if no route matches `/`.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, TableError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut paths: HashSet<&str> = HashSet::new();
        for route in &routes {
            if !names.insert(route.name()) {
                return Err(TableError::DuplicateName(route.name().to_owned()));
            }
            if !paths.insert(route.pattern().as_str()) {
                return Err(TableError::DuplicatePath(route.pattern().as_str().to_owned()));
            }
        }

        for (index, route) in routes.iter().enumerate() {
            for other in &routes[index + 1..] {
                if route.pattern().shadows(other.pattern()) {
                    return Err(TableError::AmbiguousPattern(
                        route.pattern().as_str().to_owned(),
                        other.pattern().as_str().to_owned(),
                    ));
                }
            }
        }

        if !routes.iter().any(|route| route.pattern().is_root()) {
            return Err(TableError::NoRootRoute);
        }

        let mut routes = routes;
        routes.sort_by(|a, b| a.pattern().cmp_specificity(b.pattern()));

        tracing::debug!(routes = routes.len(), "route table built");
        Ok(Self { routes })
    }

    /// Resolve a concrete path to at most one route.
    ///
    /// Static segments win over dynamic ones position by position. An
    /// unmatched path yields `None`; what to render then is the navigation
    /// runtime's decision, not the table's.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_, V>> {
        for route in &self.routes {
            if let Some(params) = route.pattern().match_path(path) {
                tracing::debug!(path, route = route.name(), "route resolved");
                return Some(ResolvedRoute { route, params });
            }
        }
        tracing::debug!(path, "no route matched");
        None
    }

    /// Look up a route by its unique name.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// Build a concrete path for a named route (reverse lookup).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownRoute`] for an unknown name and
    /// [`TableError::MissingParam`] when `params` lacks a value for one of
    /// the pattern's dynamic segments.
    pub fn href(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, TableError> {
        let route = self
            .route(name)
            .ok_or_else(|| TableError::UnknownRoute(name.to_owned()))?;

        if route.pattern().is_root() {
            return Ok("/".to_owned());
        }

        let mut path = String::new();
        for segment in route.pattern().segments() {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| TableError::MissingParam {
                        route: name.to_owned(),
                        param: param.clone(),
                    })?;
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }

    /// The routes in resolution (specificity) order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes. Always `false` for a validated
    /// table, which requires a root route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The outcome of resolving a path: the matched route plus captured
/// parameters.
#[derive(Clone, Debug)]
pub struct ResolvedRoute<'t, V> {
    route: &'t Route<V>,
    params: BTreeMap<String, String>,
}

impl<V> ResolvedRoute<'_, V> {
    /// The matched route.
    #[must_use]
    pub fn route(&self) -> &Route<V> {
        self.route
    }

    /// Name of the matched route.
    #[must_use]
    pub fn name(&self) -> &str {
        self.route.name()
    }

    /// The view the matched route renders.
    #[must_use]
    pub fn view(&self) -> &V {
        self.route.view()
    }

    /// All parameters captured from the path, keyed by segment name.
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// A single captured parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Parameters forwarded to the view as inputs.
    ///
    /// Empty unless the route opted in via
    /// [`Route::with_props_from_params`]; the captured parameters stay
    /// available through [`ResolvedRoute::params`] either way.
    #[must_use]
    pub fn view_props(&self) -> BTreeMap<String, String> {
        if self.route.props_from_params() {
            self.params.clone()
        } else {
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
