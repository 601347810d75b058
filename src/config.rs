//! Router configuration: history mode plus the route table.
//!
//! A [`RouterConfig`] is the declarative bundle handed to the external
//! navigation runtime at startup. This crate never drives navigation
//! itself.

use serde::{Deserialize, Serialize};

use crate::route::{Route, RouteSpec};
use crate::table::{RouteTable, TableError};

/// Browser history integration strategy, owned by the external runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// HTML5 history API; clean URLs.
    #[default]
    Web,
    /// Hash-fragment URLs, for hosts without rewrite rules.
    Hash,
    /// In-memory history, for tests and non-browser hosts.
    Memory,
}

/// Everything the navigation runtime needs: history mode, the validated
/// route table, and an optional fallback view for unmatched paths.
///
/// The fallback is the application's 404 hook; no default is supplied
/// here.
#[derive(Clone, Debug)]
pub struct RouterConfig<V> {
    history: HistoryMode,
    table: RouteTable<V>,
    fallback: Option<V>,
}

impl<V> RouterConfig<V> {
    /// Bundle a history mode with a validated table.
    #[must_use]
    pub fn new(history: HistoryMode, table: RouteTable<V>) -> Self {
        Self { history, table, fallback: None }
    }

    /// Set the view rendered when no route matches.
    #[must_use]
    pub fn with_fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Build a configuration from serializable route specs.
    ///
    /// `bind` maps a spec's view name to a concrete view handle; specs are
    /// the form the table takes when it lives in a config document rather
    /// than in code.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownView`] when `bind` has no handle for a
    /// spec's view name, a pattern error for a malformed path, or any
    /// table validation error.
    pub fn from_specs(
        history: HistoryMode,
        specs: &[RouteSpec],
        bind: impl Fn(&str) -> Option<V>,
    ) -> Result<Self, TableError> {
        let mut routes = Vec::with_capacity(specs.len());
        for spec in specs {
            let view = bind(&spec.view).ok_or_else(|| TableError::UnknownView {
                route: spec.name.clone(),
                view: spec.view.clone(),
            })?;
            let mut route = Route::new(&spec.path, spec.name.as_str(), view)?;
            if spec.props_from_params {
                route = route.with_props_from_params();
            }
            routes.push(route);
        }
        Ok(Self::new(history, RouteTable::new(routes)?))
    }

    /// The configured history mode.
    #[must_use]
    pub fn history(&self) -> HistoryMode {
        self.history
    }

    /// The validated route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The view for unmatched paths, if the application set one.
    #[must_use]
    pub fn fallback(&self) -> Option<&V> {
        self.fallback.as_ref()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
