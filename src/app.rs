//! Route declarations for the quiz client.
//!
//! This is the application's whole routing surface: the quiz page at the
//! root, and the per-task answer review page. Views are opaque handles
//! here; rendering lives in the client.

use crate::config::{HistoryMode, RouterConfig};
use crate::route::Route;
use crate::table::{RouteTable, TableError};

/// Views addressed by the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The quiz-taking page, shown at the root path.
    TestPage,
    /// The answer review page for a single task.
    TestAnswers,
}

/// The quiz client's router configuration: web history, `home` at `/`, and
/// `answers` at `/answers/:task_number` with the task number forwarded to
/// the view.
///
/// # Errors
///
/// Returns a [`TableError`] if the declared routes violate a table
/// invariant; with the fixed table below this only fires if the
/// declarations themselves are edited into an invalid state.
pub fn router() -> Result<RouterConfig<View>, TableError> {
    let routes = vec![
        Route::new("/", "home", View::TestPage)?,
        Route::new("/answers/:task_number", "answers", View::TestAnswers)?
            .with_props_from_params(),
    ];
    Ok(RouterConfig::new(HistoryMode::Web, RouteTable::new(routes)?))
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
