//! Declarative client-side route table for the quiz single-page app.
//!
//! The navigation runtime (history integration, rendering, scroll state) is
//! an external collaborator and is not modeled here. This crate owns what the
//! route table itself owns: path pattern parsing, construction-time
//! validation of the table invariants, path resolution with parameter
//! capture, and reverse lookup from route names. The table is built once at
//! application start and never mutated.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pattern`] | Path patterns: static/dynamic segments, parsing, matching |
//! | [`route`] | Route definitions binding patterns to named views |
//! | [`table`] | Validated, immutable route table and resolution |
//! | [`config`] | History mode and the router configuration bundle |
//! | [`app`] | The quiz client's concrete route table |

pub mod app;
pub mod config;
pub mod pattern;
pub mod route;
pub mod table;

pub use config::{HistoryMode, RouterConfig};
pub use pattern::{PathPattern, PatternError, Segment};
pub use route::{Route, RouteSpec};
pub use table::{ResolvedRoute, RouteTable, TableError};
