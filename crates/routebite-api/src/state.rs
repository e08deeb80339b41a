//! Application state shared by the CLI, the HTTP endpoint, and the poller.
//!
//! The only process-wide state is the immutable route catalog behind the
//! resolver; everything else is per-event.

use std::sync::Arc;

use routebite_core::catalog::RouteCatalog;
use routebite_core::resolver::RouteResolver;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub resolver: RouteResolver,
}

impl AppState {
    /// Load the built-in catalog and wire the resolver.
    pub fn init() -> Self {
        let catalog = Arc::new(RouteCatalog::builtin());
        Self {
            resolver: RouteResolver::new(catalog),
        }
    }
}
