//! Pure route resolution over the static catalog.

use std::sync::Arc;

use routebite_types::catalog::RouteStop;
use routebite_types::error::RouteError;

use crate::catalog::RouteCatalog;

/// Resolves a `(start, end)` city pair to the restaurants on the connecting
/// road.
///
/// A thin, side-effect-free view over [`RouteCatalog`]: the same input always
/// yields the same output, which keeps both the dispatcher and the HTTP
/// lookup endpoint trivially testable.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    catalog: Arc<RouteCatalog>,
}

impl RouteResolver {
    /// Create a resolver over a shared catalog.
    pub fn new(catalog: Arc<RouteCatalog>) -> Self {
        Self { catalog }
    }

    /// Access the underlying catalog (for the route menu).
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Find every restaurant on the road directly connecting `start` to `end`.
    ///
    /// - Empty city strings are rejected with [`RouteError::EmptyCity`].
    /// - A pair absent from the connection table fails with
    ///   [`RouteError::UnknownRoute`].
    /// - A known road with no tagged restaurants returns `Ok(vec![])` --
    ///   "found the road, no listed stops" is a valid outcome, not an error.
    ///
    /// Results preserve catalog document order; no sorting is applied.
    pub fn resolve(&self, start: &str, end: &str) -> Result<Vec<RouteStop>, RouteError> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(RouteError::EmptyCity);
        }

        let road = self
            .catalog
            .road_between(start, end)
            .ok_or_else(|| RouteError::UnknownRoute {
                start: start.to_string(),
                end: end.to_string(),
            })?;

        Ok(self
            .catalog
            .restaurants_on(road)
            .map(RouteStop::from_restaurant)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RouteResolver {
        RouteResolver::new(Arc::new(RouteCatalog::builtin()))
    }

    fn stop(name: &str, location: &str) -> RouteStop {
        RouteStop {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn chennai_to_madurai_lists_nh44_stops_in_order() {
        let stops = resolver().resolve("Chennai", "Madurai").unwrap();
        assert_eq!(
            stops,
            vec![
                stop("Restaurant A", "Chennai"),
                stop("Restaurant B", "Madurai"),
                stop("Restaurant E", "Madurai"),
            ]
        );
    }

    #[test]
    fn chennai_to_trichy_lists_nh45_stops_in_order() {
        let stops = resolver().resolve("Chennai", "Trichy").unwrap();
        assert_eq!(
            stops,
            vec![
                stop("Ashwin's Restaurant", "Perambalur"),
                stop("Manoj Bhavan", "Mamandur"),
                stop("Murugan Idly", "Maduranthakam"),
            ]
        );
    }

    #[test]
    fn every_connection_resolves_to_its_road_restaurants() {
        let resolver = resolver();
        let catalog = resolver.catalog().clone();
        for conn in catalog.connections() {
            let stops = resolver.resolve(&conn.from, &conn.to).unwrap();
            let expected: Vec<RouteStop> = catalog
                .restaurants_on(&conn.road)
                .map(RouteStop::from_restaurant)
                .collect();
            assert_eq!(stops, expected, "mismatch for {} -> {}", conn.from, conn.to);
        }
    }

    #[test]
    fn unknown_pair_fails_with_unknown_route() {
        let err = resolver().resolve("Chennai", "Mumbai").unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownRoute {
                start: "Chennai".to_string(),
                end: "Mumbai".to_string(),
            }
        );
    }

    #[test]
    fn reversed_one_way_pair_is_unknown() {
        // Trichy -> Madurai has no entry; only Madurai -> Trichy does.
        let err = resolver().resolve("Trichy", "Madurai").unwrap_err();
        assert!(matches!(err, RouteError::UnknownRoute { .. }));
    }

    #[test]
    fn empty_city_is_rejected() {
        assert_eq!(resolver().resolve("", "Madurai"), Err(RouteError::EmptyCity));
        assert_eq!(resolver().resolve("Chennai", "  "), Err(RouteError::EmptyCity));
    }

    #[test]
    fn resolve_is_idempotent() {
        let resolver = resolver();
        let first = resolver.resolve("Chennai", "Bangalore").unwrap();
        let second = resolver.resolve("Chennai", "Bangalore").unwrap();
        assert_eq!(first, second);
    }
}
