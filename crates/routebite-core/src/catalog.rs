//! Immutable route catalog loaded once at process start.
//!
//! The catalog holds two tables: directional `(from, to) -> road` connections
//! and restaurants tagged with the road they sit on. The built-in dataset is
//! embedded as a TOML document so the resolver stays a pure function over
//! fixed data, with no global mutable state.
//!
//! Connections are directional. Reversed queries are unsupported unless the
//! dataset carries a symmetric entry; the built-in data does for some pairs
//! (Chennai/Madurai) and not others (Trichy -> Madurai is absent).

use std::collections::HashMap;

use serde::Deserialize;

use routebite_types::catalog::{Restaurant, RoadConnection};
use routebite_types::error::CatalogError;

/// Built-in catalog document, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, rename = "connection")]
    connections: Vec<RoadConnection>,
    #[serde(default, rename = "restaurant")]
    restaurants: Vec<Restaurant>,
}

/// The static lookup tables: connections and restaurants.
///
/// Loaded once, read-only for the process lifetime. Restaurant order is
/// the document order and is observable in resolver results.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    connections: Vec<RoadConnection>,
    restaurants: Vec<Restaurant>,
    /// Index: (from, to) -> position in `connections`.
    road_index: HashMap<(String, String), usize>,
}

impl RouteCatalog {
    /// Parse a catalog from a TOML document.
    ///
    /// Dangling road references (a connection road with no tagged restaurant,
    /// or vice versa) are legal and simply yield empty results.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            toml::from_str(input).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut road_index = HashMap::with_capacity(doc.connections.len());
        for (idx, conn) in doc.connections.iter().enumerate() {
            road_index.insert((conn.from.clone(), conn.to.clone()), idx);
        }

        Ok(Self {
            connections: doc.connections,
            restaurants: doc.restaurants,
            road_index,
        })
    }

    /// The built-in dataset embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is malformed, which is a build-time
    /// defect rather than a runtime condition.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG).expect("embedded catalog must parse")
    }

    /// Look up the road directly connecting `from` to `to`, if any.
    ///
    /// Directional: `road_between("Trichy", "Chennai")` and the reverse are
    /// independent entries.
    pub fn road_between(&self, from: &str, to: &str) -> Option<&str> {
        self.road_index
            .get(&(from.to_string(), to.to_string()))
            .map(|&idx| self.connections[idx].road.as_str())
    }

    /// All restaurants tagged with `road`, in document order.
    pub fn restaurants_on<'a>(&'a self, road: &'a str) -> impl Iterator<Item = &'a Restaurant> {
        self.restaurants.iter().filter(move |r| r.road == road)
    }

    /// All connections, in document order. Used to build the route menu.
    pub fn connections(&self) -> &[RoadConnection] {
        &self.connections
    }

    /// Total number of restaurant records.
    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }
}
