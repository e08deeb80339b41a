//! Catalog record types: road connections and restaurants.
//!
//! These are the rows of the static dataset loaded at startup. They are
//! deserialized once from the embedded catalog document and never mutated.

use serde::{Deserialize, Serialize};

/// A directional city-to-city connection along a named road.
///
/// Connections are stored one-way: a `Chennai -> Madurai` entry says nothing
/// about `Madurai -> Chennai` unless a symmetric entry also exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadConnection {
    /// Origin city.
    pub from: String,
    /// Destination city.
    pub to: String,
    /// Name of the road connecting them (e.g. "NH 44").
    pub road: String,
}

/// A restaurant tagged with the road it sits on and the city it is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Road tag used to join against [`RoadConnection::road`].
    pub road: String,
    pub city: String,
}

/// A single result row from route resolution: a restaurant on the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    pub name: String,
    /// The city the restaurant is located in.
    pub location: String,
}

impl RouteStop {
    /// Project a catalog restaurant into a result row.
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            location: restaurant.city.clone(),
        }
    }
}
