//! In-memory map view handed to the presentation layer
//!
//! The core does not render maps; it hands an external renderer the origin,
//! destination, optional waypoints, the ordered path, and marker colors.
//! The view is plain serializable data, so nothing touches the filesystem
//! and there is nothing to clean up after a run.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, RouteResult};

/// Marker color convention shared with the renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Orange,
    Red,
}

/// A labeled point on the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub location: Coordinate,
    pub label: String,
    pub color: MarkerColor,
}

/// Everything an external renderer needs to draw one trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapView {
    /// Markers in trip order: origin, waypoints, destination
    pub markers: Vec<MapMarker>,
    /// Path polyline in travel order
    pub path: Vec<Coordinate>,
    /// Polyline color
    pub path_color: String,
}

impl MapView {
    /// Build the view for a planned trip: origin green, waypoints orange,
    /// destination red, path blue.
    #[must_use]
    pub fn for_trip(
        origin: Coordinate,
        waypoints: &[Coordinate],
        destination: Coordinate,
        route: &RouteResult,
    ) -> Self {
        let mut markers = Vec::with_capacity(waypoints.len() + 2);
        markers.push(MapMarker {
            location: origin,
            label: "start".to_string(),
            color: MarkerColor::Green,
        });
        for waypoint in waypoints {
            markers.push(MapMarker {
                location: *waypoint,
                label: "waypoint".to_string(),
                color: MarkerColor::Orange,
            });
        }
        markers.push(MapMarker {
            location: destination,
            label: "destination".to_string(),
            color: MarkerColor::Red,
        });

        Self {
            markers,
            path: route.geometry.clone(),
            path_color: "blue".to_string(),
        }
    }
}
