use super::error::ParseError;
use serde::{Deserialize, Serialize};

// --- Data structures mirroring the Bing Routes response ---

/// A geographic position, serialized as `[latitude, longitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Point {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.latitude, point.longitude]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(with = "point_geometry")]
    pub point: Point,
}

/// Connect-the-dots geometry of the whole route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maneuver_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub instruction: Instruction,
}

impl ItineraryItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            instruction: Instruction {
                text: text.into(),
                maneuver_type: None,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.instruction.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub start_location: Location,
    pub end_location: Location,
    pub itinerary_items: Vec<ItineraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Kilometers.
    pub travel_distance: f64,
    /// Seconds.
    pub travel_duration: f64,
    pub traffic_congestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
    pub route_legs: Vec<RouteLeg>,
    #[serde(with = "route_path")]
    pub route_path: PathGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSet {
    pub resources: Vec<Resource>,
}

/// A validated route response. Holding one guarantees that a best route with
/// exactly one leg exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    resource_sets: Vec<ResourceSet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    resource_sets: Vec<ResourceSet>,
}

impl RouteResponse {
    /// Checks the shape the rest of the crate relies on.
    pub fn new(resource_sets: Vec<ResourceSet>) -> Result<Self, ParseError> {
        let first_set = resource_sets.first().ok_or(ParseError::NoResourceSets)?;
        let best = first_set.resources.first().ok_or(ParseError::NoResources)?;
        if best.route_legs.len() != 1 {
            return Err(ParseError::RouteLegCount(best.route_legs.len()));
        }

        Ok(Self { resource_sets })
    }

    /// Wraps a single computed route into a response envelope.
    pub fn from_route(resource: Resource) -> Result<Self, ParseError> {
        Self::new(vec![ResourceSet {
            resources: vec![resource],
        }])
    }

    pub fn parse(raw_body: &str) -> Result<Self, ParseError> {
        let envelope: Envelope = serde_json::from_str(raw_body)?;
        Self::new(envelope.resource_sets)
    }

    /// The first resource of the first set; the service ranks it best.
    pub fn best_route(&self) -> &Resource {
        &self.resource_sets[0].resources[0]
    }

    pub fn best_leg(&self) -> &RouteLeg {
        &self.best_route().route_legs[0]
    }
}

// --- Serde helpers for the GeoJSON-like wrappers ---
mod point_geometry {
    use super::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct GeometryOut<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        coordinates: &'a Point,
    }

    #[derive(Deserialize)]
    struct GeometryIn {
        coordinates: Point,
    }

    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryOut {
            kind: "Point",
            coordinates: point,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        GeometryIn::deserialize(deserializer).map(|geometry| geometry.coordinates)
    }
}

mod route_path {
    use super::{PathGeometry, Point};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct RoutePathOut<'a> {
        line: LineOut<'a>,
    }

    #[derive(Serialize)]
    struct LineOut<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        coordinates: &'a [Point],
    }

    #[derive(Deserialize)]
    struct RoutePathIn {
        line: LineIn,
    }

    #[derive(Deserialize)]
    struct LineIn {
        coordinates: Vec<Point>,
    }

    pub fn serialize<S: Serializer>(
        path: &PathGeometry,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        RoutePathOut {
            line: LineOut {
                kind: "LineString",
                coordinates: &path.points,
            },
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PathGeometry, D::Error> {
        let wire = RoutePathIn::deserialize(deserializer)?;
        Ok(PathGeometry {
            points: wire.line.coordinates,
        })
    }
}
