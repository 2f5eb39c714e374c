//! Pure derivations from a parsed route to the artifacts a map view displays.

use super::model::{Location, Point, RouteResponse};
use serde::Serialize;

/// A titled point marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Point,
    pub title: String,
}

/// A straight line between two consecutive path vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

pub fn derive_map_center(route: &RouteResponse) -> Point {
    route.best_leg().start_location.point
}

/// Origin and destination markers, titled with the resolved location names.
pub fn derive_markers(route: &RouteResponse) -> (Marker, Marker) {
    let leg = route.best_leg();
    let marker = |location: &Location| Marker {
        position: location.point,
        title: location.name.clone(),
    };

    (marker(&leg.start_location), marker(&leg.end_location))
}

pub fn derive_segments(route: &RouteResponse) -> Vec<Segment> {
    route
        .best_route()
        .route_path
        .points
        .windows(2)
        .map(|pair| Segment {
            from: pair[0],
            to: pair[1],
        })
        .collect()
}

/// Numbered instruction lines, `"1. ..."` first.
pub fn instruction_lines(route: &RouteResponse) -> Vec<String> {
    route
        .best_leg()
        .itinerary_items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item.text()))
        .collect()
}

pub fn derive_instructions(route: &RouteResponse) -> String {
    instruction_lines(route).join("\n")
}

pub fn derive_summary(route: &RouteResponse) -> String {
    let best = route.best_route();
    let leg = route.best_leg();

    [
        format!("From: {}", leg.start_location.name),
        format!("To: {}", leg.end_location.name),
        format!("• Distance: {} kilometers", best.travel_distance),
        format!("• Duration: {}", format_duration(best.travel_duration)),
        format!("• Traffic: {}", best.traffic_congestion),
    ]
    .join("\n")
}

/// Formats seconds as `HH:MM:SS`, truncating fractions. Negative or non-finite
/// input renders as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0. {
        seconds.trunc() as u64
    } else {
        0
    };

    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
