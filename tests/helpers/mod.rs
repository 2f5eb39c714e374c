#![allow(dead_code)]

use route_viewer::sdk::routing::presenter::{Marker, Segment};
use route_viewer::sdk::routing::{Point, RouteProvider, RouteQuery, RoutingError};
use route_viewer::sdk::view::{LineStyle, Notifier, RouteSurface, Toast};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Bing-shaped body for a route with the given path and instructions.
pub fn route_body(
    start: &str,
    end: &str,
    path: &[[f64; 2]],
    instructions: &[&str],
    distance: f64,
    duration: f64,
    traffic: &str,
) -> String {
    let items: Vec<_> = instructions
        .iter()
        .map(|text| json!({ "instruction": { "maneuverType": "Unknown", "text": text } }))
        .collect();
    let start_point = path.first().copied().unwrap_or([0., 0.]);
    let end_point = path.last().copied().unwrap_or([0., 0.]);

    json!({
        "statusCode": 200,
        "resourceSets": [{
            "estimatedTotal": 1,
            "resources": [{
                "distanceUnit": "Kilometer",
                "durationUnit": "Second",
                "travelDistance": distance,
                "travelDuration": duration,
                "trafficCongestion": traffic,
                "routeLegs": [{
                    "startLocation": { "name": start, "point": { "type": "Point", "coordinates": start_point } },
                    "endLocation": { "name": end, "point": { "type": "Point", "coordinates": end_point } },
                    "itineraryItems": items
                }],
                "routePath": { "line": { "type": "LineString", "coordinates": path } }
            }]
        }]
    })
    .to_string()
}

pub fn seattle_portland_body() -> String {
    route_body(
        "Seattle, WA",
        "Portland, OR",
        &[[47.6, -122.3], [45.5, -122.6]],
        &["Head south"],
        280.,
        10800.,
        "Light",
    )
}

pub enum Reply {
    Body(String),
    Status(u16, String),
}

/// Answers queries with the given replies in order, repeating the last one,
/// and counts calls.
pub struct FakeProvider {
    replies: Vec<Reply>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(reply: Reply) -> Self {
        Self::sequence(vec![reply])
    }

    pub fn sequence(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty());
        Self { replies, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteProvider for FakeProvider {
    async fn fetch_route(&self, _query: &RouteQuery) -> Result<String, RoutingError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.replies[call.min(self.replies.len() - 1)] {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(RoutingError::RawApiError {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Holds back queries whose origin is "Slow" until released.
#[derive(Default)]
pub struct GatedProvider {
    pub entered: Notify,
    pub release: Notify,
}

impl RouteProvider for GatedProvider {
    async fn fetch_route(&self, query: &RouteQuery) -> Result<String, RoutingError> {
        if query.origin() == "Slow" {
            self.entered.notify_one();
            self.release.notified().await;
        }

        Ok(route_body(
            query.origin(),
            query.destination(),
            &[[1., 1.], [2., 2.], [3., 3.]],
            &["Drive"],
            10.,
            600.,
            "None",
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Viewport(Point, f64),
    Marker(Marker),
    Line(Segment, LineStyle),
    Directions(String),
    Summary(String),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn markers(&self) -> Vec<&Marker> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Marker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Line(..))).count()
    }
}

impl RouteSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_viewport(&mut self, center: Point, zoom: f64) {
        self.ops.push(Op::Viewport(center, zoom));
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.ops.push(Op::Marker(marker.clone()));
    }

    fn add_line(&mut self, segment: &Segment, style: &LineStyle) {
        self.ops.push(Op::Line(*segment, style.clone()));
    }

    fn show_directions(&mut self, text: &str) {
        self.ops.push(Op::Directions(text.to_string()));
    }

    fn show_summary(&mut self, text: &str) {
        self.ops.push(Op::Summary(text.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.lock().unwrap().push(toast.clone());
    }
}
