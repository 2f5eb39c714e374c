use crate::sdk::routing::model::Point;
use crate::sdk::routing::presenter::{Marker, Segment};
use serde::Serialize;
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Stroke used for route segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// `#RRGGBB`
    pub color: String,
    pub thickness: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#FF0000".to_string(),
            thickness: 5.,
        }
    }
}

/// A map view able to draw route primitives and two text panels.
pub trait RouteSurface {
    /// Removes markers, lines and panel text.
    fn clear(&mut self);

    fn set_viewport(&mut self, center: Point, zoom: f64);

    fn add_marker(&mut self, marker: &Marker);

    fn add_line(&mut self, segment: &Segment, style: &LineStyle);

    fn show_directions(&mut self, text: &str);

    fn show_summary(&mut self, text: &str);
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            duration: TOAST_DURATION,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}
