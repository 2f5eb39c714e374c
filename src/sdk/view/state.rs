use super::surface::{LineStyle, RouteSurface};
use crate::sdk::config::DEFAULT_ZOOM;
use crate::sdk::routing::model::{Point, RouteResponse};
use crate::sdk::routing::presenter::{
    derive_instructions, derive_map_center, derive_markers, derive_segments, derive_summary,
    Marker, Segment,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Point,
    pub zoom: f64,
}

/// Presentation settings that do not come from the route itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub zoom: f64,
    pub line_style: LineStyle,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            line_style: LineStyle::default(),
        }
    }
}

/// Everything the map view shows. Replaced wholesale on every successful query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub viewport: Option<Viewport>,
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
    pub line_style: LineStyle,
    pub directions: String,
    pub summary: String,
}

impl ViewState {
    /// Produces the state for `route`. Nothing from `self` carries over.
    pub fn reduce(&self, route: &RouteResponse, settings: &ViewSettings) -> ViewState {
        let (start, end) = derive_markers(route);

        ViewState {
            viewport: Some(Viewport {
                center: derive_map_center(route),
                zoom: settings.zoom,
            }),
            markers: vec![start, end],
            segments: derive_segments(route),
            line_style: settings.line_style.clone(),
            directions: derive_instructions(route),
            summary: derive_summary(route),
        }
    }

    /// Redraws `surface` from scratch to match this state.
    pub fn apply<S: RouteSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        if let Some(viewport) = self.viewport {
            surface.set_viewport(viewport.center, viewport.zoom);
        }
        for marker in &self.markers {
            surface.add_marker(marker);
        }
        for segment in &self.segments {
            surface.add_line(segment, &self.line_style);
        }
        surface.show_directions(&self.directions);
        surface.show_summary(&self.summary);
    }
}
