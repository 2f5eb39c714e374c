// Terminal stand-ins for the map control and the toast widget
use super::surface::{LineStyle, Notifier, RouteSurface, Toast};
use crate::sdk::routing::model::Point;
use crate::sdk::routing::presenter::{Marker, Segment};
use std::io::Write;

/// Prints every drawing call to a writer, stdout by default.
pub struct ConsoleSurface<W: Write = std::io::Stdout> {
    out: W,
    lines_drawn: usize,
}

impl ConsoleSurface {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines_drawn: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("Failed to write to console surface: {}", e);
        }
    }
}

impl<W: Write> RouteSurface for ConsoleSurface<W> {
    fn clear(&mut self) {
        self.lines_drawn = 0;
        self.emit(format_args!("--- map cleared ---"));
    }

    fn set_viewport(&mut self, center: Point, zoom: f64) {
        self.emit(format_args!(
            "Center: {:.5}, {:.5} (zoom {})",
            center.latitude, center.longitude, zoom
        ));
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.emit(format_args!(
            "Marker \"{}\" at {:.5}, {:.5}",
            marker.title, marker.position.latitude, marker.position.longitude
        ));
    }

    fn add_line(&mut self, segment: &Segment, style: &LineStyle) {
        self.lines_drawn += 1;
        log::trace!(
            "line {} ({:.5}, {:.5}) -> ({:.5}, {:.5}) {} x{}",
            self.lines_drawn,
            segment.from.latitude,
            segment.from.longitude,
            segment.to.latitude,
            segment.to.longitude,
            style.color,
            style.thickness
        );
    }

    fn show_directions(&mut self, text: &str) {
        let drawn = self.lines_drawn;
        self.emit(format_args!("Path: {} segments", drawn));
        self.emit(format_args!("\nDirections:\n{}", text));
    }

    fn show_summary(&mut self, text: &str) {
        self.emit(format_args!("\nSummary:\n{}", text));
    }
}

/// Shows toasts as log warnings.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: &Toast) {
        log::warn!("[{}] {}", toast.title, toast.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_markers_and_panels() {
        let mut surface = ConsoleSurface::new(Vec::new());
        let marker = Marker {
            position: Point::new(47.6, -122.3),
            title: "Seattle".to_string(),
        };
        let segment = Segment {
            from: Point::new(47.6, -122.3),
            to: Point::new(45.5, -122.6),
        };

        surface.clear();
        surface.add_marker(&marker);
        surface.add_line(&segment, &LineStyle::default());
        surface.show_directions("1. Head south");
        surface.show_summary("• Traffic: Light");

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.contains("Marker \"Seattle\" at 47.60000, -122.30000"));
        assert!(text.contains("Path: 1 segments"));
        assert!(text.contains("Directions:\n1. Head south"));
        assert!(text.contains("Summary:\n• Traffic: Light"));
    }
}
