pub mod sdk;

pub use sdk::config::{AppConfig, BingConfig};
pub use sdk::routing::presenter::{
    derive_instructions, derive_map_center, derive_markers, derive_segments, derive_summary,
    format_duration,
};
pub use sdk::routing::{BingRouteProvider, RouteProvider, RouteQuery, RouteResponse};
pub use sdk::view::{RouteController, ViewSettings, ViewState};
