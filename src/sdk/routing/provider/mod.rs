pub mod remote;

pub use remote::{build_route_url, BingRouteProvider};
