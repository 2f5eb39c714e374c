pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod query;
pub mod service;

pub use error::{ParseError, RoutingError};
pub use model::{Location, PathGeometry, Point, Resource, RouteLeg, RouteResponse};
pub use provider::BingRouteProvider;
pub use query::{InputError, RouteQuery};
pub use service::RouteProvider;
