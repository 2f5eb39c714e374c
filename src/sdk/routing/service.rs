use super::error::RoutingError;
use super::query::RouteQuery;
use std::future::Future;

pub trait RouteProvider: Send + Sync {
    /// Requests a driving route between the query's places and returns the
    /// raw response body of a successful (2xx) answer.
    fn fetch_route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<String, RoutingError>> + Send;
}
