use super::state::{ViewSettings, ViewState};
use super::surface::{Notifier, RouteSurface, Toast};
use crate::sdk::routing::error::{ParseError, RoutingError};
use crate::sdk::routing::model::RouteResponse;
use crate::sdk::routing::query::{InputError, RouteQuery};
use crate::sdk::routing::service::RouteProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub const MISSING_DATA_TITLE: &str = "Missing data";
pub const MISSING_DATA_BODY: &str = "Please enter both a start and an end location.";
pub const ROUTE_NOT_FOUND_TITLE: &str = "Route not found";
pub const ROUTE_NOT_FOUND_BODY: &str = "No route could be found between the given locations.";

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Route request failed: {0}")]
    Transport(#[from] RoutingError),

    #[error("Unexpected route response: {0}")]
    Parse(#[from] ParseError),

    #[error("Response discarded: a newer query was submitted")]
    Superseded,
}

impl QueryError {
    /// The toast shown for this failure, if any.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            QueryError::InvalidInput(_) => Some(Toast::new(MISSING_DATA_TITLE, MISSING_DATA_BODY)),
            QueryError::Transport(_) | QueryError::Parse(_) => {
                Some(Toast::new(ROUTE_NOT_FOUND_TITLE, ROUTE_NOT_FOUND_BODY))
            }
            QueryError::Superseded => None,
        }
    }
}

/// Runs route queries against a provider and keeps a surface in sync with the
/// latest successful one.
pub struct RouteController<P, S, N> {
    provider: P,
    surface: Mutex<S>,
    notifier: N,
    settings: ViewSettings,
    generation: AtomicU64,
    current: Mutex<ViewState>,
}

impl<P, S, N> RouteController<P, S, N>
where
    P: RouteProvider,
    S: RouteSurface + Send,
    N: Notifier,
{
    pub fn new(provider: P, surface: S, notifier: N, settings: ViewSettings) -> Self {
        Self {
            provider,
            surface: Mutex::new(surface),
            notifier,
            settings,
            generation: AtomicU64::new(0),
            current: Mutex::new(ViewState::default()),
        }
    }

    /// Validates the two place names, fetches the route and renders it.
    ///
    /// On any failure the surface keeps showing the previous route. A response
    /// that arrives after a newer submission, valid or not, is dropped.
    pub async fn submit(&self, origin: &str, destination: &str) -> Result<ViewState, QueryError> {
        let result = self.run(origin, destination).await;

        if let Err(err) = &result {
            match err {
                QueryError::Superseded => log::warn!("{}", err),
                _ => log::error!("Query \"{}\" -> \"{}\" failed: {}", origin, destination, err),
            }
            if let Some(toast) = err.toast() {
                self.notifier.notify(&toast);
            }
        }

        result
    }

    async fn run(&self, origin: &str, destination: &str) -> Result<ViewState, QueryError> {
        // any newer submission, even an invalid one, outdates requests in flight
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "[CONTROLLER] Validating \"{}\" -> \"{}\", ticket {}",
            origin,
            destination,
            ticket
        );
        let query = RouteQuery::new(origin, destination)?;

        log::debug!("[CONTROLLER] Requesting route, ticket {}", ticket);
        let fetched = self.provider.fetch_route(&query).await;

        let mut surface = lock(&self.surface);
        if self.generation.load(Ordering::SeqCst) != ticket {
            return Err(QueryError::Superseded);
        }
        let route = RouteResponse::parse(&fetched?)?;

        let mut current = lock(&self.current);
        let next = current.reduce(&route, &self.settings);
        next.apply(&mut *surface);
        *current = next.clone();

        log::info!(
            "Rendered route \"{}\" -> \"{}\": {} segments",
            query.origin(),
            query.destination(),
            next.segments.len()
        );
        Ok(next)
    }

    /// The state last rendered to the surface.
    pub fn current_view(&self) -> ViewState {
        lock(&self.current).clone()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&lock(&self.surface))
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
