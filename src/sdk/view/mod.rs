pub mod console;
pub mod controller;
pub mod state;
pub mod surface;

pub use console::{ConsoleNotifier, ConsoleSurface};
pub use controller::{QueryError, RouteController};
pub use state::{ViewSettings, ViewState, Viewport};
pub use surface::{LineStyle, Notifier, RouteSurface, Toast};
