use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Origin location is blank")]
    MissingOrigin,

    #[error("Destination location is blank")]
    MissingDestination,

    #[error("Origin and destination locations are blank")]
    MissingBoth,
}

/// A pair of place names, both trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    origin: String,
    destination: String,
}

impl RouteQuery {
    pub fn new(origin: &str, destination: &str) -> Result<Self, InputError> {
        let origin = origin.trim();
        let destination = destination.trim();

        match (origin.is_empty(), destination.is_empty()) {
            (true, true) => Err(InputError::MissingBoth),
            (true, false) => Err(InputError::MissingOrigin),
            (false, true) => Err(InputError::MissingDestination),
            (false, false) => Ok(Self {
                origin: origin.to_string(),
                destination: destination.to_string(),
            }),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}
