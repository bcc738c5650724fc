//! Top-level application errors.
//!
//! Everything that can abort a planning run, gathered into one type so the
//! binary can report it uniformly.

use crate::database::{LoadError, LookupError};
use crate::planner::{ConfigError, PlanError};
use crate::render::RenderError;

/// Fatal errors for a planning run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through() {
        let err: AppError = LookupError::NotFound {
            query: "Atlantis, XX".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "query city \"Atlantis, XX\" not found in database"
        );

        let err: AppError = PlanError::RouteNotFound {
            stops: 4,
            name: "Elko".into(),
            region: "NV".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "no viable route after 4 stops, stuck at Elko, NV"
        );
    }
}
