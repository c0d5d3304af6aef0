//! Every way a run can fail
//!
//! Errors are reported once, by `main`, as a single line.

use config::ConfigError;
use makers_babel::{PublishError, RenderError};
use makers_parser::LoaderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("You must enable either split or merge, otherwise there will be no output!")]
    NothingRequested,
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] LoaderError),
    #[error(transparent)]
    Content(#[from] RenderError),
    #[error(transparent)]
    Output(#[from] PublishError),
}
