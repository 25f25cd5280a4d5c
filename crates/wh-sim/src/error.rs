use thiserror::Error;
use wh_core::CoreError;
use wh_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid run configuration: {0}")]
    Config(#[from] CoreError),

    #[error("invalid warehouse layout: {0}")]
    Layout(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
