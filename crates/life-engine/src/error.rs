use life_core::LifeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine input: {0}")]
    Core(#[from] LifeError),

    #[error("engine is running; stop it before stepping manually")]
    Running,

    #[error("failed to spawn tick thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
