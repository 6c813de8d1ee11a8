use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid difficulty profile")]
    InvalidProfile,
    #[error("Exclusion zone leaves too little room for the requested mines")]
    InsufficientSpace,
    #[error("Cell id out of range")]
    InvalidCellId,
}

pub type Result<T> = std::result::Result<T, GameError>;
