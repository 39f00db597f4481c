use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Vui lòng nhập đầy đủ thông tin")]
    EmptyCredentials,

    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    #[error("Guest count {requested} is outside 1..={max}")]
    GuestsOutOfRange { requested: u32, max: u32 },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Could not resolve app data directory: {0}")]
    AppDataDir(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Application state lock poisoned")]
    StatePoisoned,
}

pub type Result<T> = std::result::Result<T, BookingError>;
