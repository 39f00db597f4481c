use serde::Serialize;

/// Observable lifecycle of an asynchronous page load.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, LoadState::Ready(items) if items.is_empty())
    }
}
