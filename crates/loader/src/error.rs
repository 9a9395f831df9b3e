use thiserror::Error;

use crate::types::GameId;

/// A single HTTP GET failed.
///
/// `Clone` because failed asset fetches are memoized alongside successful ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("GET {url} failed: {message}")]
    Transport { url: String, message: String },
}

/// Data API failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid API base {base:?}: {message}")]
    InvalidBase { base: String, message: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not decode API response: {0}")]
    Decode(String),
}

/// Registration step failures after a script asset was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("malformed module manifest: {0}")]
    Malformed(String),
    #[error("manifest names unknown entry {0:?}")]
    UnknownEntry(String),
}

/// Errors raised by a game module's factory or `init`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    #[error("module is not usable: {0}")]
    Malformed(String),
    #[error("init failed: {0}")]
    Init(String),
}

/// Anything that stops a tab from reaching the ready state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("no module registered under {0}")]
    MissingRegistration(GameId),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error("module task panicked")]
    Panicked,
    #[error("module task was aborted")]
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    #[error("no tab with id {0}")]
    UnknownTab(GameId),
    #[error("no tab at position {0}")]
    NoTabAt(usize),
}
