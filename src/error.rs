use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KDTreeError {
    /// A query was issued against a tree that holds no points.
    #[error("empty tree")]
    EmptyTree,
}

pub type Result<T> = std::result::Result<T, KDTreeError>;
