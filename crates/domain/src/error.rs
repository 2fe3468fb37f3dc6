use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyTitle,
    InvalidBufferCap(&'static str),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "photo title must not be empty"),
            Self::InvalidBufferCap(name) => write!(f, "buffer cap {name} must be at least 1"),
        }
    }
}

impl std::error::Error for DomainError {}
