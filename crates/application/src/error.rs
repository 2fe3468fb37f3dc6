use std::fmt::{Display, Formatter};

use paleo_snap_domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    Unknown,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Erro desconhecido"),
            Self::PermissionDenied => write!(f, "Permissão negada!"),
            Self::PositionUnavailable => write!(f, "Captura de posição indisponível!"),
            Self::Timeout => write!(f, "Tempo de solicitação excedido!"),
        }
    }
}

impl std::error::Error for LocationError {}

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    Device(String),
    Location(LocationError),
    StorageWrite(String),
    StorageRead(String),
    NotFound(String),
    Io(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Device(msg) => write!(f, "{msg}"),
            Self::Location(code) => write!(f, "Ocorreu um erro: {code}"),
            Self::StorageWrite(msg) => write!(f, "storage write failed: {msg}"),
            Self::StorageRead(msg) => write!(f, "storage read failed: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

impl From<LocationError> for ApplicationError {
    fn from(value: LocationError) -> Self {
        Self::Location(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_codes_map_to_their_fixed_messages() {
        assert_eq!(LocationError::Unknown.to_string(), "Erro desconhecido");
        assert_eq!(
            LocationError::PermissionDenied.to_string(),
            "Permissão negada!"
        );
        assert_eq!(
            LocationError::PositionUnavailable.to_string(),
            "Captura de posição indisponível!"
        );
        assert_eq!(
            LocationError::Timeout.to_string(),
            "Tempo de solicitação excedido!"
        );
    }

    #[test]
    fn location_failures_are_reported_with_the_shared_prefix() {
        let error = ApplicationError::Location(LocationError::Timeout);

        assert_eq!(
            error.to_string(),
            "Ocorreu um erro: Tempo de solicitação excedido!"
        );
    }
}
