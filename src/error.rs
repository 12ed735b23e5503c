//! Construction-time errors
//!
//! Nothing fails once a simulation is running; every fault is caught while
//! building the polygon, the body or the configuration.

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// Polygon needs at least three sides
    TooFewSides(usize),
    /// Polygon circumradius must be strictly positive
    NonPositiveRadius(f32),
    /// Trail must hold at least the current head position
    ZeroTrailCapacity,
    /// Collision margin cannot be negative
    NegativeBodyRadius(f32),
    /// Collision margin leaves no room inside the polygon
    BodyTooLarge { body_radius: f32, apothem: f32 },
    /// A NaN or infinite parameter
    NonFinite(&'static str),
    /// Configuration JSON could not be parsed
    Config(String),
    /// Configuration file could not be read
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSides(n) => write!(f, "polygon needs at least 3 sides, got {n}"),
            Self::NonPositiveRadius(r) => {
                write!(f, "polygon radius must be positive, got {r}")
            }
            Self::ZeroTrailCapacity => write!(f, "trail capacity must be at least 1"),
            Self::NegativeBodyRadius(r) => {
                write!(f, "body radius must not be negative, got {r}")
            }
            Self::BodyTooLarge {
                body_radius,
                apothem,
            } => write!(
                f,
                "body radius {body_radius} does not fit inside the polygon (apothem {apothem})"
            ),
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Io(e) => write!(f, "could not read configuration: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SimError::TooFewSides(2).to_string(),
            "polygon needs at least 3 sides, got 2"
        );
        assert_eq!(
            SimError::ZeroTrailCapacity.to_string(),
            "trail capacity must be at least 1"
        );
        assert_eq!(
            SimError::NonFinite("dt").to_string(),
            "dt must be a finite number"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let err = SimError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(SimError::ZeroTrailCapacity.source().is_none());
    }
}
