//! Turning free-form location text into a coordinate.

use geo::Coord;
use thiserror::Error;

/// City, state and ZIP code describing a resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityInfo {
    /// City name, e.g. `"Oxford"`.
    pub city: String,
    /// Two-letter state code, e.g. `"MS"`.
    pub state: String,
    /// Five-digit ZIP code.
    pub zip: String,
}

impl CityInfo {
    /// Construct city information.
    pub fn new(city: impl Into<String>, state: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

/// A coordinate together with whatever city details the resolver knows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedLocation {
    /// Position with `x = longitude`, `y = latitude`.
    #[cfg_attr(feature = "serde", serde(with = "crate::coord_serde"))]
    pub location: Coord<f64>,
    /// City details, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<CityInfo>,
}

/// Errors raised by a [`LocationResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Nothing matched the query.
    #[error("location not found: {query:?}")]
    NotFound {
        /// The text that failed to resolve.
        query: String,
    },
}

/// Resolve location text such as `"Oxford, MS"` to a coordinate.
///
/// Resolvers must not fall back to a default location: an unknown query is
/// [`LocationError::NotFound`].
pub trait LocationResolver {
    /// Resolve `query`.
    fn resolve(&self, query: &str) -> Result<ResolvedLocation, LocationError>;
}

impl<T: LocationResolver + ?Sized> LocationResolver for &T {
    fn resolve(&self, query: &str) -> Result<ResolvedLocation, LocationError> {
        (**self).resolve(query)
    }
}
