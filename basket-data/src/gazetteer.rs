//! Built-in city gazetteer.

use basket_core::{CityInfo, LocationError, LocationResolver, ResolvedLocation};
use geo::Coord;

/// One city known to the gazetteer.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    /// Lower-case lookup key, `"city, st"`.
    pub key: String,
    /// Position with `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// City details returned with the coordinate.
    pub city: CityInfo,
}

impl GazetteerEntry {
    /// Construct an entry; `key` is lower-cased and trimmed.
    pub fn new(key: &str, lat: f64, lng: f64, city: CityInfo) -> Self {
        Self {
            key: normalise(key),
            location: Coord { x: lng, y: lat },
            city,
        }
    }

    fn resolved(&self) -> ResolvedLocation {
        ResolvedLocation {
            location: self.location,
            city: Some(self.city.clone()),
        }
    }
}

/// `(key, lat, lng, city, state, zip)`
const US_CITIES: &[(&str, f64, f64, &str, &str, &str)] = &[
    ("new york, ny", 40.7128, -74.006, "New York", "NY", "10001"),
    ("los angeles, ca", 34.0522, -118.2437, "Los Angeles", "CA", "90001"),
    ("chicago, il", 41.8781, -87.6298, "Chicago", "IL", "60601"),
    ("houston, tx", 29.7604, -95.3698, "Houston", "TX", "77001"),
    ("phoenix, az", 33.4484, -112.074, "Phoenix", "AZ", "85001"),
    ("philadelphia, pa", 39.9526, -75.1652, "Philadelphia", "PA", "19101"),
    ("san antonio, tx", 29.4241, -98.4936, "San Antonio", "TX", "78201"),
    ("san diego, ca", 32.7157, -117.1611, "San Diego", "CA", "92101"),
    ("dallas, tx", 32.7767, -96.797, "Dallas", "TX", "75201"),
    ("san jose, ca", 37.3382, -121.8863, "San Jose", "CA", "95101"),
    ("austin, tx", 30.2672, -97.7431, "Austin", "TX", "78701"),
    ("jacksonville, fl", 30.3322, -81.6557, "Jacksonville", "FL", "32099"),
    ("san francisco, ca", 37.7749, -122.4194, "San Francisco", "CA", "94103"),
    ("columbus, oh", 39.9612, -82.9988, "Columbus", "OH", "43201"),
    ("indianapolis, in", 39.7684, -86.1581, "Indianapolis", "IN", "46201"),
    ("fort worth, tx", 32.7555, -97.3308, "Fort Worth", "TX", "76101"),
    ("charlotte, nc", 35.2271, -80.8431, "Charlotte", "NC", "28201"),
    ("seattle, wa", 47.6062, -122.3321, "Seattle", "WA", "98101"),
    ("denver, co", 39.7392, -104.9903, "Denver", "CO", "80201"),
    ("washington, dc", 38.9072, -77.0369, "Washington", "DC", "20001"),
    ("boston, ma", 42.3601, -71.0589, "Boston", "MA", "02108"),
    ("nashville, tn", 36.1627, -86.7816, "Nashville", "TN", "37201"),
    ("baltimore, md", 39.2904, -76.6122, "Baltimore", "MD", "21201"),
    ("oklahoma city, ok", 35.4676, -97.5164, "Oklahoma City", "OK", "73101"),
    ("portland, or", 45.5051, -122.675, "Portland", "OR", "97201"),
    ("las vegas, nv", 36.1699, -115.1398, "Las Vegas", "NV", "89101"),
    ("milwaukee, wi", 43.0389, -87.9065, "Milwaukee", "WI", "53201"),
    ("albuquerque, nm", 35.0844, -106.6504, "Albuquerque", "NM", "87101"),
    ("tucson, az", 32.2226, -110.9747, "Tucson", "AZ", "85701"),
    ("fresno, ca", 36.7378, -119.7871, "Fresno", "CA", "93701"),
    ("sacramento, ca", 38.5816, -121.4944, "Sacramento", "CA", "95801"),
    ("atlanta, ga", 33.749, -84.388, "Atlanta", "GA", "30301"),
    ("kansas city, mo", 39.0997, -94.5786, "Kansas City", "MO", "64101"),
    ("miami, fl", 25.7617, -80.1918, "Miami", "FL", "33101"),
    ("raleigh, nc", 35.7796, -78.6382, "Raleigh", "NC", "27601"),
    ("omaha, ne", 41.2565, -95.9345, "Omaha", "NE", "68101"),
    ("minneapolis, mn", 44.9778, -93.265, "Minneapolis", "MN", "55401"),
    ("cleveland, oh", 41.4993, -81.6944, "Cleveland", "OH", "44101"),
    ("new orleans, la", 29.9511, -90.0715, "New Orleans", "LA", "70112"),
    ("honolulu, hi", 21.3069, -157.8583, "Honolulu", "HI", "96801"),
    ("oxford, ms", 34.3668, -89.5192, "Oxford", "MS", "38655"),
];

/// Resolve location text against a table of cities.
///
/// Lookup order: a literal `"lat,lng"` pair, then an exact match on the
/// lower-cased trimmed text, then the first entry where either string
/// contains the other. Anything else is [`LocationError::NotFound`].
///
/// # Examples
/// ```
/// use basket_core::LocationResolver;
/// use basket_data::GazetteerResolver;
///
/// let gazetteer = GazetteerResolver::new();
/// let oxford = gazetteer.resolve("Oxford, MS").expect("known city");
/// assert_eq!(oxford.city.map(|c| c.zip).as_deref(), Some("38655"));
/// assert!(gazetteer.resolve("Atlantis").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerResolver {
    entries: Vec<GazetteerEntry>,
}

impl GazetteerResolver {
    /// A resolver over the built-in table of US cities.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entries(
            US_CITIES
                .iter()
                .map(|&(key, lat, lng, city, state, zip)| {
                    GazetteerEntry::new(key, lat, lng, CityInfo::new(city, state, zip))
                })
                .collect(),
        )
    }

    /// A resolver over caller-supplied entries, searched in order.
    #[must_use]
    pub const fn with_entries(entries: Vec<GazetteerEntry>) -> Self {
        Self { entries }
    }

    /// Entries in search order.
    #[must_use]
    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }
}

impl Default for GazetteerResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for GazetteerResolver {
    fn resolve(&self, query: &str) -> Result<ResolvedLocation, LocationError> {
        let text = normalise(query);
        if text.is_empty() {
            return Err(not_found(query));
        }
        if let Some(location) = parse_lat_lng(&text) {
            log::debug!("treating {query:?} as a coordinate pair");
            return Ok(ResolvedLocation {
                location,
                city: None,
            });
        }
        if let Some(entry) = self.entries.iter().find(|entry| entry.key == text) {
            return Ok(entry.resolved());
        }
        let partial = self
            .entries
            .iter()
            .find(|entry| text.contains(entry.key.as_str()) || entry.key.contains(text.as_str()));
        match partial {
            Some(entry) => {
                log::debug!("{query:?} partially matched {:?}", entry.key);
                Ok(entry.resolved())
            }
            None => Err(not_found(query)),
        }
    }
}

fn normalise(text: &str) -> String {
    text.trim().to_lowercase()
}

fn not_found(query: &str) -> LocationError {
    LocationError::NotFound {
        query: query.to_owned(),
    }
}

fn parse_lat_lng(text: &str) -> Option<Coord<f64>> {
    let (lat, lng) = text.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng))
        .then_some(Coord { x: lng, y: lat })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn gazetteer() -> GazetteerResolver {
        GazetteerResolver::new()
    }

    #[rstest]
    fn built_in_table_has_every_city(gazetteer: GazetteerResolver) {
        assert_eq!(gazetteer.entries().len(), 41);
    }

    #[rstest]
    #[case("Oxford, MS")]
    #[case("  oxford, ms  ")]
    #[case("OXFORD, MS")]
    fn exact_matches_ignore_case_and_padding(gazetteer: GazetteerResolver, #[case] query: &str) {
        let resolved = gazetteer.resolve(query).expect("resolved");
        assert_eq!(resolved.location, Coord { x: -89.5192, y: 34.3668 });
        assert_eq!(resolved.city, Some(CityInfo::new("Oxford", "MS", "38655")));
    }

    #[rstest]
    #[case("Seattle", "Seattle")]
    #[case("downtown boston, ma", "Boston")]
    fn partial_matches_return_the_first_hit(
        gazetteer: GazetteerResolver,
        #[case] query: &str,
        #[case] city: &str,
    ) {
        let resolved = gazetteer.resolve(query).expect("resolved");
        assert_eq!(resolved.city.map(|c| c.city).as_deref(), Some(city));
    }

    #[rstest]
    fn coordinate_pairs_resolve_without_city(gazetteer: GazetteerResolver) {
        let resolved = gazetteer.resolve("34.5, -89.25").expect("resolved");
        assert_eq!(resolved.location, Coord { x: -89.25, y: 34.5 });
        assert!(resolved.city.is_none());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("home")]
    #[case("Atlantis")]
    #[case("95.0, 10.0")]
    fn unknown_text_is_not_found(gazetteer: GazetteerResolver, #[case] query: &str) {
        assert_eq!(
            gazetteer.resolve(query),
            Err(LocationError::NotFound {
                query: query.to_owned()
            })
        );
    }

    #[rstest]
    fn custom_entries_replace_the_table() {
        let gazetteer = GazetteerResolver::with_entries(vec![GazetteerEntry::new(
            "Springfield, IL",
            39.78,
            -89.65,
            CityInfo::new("Springfield", "IL", "62701"),
        )]);
        assert!(gazetteer.resolve("springfield, il").is_ok());
        assert!(gazetteer.resolve("Oxford, MS").is_err());
    }
}
