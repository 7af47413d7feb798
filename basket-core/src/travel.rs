//! Driving-time and fuel-cost estimates derived from a distance.
//!
//! Estimates assume a constant average speed and fuel economy. The defaults
//! model city driving: 30 mph, 25 mpg and fuel at $3.50 per gallon.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default average driving speed in miles per hour.
pub const DEFAULT_AVERAGE_SPEED_MPH: f64 = 30.0;
/// Default fuel economy in miles per gallon.
pub const DEFAULT_MILES_PER_GALLON: f64 = 25.0;
/// Default fuel price in dollars per gallon.
pub const DEFAULT_FUEL_PRICE_PER_GALLON: f64 = 3.50;

/// Estimated driving time rendered as `"<N> min"` or `"<H> hr <M> min"`.
///
/// Trips under an hour round up to whole minutes. Longer trips floor the
/// hours and round the remaining minutes up, so the minute component may read
/// `60` when the remainder is within a rounding step of a full hour.
///
/// # Examples
/// ```
/// use basket_core::TravelTime;
///
/// assert_eq!(TravelTime::from_hours(0.25).to_string(), "15 min");
/// assert_eq!(TravelTime::from_hours(1.5).to_string(), "1 hr 30 min");
/// assert_eq!(TravelTime::ZERO.to_string(), "0 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct TravelTime {
    hours: u64,
    minutes: u64,
}

impl TravelTime {
    /// A trip that takes no time at all.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Build a travel time from whole hours and minutes.
    #[must_use]
    pub const fn new(hours: u64, minutes: u64) -> Self {
        Self { hours, minutes }
    }

    /// Convert a fractional number of hours, applying the rounding rules
    /// described on the type. Non-finite or non-positive input yields
    /// [`TravelTime::ZERO`].
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::ZERO;
        }
        if hours < 1.0 {
            return Self::new(0, whole_minutes((hours * 60.0).ceil()));
        }
        let whole = hours.floor();
        Self::new(
            whole_minutes(whole),
            whole_minutes(((hours - whole) * 60.0).ceil()),
        )
    }

    /// Hour component.
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Minute component.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }
}

// Inputs are already rounded and non-negative; `as` saturates on overflow.
fn whole_minutes(value: f64) -> u64 {
    value as u64
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours == 0 {
            write!(f, "{} min", self.minutes)
        } else {
            write!(f, "{} hr {} min", self.hours, self.minutes)
        }
    }
}

/// Error returned when a travel-time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid travel time {input:?}; expected \"<N> min\" or \"<H> hr <M> min\"")]
pub struct ParseTravelTimeError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for TravelTime {
    type Err = ParseTravelTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTravelTimeError {
            input: s.to_owned(),
        };
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [minutes, "min"] => Ok(Self::new(0, minutes.parse().map_err(|_| invalid())?)),
            [hours, "hr", minutes, "min"] => Ok(Self::new(
                hours.parse().map_err(|_| invalid())?,
                minutes.parse().map_err(|_| invalid())?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl From<TravelTime> for String {
    fn from(value: TravelTime) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TravelTime {
    type Error = ParseTravelTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parameters converting distance into driving time and fuel cost.
///
/// # Examples
/// ```
/// use basket_core::TravelCostModel;
///
/// let model = TravelCostModel::default();
/// assert_eq!(model.travel_time(15.0).to_string(), "30 min");
/// assert_eq!(model.fuel_cost(50.0), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct TravelCostModel {
    /// Average driving speed in miles per hour.
    pub average_speed_mph: f64,
    /// Fuel economy in miles per gallon.
    pub miles_per_gallon: f64,
    /// Fuel price in dollars per gallon.
    pub fuel_price_per_gallon: f64,
}

impl Default for TravelCostModel {
    fn default() -> Self {
        Self {
            average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH,
            miles_per_gallon: DEFAULT_MILES_PER_GALLON,
            fuel_price_per_gallon: DEFAULT_FUEL_PRICE_PER_GALLON,
        }
    }
}

/// Errors returned by [`TravelCostModel::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelCostModelError {
    /// Speed must be positive and finite.
    #[error("average speed must be a positive, finite number of mph")]
    InvalidSpeed,
    /// Fuel economy must be positive and finite.
    #[error("fuel economy must be a positive, finite number of mpg")]
    InvalidFuelEconomy,
    /// Fuel price must be non-negative and finite.
    #[error("fuel price must be a non-negative, finite number of dollars")]
    InvalidFuelPrice,
}

impl TravelCostModel {
    /// Check that every parameter can be used as a divisor or multiplier.
    pub fn validate(&self) -> Result<(), TravelCostModelError> {
        if !(self.average_speed_mph.is_finite() && self.average_speed_mph > 0.0) {
            return Err(TravelCostModelError::InvalidSpeed);
        }
        if !(self.miles_per_gallon.is_finite() && self.miles_per_gallon > 0.0) {
            return Err(TravelCostModelError::InvalidFuelEconomy);
        }
        if !(self.fuel_price_per_gallon.is_finite() && self.fuel_price_per_gallon >= 0.0) {
            return Err(TravelCostModelError::InvalidFuelPrice);
        }
        Ok(())
    }

    /// Driving time for `miles` at the model's average speed.
    #[must_use]
    pub fn travel_time(&self, miles: f64) -> TravelTime {
        TravelTime::from_hours(miles / self.average_speed_mph)
    }

    /// Fuel cost in dollars for `miles`, rounded to the cent.
    #[must_use]
    pub fn fuel_cost(&self, miles: f64) -> f64 {
        let cost = miles / self.miles_per_gallon * self.fuel_price_per_gallon;
        if cost.is_finite() && cost > 0.0 {
            round_cents(cost)
        } else {
            0.0
        }
    }
}

/// Driving time for `miles` under the default model.
#[must_use]
pub fn travel_time(miles: f64) -> TravelTime {
    TravelCostModel::default().travel_time(miles)
}

/// Fuel cost for `miles` under the default model.
#[must_use]
pub fn gas_cost(miles: f64) -> f64 {
    TravelCostModel::default().fuel_cost(miles)
}

/// Round a dollar amount to two decimal places.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
