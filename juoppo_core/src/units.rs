//! Alcohol unit conversion.
//!
//! Turns a drink's volume and ABV into liters and grams of pure ethanol and
//! into Finnish standard portions. A standard portion is 10-12 g of ethanol,
//! so every drink is reported as a range between the large and small portion
//! counts.

/// Weight of one liter of pure ethanol in grams
pub const ETHANOL_GRAMS_PER_LITER: f64 = 790.0;

/// Grams of ethanol in a "small" standard portion
pub const PORTION_SMALL_GRAMS: f64 = 10.0;

/// Grams of ethanol in a "large" standard portion
pub const PORTION_LARGE_GRAMS: f64 = 12.0;

/// Decimal places every derived metric is rounded to
pub const DEFAULT_DECIMALS: i32 = 2;

/// Round `value` to `decimals` places, ties away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Derived alcohol metrics for a single drink
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlcoholContent {
    pub abv_fraction: f64,
    pub liters: f64,
    pub grams: f64,
    pub portions_small: f64,
    pub portions_large: f64,
}

impl AlcoholContent {
    /// Compute the metrics for `volume` liters at `abv_percent` percent.
    ///
    /// Each step works from the rounded result of the previous one: grams come
    /// from rounded liters, portions from rounded grams. Inputs are not range
    /// checked.
    pub fn from_volume(volume: f64, abv_percent: f64) -> Self {
        let abv_fraction = abv_percent / 100.0;
        let liters = round_to(abv_fraction * volume, DEFAULT_DECIMALS);
        let grams = round_to(liters * ETHANOL_GRAMS_PER_LITER, DEFAULT_DECIMALS);

        Self {
            abv_fraction,
            liters,
            grams,
            portions_small: round_to(grams / PORTION_SMALL_GRAMS, DEFAULT_DECIMALS),
            portions_large: round_to(grams / PORTION_LARGE_GRAMS, DEFAULT_DECIMALS),
        }
    }
}
