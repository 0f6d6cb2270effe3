//! Beverage records.
//!
//! A [`Beverage`] is one logged drink. The user-supplied fields and the
//! derived alcohol metrics are fixed at construction; there are no setters.

use crate::units::AlcoholContent;
use std::fmt;

/// A single alcoholic drink with its derived alcohol content
#[derive(Clone, Debug, PartialEq)]
pub struct Beverage {
    producer: String,
    name: String,
    volume: f64,
    abv_percent: f64,
    content: AlcoholContent,
}

impl Beverage {
    /// Create a beverage from user input, computing all derived metrics.
    ///
    /// `volume` is in liters and `abv_percent` in percent. Neither is range
    /// checked; parsing and validation happen before this point.
    pub fn new(
        producer: impl Into<String>,
        name: impl Into<String>,
        volume: f64,
        abv_percent: f64,
    ) -> Self {
        Self {
            producer: producer.into(),
            name: name.into(),
            volume,
            abv_percent,
            content: AlcoholContent::from_volume(volume, abv_percent),
        }
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total volume in liters
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn abv_percent(&self) -> f64 {
        self.abv_percent
    }

    pub fn abv_fraction(&self) -> f64 {
        self.content.abv_fraction
    }

    /// Pure ethanol in liters, rounded to two decimals
    pub fn alcohol_liters(&self) -> f64 {
        self.content.liters
    }

    /// Pure ethanol in grams, rounded to two decimals
    pub fn alcohol_grams(&self) -> f64 {
        self.content.grams
    }

    /// Number of 10 g standard portions
    pub fn portions_small(&self) -> f64 {
        self.content.portions_small
    }

    /// Number of 12 g standard portions
    pub fn portions_large(&self) -> f64 {
        self.content.portions_large
    }

    pub fn content(&self) -> &AlcoholContent {
        &self.content
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.producer, self.name)?;
        writeln!(f, "Määrä: {} l", self.volume)?;
        writeln!(f, "Alkoholivahvuus (ABV): {} %", self.abv_percent)?;
        writeln!(f, "Alkoholi litroina: {} l", self.content.liters)?;
        writeln!(f, "Alkoholi grammoina: {} g", self.content.grams)?;
        writeln!(
            f,
            "Valtion Virallisia Alkoholiannoksia: {} - {}",
            self.content.portions_large, self.content.portions_small
        )
    }
}
