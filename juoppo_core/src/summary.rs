//! Aggregate totals over a drinking session.

use crate::Beverage;
use std::fmt;

/// Totals across every beverage logged in one session
///
/// Each total is the sum of the per-beverage rounded values, so the portion
/// totals may drift slightly from portions computed on the summed grams.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub volume: f64,
    pub alcohol_liters: f64,
    pub alcohol_grams: f64,
    pub portions_small: f64,
    pub portions_large: f64,
}

impl Summary {
    pub fn from_beverages(beverages: &[Beverage]) -> Self {
        Self {
            count: beverages.len(),
            volume: total(beverages, Beverage::volume),
            alcohol_liters: total(beverages, Beverage::alcohol_liters),
            alcohol_grams: total(beverages, Beverage::alcohol_grams),
            portions_small: total(beverages, Beverage::portions_small),
            portions_large: total(beverages, Beverage::portions_large),
        }
    }
}

fn total(beverages: &[Beverage], field: fn(&Beverage) -> f64) -> f64 {
    beverages.iter().fold(0.0, |acc, b| acc + field(b))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "YHTEENSÄ")?;
        writeln!(f)?;
        writeln!(f, "Juotuja juomia (pullo/tölkki/tuoppi): {} kpl", self.count)?;
        writeln!(f, "Juoman kokonaismäärä: {} l", self.volume)?;
        writeln!(f, "Alkoholia litroina: {} l", self.alcohol_liters)?;
        writeln!(f, "Alkoholia grammoina: {} g", self.alcohol_grams)?;
        writeln!(
            f,
            "Valtion Virallisia Annoksia: {} - {} kpl",
            self.portions_large, self.portions_small
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let summary = Summary::from_beverages(&[]);
        assert_eq!(summary, Summary::default());
        assert!(summary.to_string().contains("Juotuja juomia (pullo/tölkki/tuoppi): 0 kpl"));
    }

    #[test]
    fn test_single_beverage_matches_itself() {
        let beer = Beverage::new("Koff", "III", 0.33, 4.5);
        let summary = Summary::from_beverages(std::slice::from_ref(&beer));

        assert_eq!(summary.count, 1);
        assert_eq!(summary.volume, beer.volume());
        assert_eq!(summary.alcohol_liters, beer.alcohol_liters());
        assert_eq!(summary.alcohol_grams, beer.alcohol_grams());
        assert_eq!(summary.portions_small, beer.portions_small());
        assert_eq!(summary.portions_large, beer.portions_large());
    }

    #[test]
    fn test_sums_rounded_portions() {
        let drinks = vec![
            Beverage::new("Koff", "III", 0.33, 4.5),
            Beverage::new("Koff", "III", 0.33, 4.5),
            Beverage::new("Alko", "Viina", 0.04, 38.0),
        ];
        let summary = Summary::from_beverages(&drinks);

        assert_eq!(summary.count, 3);
        assert!((summary.volume - 0.70).abs() < 1e-9);
        assert!((summary.alcohol_liters - 0.04).abs() < 1e-9);
        assert!((summary.alcohol_grams - 31.6).abs() < 1e-9);
        // 0.79 + 0.79 + 1.58
        assert!((summary.portions_small - 3.16).abs() < 1e-9);
        // 0.66 + 0.66 + 1.32, where 31.6 / 12 would round to 2.63
        assert!((summary.portions_large - 2.64).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let summary = Summary::from_beverages(&[Beverage::new("Koff", "III", 0.33, 4.5)]);
        let text = summary.to_string();

        assert!(text.starts_with("YHTEENSÄ\n\n"));
        assert!(text.contains("1 kpl"));
        assert!(text.contains("Juoman kokonaismäärä: 0.33 l"));
        assert!(text.contains("Alkoholia grammoina: 7.9 g"));
        assert!(text.contains("Valtion Virallisia Annoksia: 0.66 - 0.79 kpl"));
    }
}
