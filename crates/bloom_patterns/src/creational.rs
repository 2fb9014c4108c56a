//! Creational pattern demonstrations.

use std::fmt;
use std::io::Write;

use bloom_core::{Bouquet, LabConfig};

use crate::error::PatternResult;

/// Step-by-step construction of a [`Bouquet`].
#[derive(Debug, Default)]
pub struct BouquetBuilder {
    name: String,
    flowers: Vec<String>,
}

impl BouquetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn flower(mut self, flower: impl Into<String>) -> Self {
        self.flowers.push(flower.into());
        self
    }

    pub fn flowers(mut self, flowers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.flowers.extend(flowers.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Bouquet {
        Bouquet {
            name: self.name,
            flowers: self.flowers,
        }
    }
}

/// How a customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    /// Pick a payment method by name. Only `"card"` selects a card; every
    /// other name falls back to cash.
    pub fn from_name(name: &str) -> Self {
        match name {
            "card" => Self::Card,
            _ => Self::Cash,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }

    pub fn pay(&self, amount: f64, out: &mut dyn Write) -> PatternResult<()> {
        writeln!(out, "Paid with {}: {}", self.as_str(), amount)?;
        Ok(())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run the creational walkthrough.
pub fn run(config: &LabConfig, out: &mut dyn Write) -> PatternResult<()> {
    writeln!(out, "—— Configuration ——")?;
    writeln!(out, "Config value: {}", config.value)?;
    writeln!(out)?;

    writeln!(out, "—— Builder ——")?;
    let bouquet = BouquetBuilder::new()
        .name("Spring Mix")
        .flower("Rose")
        .flower("Tulip")
        .build();
    writeln!(out, "Bouquet: {} {:?}", bouquet.name, bouquet.flowers)?;
    writeln!(out)?;

    writeln!(out, "—— Factory ——")?;
    PaymentMethod::from_name("card").pay(120.0, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_flowers_in_order() {
        let bouquet = BouquetBuilder::new()
            .name("Spring Mix")
            .flower("Rose")
            .flowers(["Tulip", "Lily"])
            .build();

        assert_eq!(bouquet.name, "Spring Mix");
        assert_eq!(bouquet.flowers, vec!["Rose", "Tulip", "Lily"]);
    }

    #[test]
    fn test_builder_default_is_empty() {
        let bouquet = BouquetBuilder::new().build();
        assert_eq!(bouquet, Bouquet::default());
    }

    #[test]
    fn test_factory_selection() {
        assert_eq!(PaymentMethod::from_name("card"), PaymentMethod::Card);
        assert_eq!(PaymentMethod::from_name("cash"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_name("crypto"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_name(""), PaymentMethod::Cash);
    }

    #[test]
    fn test_pay_output() {
        let mut out = Vec::new();
        PaymentMethod::Card.pay(120.0, &mut out).unwrap();
        PaymentMethod::Cash.pay(12.5, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Paid with card: 120\nPaid with cash: 12.5\n");
    }

    #[test]
    fn test_run_uses_supplied_config() {
        let mut out = Vec::new();
        run(&LabConfig::new("Holiday Config"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Config value: Holiday Config"));
        assert!(text.contains("Bouquet: Spring Mix [\"Rose\", \"Tulip\"]"));
        assert!(text.contains("Paid with card: 120"));
    }
}
