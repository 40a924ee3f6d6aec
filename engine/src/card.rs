use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Tier thresholds: 90+ Legendary, 70+ Epic, 50+ Rare, anything lower Common.
    pub fn from_power(power: u32) -> Self {
        match power {
            90.. => Rarity::Legendary,
            70..=89 => Rarity::Epic,
            50..=69 => Rarity::Rare,
            _ => Rarity::Common,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single battle card. Immutable once built; rarity always follows power.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    power: u32,
    rarity: Rarity,
}

impl Card {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
            rarity: Rarity::from_power(power),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} | Power: {})", self.name, self.rarity, self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_thresholds() {
        assert_eq!(Rarity::from_power(10), Rarity::Common);
        assert_eq!(Rarity::from_power(49), Rarity::Common);
        assert_eq!(Rarity::from_power(50), Rarity::Rare);
        assert_eq!(Rarity::from_power(69), Rarity::Rare);
        assert_eq!(Rarity::from_power(70), Rarity::Epic);
        assert_eq!(Rarity::from_power(89), Rarity::Epic);
        assert_eq!(Rarity::from_power(90), Rarity::Legendary);
        assert_eq!(Rarity::from_power(100), Rarity::Legendary);
    }

    #[test]
    fn card_derives_rarity() {
        let c = Card::new("Golem #6", 72);
        assert_eq!(c.rarity(), Rarity::Epic);
        assert_eq!(c.power(), 72);
        assert_eq!(c.name(), "Golem #6");
    }

    #[test]
    fn rarity_orders_by_tier() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Epic < Rarity::Legendary);
    }
}
