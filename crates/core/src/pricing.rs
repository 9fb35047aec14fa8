//! Weight-tiered shipping prices.

/// A price band. Applies to weights at or above `min_weight` up to the next band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTier {
    /// Inclusive lower bound in kilograms.
    pub min_weight: f64,
    /// Price per kilometre within this band.
    pub rate: u32,
}

const STANDARD_TIERS: [PriceTier; 4] = [
    PriceTier {
        min_weight: 0.0,
        rate: 2,
    },
    PriceTier {
        min_weight: 5.0,
        rate: 3,
    },
    PriceTier {
        min_weight: 10.0,
        rate: 5,
    },
    PriceTier {
        min_weight: 50.0,
        rate: 10,
    },
];

/// Maps distance and weight to a price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingEngine {
    tiers: [PriceTier; 4],
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            tiers: STANDARD_TIERS,
        }
    }
}

impl PricingEngine {
    /// Rate per kilometre for `weight`. Lower bounds are inclusive: exactly 5 kg
    /// is billed at the second band.
    pub fn rate_for(&self, weight: f64) -> u32 {
        self.tiers
            .iter()
            .rev()
            .find(|tier| weight >= tier.min_weight)
            .unwrap_or(&self.tiers[0])
            .rate
    }

    /// Price for shipping `weight` kilograms over `distance` kilometres.
    pub fn price(&self, distance: u32, weight: f64) -> u32 {
        distance.saturating_mul(self.rate_for(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let pricing = PricingEngine::default();
        assert_eq!(pricing.price(100, 4.99), 200);
        assert_eq!(pricing.price(100, 5.0), 300);
        assert_eq!(pricing.price(100, 9.99), 300);
        assert_eq!(pricing.price(100, 10.0), 500);
        assert_eq!(pricing.price(100, 49.99), 500);
        assert_eq!(pricing.price(100, 50.0), 1000);
    }

    #[test]
    fn heavy_parcels_use_top_band() {
        let pricing = PricingEngine::default();
        assert_eq!(pricing.price(920, 120.0), 9200);
        assert_eq!(pricing.rate_for(0.5), 2);
    }

    #[test]
    fn zero_distance_is_free() {
        assert_eq!(PricingEngine::default().price(0, 30.0), 0);
    }
}
