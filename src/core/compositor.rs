use serde::{Deserialize, Serialize};

use crate::core::{CompositeDataPoint, RawDataPoint};

/// Cost components that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostComponent {
    MarketPrice,
    ElectricityTax,
    NetTariff,
    /// Multiplier applied to the sum of the additive components.
    Vat,
}

impl CostComponent {
    pub const ALL: [Self; 4] = [
        Self::MarketPrice,
        Self::ElectricityTax,
        Self::NetTariff,
        Self::Vat,
    ];
}

/// Which cost components contribute to the composite price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleSet {
    pub with_market_price: bool,
    pub with_elafgift: bool,
    pub with_net_tarif: bool,
    pub with_vat: bool,
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl ToggleSet {
    #[must_use]
    pub const fn all_enabled() -> Self {
        Self {
            with_market_price: true,
            with_elafgift: true,
            with_net_tarif: true,
            with_vat: true,
        }
    }

    #[must_use]
    pub const fn all_disabled() -> Self {
        Self {
            with_market_price: false,
            with_elafgift: false,
            with_net_tarif: false,
            with_vat: false,
        }
    }

    #[must_use]
    pub fn is_enabled(self, component: CostComponent) -> bool {
        match component {
            CostComponent::MarketPrice => self.with_market_price,
            CostComponent::ElectricityTax => self.with_elafgift,
            CostComponent::NetTariff => self.with_net_tarif,
            CostComponent::Vat => self.with_vat,
        }
    }

    #[must_use]
    pub fn with(mut self, component: CostComponent, enabled: bool) -> Self {
        self.set(component, enabled);
        self
    }

    pub fn set(&mut self, component: CostComponent, enabled: bool) {
        match component {
            CostComponent::MarketPrice => self.with_market_price = enabled,
            CostComponent::ElectricityTax => self.with_elafgift = enabled,
            CostComponent::NetTariff => self.with_net_tarif = enabled,
            CostComponent::Vat => self.with_vat = enabled,
        }
    }

    /// Flips one component and returns its new state.
    pub fn toggle(&mut self, component: CostComponent) -> bool {
        let enabled = !self.is_enabled(component);
        self.set(component, enabled);
        enabled
    }

    /// Composite price of one raw hour: `(a + b + c) * v`.
    ///
    /// Disabled additive terms contribute `0`; a disabled VAT leaves the sum
    /// unscaled.
    #[must_use]
    pub fn price_of(self, point: &RawDataPoint) -> f64 {
        let mut price = 0.0;
        if self.with_market_price {
            price += point.market_price;
        }
        if self.with_elafgift {
            price += point.electricity_tax;
        }
        if self.with_net_tarif {
            price += point.net_tarif;
        }
        if self.with_vat {
            price *= point.vat;
        }
        price
    }
}

/// Combines each raw hour into one composite point, preserving input order.
#[must_use]
pub fn compose_prices(raw: &[RawDataPoint], toggles: ToggleSet) -> Vec<CompositeDataPoint> {
    raw.iter()
        .map(|point| CompositeDataPoint::new(point.date, toggles.price_of(point)))
        .collect()
}
