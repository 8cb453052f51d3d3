use serde::Serialize;

use crate::{
    core::{bill::BillAmount, environment::EnvironmentalImpact, package::PanelPackage},
    quantity::{
        currency::Ringgit,
        energy::KilowattHours,
        power::Kilowatts,
        ratios::Percentage,
        time::Years,
    },
};

/// Result of a single estimation. Nothing in here changes after it is built.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimation {
    pub bill: BillAmount,
    pub monthly_usage: KilowattHours,
    pub recommended_capacity: Kilowatts,

    /// Linear estimate from the cost per kilowatt, before any package is picked.
    pub reference_cost: Ringgit,

    /// Panels mathematically needed to cover the recommended capacity.
    pub panels_needed: u32,

    pub recommended_package: PanelPackage,

    /// Package the financials are based on: the recommended one unless chosen explicitly.
    pub package: PanelPackage,

    /// Peak power of the selected package.
    pub installed_capacity: Kilowatts,

    pub inverter_capacity: Kilowatts,
    pub microinverters: u32,

    /// Operation and maintenance, not deducted from the savings.
    pub yearly_maintenance: Ringgit,

    pub monthly_savings: SavingsRange,
    pub yearly_savings: Ringgit,
    pub lifetime_savings: Ringgit,
    pub new_monthly_bill: Ringgit,
    pub savings_per_panel: Ringgit,

    /// Financials at the listed price.
    pub card: Financials,

    /// Financials at the discounted cash price.
    pub cash: Financials,

    pub annual_generation: KilowattHours,
    pub monthly_generation: KilowattHours,
    pub bill_offset: Percentage,
    pub environment: EnvironmentalImpact,
}

impl Estimation {
    pub const fn is_recommended_package(&self) -> bool {
        self.package.panels == self.recommended_package.panels
    }
}

/// Displayed monthly savings, from a conservative low end up to the full amount.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SavingsRange {
    pub low: Ringgit,
    pub high: Ringgit,
}

impl SavingsRange {
    pub fn new(savings: Ringgit, discount_factor: f64) -> Self {
        Self { low: savings * (1.0 - discount_factor), high: savings }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Financials {
    pub price: Ringgit,
    pub payback: Years,
    pub roi: Percentage,
}

impl Financials {
    pub fn new(price: Ringgit, yearly_savings: Ringgit, lifetime_savings: Ringgit) -> Self {
        Self {
            price,
            payback: Years(price / yearly_savings),
            roi: Percentage::from_ratio((lifetime_savings - price) / price),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_savings_range() {
        let range = SavingsRange::new(Ringgit(200.0), 0.07);
        assert_abs_diff_eq!(range.low.0, 186.0, epsilon = 1e-9);
        assert_eq!(range.high, Ringgit(200.0));
    }

    #[test]
    fn test_financials() {
        let financials = Financials::new(Ringgit(21000.0), Ringgit(2400.0), Ringgit(60000.0));
        assert_abs_diff_eq!(financials.payback.0, 8.75);
        assert_abs_diff_eq!(financials.roi.0, 185.714_285_714, epsilon = 1e-6);
    }
}
