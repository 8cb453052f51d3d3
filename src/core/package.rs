use std::iter::once;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::quantity::currency::Ringgit;

/// Pre-priced bundle of panels, the unit a customer actually buys.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PanelPackage {
    pub panels: u32,

    /// Listed (card) price of the whole installation.
    pub price: Ringgit,
}

impl PanelPackage {
    pub const fn new(panels: u32, price: f64) -> Self {
        Self { panels, price: Ringgit(price) }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PackageTableError {
    #[error("the package table is empty")]
    Empty,

    #[error("a package must contain at least one panel")]
    NoPanels,

    #[error("the {panels}-panel package must have a positive finite price")]
    NonPositivePrice { panels: u32 },

    #[error("packages must be sorted by strictly increasing panel count, {next} follows {previous}")]
    NotIncreasing { previous: u32, next: u32 },
}

/// Package tiers sorted by strictly increasing panel count.
///
/// The largest tier is stored apart so that the table can never be empty.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PanelPackage>", into = "Vec<PanelPackage>")]
pub struct PackageTable {
    lower_tiers: Vec<PanelPackage>,
    top_tier: PanelPackage,
}

impl PackageTable {
    pub fn iter(&self) -> impl Iterator<Item = &PanelPackage> {
        self.lower_tiers.iter().chain(once(&self.top_tier))
    }

    /// Select the first tier that fits `panels_needed`, rounding up to the next available bundle.
    ///
    /// An exact match selects that very tier. When nothing is large enough, the largest tier
    /// is selected.
    pub fn select(&self, panels_needed: u32) -> PanelPackage {
        self.iter()
            .copied()
            .find(|package| package.panels >= panels_needed)
            .unwrap_or(self.top_tier)
    }

    /// Find the tier with exactly the given number of panels.
    pub fn find(&self, panels: u32) -> Option<PanelPackage> {
        self.iter().copied().find(|package| package.panels == panels)
    }

    pub fn cheapest_price(&self) -> Ringgit {
        self.iter().map(|package| package.price).min().unwrap_or(self.top_tier.price)
    }
}

impl Default for PackageTable {
    fn default() -> Self {
        Self {
            lower_tiers: vec![
                PanelPackage::new(10, 21000.0),
                PanelPackage::new(14, 26000.0),
                PanelPackage::new(20, 34000.0),
                PanelPackage::new(30, 43000.0),
            ],
            top_tier: PanelPackage::new(40, 52000.0),
        }
    }
}

impl TryFrom<Vec<PanelPackage>> for PackageTable {
    type Error = PackageTableError;

    fn try_from(mut packages: Vec<PanelPackage>) -> Result<Self, Self::Error> {
        if packages.iter().any(|package| package.panels == 0) {
            return Err(PackageTableError::NoPanels);
        }
        if let Some(package) =
            packages.iter().find(|package| !(package.price.0.is_finite() && package.price.0 > 0.0))
        {
            return Err(PackageTableError::NonPositivePrice { panels: package.panels });
        }
        if let Some((previous, next)) =
            packages.iter().tuple_windows().find(|(previous, next)| next.panels <= previous.panels)
        {
            return Err(PackageTableError::NotIncreasing {
                previous: previous.panels,
                next: next.panels,
            });
        }
        let top_tier = packages.pop().ok_or(PackageTableError::Empty)?;
        Ok(Self { lower_tiers: packages, top_tier })
    }
}

impl From<PackageTable> for Vec<PanelPackage> {
    fn from(table: PackageTable) -> Self {
        let mut packages = table.lower_tiers;
        packages.push(table.top_tier);
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_rounds_up() {
        let table = PackageTable::default();
        assert_eq!(table.select(1).panels, 10);
        assert_eq!(table.select(7).panels, 10);
        assert_eq!(table.select(11).panels, 14);
        assert_eq!(table.select(21).panels, 30);
        assert_eq!(table.select(31).panels, 40);
    }

    #[test]
    fn test_select_exact_tier() {
        let table = PackageTable::default();
        for package in table.iter() {
            assert_eq!(table.select(package.panels), *package);
        }
    }

    #[test]
    fn test_select_clamps_to_largest() {
        let table = PackageTable::default();
        assert_eq!(table.select(41), PanelPackage::new(40, 52000.0));
        assert_eq!(table.select(u32::MAX), PanelPackage::new(40, 52000.0));
    }

    #[test]
    fn test_select_is_monotonic() {
        let table = PackageTable::default();
        let selected = (1..=50).map(|panels_needed| table.select(panels_needed).panels);
        assert!(selected.tuple_windows().all(|(previous, next)| previous <= next));
    }

    #[test]
    fn test_single_tier() {
        let table = PackageTable::try_from(vec![PanelPackage::new(12, 30000.0)]).unwrap();
        assert_eq!(table.select(1).panels, 12);
        assert_eq!(table.select(100).panels, 12);
    }

    #[test]
    fn test_find() {
        let table = PackageTable::default();
        assert_eq!(table.find(14), Some(PanelPackage::new(14, 26000.0)));
        assert_eq!(table.find(15), None);
    }

    #[test]
    fn test_cheapest_price() {
        assert_eq!(PackageTable::default().cheapest_price(), Ringgit(21000.0));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            PackageTable::try_from(Vec::<PanelPackage>::new()),
            Err(PackageTableError::Empty),
        );
    }

    #[test]
    fn test_not_increasing_rejected() {
        let packages = vec![
            PanelPackage::new(10, 21000.0),
            PanelPackage::new(20, 34000.0),
            PanelPackage::new(20, 35000.0),
        ];
        assert_eq!(
            PackageTable::try_from(packages),
            Err(PackageTableError::NotIncreasing { previous: 20, next: 20 }),
        );
    }

    #[test]
    fn test_invalid_tiers_rejected() {
        assert_eq!(
            PackageTable::try_from(vec![PanelPackage::new(0, 1000.0)]),
            Err(PackageTableError::NoPanels),
        );
        assert_eq!(
            PackageTable::try_from(vec![PanelPackage::new(10, 0.0)]),
            Err(PackageTableError::NonPositivePrice { panels: 10 }),
        );
        for price in [f64::NAN, f64::INFINITY] {
            assert_eq!(
                PackageTable::try_from(vec![PanelPackage::new(10, price)]),
                Err(PackageTableError::NonPositivePrice { panels: 10 }),
            );
        }
    }

    #[test]
    fn test_vec_round_trip() {
        let packages = Vec::from(PackageTable::default());
        assert_eq!(packages.len(), 5);
        assert_eq!(PackageTable::try_from(packages), Ok(PackageTable::default()));
    }
}
