use serde::{Deserialize, Serialize};

use crate::quantity::{
    mass::{Kilograms, Tonnes},
    power::Kilowatts,
};

/// Avoided emissions per kilowatt-peak of installed panels.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentFactors {
    pub fossil_fuel_per_kwp: Kilograms,
    pub trees_per_kwp: f64,
    pub carbon_dioxide_per_kwp: Tonnes,
}

impl Default for EnvironmentFactors {
    fn default() -> Self {
        Self {
            fossil_fuel_per_kwp: Kilograms(350.0),
            trees_per_kwp: 2.0,
            carbon_dioxide_per_kwp: Tonnes(0.85),
        }
    }
}

impl EnvironmentFactors {
    pub fn impact(&self, installed_capacity: Kilowatts) -> EnvironmentalImpact {
        EnvironmentalImpact {
            fossil_fuel: self.fossil_fuel_per_kwp * installed_capacity.0,
            trees: self.trees_per_kwp * installed_capacity.0,
            carbon_dioxide: self.carbon_dioxide_per_kwp * installed_capacity.0,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EnvironmentalImpact {
    pub fossil_fuel: Kilograms,

    /// Equivalent number of planted trees.
    pub trees: f64,

    pub carbon_dioxide: Tonnes,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_impact() {
        let impact = EnvironmentFactors::default().impact(Kilowatts(5.5));
        assert_abs_diff_eq!(impact.fossil_fuel.0, 1925.0);
        assert_abs_diff_eq!(impact.trees, 11.0);
        assert_abs_diff_eq!(impact.carbon_dioxide.0, 4.675, epsilon = 1e-9);
    }
}
