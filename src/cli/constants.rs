//! Constants file and per-run overrides.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::constants::Constants,
    prelude::*,
    quantity::{
        currency::Ringgit,
        power::Watts,
        rate::KilowattHourRate,
        time::{Hours, Years},
    },
};

#[must_use]
#[derive(Parser)]
pub struct ConstantsArgs {
    /// TOML file with the constants. Reference values are used for anything it omits.
    #[clap(long = "constants", env = "SOLAR_CONSTANTS", default_value = "constants.toml")]
    pub path: PathBuf,

    /// Electricity tariff in ringgit per kilowatt-hour.
    #[clap(long = "tariff", env = "SOLAR_TARIFF")]
    pub tariff: Option<KilowattHourRate>,

    /// Average daily sunlight hours.
    #[clap(long = "sunlight-hours", env = "SOLAR_SUNLIGHT_HOURS")]
    pub sunlight_hours: Option<Hours>,

    /// Single panel wattage.
    #[clap(long = "panel-wattage", env = "SOLAR_PANEL_WATTAGE")]
    pub panel_wattage: Option<Watts>,

    /// System lifetime in years.
    #[clap(long = "system-life-years", env = "SOLAR_SYSTEM_LIFE_YEARS")]
    pub system_life_years: Option<Years>,

    /// Reduction of the low end of the monthly savings range.
    #[clap(long = "discount-factor", env = "SOLAR_DISCOUNT_FACTOR")]
    pub discount_factor: Option<f64>,

    /// Discount off the package price when paying in cash.
    #[clap(long = "cash-discount", env = "SOLAR_CASH_DISCOUNT")]
    pub cash_discount: Option<Ringgit>,
}

impl ConstantsArgs {
    /// Read the constants file, apply the overrides, and validate the result.
    pub fn load(&self) -> Result<Constants> {
        let mut constants = Constants::read_from(&self.path)?;
        self.apply_to(&mut constants);
        constants.validate().context("invalid constants")?;
        debug!(
            tariff = %constants.tariff,
            sunlight_hours = %constants.sunlight_hours,
            panel_wattage = %constants.panel_wattage,
            "loaded the constants",
        );
        Ok(constants)
    }

    fn apply_to(&self, constants: &mut Constants) {
        if let Some(tariff) = self.tariff {
            constants.tariff = tariff;
        }
        if let Some(sunlight_hours) = self.sunlight_hours {
            constants.sunlight_hours = sunlight_hours;
        }
        if let Some(panel_wattage) = self.panel_wattage {
            constants.panel_wattage = panel_wattage;
        }
        if let Some(system_life_years) = self.system_life_years {
            constants.system_life_years = system_life_years;
        }
        if let Some(discount_factor) = self.discount_factor {
            constants.discount_factor = discount_factor;
        }
        if let Some(cash_discount) = self.cash_discount {
            constants.cash_discount = cash_discount;
        }
    }
}
