use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{environment::EnvironmentFactors, error::InvalidInputError, package::PackageTable},
    prelude::*,
    quantity::{
        currency::Ringgit,
        power::Watts,
        rate::KilowattHourRate,
        time::{Hours, Years},
    },
};

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Domain constants of the estimation.
///
/// Every field has a reference value, so a constants file only needs to list what it changes.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    pub tariff: KilowattHourRate,

    /// Average daily sun hours.
    pub sunlight_hours: Hours,

    /// Installed cost per kilowatt, only used for the linear reference cost.
    pub cost_per_kw: Ringgit,

    pub panel_wattage: Watts,
    pub system_life_years: Years,

    /// Reduction of the monthly savings for the low end of the displayed range.
    pub discount_factor: f64,

    /// Discount off the listed package price when paying in cash.
    pub cash_discount: Ringgit,

    /// Fraction of the normal daily yield produced on a no-sun day.
    pub overcast_yield: f64,

    /// Inverter AC capacity per kilowatt-peak of panels.
    pub inverter_ratio: f64,

    /// Yearly operation and maintenance cost of an installation.
    pub maintenance_per_year: Ringgit,

    /// Microinverters supplied with every package.
    pub microinverters: u32,

    pub environment: EnvironmentFactors,
    pub packages: PackageTable,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            tariff: KilowattHourRate(0.50),
            sunlight_hours: Hours(4.0),
            cost_per_kw: Ringgit(5000.0),
            panel_wattage: Watts(550.0),
            system_life_years: Years(25.0),
            discount_factor: 0.07,
            cash_discount: Ringgit(2000.0),
            overcast_yield: 0.1,
            inverter_ratio: 0.77,
            maintenance_per_year: Ringgit(800.0),
            microinverters: 5,
            environment: EnvironmentFactors::default(),
            packages: PackageTable::default(),
        }
    }
}

impl Constants {
    pub const MAX_SYSTEM_LIFE: Years = Years(100.0);

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if path.is_file() {
            info!("reading the constants…");
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
        } else {
            debug!("no constants file, using the reference constants");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result {
        ensure_positive("the tariff", self.tariff.0)?;
        ensure_positive("sunlight hours", self.sunlight_hours.0)?;
        ensure!(self.sunlight_hours <= Hours(24.0), "a day has at most 24 sunlight hours");
        ensure_positive("the cost per kW", self.cost_per_kw.0)?;
        ensure_positive("the panel wattage", self.panel_wattage.0)?;
        ensure_positive("the system life", self.system_life_years.0)?;
        ensure!(
            self.system_life_years <= Self::MAX_SYSTEM_LIFE,
            "the system life must not exceed {}",
            Self::MAX_SYSTEM_LIFE,
        );
        ensure!(
            (0.0..1.0).contains(&self.discount_factor),
            "the discount factor must be within [0, 1), got {}",
            self.discount_factor,
        );
        ensure!(
            (0.0..=1.0).contains(&self.overcast_yield),
            "the overcast yield must be within [0, 1], got {}",
            self.overcast_yield,
        );
        ensure_positive("the inverter ratio", self.inverter_ratio)?;
        ensure_non_negative("the cash discount", self.cash_discount.0)?;
        ensure!(
            self.cash_discount < self.packages.cheapest_price(),
            "the cash discount ({}) must be below the cheapest package price ({})",
            self.cash_discount,
            self.packages.cheapest_price(),
        );
        ensure_non_negative("the maintenance cost", self.maintenance_per_year.0)?;
        ensure_non_negative("fossil fuel per kWp", self.environment.fossil_fuel_per_kwp.0)?;
        ensure_non_negative("trees per kWp", self.environment.trees_per_kwp)?;
        ensure_non_negative("CO₂ per kWp", self.environment.carbon_dioxide_per_kwp.0)?;
        Ok(())
    }

    /// Average daily sun hours over a month with the given number of overcast days.
    pub fn effective_sunlight_hours(&self, no_sun_days: NoSunDays) -> Hours {
        if no_sun_days == NoSunDays::default() {
            return self.sunlight_hours;
        }
        let no_sun_days = f64::from(no_sun_days.0);
        let sunny_days = DAYS_PER_MONTH - no_sun_days;
        (self.sunlight_hours * sunny_days + self.sunlight_hours * self.overcast_yield * no_sun_days)
            / DAYS_PER_MONTH
    }
}

/// Raw comparisons, since the ordered quantities rank NaN above everything.
fn ensure_positive(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value > 0.0, "{name} must be a positive number, got {value}");
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value >= 0.0, "{name} must be a non-negative number, got {value}");
    Ok(())
}

/// Number of overcast days in a month.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NoSunDays(u8);

impl NoSunDays {
    pub const MAX: u8 = 30;
}

impl TryFrom<u8> for NoSunDays {
    type Error = InvalidInputError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        if days <= Self::MAX {
            Ok(Self(days))
        } else {
            Err(InvalidInputError::TooManyNoSunDays(days))
        }
    }
}
