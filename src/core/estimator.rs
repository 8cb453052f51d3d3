use bon::Builder;

use crate::{
    core::{
        bill::BillAmount,
        constants::{Constants, DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR, NoSunDays},
        error::InvalidInputError,
        estimation::{Estimation, Financials, SavingsRange},
        package::PanelPackage,
    },
    quantity::{
        currency::Ringgit,
        power::{Kilowatts, Watts},
        ratios::Percentage,
    },
};

#[derive(Builder)]
pub struct Estimator<'a> {
    constants: &'a Constants,

    #[builder(default)]
    no_sun_days: NoSunDays,

    /// Explicitly chosen package which replaces the recommended one.
    package: Option<PanelPackage>,
}

impl Estimator<'_> {
    /// Parse the raw bill and estimate.
    pub fn try_estimate(&self, bill: &str) -> Result<Estimation, InvalidInputError> {
        Ok(self.estimate(bill.parse()?))
    }

    /// Size the system for the bill and project the savings.
    ///
    /// Assumes that the system offsets the whole bill, so the monthly savings equal the bill.
    pub fn estimate(&self, bill: BillAmount) -> Estimation {
        let constants = self.constants;
        let amount = Ringgit::from(bill);

        let monthly_usage = amount / constants.tariff;
        let recommended_capacity = monthly_usage / (constants.sunlight_hours * DAYS_PER_MONTH);
        let panels_needed = panels_needed(recommended_capacity, constants.panel_wattage);
        let recommended_package = constants.packages.select(panels_needed);
        let package = self.package.unwrap_or(recommended_package);

        let monthly_savings = amount;
        let yearly_savings = monthly_savings * MONTHS_PER_YEAR;
        let lifetime_savings = yearly_savings * constants.system_life_years.0;

        let annual_generation = recommended_capacity
            * constants.effective_sunlight_hours(self.no_sun_days)
            * DAYS_PER_YEAR;
        let monthly_generation = annual_generation / MONTHS_PER_YEAR;
        let bill_offset =
            Percentage::from_ratio(monthly_generation * constants.tariff / amount)
                .min(Percentage::FULL);

        let installed_capacity =
            Kilowatts::from(constants.panel_wattage * f64::from(package.panels));

        Estimation {
            bill,
            monthly_usage,
            recommended_capacity,
            reference_cost: constants.cost_per_kw * recommended_capacity.0,
            panels_needed,
            recommended_package,
            package,
            installed_capacity,
            inverter_capacity: installed_capacity * constants.inverter_ratio,
            microinverters: constants.microinverters,
            yearly_maintenance: constants.maintenance_per_year,
            monthly_savings: SavingsRange::new(monthly_savings, constants.discount_factor),
            yearly_savings,
            lifetime_savings,
            new_monthly_bill: amount - monthly_savings,
            savings_per_panel: monthly_savings / f64::from(package.panels),
            card: Financials::new(package.price, yearly_savings, lifetime_savings),
            cash: Financials::new(
                package.price - constants.cash_discount,
                yearly_savings,
                lifetime_savings,
            ),
            annual_generation,
            monthly_generation,
            bill_offset,
            environment: constants.environment.impact(installed_capacity),
        }
    }
}

/// Whole panels needed to reach the capacity, never less than one.
fn panels_needed(capacity: Kilowatts, panel_wattage: Watts) -> u32 {
    let panels = (Watts::from(capacity) / panel_wattage).ceil();
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let panels = panels as u32;
    panels.max(1)
}
