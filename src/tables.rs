use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{estimation::Estimation, package::PackageTable},
    quantity::ratios::Percentage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn section(title: &str) -> Vec<Cell> {
    vec![Cell::new(title).add_attribute(Attribute::Bold), Cell::new("")]
}

fn row(label: &str, value: impl ToString) -> Vec<Cell> {
    vec![
        Cell::new(label).add_attribute(Attribute::Dim),
        Cell::new(value.to_string()).set_alignment(CellAlignment::Right),
    ]
}

fn roi_color(roi: Percentage) -> Color {
    if roi.0 > 0.0 { Color::Green } else { Color::Red }
}

pub fn build_estimation_table(estimation: &Estimation) -> Table {
    let package_color =
        if estimation.is_recommended_package() { Color::Green } else { Color::DarkYellow };

    let mut table = new_table();
    table.set_header(vec!["Estimate", "Value"]);
    table
        .add_row(section("Sizing"))
        .add_row(row("Monthly bill", estimation.bill))
        .add_row(row("Monthly usage", estimation.monthly_usage))
        .add_row(row("Recommended capacity", estimation.recommended_capacity))
        .add_row(row("Panels needed", estimation.panels_needed))
        .add_row(vec![
            Cell::new("Selected package").add_attribute(Attribute::Dim),
            Cell::new(format!("{} panels", estimation.package.panels))
                .set_alignment(CellAlignment::Right)
                .fg(package_color),
        ])
        .add_row(row(
            "Recommended package",
            format!("{} panels", estimation.recommended_package.panels),
        ))
        .add_row(row("Installed capacity", format!("{} peak", estimation.installed_capacity)))
        .add_row(row("Inverter capacity", format!("{} AC", estimation.inverter_capacity)))
        .add_row(row("Microinverters", format!("{} units", estimation.microinverters)))
        .add_row(section("Generation"))
        .add_row(row("Annual generation", estimation.annual_generation))
        .add_row(row("Monthly generation", estimation.monthly_generation))
        .add_row(row("Bill offset", estimation.bill_offset))
        .add_row(section("Savings"))
        .add_row(row(
            "Monthly savings",
            format!("{} – {}", estimation.monthly_savings.low, estimation.monthly_savings.high),
        ))
        .add_row(row("Yearly savings", estimation.yearly_savings))
        .add_row(row("Lifetime savings", estimation.lifetime_savings))
        .add_row(row("New monthly bill", estimation.new_monthly_bill))
        .add_row(row("Savings per panel", estimation.savings_per_panel))
        .add_row(section("Financials"))
        .add_row(row("Linear cost estimate", estimation.reference_cost))
        .add_row(row("Price (card)", estimation.card.price))
        .add_row(row("Payback (card)", estimation.card.payback))
        .add_row(vec![
            Cell::new("ROI (card)").add_attribute(Attribute::Dim),
            Cell::new(estimation.card.roi)
                .set_alignment(CellAlignment::Right)
                .fg(roi_color(estimation.card.roi)),
        ])
        .add_row(row("O&M (yearly)", estimation.yearly_maintenance))
        .add_row(row("Price (cash)", estimation.cash.price))
        .add_row(row("Payback (cash)", estimation.cash.payback))
        .add_row(vec![
            Cell::new("ROI (cash)").add_attribute(Attribute::Dim),
            Cell::new(estimation.cash.roi)
                .set_alignment(CellAlignment::Right)
                .fg(roi_color(estimation.cash.roi)),
        ])
        .add_row(section("Environment"))
        .add_row(row("Avoided fossil fuel", estimation.environment.fossil_fuel))
        .add_row(row("Equivalent trees", format!("{:.1}", estimation.environment.trees)))
        .add_row(row("Avoided CO₂", estimation.environment.carbon_dioxide));
    table
}

pub fn build_packages_table(packages: &PackageTable) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Panels").set_alignment(CellAlignment::Right),
        Cell::new("Price").set_alignment(CellAlignment::Right),
    ]);
    for package in packages.iter() {
        table.add_row(vec![
            Cell::new(package.panels).set_alignment(CellAlignment::Right),
            Cell::new(package.price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{bill::BillAmount, constants::Constants, estimator::Estimator};

    #[test]
    fn test_estimation_table() {
        let constants = Constants::default();
        let estimation = Estimator::builder()
            .constants(&constants)
            .build()
            .estimate(BillAmount::try_from(200.0).unwrap());
        let rendered = build_estimation_table(&estimation).to_string();
        assert!(rendered.contains("Recommended capacity"));
        assert!(rendered.contains("3.33 kW"));
        assert!(rendered.contains("21000.00 MYR"));
        assert!(rendered.contains("8.8 years"));
        assert!(rendered.contains("185.7 %"));
        assert!(rendered.contains("5 units"));
        assert!(rendered.contains("800.00 MYR"));
    }

    #[test]
    fn test_packages_table() {
        let rendered = build_packages_table(&PackageTable::default()).to_string();
        assert!(rendered.contains("52000.00 MYR"));
    }
}
