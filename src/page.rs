use std::fmt::{Display, Formatter};

use crate::core::estimation::Estimation;

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem; color: #222; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; }
.box { background: #fff; border-radius: 8px; padding: 12px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); }
.label { font-size: 0.8rem; color: #666; margin-bottom: 4px; }
.value { font-size: 1.1rem; font-weight: 600; }
";

/// Standalone HTML page with labelled value boxes.
///
/// Only numbers and fixed, pre-escaped labels end up in the markup.
pub struct Page<'a>(pub &'a Estimation);

impl Page<'_> {
    fn section(f: &mut Formatter<'_>, title: &str, boxes: &[(&str, String)]) -> std::fmt::Result {
        writeln!(f, "<h2>{title}</h2>")?;
        writeln!(f, r#"<div class="grid">"#)?;
        for (label, value) in boxes {
            writeln!(
                f,
                r#"  <div class="box"><div class="label">{label}</div><div class="value">{value}</div></div>"#,
            )?;
        }
        writeln!(f, "</div>")
    }
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let estimation = self.0;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, r#"<head><meta charset="utf-8"><title>Solar estimate</title>"#)?;
        writeln!(f, "<style>{STYLE}</style></head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<h1>Solar estimate for a {} monthly bill</h1>", estimation.bill)?;

        Self::section(
            f,
            "Sizing",
            &[
                ("Monthly usage", estimation.monthly_usage.to_string()),
                ("Recommended capacity", estimation.recommended_capacity.to_string()),
                ("Panels needed", format!("{} panels", estimation.panels_needed)),
                ("Selected package", format!("{} panels", estimation.package.panels)),
                ("Installed capacity", format!("{} peak", estimation.installed_capacity)),
                ("Inverter capacity", format!("{} AC", estimation.inverter_capacity)),
                ("Microinverters", format!("{} units", estimation.microinverters)),
            ],
        )?;
        Self::section(
            f,
            "Generation",
            &[
                ("Annual generation", estimation.annual_generation.to_string()),
                ("Monthly generation", estimation.monthly_generation.to_string()),
                ("Bill offset", estimation.bill_offset.to_string()),
            ],
        )?;
        Self::section(
            f,
            "Savings",
            &[
                (
                    "Monthly savings",
                    format!(
                        "{} – {}",
                        estimation.monthly_savings.low, estimation.monthly_savings.high,
                    ),
                ),
                ("Yearly savings", estimation.yearly_savings.to_string()),
                ("Lifetime savings", estimation.lifetime_savings.to_string()),
                ("New monthly bill", estimation.new_monthly_bill.to_string()),
                ("Savings per panel", estimation.savings_per_panel.to_string()),
            ],
        )?;
        Self::section(
            f,
            "Financials",
            &[
                ("Price (card)", estimation.card.price.to_string()),
                ("Payback (card)", estimation.card.payback.to_string()),
                ("ROI (card)", estimation.card.roi.to_string()),
                ("O&amp;M (yearly)", estimation.yearly_maintenance.to_string()),
                ("Price (cash)", estimation.cash.price.to_string()),
                ("Payback (cash)", estimation.cash.payback.to_string()),
                ("ROI (cash)", estimation.cash.roi.to_string()),
            ],
        )?;
        Self::section(
            f,
            "Environment",
            &[
                ("Avoided fossil fuel", estimation.environment.fossil_fuel.to_string()),
                ("Equivalent trees", format!("{:.1}", estimation.environment.trees)),
                ("Avoided CO₂", estimation.environment.carbon_dioxide.to_string()),
            ],
        )?;

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{bill::BillAmount, constants::Constants, estimator::Estimator};

    #[test]
    fn test_page() {
        let constants = Constants::default();
        let estimation = Estimator::builder()
            .constants(&constants)
            .build()
            .estimate(BillAmount::try_from(1000.0).unwrap());
        let page = Page(&estimation).to_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Solar estimate for a 1000.00 MYR monthly bill"));
        assert!(page.contains(
            r#"<div class="label">Selected package</div><div class="value">40 panels</div>"#
        ));
        assert!(page.contains(
            r#"<div class="label">Panels needed</div><div class="value">31 panels</div>"#
        ));
        assert!(page.contains(
            r#"<div class="label">O&amp;M (yearly)</div><div class="value">800.00 MYR</div>"#
        ));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
