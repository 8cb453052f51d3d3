use clap::Parser;

use crate::{
    cli::output::OutputArgs,
    core::{
        constants::{Constants, NoSunDays},
        estimator::Estimator,
    },
    page::Page,
    prelude::*,
    tables::build_estimation_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// Average monthly electricity bill in ringgit.
    #[clap(allow_hyphen_values = true)]
    pub bill: String,

    /// Price the given package instead of the recommended one.
    #[clap(long = "package", env = "SOLAR_PACKAGE")]
    pub package: Option<u32>,

    /// Overcast days per month, which lower the projected generation.
    #[clap(
        long = "no-sun-days",
        env = "SOLAR_NO_SUN_DAYS",
        default_value = "0",
        value_parser = clap::value_parser!(u8).range(0..=30),
    )]
    pub no_sun_days: u8,

    #[clap(long, default_value = "table")]
    pub format: Format,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Format {
    /// Terminal table.
    Table,

    /// Standalone HTML page.
    Html,

    /// Pretty-printed JSON.
    Json,
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs, constants: &Constants) -> Result {
    let package = args
        .package
        .map(|panels| {
            constants.packages.find(panels).with_context(|| {
                format!("there is no {panels}-panel package, see `solar-estimator packages`")
            })
        })
        .transpose()?;

    let estimation = Estimator::builder()
        .constants(constants)
        .no_sun_days(NoSunDays::try_from(args.no_sun_days)?)
        .maybe_package(package)
        .build()
        .try_estimate(&args.bill)?;
    info!(
        bill = %estimation.bill,
        capacity = %estimation.recommended_capacity,
        panels_needed = estimation.panels_needed,
        package = estimation.package.panels,
        payback = %estimation.card.payback,
        "estimated",
    );
    if !estimation.is_recommended_package() {
        warn!(
            recommended = estimation.recommended_package.panels,
            selected = estimation.package.panels,
            "the selected package differs from the recommended one",
        );
    }

    let text = match args.format {
        Format::Table => build_estimation_table(&estimation).to_string(),
        Format::Html => Page(&estimation).to_string(),
        Format::Json => serde_json::to_string_pretty(&estimation)?,
    };
    args.output.emit(&text)
}
