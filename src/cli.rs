mod constants;
mod estimate;
mod output;

use clap::{Parser, Subcommand};

pub use self::{constants::ConstantsArgs, estimate::estimate, output::OutputArgs};
use crate::cli::estimate::EstimateArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub constants: ConstantsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: size the system for a monthly bill and project the savings.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the package price table.
    #[clap(name = "packages")]
    Packages,

    /// Print the effective constants as TOML.
    #[clap(name = "constants")]
    Constants(OutputArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_args() {
        let args = Args::try_parse_from([
            "solar-estimator",
            "--tariff",
            "0.57",
            "estimate",
            "250",
            "--package",
            "20",
            "--no-sun-days",
            "4",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.constants.tariff.map(|tariff| tariff.0), Some(0.57));
        let Command::Estimate(args) = args.command else { panic!("expected `estimate`") };
        assert_eq!(args.bill, "250");
        assert_eq!(args.package, Some(20));
        assert_eq!(args.no_sun_days, 4);
    }

    #[test]
    fn test_negative_bill_reaches_the_parser() {
        let args = Args::try_parse_from(["solar-estimator", "estimate", "-5"]).unwrap();
        let Command::Estimate(args) = args.command else { panic!("expected `estimate`") };
        assert_eq!(args.bill, "-5");
    }

    #[test]
    fn test_too_many_no_sun_days_rejected() {
        let result =
            Args::try_parse_from(["solar-estimator", "estimate", "200", "--no-sun-days", "31"]);
        assert!(result.is_err());
    }
}
