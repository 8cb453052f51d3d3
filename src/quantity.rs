#[macro_use]
mod macros;

pub mod currency;
pub mod energy;
pub mod mass;
pub mod power;
pub mod rate;
pub mod ratios;
pub mod time;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{currency::Ringgit, energy::KilowattHours, power::Kilowatts, time::Hours};

    #[test]
    fn test_min() {
        assert_eq!(Ringgit(1.0).min(Ringgit(2.0)), Ringgit(1.0));
        assert_eq!(Ringgit(2.0).min(Ringgit(1.0)), Ringgit(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Ringgit(1.0).max(Ringgit(2.0)), Ringgit(2.0));
        assert_eq!(Ringgit(2.0).max(Ringgit(1.0)), Ringgit(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Ringgit(1.0).clamp(Ringgit(2.0), Ringgit(3.0)), Ringgit(2.0));
        assert_eq!(Ringgit(4.0).clamp(Ringgit(2.0), Ringgit(3.0)), Ringgit(3.0));
        assert_eq!(Ringgit(2.0).clamp(Ringgit(1.0), Ringgit(3.0)), Ringgit(2.0));
    }

    #[test]
    fn test_scalar_ops() {
        assert_abs_diff_eq!((Ringgit(200.0) * 12.0).0, 2400.0);
        assert_abs_diff_eq!((KilowattHours(4800.0) / 12.0).0, 400.0);
        assert_abs_diff_eq!(Ringgit(21000.0) / Ringgit(2400.0), 8.75);
    }

    #[test]
    fn test_dimensions() {
        let energy: KilowattHours = Kilowatts(2.0) * Hours(3.0);
        assert_abs_diff_eq!(energy.0, 6.0);
        let power: Kilowatts = energy / Hours(1.5);
        assert_abs_diff_eq!(power.0, 4.0);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(Ringgit(21000.0).to_string(), "21000.00 MYR");
        assert_eq!(Kilowatts(10.0 / 3.0).to_string(), "3.33 kW");
        assert_eq!(KilowattHours(4866.666).to_string(), "4867 kWh");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0.5".parse::<Ringgit>().unwrap(), Ringgit(0.5));
        assert!("half".parse::<Ringgit>().is_err());
    }
}
