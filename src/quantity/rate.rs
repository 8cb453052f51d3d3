quantity!(
    /// Grid tariff, ringgit per kilowatt-hour.
    KilowattHourRate, via: f64, suffix: "MYR/kWh", precision: 2
);
