quantity!(Percentage, via: f64, suffix: "%", precision: 1);

impl Percentage {
    pub const FULL: Self = Self(100.0);

    /// Convert `0.0..=1.0` into the percentage.
    pub const fn from_ratio(ratio: f64) -> Self {
        Self(ratio * 100.0)
    }
}
