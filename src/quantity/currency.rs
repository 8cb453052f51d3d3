quantity!(
    /// Malaysian ringgit, the only currency the estimator deals in.
    Ringgit, via: f64, suffix: "MYR", precision: 2
);
