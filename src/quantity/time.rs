quantity!(Hours, via: f64, suffix: "h", precision: 2);
quantity!(Years, via: f64, suffix: "years", precision: 1);
