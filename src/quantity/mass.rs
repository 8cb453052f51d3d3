quantity!(Kilograms, via: f64, suffix: "kg", precision: 2);
quantity!(Tonnes, via: f64, suffix: "t", precision: 2);
