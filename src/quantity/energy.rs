use crate::quantity::{currency::Ringgit, rate::KilowattHourRate};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 0);

implement_mul!(KilowattHours, KilowattHourRate, Ringgit);
implement_div!(Ringgit, KilowattHourRate, KilowattHours);
