//! SI quantities for reporting vessel runs in nautical units.

pub use uom::si::f64::{Length, Mass, Velocity};

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn to_knots(v: Velocity) -> f64 {
    use uom::si::velocity::knot;
    v.get::<knot>()
}

#[inline]
pub fn to_nautical_miles(l: Length) -> f64 {
    use uom::si::length::nautical_mile;
    l.get::<nautical_mile>()
}

/// Kinetic energy (J) of a load moving at `speed`.
pub fn kinetic_energy_j(mass: Mass, speed: Velocity) -> f64 {
    use uom::si::energy::joule;
    let energy: uom::si::f64::Energy = mass * speed * speed * 0.5;
    energy.get::<joule>()
}
