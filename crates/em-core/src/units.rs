// em-core/src/units.rs

use uom::si::f64::Energy as UomEnergy;

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;

#[inline]
pub fn wh(v: f64) -> Energy {
    use uom::si::energy::watt_hour;
    Energy::new::<watt_hour>(v)
}
