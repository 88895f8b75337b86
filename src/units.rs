//! Unit resolver: transport units needed to move a shipment.

/// Floor applied to a capacity before dividing by it.
pub const CAPACITY_EPSILON: f64 = 0.0001;

/// Whole transport units derived from a scenario's volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipmentUnits {
    pub containers: u64,
    pub trucks: u64,
}

/// Units of `capacity_mt` needed to carry `volume_mt`, rounding any
/// remainder up to a full unit.
///
/// A zero or negative capacity is floored to [`CAPACITY_EPSILON`]. Zero,
/// negative or NaN volume yields zero units.
#[inline]
pub fn units_needed(volume_mt: f64, capacity_mt: f64) -> u64 {
    // `as` saturates: negatives and NaN land on 0.
    (volume_mt / capacity_mt.max(CAPACITY_EPSILON)).ceil() as u64
}

/// Resolve container and truck counts for one shipment.
pub fn resolve(volume_mt: f64, mt_per_container: f64, mt_per_truck: f64) -> ShipmentUnits {
    ShipmentUnits {
        containers: units_needed(volume_mt, mt_per_container),
        trucks: units_needed(volume_mt, mt_per_truck),
    }
}
