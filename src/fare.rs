use crate::error::DispatchError;
use serde::Deserialize;

/// Flat fare up to `base_distance`, then `per_km` for every unit beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FarePolicy {
    pub base_fare: u64,
    pub base_distance: u64,
    pub per_km: u64,
}

impl FarePolicy {
    pub fn new(base_fare: u64, base_distance: u64, per_km: u64) -> FarePolicy {
        FarePolicy {
            base_fare,
            base_distance,
            per_km,
        }
    }

    pub fn fare(&self, distance: u64) -> Result<u64, DispatchError> {
        fare(distance, self.base_fare, self.base_distance, self.per_km)
            .ok_or(DispatchError::Overflow("fare"))
    }
}

/// `None` when the fare overflows `u64`.
pub fn fare(distance: u64, base_fare: u64, base_distance: u64, per_km: u64) -> Option<u64> {
    if distance <= base_distance {
        Some(base_fare)
    } else {
        (distance - base_distance)
            .checked_mul(per_km)
            .and_then(|extra| extra.checked_add(base_fare))
    }
}
