use crate::error::DispatchError;
use crate::route::Point;
use crate::time::Time;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

pub type TaxiId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxiStatus {
    Available,
    Busy,
}

impl fmt::Display for TaxiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TaxiStatus::Available => write!(f, "available"),
            TaxiStatus::Busy => write!(f, "busy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Taxi {
    #[tabled(rename = "taxi", display = "display_taxi_id")]
    pub id: TaxiId,
    #[tabled(rename = "location")]
    pub current_location: Point,
    pub status: TaxiStatus,
    #[tabled(rename = "free at")]
    pub next_available_time: Time,
    pub revenue: u64,
}

fn display_taxi_id(id: &TaxiId) -> String {
    format!("Taxi-{}", id)
}

impl Taxi {
    pub fn new(id: TaxiId) -> Taxi {
        Taxi {
            id,
            current_location: 1,
            status: TaxiStatus::Available,
            next_available_time: Time::MIDNIGHT,
            revenue: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == TaxiStatus::Available
    }

    /// Frees the taxi once the clock has reached the end of its last trip.
    pub fn refresh(&mut self, at: Time) {
        if !self.is_available() && self.next_available_time.compare(&at) != Ordering::Greater {
            self.status = TaxiStatus::Available;
        }
    }

    /// Leaves the taxi untouched when the revenue would overflow.
    pub fn assign(&mut self, drop_point: Point, fare: u64, drop_time: Time) -> Result<(), DispatchError> {
        self.revenue = self
            .revenue
            .checked_add(fare)
            .ok_or(DispatchError::Overflow("revenue"))?;
        self.current_location = drop_point;
        self.next_available_time = drop_time;
        self.status = TaxiStatus::Busy;
        Ok(())
    }
}
