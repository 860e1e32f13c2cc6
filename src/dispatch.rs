use crate::error::DispatchError;
use crate::fare::FarePolicy;
use crate::fleet::Fleet;
use crate::route::{Point, Route};
use crate::taxi::{Taxi, TaxiId};
use crate::time::Time;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;


pub type CustomerId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Booking {
    pub customer_id: CustomerId,
    pub pickup: Point,
    pub drop: Point,
    pub time: Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Assigned {
        customer_id: CustomerId,
        taxi_id: TaxiId,
        fare: u64,
        drop_time: Time,
    },
    Rejected {
        customer_id: CustomerId,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Assigned {
                customer_id,
                taxi_id,
                fare,
                drop_time,
            } => write!(f, "{} Taxi-{} {} {}", customer_id, taxi_id, fare, drop_time),
            Outcome::Rejected { customer_id } => write!(f, "{} REJECTED", customer_id),
        }
    }
}

/// Winning taxi for a pickup, together with the distance it has to cover to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub taxi_id: TaxiId,
    pub pickup_distance: u64,
}

/// Picks the available taxi closest to `pickup`, preferring lower revenue and
/// then lower id on ties. Taxis further than `max_pickup_distance` are skipped.
///
/// The ordering is total over distinct ids, so the order of `taxis` never
/// changes the result.
pub fn choose_taxi<'a>(
    route: &Route,
    taxis: impl IntoIterator<Item = &'a Taxi>,
    pickup: Point,
    max_pickup_distance: u64,
) -> Result<Option<Candidate>, DispatchError> {
    let mut best: Option<(u64, u64, TaxiId)> = None;
    for taxi in taxis.into_iter().filter(|t| t.is_available()) {
        let distance = route.distance_between(taxi.current_location, pickup)?;
        if distance > max_pickup_distance {
            continue;
        }
        let key = (distance, taxi.revenue, taxi.id);
        if best.is_none_or(|b| key < b) {
            best = Some(key);
        }
    }
    Ok(best.map(|(pickup_distance, _, taxi_id)| Candidate {
        taxi_id,
        pickup_distance,
    }))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub assigned: usize,
    pub rejected: usize,
    pub revenue: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bookings: {} assigned, {} rejected, revenue {}",
            self.assigned + self.rejected,
            self.assigned,
            self.rejected,
            self.revenue
        )
    }
}

pub struct Dispatcher {
    route: Route,
    fares: FarePolicy,
    max_pickup_distance: u64,
    fleet: Fleet,
    history: Vec<Outcome>,
}

impl Dispatcher {
    pub fn new(route: Route, fares: FarePolicy, max_pickup_distance: u64, fleet: Fleet) -> Dispatcher {
        Dispatcher {
            route,
            fares,
            max_pickup_distance,
            fleet,
            history: vec![],
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn summary(&self) -> RunSummary {
        let rejected = self.history.iter().filter(|o| o.is_rejected()).count();
        RunSummary {
            assigned: self.history.len() - rejected,
            rejected,
            revenue: self.fleet.total_revenue(),
        }
    }

    /// Handles a single booking against the current fleet state.
    ///
    /// Both booking points are validated before the fleet is touched. Fare,
    /// drop time and revenue are checked before the winner is mutated, so an
    /// overflow leaves no assignment behind and nothing in the history.
    pub fn dispatch(&mut self, booking: &Booking) -> Result<Outcome, DispatchError> {
        self.route.check_point(booking.pickup)?;
        self.route.check_point(booking.drop)?;

        let freed = self.fleet.refresh_availability(booking.time);
        if freed > 0 {
            log::debug!("{} taxis became available at {}", freed, booking.time);
        }

        let outcome = match choose_taxi(
            &self.route,
            self.fleet.taxis(),
            booking.pickup,
            self.max_pickup_distance,
        )? {
            None => {
                log::debug!(
                    "{}: no taxi within {} of point {}",
                    booking.customer_id,
                    self.max_pickup_distance,
                    booking.pickup
                );
                Outcome::Rejected {
                    customer_id: booking.customer_id.clone(),
                }
            }
            Some(candidate) => self.assign(booking, candidate)?,
        };

        self.history.push(outcome.clone());
        Ok(outcome)
    }

    pub fn run<'a>(
        &mut self,
        bookings: impl IntoIterator<Item = &'a Booking>,
    ) -> Result<Vec<Outcome>, DispatchError> {
        bookings.into_iter().map(|b| self.dispatch(b)).collect()
    }

    fn assign(&mut self, booking: &Booking, candidate: Candidate) -> Result<Outcome, DispatchError> {
        let location = self
            .fleet
            .get(candidate.taxi_id)
            .map(|t| t.current_location)
            .ok_or(DispatchError::UnknownTaxi(candidate.taxi_id))?;

        let trip_distance = self.route.distance_between(booking.pickup, booking.drop)?;
        let fare = self.fares.fare(trip_distance)?;
        let travel_time = self
            .route
            .time_between(location, booking.pickup)?
            .checked_add(self.route.time_between(booking.pickup, booking.drop)?)
            .ok_or(DispatchError::Overflow("travel time"))?;
        let drop_time = booking.time + travel_time;

        log::debug!(
            "{}: Taxi-{} at point {} ({} away), trip {} for {} arriving {}",
            booking.customer_id,
            candidate.taxi_id,
            location,
            candidate.pickup_distance,
            trip_distance,
            fare,
            drop_time
        );

        self.fleet.assign(candidate.taxi_id, booking.drop, fare, drop_time)?;

        Ok(Outcome::Assigned {
            customer_id: booking.customer_id.clone(),
            taxi_id: candidate.taxi_id,
            fare,
            drop_time,
        })
    }
}
