use crate::dispatch::{Booking, Dispatcher};
use crate::fare::FarePolicy;
use crate::fleet::Fleet;
use crate::route::{Point, Route};
use crate::taxi::TaxiId;
use crate::time::Time;
use proptest::prelude::*;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn time(s: &str) -> Time {
    s.parse().unwrap()
}

pub fn booking(customer_id: &str, pickup: Point, drop: Point, at: &str) -> Booking {
    Booking {
        customer_id: id(customer_id),
        pickup,
        drop,
        time: time(at),
    }
}

/// Moves an idle taxi to `location` with the given revenue, leaving it available.
pub fn park(fleet: &mut Fleet, taxi_id: TaxiId, location: Point, revenue: u64) {
    fleet.assign(taxi_id, location, revenue, Time::MIDNIGHT).unwrap();
    fleet.refresh_availability(Time::MIDNIGHT);
}

pub fn dispatcher(
    fleet: Fleet,
    distances: Vec<u64>,
    travel_times: Vec<u64>,
    fares: FarePolicy,
    max_pickup_distance: u64,
) -> Dispatcher {
    Dispatcher::new(
        Route::new(distances, travel_times).unwrap(),
        fares,
        max_pickup_distance,
        fleet,
    )
}

/// Five points, every segment 5 long and 10 minutes wide.
pub fn uniform_dispatcher(fleet: Fleet, max_pickup_distance: u64) -> Dispatcher {
    dispatcher(
        fleet,
        vec![5, 5, 5, 5],
        vec![10, 10, 10, 10],
        FarePolicy::new(100, 5, 10),
        max_pickup_distance,
    )
}

pub fn lines(dispatcher: &mut Dispatcher, bookings: &[Booking]) -> Vec<String> {
    dispatcher
        .run(bookings)
        .unwrap()
        .iter()
        .map(|o| o.to_string())
        .collect()
}

pub const POINTS: usize = 6;

pub fn arb_route() -> impl Strategy<Value = Route> {
    prop::collection::vec((0..20u64, 0..60u64), POINTS - 1).prop_map(|segments| {
        let (distances, times) = segments.into_iter().unzip();
        Route::new(distances, times).unwrap()
    })
}

pub fn arb_booking() -> impl Strategy<Value = Booking> {
    (0..1000u32, 1..=POINTS, 1..=POINTS, 0..1440u64).prop_map(|(c, pickup, drop, minutes)| Booking {
        customer_id: Arc::from(format!("C{}", c)),
        pickup,
        drop,
        time: Time::from_minutes(minutes),
    })
}

pub fn arb_fleet() -> impl Strategy<Value = Fleet> {
    prop::collection::vec((1..=POINTS, 0..500u64), 1..8).prop_map(|taxis| {
        let mut fleet = Fleet::new(taxis.len() as u32);
        for (i, (location, revenue)) in taxis.into_iter().enumerate() {
            park(&mut fleet, i as TaxiId + 1, location, revenue);
        }
        fleet
    })
}
