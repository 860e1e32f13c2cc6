use crate::dispatch::{Booking, Dispatcher};
use crate::error::DispatchError;
use crate::fare::FarePolicy;
use crate::fleet::Fleet;
use crate::route::Route;
use crate::time::Time;
use clap::ValueEnum;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use std::sync::Arc;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("input ended while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("expected a non-negative integer for {field}, found '{token}'")]
    InvalidNumber { field: &'static str, token: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Whitespace separated token stream
    #[default]
    Tokens,
    /// JSON scenario document
    Json,
}

/// Everything a run needs: fleet size, route, fare policy and the bookings in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub taxis: u32,
    pub route: Route,
    pub fares: FarePolicy,
    pub max_pickup_distance: u64,
    pub bookings: Vec<Booking>,
}

impl Scenario {
    pub fn load(path: Option<&Path>, format: InputFormat) -> Result<Self, InputError> {
        let data = match path {
            Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        match format {
            InputFormat::Tokens => Scenario::parse_tokens(&data),
            InputFormat::Json => Scenario::parse_json(&data),
        }
    }

    pub fn parse_tokens(input: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens(input.split_whitespace());

        let taxis = tokens.number("numberOfTaxis")?;
        let points: usize = tokens.number("numberOfPoints")?;
        if points == 0 {
            return Err(DispatchError::EmptyRoute.into());
        }
        let distances = (1..points)
            .map(|_| tokens.number("distances"))
            .collect::<Result<Vec<u64>, _>>()?;
        let travel_times = (1..points)
            .map(|_| tokens.number("travelTimes"))
            .collect::<Result<Vec<u64>, _>>()?;

        let fares = FarePolicy::new(
            tokens.number("baseFare")?,
            tokens.number("baseDistance")?,
            tokens.number("farePerKm")?,
        );
        let max_pickup_distance = tokens.number("maxPickupDistance")?;
        let count: usize = tokens.number("numberOfBookings")?;

        let bookings = (0..count)
            .map(|_| -> Result<Booking, InputError> {
                Ok(Booking {
                    customer_id: Arc::from(tokens.token("customerId")?),
                    pickup: tokens.number("pickupPoint")?,
                    drop: tokens.number("dropPoint")?,
                    time: tokens
                        .token("bookingTime")?
                        .parse::<Time>()
                        .map_err(DispatchError::from)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Scenario {
            taxis,
            route: Route::new(distances, travel_times)?,
            fares,
            max_pickup_distance,
            bookings,
        }
        .validated()
    }

    pub fn parse_json(input: &str) -> Result<Self, InputError> {
        #[derive(Deserialize)]
        struct RawData {
            taxis: u32,
            distances: Vec<u64>,
            travel_times: Vec<u64>,
            fare: FarePolicy,
            max_pickup_distance: u64,
            #[serde(default)]
            bookings: Vec<Booking>,
        }
        let raw: RawData = serde_json::from_str(input)?;

        Scenario {
            taxis: raw.taxis,
            route: Route::new(raw.distances, raw.travel_times)?,
            fares: raw.fare,
            max_pickup_distance: raw.max_pickup_distance,
            bookings: raw.bookings,
        }
        .validated()
    }

    /// Rejects bookings that reference points off the route before anything is dispatched.
    fn validated(self) -> Result<Self, InputError> {
        for booking in &self.bookings {
            self.route.check_point(booking.pickup)?;
            self.route.check_point(booking.drop)?;
        }
        Ok(self)
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(
            self.route.clone(),
            self.fares,
            self.max_pickup_distance,
            Fleet::new(self.taxis),
        )
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn token(&mut self, field: &'static str) -> Result<&'a str, InputError> {
        self.0.next().ok_or(InputError::UnexpectedEnd(field))
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let token = self.token(field)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }
}
