use crate::route::Point;
use crate::taxi::TaxiId;
use crate::time::TimeParseError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("point {point} is outside the route 1..={points}")]
    PointOutOfRange { point: Point, points: usize },
    #[error("route has {distances} distances but {travel_times} travel times")]
    RouteLengthMismatch {
        distances: usize,
        travel_times: usize,
    },
    #[error("route needs at least one point")]
    EmptyRoute,
    #[error("unknown taxi id {0}")]
    UnknownTaxi(TaxiId),
    #[error("{0} does not fit in 64 bits")]
    Overflow(&'static str),
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
}
