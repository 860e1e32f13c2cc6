use crate::error::DispatchError;

/// 1-based stop index along the route.
pub type Point = usize;

/// Linear route of points joined by segments.
///
/// Segment `i` (0-based) joins point `i + 1` and point `i + 2` and carries a
/// distance and a travel time in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    distances: Vec<u64>,
    travel_times: Vec<u64>,
}

impl Route {
    pub fn new(distances: Vec<u64>, travel_times: Vec<u64>) -> Result<Route, DispatchError> {
        if distances.len() != travel_times.len() {
            return Err(DispatchError::RouteLengthMismatch {
                distances: distances.len(),
                travel_times: travel_times.len(),
            });
        }
        Ok(Route {
            distances,
            travel_times,
        })
    }

    pub fn points(&self) -> usize {
        self.distances.len() + 1
    }

    pub fn check_point(&self, point: Point) -> Result<Point, DispatchError> {
        if point == 0 || point > self.points() {
            return Err(DispatchError::PointOutOfRange {
                point,
                points: self.points(),
            });
        }
        Ok(point)
    }

    pub fn distance_between(&self, a: Point, b: Point) -> Result<u64, DispatchError> {
        self.sum_segments(&self.distances, a, b)?
            .ok_or(DispatchError::Overflow("distance"))
    }

    pub fn time_between(&self, a: Point, b: Point) -> Result<u64, DispatchError> {
        self.sum_segments(&self.travel_times, a, b)?
            .ok_or(DispatchError::Overflow("travel time"))
    }

    fn sum_segments(&self, segments: &[u64], a: Point, b: Point) -> Result<Option<u64>, DispatchError> {
        let (a, b) = (self.check_point(a)?, self.check_point(b)?);
        let (from, to) = (a.min(b), a.max(b));
        Ok(segments[from - 1..to - 1]
            .iter()
            .try_fold(0u64, |acc, s| acc.checked_add(*s)))
    }
}
