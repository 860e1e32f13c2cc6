use crate::error::DispatchError;
use crate::route::Point;
use crate::taxi::{Taxi, TaxiId};
use crate::time::Time;

/// Taxis of a run, stored in id order so that taxi `n` sits at index `n - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    taxis: Vec<Taxi>,
}

impl Fleet {
    pub fn new(size: u32) -> Fleet {
        Fleet {
            taxis: (1..=size).map(Taxi::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.taxis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxis.is_empty()
    }

    pub fn taxis(&self) -> &[Taxi] {
        &self.taxis
    }

    pub fn get(&self, id: TaxiId) -> Option<&Taxi> {
        self.index_of(id).map(|i| &self.taxis[i])
    }

    pub fn available(&self) -> impl Iterator<Item = &Taxi> {
        self.taxis.iter().filter(|t| t.is_available())
    }

    pub fn refresh_availability(&mut self, at: Time) -> usize {
        let mut freed = 0;
        for taxi in self.taxis.iter_mut().filter(|t| !t.is_available()) {
            taxi.refresh(at);
            if taxi.is_available() {
                freed += 1;
            }
        }
        freed
    }

    pub fn assign(
        &mut self,
        id: TaxiId,
        drop_point: Point,
        fare: u64,
        drop_time: Time,
    ) -> Result<&Taxi, DispatchError> {
        let idx = self.index_of(id).ok_or(DispatchError::UnknownTaxi(id))?;
        let taxi = &mut self.taxis[idx];
        taxi.assign(drop_point, fare, drop_time)?;
        Ok(taxi)
    }

    pub fn total_revenue(&self) -> u64 {
        self.taxis.iter().fold(0, |total, t| total.saturating_add(t.revenue))
    }

    fn index_of(&self, id: TaxiId) -> Option<usize> {
        let idx = (id as usize).checked_sub(1)?;
        (idx < self.taxis.len()).then_some(idx)
    }
}
