pub mod stack;

use crate::error::{LaneError, Result};
use stack::BoundedStack;

pub type CarId = i32;

/// Single-lane LIFO parking registry. Position 1 is the bottom (oldest) slot,
/// position `len()` the most recently admitted car. Duplicate IDs are allowed;
/// retrieval removes the match nearest the top.
#[derive(Debug, Clone)]
pub struct ParkingLane {
    cars: BoundedStack<CarId>,
}

impl ParkingLane {
    pub fn new(capacity: usize) -> Self {
        Self {
            cars: BoundedStack::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cars.capacity()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cars.is_full()
    }

    /// Parks `car` on top of the lane. A full lane rejects the car and stays
    /// unchanged.
    pub fn admit(&mut self, car: CarId) -> Result<()> {
        self.cars.push(car).map_err(|_| LaneError::Full {
            capacity: self.cars.capacity(),
        })
    }

    /// Removes and returns the top car, `None` on an empty lane.
    pub fn release_top(&mut self) -> Option<CarId> {
        self.cars.pop()
    }

    /// Retrieves `car` from anywhere in the lane via two-stack transfer:
    /// unload cars from the top until the target surfaces, discard it, then
    /// reload the unloaded cars in reverse so their relative order survives.
    ///
    /// The auxiliary never holds more than `len - 1` cars, so the reload
    /// cannot hit the capacity bound. When the target is absent the lane is
    /// fully unloaded and reloaded, which restores it exactly.
    pub fn retrieve(&mut self, car: CarId) -> Result<()> {
        let mut aux: Vec<CarId> = Vec::with_capacity(self.cars.len());
        let mut found = false;
        while let Some(parked) = self.cars.pop() {
            if parked == car {
                found = true;
                break;
            }
            aux.push(parked);
        }
        while let Some(parked) = aux.pop() {
            let reloaded = self.cars.push(parked);
            debug_assert!(reloaded.is_ok());
        }
        if found {
            Ok(())
        } else {
            Err(LaneError::NotFound { car })
        }
    }

    /// Parked cars top to bottom, non-mutating.
    pub fn peek_all(&self) -> Vec<CarId> {
        self.cars.iter_top_down().copied().collect()
    }

    /// Exactly `capacity()` entries, top slot first: `None` for unused
    /// capacity, then the parked cars top to bottom. Feeds the display layer.
    pub fn slots_top_down(&self) -> Vec<Option<CarId>> {
        let vacant = self.cars.capacity() - self.cars.len();
        std::iter::repeat(None)
            .take(vacant)
            .chain(self.cars.iter_top_down().map(|car| Some(*car)))
            .collect()
    }
}
