//! In-memory car store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::car::Car;
use super::seed::seed_cars;

/// Ordered, append-only sequence of cars held in process memory.
///
/// Readers share the lock; `append` takes it exclusively so that concurrent
/// creates land one after another in arrival order.
#[derive(Debug, Default)]
pub struct CarStore {
    cars: RwLock<Vec<Car>>,
}

impl CarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup seed list.
    pub fn seeded() -> Self {
        Self::from_cars(seed_cars())
    }

    pub fn from_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: RwLock::new(cars),
        }
    }

    /// Snapshot of every car, in insertion order.
    pub fn list(&self) -> Vec<Car> {
        self.read().clone()
    }

    /// Cars whose make equals `make` exactly.
    pub fn filter_by_make(&self, make: &str) -> Vec<Car> {
        self.read()
            .iter()
            .filter(|car| car.has_make(make))
            .cloned()
            .collect()
    }

    /// First car whose id renders as `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Car> {
        self.read().iter().find(|car| car.id.matches(id)).cloned()
    }

    /// Append a car to the end of the sequence. Duplicate ids are accepted.
    pub fn append(&self, car: Car) {
        let mut cars = self.write();
        cars.push(car);
        tracing::debug!(total = cars.len(), "Car appended to store");
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Car>> {
        self.cars.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Car>> {
        self.cars.write().unwrap_or_else(PoisonError::into_inner)
    }
}
