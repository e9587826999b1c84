//! Records loaded into the store at startup.

use super::car::{Car, CarId};

pub fn seed_cars() -> Vec<Car> {
    vec![
        Car::new(CarId::number(0), Some("toyota"), "sedan", "prius", 22),
        Car::new(CarId::number(1), Some("toyota"), "suv", "highlander", 33),
        Car::new(CarId::number(2), Some("toyota"), "truck", "tacoma", 27),
        Car::new(CarId::number(3), Some("toyota"), "sedan", "camry", 22),
        Car::new(CarId::number(4), Some("honda"), "sedan", "accord", 22),
        Car::new(CarId::number(5), Some("honda"), "sedan", "civic", 22),
        Car::new(CarId::number(6), Some("ford"), "truck", "f-150", 30),
    ]
}
