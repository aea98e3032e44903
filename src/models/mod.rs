pub use self::creature::{Creature, CreatureId, HealthState};
pub use self::point::{HasPoint, Point};

mod creature;
mod point;

pub trait Circle: HasPoint {
    fn r(&self) -> f64;
}
