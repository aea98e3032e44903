use std::f64::consts::PI;

use rand::Rng;

use config::config;
use models::*;

pub type CreatureId = u64;

/// Contagion progression. The only way back to `Healthy` is the hospital
/// cure, and only from `Sick`; `Berserk` and `Mean` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Sick,
    Berserk,
    Mean,
}

impl HealthState {
    pub fn is_infectious(self) -> bool {
        self != HealthState::Healthy
    }

    /// Render color contract with the external canvas.
    pub fn color(self) -> &'static str {
        match self {
            HealthState::Healthy => "black",
            HealthState::Sick => "red",
            HealthState::Berserk => "orange",
            HealthState::Mean => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id_: CreatureId,
    pub point_: Point,
    pub v_: Point,
    pub health_: HealthState,
    pub r_: f64,
    pub protected_: bool,
}

impl HasPoint for Creature {
    fn point(&self) -> Point {
        self.point_
    }
}

impl Circle for Creature {
    fn r(&self) -> f64 {
        self.r_
    }
}

impl Creature {
    /// Spawns a healthy creature at a random position clear of the river
    /// and hospital bands, with a unit-speed velocity at a random angle.
    pub fn spawn<R: Rng>(id: CreatureId, rng: &mut R) -> Creature {
        let r = config().creature_radius;
        let min_y = config().river_height + r;
        let max_y = config().game_height as f64 - config().hospital_height - r;
        Creature {
            id_: id,
            point_: Point::new(
                rng.gen_range(r, config().game_width as f64 - r),
                rng.gen_range(min_y, max_y),
            ),
            v_: Point::from_polar(1.0, rng.gen_range(0.0, 2.0 * PI)),
            health_: HealthState::Healthy,
            r_: r,
            protected_: false,
        }
    }

    pub fn id(&self) -> CreatureId {
        self.id_
    }

    pub fn health(&self) -> HealthState {
        self.health_
    }

    pub fn set_health(&mut self, health: HealthState) {
        self.health_ = health;
    }

    pub fn v(&self) -> Point {
        self.v_
    }

    pub fn set_v(&mut self, v: Point) {
        self.v_ = v;
    }

    pub fn set_point(&mut self, point: Point) {
        self.point_ = point;
    }

    pub fn is_protected(&self) -> bool {
        self.protected_
    }

    pub fn set_protected(&mut self, protected: bool) {
        self.protected_ = protected;
    }

    pub fn covers(&self, point: Point) -> bool {
        self.point().qdist(point) < self.r().powi(2)
    }

    pub fn touches(&self, other: &Creature) -> bool {
        let sum_r = self.r() + other.r();
        self.point().qdist(other.point()) < sum_r.powi(2)
    }

    pub fn in_river(&self) -> bool {
        self.y() < config().river_height
    }

    pub fn in_hospital(&self) -> bool {
        self.y() > config().game_height as f64 - config().hospital_height
    }
}
