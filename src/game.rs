use rand::Rng;

use config::config;
use mechanic;
use models::*;

/// Whole-game state, threaded as a value through `step` and the pointer
/// handlers. `game_over` is a one-way latch: once set, every transition
/// returns the state unchanged until an external reset replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub creatures: Vec<Creature>,
    pub dragged: Option<CreatureId>,
    pub pointer_down: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> GameState {
        GameState {
            creatures: (0..config().population_count as CreatureId)
                .map(|id| Creature::spawn(id, rng))
                .collect(),
            dragged: None,
            pointer_down: false,
            game_over: false,
        }
    }

    /// One frame: advance everything except the dragged creature, then
    /// re-check for the terminal condition.
    pub fn step<R: Rng>(self, rng: &mut R) -> GameState {
        if self.game_over {
            return self;
        }
        let creatures = mechanic::advance(self.creatures, rng);
        let game_over = no_healthy_left(&creatures);
        GameState {
            creatures,
            game_over,
            ..self
        }
    }

    /// Grabs the first creature (in population order) covering `pos`.
    /// Ties between overlapping creatures go to the earlier one, not the
    /// nearer one. A miss changes nothing.
    pub fn pointer_down(mut self, pos: Point) -> GameState {
        if self.game_over {
            return self;
        }
        if let Some(i) = self.creatures.iter().position(|me| me.covers(pos)) {
            self.pointer_down = true;
            self.dragged = Some(self.creatures[i].id());
            self.creatures[i].set_protected(true);
        }
        self
    }

    /// Teleports the dragged creature to `pos`. No clamp: a drag may place
    /// it outside the arena.
    pub fn pointer_move(mut self, pos: Point) -> GameState {
        if self.game_over || !self.pointer_down {
            return self;
        }
        if let Some(id) = self.dragged {
            if let Some(me) = self.creatures.iter_mut().find(|me| me.id() == id) {
                me.set_point(pos);
            }
        }
        self
    }

    /// Ends the drag and applies the hospital cure: every Sick creature
    /// resting in the hospital band turns Healthy. Berserk and Mean are not
    /// curable. Runs even when nothing was being dragged.
    pub fn pointer_up(mut self) -> GameState {
        if self.game_over {
            return self;
        }
        self.pointer_down = false;
        self.dragged = None;
        for me in self.creatures.iter_mut() {
            me.set_protected(false);
            if me.health() == HealthState::Sick && me.in_hospital() {
                me.set_health(HealthState::Healthy);
            }
        }
        self
    }
}

fn no_healthy_left(creatures: &[Creature]) -> bool {
    !creatures.iter().any(|me| me.health() == HealthState::Healthy)
}
