use rand::Rng;

use config::config;
use models::*;

/// One simulation tick over the population. Creatures under drag protection
/// are skipped by every pass: they do not move, cannot be infected, and do
/// not count as infectious sources.
///
/// Passes 1-3 (move, river exposure, disease progression) are per-creature;
/// contagion runs last over the post-progression snapshot of the whole set.
pub fn advance<R: Rng>(mut creatures: Vec<Creature>, rng: &mut R) -> Vec<Creature> {
    for me in creatures.iter_mut().filter(|me| !me.is_protected()) {
        move_creature(me);
        expose_to_river(me);
        progress_disease(me, rng);
    }
    spread_contagion(&mut creatures, rng);
    creatures
}

fn move_creature(me: &mut Creature) {
    let mut v = me.v();
    let new_point = me.point() + v;

    // The wall check runs on the post-move position and never clamps it, so
    // a creature can overlap a wall by up to one tick's travel before its
    // velocity flips. Kept as-is.
    let min_x = me.r();
    let max_x = config().game_width as f64 - me.r();
    if !(min_x <= new_point.x && new_point.x <= max_x) {
        v.x = -v.x;
    }

    let min_y = me.r();
    let max_y = config().game_height as f64 - me.r();
    if !(min_y <= new_point.y && new_point.y <= max_y) {
        v.y = -v.y;
    }

    me.set_point(new_point);
    me.set_v(v);
}

fn expose_to_river(me: &mut Creature) {
    if me.in_river() {
        // Unconditional: an advanced-stage creature wandering back into the
        // river is demoted to Sick.
        me.set_health(HealthState::Sick);
    }
}

fn progress_disease<R: Rng>(me: &mut Creature, rng: &mut R) {
    if me.health() != HealthState::Sick {
        return;
    }
    let roll = rng.gen::<f64>();
    if roll < config().berserk_chance {
        me.set_health(HealthState::Berserk);
    } else if roll < config().berserk_chance + config().mean_chance {
        me.set_health(HealthState::Mean);
    }
}

fn spread_contagion<R: Rng>(creatures: &mut [Creature], rng: &mut R) {
    let infectious: Vec<Creature> = creatures
        .iter()
        .filter(|me| !me.is_protected() && me.health().is_infectious())
        .cloned()
        .collect();
    for me in creatures.iter_mut() {
        if me.is_protected() || me.health() != HealthState::Healthy {
            continue;
        }
        for other in infectious.iter() {
            // The roll is only consumed for pairs within contact range, so a
            // seeded rng replays a run exactly.
            if me.touches(other) && rng.gen::<f64>() < config().infection_chance {
                me.set_health(HealthState::Sick);
                break;
            }
        }
    }
}
