use std::io;

use rand;
use serde_json;

use config::{init_config, Config};
use game::GameState;
use models::{Circle, HasPoint, Point};

/// Line-protocol adapter: the first stdin line is the config object, each
/// following line one event. Pointer events mutate the controller state
/// synchronously; a tick event runs one simulation step and prints the
/// drawable scene. EOF ends the run.
pub fn run() {
    init_config(read_config());
    let mut rng = rand::thread_rng();
    let mut state = GameState::new(&mut rng);
    while let Some(event) = read_event() {
        state = match event.t.as_ref() {
            "D" => state.pointer_down(event_point(&event)),
            "M" => state.pointer_move(event_point(&event)),
            "U" => state.pointer_up(),
            "T" => {
                #[cfg(feature = "debug")]
                let was_over = state.game_over;
                let state = state.step(&mut rng);
                #[cfg(feature = "debug")]
                {
                    if state.game_over && !was_over {
                        debug!("game over: no healthy creatures left");
                    }
                }
                print_scene(&state);
                state
            }
            _ => panic!("unknown event type"),
        };
    }
}

fn read_config() -> Config {
    Config::from_json(read_json().expect("EOF"))
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Event {
    t: String,
    x: Option<f64>,
    y: Option<f64>,
}

fn event_point(event: &Event) -> Point {
    Point::new(
        event.x.expect("pointer event has no x"),
        event.y.expect("pointer event has no y"),
    )
}

fn read_event() -> Option<Event> {
    Some(serde_json::from_value(read_json()?).expect("event parsing failed"))
}

fn read_json() -> Option<serde_json::Value> {
    serde_json::from_str(&read_line()?).expect("JSON parsing failed")
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    let n = io::stdin().read_line(&mut line).expect("read line failed");
    if n == 0 { None } else { Some(line) }
}

fn print_scene(state: &GameState) {
    let scene = Scene {
        creatures: state
            .creatures
            .iter()
            .map(|me| DrawCreature {
                x: me.x(),
                y: me.y(),
                r: me.r(),
                c: me.health().color(),
            })
            .collect(),
        game_over: state.game_over,
    };
    println!(
        "{}",
        serde_json::to_string(&scene).expect("scene serialization failed")
    );
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Scene {
    creatures: Vec<DrawCreature>,
    game_over: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DrawCreature {
    x: f64,
    y: f64,
    r: f64,
    c: &'static str,
}

#[cfg(test)]
mod tests {
    use serde_json;

    use super::Event;

    #[test]
    fn pointer_events_parse() {
        let event: Event =
            serde_json::from_value(json!({"T": "D", "X": 12.5, "Y": 40.0})).unwrap();
        assert_eq!(event.t, "D");
        assert_eq!(event.x, Some(12.5));
        assert_eq!(event.y, Some(40.0));
    }

    #[test]
    fn tick_event_needs_no_coordinates() {
        let event: Event = serde_json::from_value(json!({"T": "T"})).unwrap();
        assert_eq!(event.t, "T");
        assert_eq!(event.x, None);
    }
}
