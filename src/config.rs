use std::sync::{Mutex, MutexGuard};

use lazy_static;
use serde_json;

pub fn config() -> &'static Config {
    &*SINGLETON
}

lazy_static! {
    static ref INITIALIZER: Mutex<Option<Config>> = Mutex::new(None);
    static ref SINGLETON: Config = {
        lock_initializer().take().expect("config::INITIALIZER is None")
    };
}

pub fn init_config(config: Config) {
    *lock_initializer() = Some(config);
    lazy_static::initialize(&SINGLETON);
}

fn lock_initializer<'mutex>() -> MutexGuard<'mutex, Option<Config>> {
    INITIALIZER.lock().expect(
        "config::INITIALIZER.lock() failed",
    )
}

macro_rules! impl_config {
    ($($name:ident: $type:ty $(= $value:expr)*),* $(,)*) => {
        #[derive(Debug)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Config {
            pub fn from_json(json: serde_json::Value) -> Config {
                Config {
                    $(
                        $name: get_or_default!(json,
                                               stringify!($name).to_string().to_uppercase()
                                               $(, $value)*)
                    ),*
                }
            }
        }
    };
}

macro_rules! get_or_default {
    ($json:ident, $key:expr, $default_value:expr) => {
        ValueWrapper($json.get($key).unwrap_or(&json!($default_value))).into()
    };
    ($json:ident, $key:expr) => {
        ValueWrapper($json.get($key).expect("no key found")).into()
    };
}

struct ValueWrapper<'a>(&'a serde_json::Value);

macro_rules! impl_into {
    ($type:ty, $method:ident) => {
        impl<'a> Into<$type> for ValueWrapper<'a> {
            fn into(self) -> $type {
                (self.0).$method().expect("conversion failed")
            }
        }
    };
}

impl_into!(i64, as_i64);
impl_into!(f64, as_f64);

impl_config! {
    berserk_chance: f64 = 0.1,
    creature_radius: f64 = 10.0,
    game_height: i64,
    game_width: i64,
    hospital_height: f64 = 80.0,
    infection_chance: f64 = 0.02,
    mean_chance: f64 = 0.1,
    population_count: i64 = 20,
    river_height: f64 = 80.0,
}

#[cfg(test)]
pub fn init_test_config() {
    init_config(Config {
        berserk_chance: 0.1,
        creature_radius: 10.0,
        game_height: 600,
        game_width: 800,
        hospital_height: 80.0,
        infection_chance: 0.02,
        mean_chance: 0.1,
        population_count: 20,
        river_height: 80.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_defaults_and_overrides() {
        let config = Config::from_json(json!({
            "GAME_WIDTH": 800,
            "GAME_HEIGHT": 600,
            "RIVER_HEIGHT": 100.0,
        }));
        assert_eq!(config.game_width, 800);
        assert_eq!(config.game_height, 600);
        assert_eq!(config.river_height, 100.0);
        assert_eq!(config.hospital_height, 80.0);
        assert_eq!(config.infection_chance, 0.02);
        assert_eq!(config.population_count, 20);
    }
}
