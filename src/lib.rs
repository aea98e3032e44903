#[macro_use]
extern crate lazy_static;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

#[cfg(feature = "debug")]
#[macro_use]
extern crate log;

pub mod config;
pub mod game;
pub mod interactor;
pub mod mechanic;
pub mod models;
