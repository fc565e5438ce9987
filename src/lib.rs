extern crate chrono;
extern crate colored;
extern crate serde;
extern crate serde_json;
extern crate uuid;

pub mod board;
pub mod config;
pub mod fmt;
pub mod form;
pub mod project;
pub mod shell;
pub mod store;
pub mod traits;
pub mod validation;

pub use config::Config;
pub use store::ProjectStore;
