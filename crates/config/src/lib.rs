// Configuration loading

pub mod settings;

pub use settings::{NameSettings, Settings};
