mod settings;

pub use settings::{Command, Settings};
