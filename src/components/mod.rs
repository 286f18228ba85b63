pub mod level_selector;
pub mod ui;

pub use level_selector::LevelSelector;
