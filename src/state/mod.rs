use crate::config::EnvConfig;
use crate::levels::RequirementImportance;
use crate::tracker::LevelTracker;
use crate::widget::ControlClasses;
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: StoredValue<EnvConfig>,

    /// Class strings derived from `config`; read on every click.
    pub classes: StoredValue<ControlClasses>,

    /// Selected level per widget. Lives as long as the page.
    pub tracker: RwSignal<LevelTracker>,

    /// Importance picked per widget on the requirements editor.
    pub importance: RwSignal<HashMap<String, RequirementImportance>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(EnvConfig::new())
    }

    pub fn with_config(config: EnvConfig) -> Self {
        let classes = config.control_classes();
        Self {
            config: StoredValue::new(config),
            classes: StoredValue::new(classes),
            tracker: RwSignal::new(LevelTracker::new()),
            importance: RwSignal::new(HashMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
