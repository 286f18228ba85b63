use crate::levels::{RequirementImportance, SkillLevel, UNSET_LEVEL};
use crate::widget::{dependent_input_id, ControlClasses, LevelNode, LevelWidget};
use std::collections::HashMap;

/// Selected level per widget id, for the lifetime of the page.
///
/// Entries are created on first `set_level` and never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelTracker {
    levels: HashMap<String, i32>,
}

impl LevelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for the widget and bring its elements in line with it.
    ///
    /// `value` is not range-checked and missing elements are skipped, so this
    /// never fails.
    pub fn set_level<N: LevelNode>(
        &mut self,
        widget: &LevelWidget<N>,
        value: i32,
        classes: &ControlClasses,
    ) {
        self.levels.insert(widget.id.clone(), value);
        widget.apply(value, classes);
    }

    /// Id-based entry point: resolves the widget from `document` first.
    pub fn set_level_by_id(
        &mut self,
        document: &web_sys::Document,
        form_control_id: &str,
        widget_id: &str,
        value: i32,
        classes: &ControlClasses,
    ) {
        let widget = LevelWidget::resolve(document, form_control_id, widget_id);
        self.set_level(&widget, value, classes);
    }

    pub fn level(&self, widget_id: &str) -> Option<i32> {
        self.levels.get(widget_id).copied()
    }

    pub fn skill_level(&self, widget_id: &str) -> Option<SkillLevel> {
        self.level(widget_id).and_then(SkillLevel::from_value)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Recorded levels, ordered by widget id.
    pub fn entries(&self) -> Vec<(&str, i32)> {
        let mut out: Vec<(&str, i32)> = self
            .levels
            .iter()
            .map(|(id, level)| (id.as_str(), *level))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// The `(name, value)` pairs a browser submits for the tracked widgets.
    ///
    /// The level field is always sent. The importance field is sent only when a
    /// level is selected, since the importance input is disabled otherwise.
    pub fn form_entries(
        &self,
        importance: &HashMap<String, RequirementImportance>,
    ) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (id, level) in self.entries() {
            out.push((id.to_string(), level.to_string()));
            if level != UNSET_LEVEL {
                if let Some(imp) = importance.get(id) {
                    out.push((dependent_input_id(id), imp.value().to_string()));
                }
            }
        }
        out
    }
}
