use crate::levels::{is_control_active, CONTROL_INDICES, UNSET_LEVEL};
use leptos::logging::warn;

pub(crate) const DEFAULT_CONTROL_CLASS: &str = "requirement-editor-control";
pub(crate) const DEFAULT_ACTIVE_CONTROL_CLASS: &str = "requirement-editor-control-active";

pub fn control_element_id(widget_id: &str, index: i32) -> String {
    format!("{widget_id}-{index}")
}

pub fn dependent_input_id(widget_id: &str) -> String {
    format!("i{widget_id}")
}

/// The attribute writes a level widget performs on its elements.
///
/// Implementations must not fail: a write that cannot be applied is dropped.
pub trait LevelNode {
    fn set_class(&self, class: &str);
    fn set_value(&self, value: &str);
    fn set_disabled(&self, disabled: bool);
}

impl LevelNode for web_sys::Element {
    fn set_class(&self, class: &str) {
        let _ = self.set_attribute("class", class);
    }

    fn set_value(&self, value: &str) {
        let _ = self.set_attribute("value", value);
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            let _ = self.set_attribute("disabled", "disabled");
        } else {
            let _ = self.remove_attribute("disabled");
        }
    }
}

impl<T: LevelNode + ?Sized> LevelNode for &T {
    fn set_class(&self, class: &str) {
        (**self).set_class(class);
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value);
    }

    fn set_disabled(&self, disabled: bool) {
        (**self).set_disabled(disabled);
    }
}

/// Class strings written to control elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlClasses {
    pub inactive: String,
    pub active: String,
}

impl ControlClasses {
    /// Active controls carry the base class plus the active modifier.
    pub fn new(base: &str, active_modifier: &str) -> Self {
        Self {
            inactive: base.to_string(),
            active: format!("{base} {active_modifier}"),
        }
    }

    pub fn for_control(&self, index: i32, level: i32) -> &str {
        if is_control_active(index, level) {
            &self.active
        } else {
            &self.inactive
        }
    }
}

impl Default for ControlClasses {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROL_CLASS, DEFAULT_ACTIVE_CONTROL_CLASS)
    }
}

/// The elements of one level widget, resolved once.
///
/// `controls[k]` holds the control for `CONTROL_INDICES[k]`. Any element may be
/// missing; writes to a missing element are skipped.
#[derive(Clone, Debug)]
pub struct LevelWidget<N> {
    pub id: String,
    pub form_field: Option<N>,
    pub controls: [Option<N>; 4],
    pub dependent_input: Option<N>,
}

impl<N: LevelNode> LevelWidget<N> {
    pub fn new(
        id: impl Into<String>,
        form_field: Option<N>,
        controls: [Option<N>; 4],
        dependent_input: Option<N>,
    ) -> Self {
        Self {
            id: id.into(),
            form_field,
            controls,
            dependent_input,
        }
    }

    /// Reconcile every element of the widget with `level`.
    pub fn apply(&self, level: i32, classes: &ControlClasses) {
        for (index, control) in CONTROL_INDICES.iter().zip(self.controls.iter()) {
            if let Some(control) = control {
                control.set_class(classes.for_control(*index, level));
            }
        }

        if let Some(field) = &self.form_field {
            field.set_value(&level.to_string());
        }

        if let Some(input) = &self.dependent_input {
            input.set_disabled(level == UNSET_LEVEL);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.form_field.is_some()
            && self.dependent_input.is_some()
            && self.controls.iter().all(Option::is_some)
    }
}

impl LevelWidget<web_sys::Element> {
    /// Look up the widget's elements by the `{id}-{index}` / `i{id}` naming
    /// convention.
    pub fn resolve(document: &web_sys::Document, form_control_id: &str, widget_id: &str) -> Self {
        let controls = CONTROL_INDICES
            .map(|index| document.get_element_by_id(&control_element_id(widget_id, index)));
        let widget = Self::new(
            widget_id,
            document.get_element_by_id(form_control_id),
            controls,
            document.get_element_by_id(&dependent_input_id(widget_id)),
        );

        if widget.form_field.is_none() || widget.controls.iter().any(Option::is_none) {
            warn!("level widget {widget_id:?}: some elements are missing from the document");
        }
        widget
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::LevelNode;
    use std::cell::RefCell;

    /// In-memory stand-in for a DOM element.
    #[derive(Debug, Default)]
    pub(crate) struct FakeNode {
        pub class: RefCell<Option<String>>,
        pub value: RefCell<Option<String>>,
        pub disabled: RefCell<bool>,
    }

    impl FakeNode {
        pub fn class(&self) -> Option<String> {
            self.class.borrow().clone()
        }

        pub fn value(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        pub fn disabled(&self) -> bool {
            *self.disabled.borrow()
        }
    }

    impl LevelNode for FakeNode {
        fn set_class(&self, class: &str) {
            *self.class.borrow_mut() = Some(class.to_string());
        }

        fn set_value(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }

        fn set_disabled(&self, disabled: bool) {
            *self.disabled.borrow_mut() = disabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeNode;
    use super::*;

    #[test]
    fn test_element_ids_follow_naming_convention() {
        assert_eq!(control_element_id("req1", -1), "req1--1");
        assert_eq!(control_element_id("req1", 2), "req1-2");
        assert_eq!(dependent_input_id("req1"), "ireq1");
    }

    #[test]
    fn test_default_classes() {
        let classes = ControlClasses::default();
        assert_eq!(classes.inactive, "requirement-editor-control");
        assert_eq!(
            classes.active,
            "requirement-editor-control requirement-editor-control-active"
        );
        assert_eq!(classes.for_control(0, 0), classes.active);
        assert_eq!(classes.for_control(1, 0), classes.inactive);
    }

    #[test]
    fn test_apply_writes_every_element() {
        let nodes: Vec<FakeNode> = (0..6).map(|_| FakeNode::default()).collect();
        let widget = LevelWidget::new(
            "req1",
            Some(&nodes[0]),
            [Some(&nodes[1]), Some(&nodes[2]), Some(&nodes[3]), Some(&nodes[4])],
            Some(&nodes[5]),
        );
        assert!(widget.is_complete());

        let classes = ControlClasses::default();
        widget.apply(0, &classes);

        assert_eq!(nodes[0].value().as_deref(), Some("0"));
        assert_eq!(nodes[1].class(), Some(classes.active.clone()));
        assert_eq!(nodes[2].class(), Some(classes.active.clone()));
        assert_eq!(nodes[3].class(), Some(classes.inactive.clone()));
        assert_eq!(nodes[4].class(), Some(classes.inactive.clone()));
        assert!(!nodes[5].disabled());
    }

    #[test]
    fn test_apply_skips_missing_elements() {
        let field = FakeNode::default();
        let top = FakeNode::default();
        let widget: LevelWidget<&FakeNode> =
            LevelWidget::new("req2", Some(&field), [None, None, None, Some(&top)], None);
        assert!(!widget.is_complete());

        widget.apply(UNSET_LEVEL, &ControlClasses::default());

        assert_eq!(field.value().as_deref(), Some("-1"));
        assert_eq!(top.class().as_deref(), Some("requirement-editor-control"));
    }

    #[test]
    fn test_apply_with_no_elements_is_noop() {
        let widget: LevelWidget<&FakeNode> =
            LevelWidget::new("ghost", None, [None, None, None, None], None);
        widget.apply(2, &ControlClasses::default());
        assert_eq!(widget.id, "ghost");
    }
}
