use crate::levels::{
    control_label, RequirementImportance, SkillLevel, CONTROL_INDICES, UNSET_LEVEL,
};
use crate::state::AppContext;
use crate::widget::{control_element_id, dependent_input_id, LevelWidget};
use leptos::prelude::*;
use strum::IntoEnumIterator;
use tw_merge::*;
use wasm_bindgen::JsCast;

/// One row of level controls bound to a hidden form field.
///
/// Renders the `{widget_id}-{index}` controls, the hidden field
/// `form_control_id` (named after the widget so the submitted form is keyed by
/// it) and, with `with_importance`, the dependent `i{widget_id}` select.
#[component]
pub fn LevelSelector(
    #[prop(into)] widget_id: String,
    #[prop(into)] form_control_id: String,
    #[prop(default = UNSET_LEVEL)] initial_level: i32,
    #[prop(optional)] with_importance: bool,
    #[prop(optional)] importance: RequirementImportance,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let classes = app_state.0.classes.get_value();
    let tracker = app_state.0.tracker;
    let importance_map = app_state.0.importance;

    // A level picked on another page for the same widget wins over the
    // configured one.
    let start_level = tracker
        .with_untracked(|t| t.level(&widget_id))
        .unwrap_or(initial_level);

    // The row is only in the document after mount, so the lookup waits for the
    // first click and is reused from then on.
    let resolved: StoredValue<Option<LevelWidget<web_sys::Element>>, LocalStorage> =
        StoredValue::new_local(None);

    let on_pick = {
        let widget_id = widget_id.clone();
        let form_control_id = form_control_id.clone();
        let classes = app_state.0.classes;
        Callback::new(move |value: i32| {
            if resolved.with_value(Option::is_none) {
                let widget = LevelWidget::resolve(&document(), &form_control_id, &widget_id);
                resolved.set_value(Some(widget));
            }
            let classes = classes.get_value();
            resolved.with_value(|widget| {
                if let Some(widget) = widget {
                    tracker.update(|t| t.set_level(widget, value, &classes));
                }
            });
        })
    };

    let controls = CONTROL_INDICES
        .into_iter()
        .map(|index| {
            view! {
                <button
                    type="button"
                    id=control_element_id(&widget_id, index)
                    class=classes.for_control(index, start_level).to_string()
                    title=control_label(index)
                    on:click=move |_| on_pick.run(index)
                >
                    {control_label(index)}
                </button>
            }
        })
        .collect_view();

    let current_label = {
        let widget_id = widget_id.clone();
        move || {
            let level = tracker
                .with(|t| t.level(&widget_id))
                .unwrap_or(start_level);
            SkillLevel::from_value(level)
                .map(<&'static str>::from)
                .unwrap_or("Not selected")
        }
    };

    let importance_view = with_importance.then(|| {
        let dep_id = dependent_input_id(&widget_id);
        let key = widget_id.clone();
        importance_map.update_untracked(|m| {
            m.entry(key.clone()).or_insert(importance);
        });

        let on_change = move |ev: web_sys::Event| {
            let picked = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                .and_then(|s| s.value().parse::<i32>().ok())
                .and_then(RequirementImportance::from_value);
            if let Some(picked) = picked {
                importance_map.update(|m| {
                    m.insert(key.clone(), picked);
                });
            }
        };

        view! {
            <select
                id=dep_id.clone()
                name=dep_id
                class="h-8 rounded-md border border-input bg-transparent px-2 text-sm disabled:cursor-not-allowed disabled:opacity-50"
                disabled={start_level == UNSET_LEVEL}
                on:change=on_change
            >
                {RequirementImportance::iter()
                    .map(|imp| {
                        view! {
                            <option value=imp.value().to_string() selected={imp == importance}>
                                {imp.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
    });

    let merged_class = tw_merge!("flex flex-wrap items-center gap-3", class);

    view! {
        <div data-name="LevelSelector" class=merged_class>
            <input
                type="hidden"
                id=form_control_id
                name=widget_id
                value=start_level.to_string()
            />
            <div class="flex items-center gap-1">{controls}</div>
            <span class="w-24 text-xs text-muted-foreground">{current_label}</span>
            {importance_view}
        </div>
    }
}
