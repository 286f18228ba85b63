use crate::components::ui::{
    Alert, AlertDescription, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Label, SkillGroup, SkillRow,
};
use crate::components::LevelSelector;
use crate::state::AppContext;
use crate::tracker::LevelTracker;
use leptos::prelude::*;

fn form_control_id(skill_id: &str) -> String {
    format!("level-{skill_id}")
}

#[component]
fn SkillRows(with_importance: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let groups = app_state.0.config.with_value(|c| c.skills_by_area());

    if groups.is_empty() {
        return view! {
            <Alert>
                <AlertDescription class="text-muted-foreground">
                    "No skills configured."
                </AlertDescription>
            </Alert>
        }
        .into_any();
    }

    groups
        .into_iter()
        .map(|(area, skills)| {
            view! {
                <SkillGroup>
                    <Label>{area}</Label>
                    {skills
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <SkillRow>
                                    <span class="text-sm">{skill.name.clone()}</span>
                                    <LevelSelector
                                        widget_id=skill.id.clone()
                                        form_control_id=form_control_id(&skill.id)
                                        initial_level=skill.level
                                        with_importance=with_importance
                                        importance=skill.importance
                                    />
                                </SkillRow>
                            }
                        })
                        .collect_view()}
                </SkillGroup>
            }
        })
        .collect_view()
        .into_any()
}

/// What the form will submit for the widgets touched so far.
#[component]
fn PendingChanges() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let tracker = app_state.0.tracker;
    let importance = app_state.0.importance;

    let entries = move || tracker.with(|t| importance.with(|imp| t.form_entries(imp)));

    view! {
        <Show
            when=move || !tracker.with(LevelTracker::is_empty)
            fallback=|| view! { <div class="text-xs text-muted-foreground">"No changes yet."</div> }
        >
            <ul class="flex flex-col gap-1 text-xs text-muted-foreground">
                {move || {
                    entries()
                        .into_iter()
                        .map(|(name, value)| {
                            view! {
                                <li>
                                    <code>{name}</code>
                                    " = "
                                    <code>{value}</code>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

#[component]
fn EditorForm(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    with_importance: bool,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let submit_url = app_state.0.config.with_value(|c| c.submit_url.clone());
    let csrf = app_state.0.config.with_value(|c| {
        c.csrf_field()
            .map(|(name, token)| (name, token.to_string()))
    });

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-3xl flex-col gap-6 px-4 py-12">
                <Card>
                    <CardHeader>
                        <CardTitle class="text-xl">{title}</CardTitle>
                        <CardDescription>{description}</CardDescription>
                    </CardHeader>

                    <form method="post" action=submit_url>
                        {csrf.map(|(name, token)| view! { <input type="hidden" name=name value=token /> })}
                        <CardContent class="flex flex-col gap-6">
                            <SkillRows with_importance=with_importance />
                        </CardContent>
                        <CardFooter class="pt-6">
                            <Button>"Save"</Button>
                        </CardFooter>
                    </form>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Pending changes"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <PendingChanges />
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsEditorPage() -> impl IntoView {
    view! {
        <EditorForm
            title="Your skills"
            description="Pick the level you have for each skill. Leave a skill at None to remove it."
            with_importance=false
        />
    }
}

#[component]
pub fn RequirementsEditorPage() -> impl IntoView {
    view! {
        <EditorForm
            title="Task requirements"
            description="Pick the level each skill is needed at and how important it is."
            with_importance=true
        />
    }
}
