use leptos::prelude::*;
use tw_merge::*;

/// Caption above a group of skill rows.
#[component]
pub fn Label(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = tw_merge!(
        "flex items-center gap-2 text-sm leading-none font-medium select-none",
        class
    );

    view! { <span data-name="Label" class=class>{children()}</span> }
}
