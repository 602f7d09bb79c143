//! Small presentational pieces shared by several sections.

use leptos::prelude::*;

/// Rounded inline badge used in the hero and next to the contact form.
#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class="pill">{children()}</span> }
}

/// Icon + title + blurb row used by the services and policy sections.
#[component]
pub fn FeatureItem(
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-item">
            <div class="feature-item-icon">{icon}</div>
            <div>
                <h4 class="feature-item-title">{title}</h4>
                <p class="feature-item-blurb">{blurb}</p>
            </div>
        </div>
    }
}

/// Checkmarked bullet list rendered inside the side cards.
#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="check-item">
                            <span class="check-mark">"✓"</span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
