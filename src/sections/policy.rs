use leptos::prelude::*;

use super::ui::{CheckList, FeatureItem};
use crate::content::{POLICY_FEATURES, POLICY_NOTES};

#[component]
pub fn Policy() -> impl IntoView {
    view! {
        <section id="policy" class="section policy">
            <div class="container split-grid">
                <div>
                    <h2 class="section-title">"Our Wholesale Policy"</h2>
                    <p class="section-description">
                        "We work exclusively B2B with jewelers, resellers, and retailers. "
                        "Catalog access is restricted to approved trade partners. Our products "
                        "are sold under neutral descriptors only. Private catalogs available "
                        "on request."
                    </p>
                    <div class="feature-stack">
                        {POLICY_FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <FeatureItem icon=f.icon title=f.title blurb=f.blurb />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="card side-card">
                    <h3 class="card-title">"Important Notes"</h3>
                    <CheckList items={&POLICY_NOTES} />
                </div>
            </div>
        </section>
    }
}
