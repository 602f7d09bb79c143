use leptos::prelude::*;

use super::ui::{CheckList, FeatureItem};
use crate::content::{SERVICE_FEATURES, SERVICE_REQUIREMENTS};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container split-grid">
                <div>
                    <h2 class="section-title">"Custom Icing & Stone-Setting Services"</h2>
                    <p class="section-description">
                        "For authorized jewelers and resellers only. We provide custom icing "
                        "services on client-owned timepieces and manufacture complete iced-out "
                        "watches. All work is done with premium D/VVS moissanite stones and "
                        "professional finishing."
                    </p>
                    <div class="feature-grid">
                        {SERVICE_FEATURES
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
                    <h3 class="card-title">"Service Requirements"</h3>
                    <CheckList items={&SERVICE_REQUIREMENTS} />
                </div>
            </div>
        </section>
    }
}
