use leptos::prelude::*;

use crate::content::PROCESS_STEPS;

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section process">
            <div class="container">
                <h2 class="section-title centered">"How We Work"</h2>
                <div class="process-grid">
                    {PROCESS_STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="process-tile">
                                    <div class="process-icon">{step.icon}</div>
                                    <div class="process-title">{step.title}</div>
                                    <p class="process-blurb">{step.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
