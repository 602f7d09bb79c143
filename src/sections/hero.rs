use leptos::prelude::*;

use super::ui::Pill;
use crate::content::{HERO_STATS, TOP_CATEGORIES};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <Pill>"Trade-Only • Direct from India"</Pill>
                    <h1 class="hero-title">"Iced-Out Watches & Moissanite Jewelry"</h1>
                    <p class="hero-description">
                        "Direct from our manufacturing unit in India. Premium bust-down watches "
                        "and jewelry with handset moissanite (D/VVS). Built for jewelers, "
                        "resellers, and retailers who want shine, margins, and fast turnaround."
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">"Request B2B Access"</a>
                        <a href="#policy" class="btn btn-secondary">"Read our Policy"</a>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <CategoryCard />
            </div>
        </section>
    }
}

#[component]
fn CategoryCard() -> impl IntoView {
    view! {
        <div class="card hero-card">
            <h3 class="card-title">"Top Categories"</h3>
            <div class="category-grid">
                {TOP_CATEGORIES
                    .iter()
                    .map(|cat| {
                        view! {
                            <div class="category-tile">
                                <div class="category-name">{cat.name}</div>
                                <p class="category-blurb">{cat.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
