use leptos::prelude::*;

use crate::content::PRODUCTS;

#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="section products">
            <div class="container">
                <div class="section-header-row">
                    <h2 class="section-title">"Manufactured Products"</h2>
                    <span class="moq-badge">"MOQ from 10 units"</span>
                </div>
                <div class="product-grid">
                    {PRODUCTS
                        .iter()
                        .map(|product| {
                            view! {
                                <article class="card product-card">
                                    <h3 class="product-title">{product.title}</h3>
                                    <p class="product-blurb">{product.blurb}</p>
                                    <div class="product-footer">
                                        <span class="product-tag">"✦ Hand-set"</span>
                                        <a href="#contact" class="btn btn-small btn-secondary">
                                            "Get Price Sheet"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
