use leptos::prelude::*;

use crate::content::{BRAND, BRAND_TAG, NAV_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <div class="nav-logo">"⌚"</div>
                    <span class="nav-title">{BRAND}</span>
                    <span class="nav-badge">{BRAND_TAG}</span>
                </div>

                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="nav-actions">
                    <a href="#contact" class="nav-cta">"Request Catalog"</a>
                    <button
                        class="nav-menu-btn"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile drawer, slides open via CSS animation
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <nav class="nav-drawer-inner">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let link = *link;
                                view! {
                                    <a
                                        href=link.target
                                        class="drawer-link"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="drawer-cta"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Request Catalog"
                        </a>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
