// Ice Factory wholesale landing page — Leptos 0.8, client-side rendered.

mod content;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBrand />
        <Nav />
        <main>
            <Hero />
            <Products />
            <Services />
            <Process />
            <Policy />
            <Contact />
        </main>
        <Footer />
    }
}
