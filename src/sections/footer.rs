use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-copyright">
                    {format!("© {year} IceFactory Ltd. All rights reserved.")}
                </div>
                <div class="footer-links">
                    <a href="#policy" class="footer-link">"Policy"</a>
                    <span class="sep">"·"</span>
                    <a href="#" class="footer-link">"Privacy"</a>
                    <span class="sep">"·"</span>
                    <a href="#" class="footer-link">"Terms"</a>
                </div>
                <div class="footer-note">"Built for brilliance. ❤️"</div>
            </div>
        </footer>
    }
}
