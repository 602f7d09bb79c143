use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, INQUIRY_ACK, NEXT_STEPS};

#[component]
pub fn Contact() -> impl IntoView {
    // The form is a placeholder: nothing leaves the client, field values are
    // never read. Browser-native `required` validation is the only gate.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(INQUIRY_ACK);
        }
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container split-grid">
                <div>
                    <h2 class="section-title">"Request Trade Access"</h2>
                    <p class="section-description">
                        "Tell us about your business and what you're looking for. We'll review "
                        "your application and send you our private catalog once approved."
                    </p>
                    <form class="inquiry-form" on:submit=on_submit>
                        <div class="form-row">
                            <input type="text" class="form-input" placeholder="Name" required />
                            <input type="email" class="form-input" placeholder="Email" required />
                        </div>
                        <textarea
                            class="form-textarea"
                            placeholder="What products/services are you interested in?"
                            rows="5"
                        ></textarea>
                        <div class="form-footer">
                            <button type="submit" class="btn btn-primary">
                                "Submit Application →"
                            </button>
                            <div class="contact-pills">
                                <CopyPill icon="☎" text=CONTACT_PHONE />
                                <CopyPill icon="✉" text=CONTACT_EMAIL />
                            </div>
                        </div>
                    </form>
                </div>
                <div class="card side-card">
                    <h3 class="card-title">"What happens next?"</h3>
                    <ol class="next-list">
                        {NEXT_STEPS
                            .iter()
                            .map(|step| view! { <li>{*step}</li> })
                            .collect_view()}
                    </ol>
                    <div class="note-box">
                        <strong>"Note: "</strong>
                        "For immediate access to our catalog, contact us directly on WhatsApp "
                        "or call our sales team."
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Contact detail pill with a copy-to-clipboard button.
#[component]
fn CopyPill(icon: &'static str, text: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <span class="pill pill-contact">
            <span class="pill-icon">{icon}</span>
            {text}
            <button class="pill-copy-btn" on:click=copy>
                {move || if copied.get() { "copied" } else { "copy" }}
            </button>
        </span>
    }
}
