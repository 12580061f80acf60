//! Landing page after login
//!
//! Shows the stored session identifier. Storage is only read in the browser,
//! after hydration, so the server always renders the signed-out state.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::read_session;
use crate::ui::browser::BrowserStorage;
use crate::ui::common::Footer;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_id = RwSignal::new(None::<String>);

    Effect::new(move |_| match read_session(&BrowserStorage) {
        Ok(stored) => session_id.set(stored),
        Err(e) => leptos::logging::warn!("could not read session: {}", e),
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <main class="flex-1 flex items-center justify-center p-4">
                {move || match session_id.get() {
                    Some(id) => view! {
                        <p class="text-xl text-theme-primary">
                            "Signed in as " <strong>{id}</strong>
                        </p>
                    }.into_any(),
                    None => view! {
                        <div class="text-center">
                            <p class="text-theme-secondary mb-4">"You are not signed in."</p>
                            <A href="/" attr:class="btn-base btn-primary">"Go to login"</A>
                        </div>
                    }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
