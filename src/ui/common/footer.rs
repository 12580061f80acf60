use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4 border-t border-theme">
            <p class="text-center text-sm text-theme-tertiary">
                "Open Hospital"
            </p>
        </footer>
    }
}
