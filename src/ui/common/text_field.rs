use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input with inline error text.
///
/// The error line renders only when `error_text` is non-empty; `invalid`
/// controls the red border independently.
#[component]
pub fn TextField(
    /// `id` and `name` of the input
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, ...)
    #[prop(into, default = Signal::stored("text"))]
    input_type: Signal<&'static str>,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Whether the field renders in its error state
    #[prop(into)]
    invalid: Signal<bool>,
    /// Error message, empty when nothing should be shown
    #[prop(into)]
    error_text: Signal<&'static str>,
    /// Content rendered at the end of the input (e.g. a toggle)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || input_type.get()
                    id=name
                    name=name
                    autocomplete=autocomplete
                    class="input-base pr-10"
                    class:border-red-500=move || invalid.get()
                    aria-invalid=move || if invalid.get() { "true" } else { "false" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| on_blur.run(())
                />
                {children.map(|adornment| view! {
                    <div class="absolute inset-y-0 right-0 pr-3 flex items-center">
                        {adornment()}
                    </div>
                })}
            </div>
            <Show when=move || !error_text.get().is_empty()>
                <div class="flex items-center text-sm text-theme-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{move || error_text.get()}</span>
                </div>
            </Show>
        </div>
    }
}
