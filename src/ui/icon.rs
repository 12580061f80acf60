use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

pub mod icons {
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
