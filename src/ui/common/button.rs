use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled, accent colour
    Contained,
    /// Text-only, styled as a link
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn-primary",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Native `type` attribute of a button
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonType {
    Button,
    Submit,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// Shared button
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Contained)]
    variant: ButtonVariant,
    #[prop(default = ButtonType::Button)]
    button_type: ButtonType,
    /// Click handler; submit buttons usually leave this to the form
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_classes = format!("btn-base {}", variant.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type.as_str()
            class=full_classes
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
