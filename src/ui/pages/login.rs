//! Login page component
//!
//! Username/password form. A valid submit stores the username as the session
//! identifier and hands off to `success_route` with a full-page redirect.

use leptos::prelude::*;

use crate::core::{LoginField, LoginForm, PasswordVisibility, SessionWriter};
use crate::ui::browser::{BrowserNavigator, BrowserStorage, replace_history_path};
use crate::ui::common::{Button, ButtonType, ButtonVariant, Footer, TextField};
use crate::ui::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginActivity(
    /// Route to load after a successful login
    #[prop(into)]
    success_route: String,
) -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());
    let visibility = RwSignal::new(PasswordVisibility::default());

    // Always present the login screen at the root path
    Effect::new(move |_| replace_history_path("/"));

    let field_value =
        move |field: LoginField| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let field_invalid =
        move |field: LoginField| Signal::derive(move || form.with(|f| f.is_invalid(field)));
    let field_error =
        move |field: LoginField| Signal::derive(move || form.with(|f| f.error_text(field)));
    let on_input = move |field: LoginField| {
        Callback::new(move |value: String| form.update(|f| f.set_value(field, value)))
    };
    let on_blur =
        move |field: LoginField| Callback::new(move |_: ()| form.update(|f| f.blur(field)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(outcome) = form.try_update(|f| f.submit()) else {
            return;
        };
        match outcome {
            Ok(values) => {
                SessionWriter::new(BrowserStorage, BrowserNavigator)
                    .complete_login(&values, &success_route);
            }
            Err(errors) => {
                leptos::logging::log!("login rejected: {} invalid field(s)", errors.len());
            }
        }
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <main class="flex-1 flex flex-col items-center justify-center p-4">
                <img src="/images/logo.svg" alt="Open Hospital" class="h-24 mb-4" />
                <h1 class="text-2xl font-bold text-theme-primary text-center mb-6">
                    "Princeton-Plainsboro Teaching Hospital"
                </h1>

                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    <form on:submit=on_submit class="space-y-6" novalidate=true>
                        <TextField
                            name=LoginField::Username.name()
                            label=LoginField::Username.label()
                            autocomplete="username"
                            value=field_value(LoginField::Username)
                            on_input=on_input(LoginField::Username)
                            on_blur=on_blur(LoginField::Username)
                            invalid=field_invalid(LoginField::Username)
                            error_text=field_error(LoginField::Username)
                        />

                        <TextField
                            name=LoginField::Password.name()
                            label=LoginField::Password.label()
                            input_type=Signal::derive(move || visibility.with(|v| v.input_type()))
                            autocomplete="current-password"
                            value=field_value(LoginField::Password)
                            on_input=on_input(LoginField::Password)
                            on_blur=on_blur(LoginField::Password)
                            invalid=field_invalid(LoginField::Password)
                            error_text=field_error(LoginField::Password)
                        >
                            <button
                                type="button"
                                class="text-theme-tertiary hover:text-theme-secondary"
                                title="Show or hide the password"
                                on:click=move |_| visibility.update(|v| v.toggle())
                            >
                                {move || {
                                    if visibility.with(|v| v.is_visible()) {
                                        view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                                    }
                                }}
                            </button>
                        </TextField>

                        <Button button_type=ButtonType::Submit class="w-full">
                            "LOG IN"
                        </Button>

                        // Password reset is not wired to anything
                        <div class="text-center text-sm">
                            <Button variant=ButtonVariant::Link>
                                "Forgot the password?"
                            </Button>
                        </div>
                    </form>
                </div>
            </main>

            <Footer />
        </div>
    }
}
