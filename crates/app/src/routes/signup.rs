use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use crate::api::Client;
use crate::routes::{redirect_for, Route};
use crate::session::use_session;

/// Signup page for new administrators.
#[component]
pub fn SignupPage() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(route) = redirect_for(session.is_authenticated(), true) {
        navigator().replace(route);
    }

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();

        if password() != confirm() {
            error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);

        let client = Client::new(session);
        match client.signup(name(), email(), password()).await {
            Ok(new_session) => {
                session.log_in(new_session);
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                error_msg.set(Some(err.or_fallback("Signup failed. Please try again.")));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Register a new administrator account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_signup,
                        div { class: "auth-field",
                            Input {
                                label: "Name",
                                placeholder: "Your full name",
                                required: true,
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "email",
                                label: "Email",
                                placeholder: "admin@example.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Password",
                                placeholder: "At least 8 characters",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Confirm Password",
                                placeholder: "Repeat your password",
                                required: true,
                                value: confirm(),
                                on_input: move |e: FormEvent| confirm.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
