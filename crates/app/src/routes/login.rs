use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use crate::api::Client;
use crate::routes::{redirect_for, Route};
use crate::session::use_session;

/// Login page with email/password.
#[component]
pub fn LoginPage() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in — straight to the dashboard.
    if let Some(route) = redirect_for(session.is_authenticated(), true) {
        navigator().replace(route);
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let client = Client::new(session);
        match client.login(email(), password()).await {
            Ok(new_session) => {
                session.log_in(new_session);
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                error_msg.set(Some(err.or_fallback("Login failed. Please try again.")));
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
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the admin dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
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
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Create one" }
                    }
                }
            }
        }
    }
}
