use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormActions, Input,
};

use crate::auth::{sign_in, use_auth};
use crate::routes::Route;
use crate::use_api;

/// Email/password sign-in. On success the user lands on their role's home.
#[component]
pub fn LoginPage() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |_evt: FormEvent| {
        let api = api.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            let credentials = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match sign_in(&api, &credentials).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, role = user.role.as_str(), "signed in");
                    let home = user.role.home();
                    loading.set(false);
                    auth.set_user(Some(user));
                    navigator().replace(Route::from(home));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign-in failed");
                    error_msg.set(Some(e.friendly_message("Invalid credentials")));
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your forms" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            disabled: loading(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            disabled: loading(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FormActions {
                            Button {
                                button_type: "submit",
                                disabled: loading() || email().trim().is_empty() || password().is_empty(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}
