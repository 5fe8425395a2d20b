//! Login view: the flow that writes the session slice.

use dioxus::prelude::*;

use crate::session::{replace_session_user, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: go straight to the index
    if !session().loading && session().user.is_some() {
        nav.replace("/admin");
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(user) => {
                    replace_session_user(&mut session, Some(user));
                    nav.push("/admin");
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "login-page",

            h1 { class: "view-title", "Backoffice" }
            p { class: "view-muted", "Sign in to manage users" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(ref err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
