//! Admin users index: the parent screen the profile editor navigates back to.

use api::UserInfo;
use dioxus::prelude::*;

use crate::session::LogoutButton;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn UsersView() -> Element {
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut load_error = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api::list_users().await {
            Ok(list) => users.set(list),
            Err(err) => {
                tracing::error!("failed to list users: {err}");
                load_error.set(true);
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            div {
                class: "view-header",
                h1 { class: "view-title", "Users" }
                LogoutButton { class: "secondary" }
            }

            if load_error() {
                p { class: "view-muted", "Could not load users." }
            }

            table {
                class: "users-table",
                thead {
                    tr {
                        th { "" }
                        th { "Name" }
                        th { "Email" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users().iter() {
                        UserRow { key: "{user.id}", user: user.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: UserInfo) -> Element {
    let nav = use_navigator();
    let edit_path = format!("/admin/users/{}/edit", user.id);

    rsx! {
        tr {
            td {
                if let Some(ref url) = user.avatar {
                    img { class: "avatar-thumb", src: "{url}", alt: "" }
                } else {
                    div { class: "avatar-thumb avatar-placeholder" }
                }
            }
            td { "{user.name}" }
            td { "{user.email}" }
            td {
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(edit_path.clone());
                    },
                    "Edit"
                }
            }
        }
    }
}
