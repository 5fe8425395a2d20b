//! Users index page; sends unauthenticated visitors to the login screen.

use dioxus::prelude::*;
use ui::{use_session, views::UsersView};

#[component]
pub fn AdminUsers() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().loading && session().user.is_none() {
        nav.replace(crate::Route::Login {});
    }

    rsx! {
        UsersView {}
    }
}
