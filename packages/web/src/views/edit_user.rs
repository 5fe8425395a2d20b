//! Edit-user page: hands the route id to the shared profile editor.

use dioxus::prelude::*;
use ui::views::EditProfileView;

#[component]
pub fn EditUser(id: String) -> Element {
    rsx! {
        EditProfileView { user_id: Some(id) }
    }
}
