//! Session slice: the authenticated user, exposed as explicit context.
//!
//! The slice holds one value, the logged-in [`UserInfo`], and exposes exactly
//! two operations: read (via [`use_session`]) and replace (via
//! [`replace_session_user`]). Only the login/logout flow replaces it; profile
//! views read it and write their own local state instead.

use api::UserInfo;
use dioxus::prelude::*;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// True until the initial current-user fetch has settled.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Replace the session user. The slice's only write operation, called by the
/// authentication flow.
pub fn replace_session_user(session: &mut Signal<SessionState>, user: Option<UserInfo>) {
    session.set(SessionState {
        user,
        loading: false,
    });
}

/// Provider component that owns the session slice.
/// Wrap the app with this component so any view can read the session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Fetch the current user once on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => replace_session_user(&mut session, user),
            Err(_) => replace_session_user(&mut session, None),
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            replace_session_user(&mut session, None);
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
