//! Edit-profile view: loads a user record by id, submits partial updates, and
//! uploads a replacement avatar.

use api::{UserInfo, UserUpdate};
use dioxus::prelude::*;

use crate::notifications::{notify_error, notify_success, use_notifications};
use crate::profile::{data_url, exceeds_avatar_limit, mime_from_name, AvatarState, ProfileForm};
use crate::progress::{progress_finish, progress_start, use_progress};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Where the record fetch currently stands. Derived strictly from the load
/// future; there is no teardown timer.
#[derive(Clone, Copy, Debug, PartialEq)]
enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// Single busy flag guarding both suspending actions, so a form submit and an
/// avatar upload can never overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Busy {
    Idle,
    Submitting,
    Uploading,
}

fn route_id(user_id: Option<&str>) -> Option<String> {
    user_id.filter(|id| !id.is_empty()).map(str::to_string)
}

/// Shared edit-profile view.
///
/// Platform packages pass the route-supplied id; a missing or empty id is a
/// terminal precondition failure that navigates back to the index.
#[component]
pub fn EditProfileView(user_id: Option<String>) -> Element {
    let nav = use_navigator();
    let mut notices = use_notifications();
    let mut progress = use_progress();

    let mut record = use_signal(|| Option::<UserInfo>::None);
    let mut phase = use_signal(|| LoadPhase::Loading);
    let mut form = use_signal(ProfileForm::default);
    let mut avatar = use_signal(AvatarState::default);
    let mut busy = use_signal(|| Busy::Idle);

    let id = route_id(user_id.as_deref());

    // Load the record on mount. No id means no fetch at all: one notice, then
    // straight back to the index.
    let _loader = use_resource(move || {
        let id = id.clone();
        async move {
            let Some(id) = id else {
                notify_error(
                    &mut notices,
                    "Load failed",
                    "No user was selected for editing",
                );
                phase.set(LoadPhase::Failed);
                nav.push("/admin");
                return;
            };
            match api::get_user(id).await {
                Ok(Some(user)) => {
                    avatar.set(AvatarState::from_remote(user.avatar.clone()));
                    record.set(Some(user));
                    phase.set(LoadPhase::Ready);
                }
                Ok(None) => {
                    notify_error(
                        &mut notices,
                        "Load failed",
                        "Could not load the user to edit",
                    );
                    phase.set(LoadPhase::Failed);
                    nav.push("/admin");
                }
                Err(err) => {
                    tracing::error!("failed to load user: {err}");
                    notify_error(
                        &mut notices,
                        "Load failed",
                        "Could not load the user to edit",
                    );
                    phase.set(LoadPhase::Failed);
                    nav.push("/admin");
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if busy() != Busy::Idle {
                return;
            }
            let Some(user) = record() else {
                return;
            };
            if !form.write().validate_all() {
                return;
            }

            busy.set(Busy::Submitting);
            progress_start(&mut progress);

            let update = form().to_update(&user.id);
            match api::update_user(update).await {
                Ok(patch) => {
                    if let Some(current) = record.write().as_mut() {
                        patch.apply(current);
                    }
                    form.write().reset();
                    notify_success(&mut notices, "Saved", "Your profile has been updated");
                }
                Err(err) => {
                    tracing::error!("profile update failed: {err}");
                    notify_error(
                        &mut notices,
                        "Update failed",
                        "Something went wrong while updating your profile",
                    );
                    // Re-run validation so field errors are fresh; the verdict
                    // itself is not used here.
                    let _ = form.write().validate_all();
                }
            }

            progress_finish(&mut progress);
            busy.set(Busy::Idle);
        });
    };

    let handle_avatar = move |evt: FormEvent| {
        spawn(async move {
            if busy() != Busy::Idle {
                return;
            }
            let Some(user) = record() else {
                return;
            };
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };

            // Size gate comes first: an oversized file never leaves the browser.
            if exceeds_avatar_limit(file.size()) {
                notify_error(
                    &mut notices,
                    "Upload failed",
                    "Avatar images must be 3 MB or smaller",
                );
                return;
            }

            busy.set(Busy::Uploading);
            progress_start(&mut progress);

            let name = file.name();
            let outcome = async {
                let bytes = file.read_bytes().await.map_err(|e| e.to_string())?;
                let url = data_url(mime_from_name(&name), &bytes);
                avatar.write().stage(url.clone(), name.clone());
                api::update_user(UserUpdate::avatar_only(user.id.clone(), url))
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;

            match outcome {
                Ok(patch) => {
                    avatar.write().resolve_success(patch.avatar.clone());
                    if let Some(current) = record.write().as_mut() {
                        patch.apply(current);
                    }
                    notify_success(&mut notices, "Saved", "Your avatar has been updated");
                }
                Err(err) => {
                    tracing::error!("avatar upload failed: {err}");
                    avatar.write().resolve_failure();
                    notify_error(
                        &mut notices,
                        "Upload failed",
                        "Something went wrong while updating your avatar",
                    );
                }
            }

            progress_finish(&mut progress);
            busy.set(Busy::Idle);
        });
    };

    let current = record();
    let avatar_state = avatar();
    let avatar_url = avatar_state.display_url().map(str::to_string);
    let upload_label = avatar_state
        .pending_name()
        .unwrap_or("Click to replace avatar")
        .to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            div {
                class: "view-header",
                div {
                    h1 { class: "view-title", "Edit user" }
                    if let Some(ref user) = current {
                        p { class: "view-subtitle", "{user.email}" }
                    }
                }
                button {
                    class: "secondary",
                    onclick: move |_| {
                        nav.go_back();
                    },
                    "Back"
                }
            }

            if phase() == LoadPhase::Loading {
                p { class: "view-muted", "Loading user..." }
            }

            if let Some(user) = current {
                div {
                    class: "profile-grid",

                    div {
                        class: "profile-avatar",
                        if let Some(ref url) = avatar_url {
                            img {
                                class: "avatar-image",
                                src: "{url}",
                                alt: "User avatar",
                            }
                        } else {
                            div { class: "avatar-placeholder" }
                        }
                        label {
                            class: "avatar-upload",
                            input {
                                r#type: "file",
                                accept: "image/png,image/jpg,image/jpeg",
                                disabled: busy() != Busy::Idle,
                                onchange: handle_avatar,
                            }
                            span { "{upload_label}" }
                        }
                    }

                    form {
                        class: "profile-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            label { "Full name" }
                            input {
                                r#type: "text",
                                placeholder: "{user.name}",
                                value: "{form().name}",
                                oninput: move |evt| form.write().set_name(evt.value()),
                            }
                            if let Some(err) = form().errors.name {
                                p { class: "field-error", "{err}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { "Email" }
                            input {
                                r#type: "email",
                                placeholder: "{user.email}",
                                value: "{form().email}",
                                oninput: move |evt| form.write().set_email(evt.value()),
                            }
                            if let Some(err) = form().errors.email {
                                p { class: "field-error", "{err}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { "Password" }
                            input {
                                r#type: "password",
                                placeholder: "At least 8 characters",
                                value: "{form().password}",
                                oninput: move |evt| form.write().set_password(evt.value()),
                            }
                            if let Some(err) = form().errors.password {
                                p { class: "field-error", "{err}" }
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                r#type: "submit",
                                class: "primary",
                                disabled: busy() != Busy::Idle,
                                if busy() == Busy::Submitting { "Saving..." } else { "Update profile" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_route_id_is_rejected_before_fetching() {
        assert_eq!(route_id(None), None);
        assert_eq!(route_id(Some("")), None);
        assert_eq!(route_id(Some("42")), Some("42".to_string()));
    }
}
