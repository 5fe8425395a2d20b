//! Profile-editing domain logic, decoupled from rendering so it can be tested
//! without a browser.

mod form;
pub use form::{validate_email, validate_name, validate_password, FieldErrors, ProfileForm};

mod avatar;
pub use avatar::{
    data_url, exceeds_avatar_limit, mime_from_name, AvatarState, LocalPreview, MAX_AVATAR_BYTES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use api::{UserInfo, UserPatch};

    // The full edit flow from the view's perspective: load a record, submit a
    // name change, merge the server's patch back in.
    #[test]
    fn edit_flow_merges_response_into_loaded_record() {
        let mut record = UserInfo {
            id: "42".to_string(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            avatar: Some("u1".to_string()),
        };

        let mut form = ProfileForm::default();
        form.set_name("Ann B".to_string());
        assert!(form.validate_all());

        let update = form.to_update(&record.id);
        assert_eq!(update.id, "42");
        assert_eq!(update.name.as_deref(), Some("Ann B"));
        assert_eq!(update.email, None);
        assert_eq!(update.password, None);
        assert_eq!(update.avatar, None);

        let patch = UserPatch {
            name: Some("Ann B".to_string()),
            email: None,
            avatar: None,
        };
        patch.apply(&mut record);

        assert_eq!(
            record,
            UserInfo {
                id: "42".to_string(),
                name: "Ann B".to_string(),
                email: "a@x.com".to_string(),
                avatar: Some("u1".to_string()),
            }
        );
    }

    #[test]
    fn avatar_flow_clears_pending_on_both_outcomes() {
        let mut avatar = AvatarState::from_remote(Some("u1".to_string()));

        // Failure: preview goes away, the confirmed image survives.
        avatar.stage("data:image/png;base64,AAAA".to_string(), "new.png".to_string());
        assert_eq!(avatar.display_url(), Some("data:image/png;base64,AAAA"));
        avatar.resolve_failure();
        assert_eq!(avatar.display_url(), Some("u1"));

        // Success: the server echo becomes the confirmed image.
        avatar.stage("data:image/png;base64,BBBB".to_string(), "new.png".to_string());
        avatar.resolve_success(Some("data:image/png;base64,BBBB".to_string()));
        assert_eq!(avatar.pending, None);
        assert_eq!(avatar.display_url(), Some("data:image/png;base64,BBBB"));
    }
}
