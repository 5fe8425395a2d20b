//! Two-state avatar value for the optimistic upload flow.
//!
//! `pending` is the locally staged preview shown the moment the user picks a
//! file; `confirmed` is the last server-acknowledged image. The pending value
//! is cleared when the update response arrives, on success and failure alike.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Hard upper bound on avatar uploads, checked before any network call.
pub const MAX_AVATAR_BYTES: u64 = 3_000_000;

pub fn exceeds_avatar_limit(size: u64) -> bool {
    size > MAX_AVATAR_BYTES
}

/// Encode image bytes as a `data:` URL. The same encoding serves as the local
/// preview and as the `avatar` field of the update payload.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guess the image MIME type from the picked file's name.
pub fn mime_from_name(name: &str) -> &'static str {
    match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/png",
    }
}

/// A locally created temporary preview, alive until the upload resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalPreview {
    pub url: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvatarState {
    pub pending: Option<LocalPreview>,
    pub confirmed: Option<String>,
}

impl AvatarState {
    pub fn from_remote(avatar: Option<String>) -> Self {
        Self {
            pending: None,
            confirmed: avatar,
        }
    }

    /// Stage an optimistic preview before the upload is sent.
    pub fn stage(&mut self, url: String, name: String) {
        self.pending = Some(LocalPreview { url, name });
    }

    /// The upload succeeded: the server echo becomes the confirmed image.
    pub fn resolve_success(&mut self, avatar: Option<String>) {
        if avatar.is_some() {
            self.confirmed = avatar;
        }
        self.pending = None;
    }

    /// The upload failed: drop the preview, keep the confirmed image.
    pub fn resolve_failure(&mut self) {
        self.pending = None;
    }

    /// What to show right now: the pending preview wins over the confirmed
    /// image.
    pub fn display_url(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .map(|p| p.url.as_str())
            .or(self.confirmed.as_deref())
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_exclusive_at_three_million_bytes() {
        assert!(!exceeds_avatar_limit(0));
        assert!(!exceeds_avatar_limit(MAX_AVATAR_BYTES));
        assert!(exceeds_avatar_limit(MAX_AVATAR_BYTES + 1));
    }

    #[test]
    fn data_url_encodes_mime_and_payload() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn mime_guess_from_extension() {
        assert_eq!(mime_from_name("photo.JPG"), "image/jpeg");
        assert_eq!(mime_from_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("photo.png"), "image/png");
        assert_eq!(mime_from_name("photo"), "image/png");
    }

    #[test]
    fn pending_wins_over_confirmed() {
        let mut avatar = AvatarState::from_remote(Some("remote".to_string()));
        assert_eq!(avatar.display_url(), Some("remote"));

        avatar.stage("local".to_string(), "pick.png".to_string());
        assert_eq!(avatar.display_url(), Some("local"));
        assert_eq!(avatar.pending_name(), Some("pick.png"));
    }

    #[test]
    fn failure_restores_the_confirmed_image() {
        let mut avatar = AvatarState::from_remote(Some("remote".to_string()));
        avatar.stage("local".to_string(), "pick.png".to_string());
        avatar.resolve_failure();
        assert_eq!(avatar.pending, None);
        assert_eq!(avatar.display_url(), Some("remote"));
    }

    #[test]
    fn success_confirms_the_server_echo() {
        let mut avatar = AvatarState::default();
        avatar.stage("local".to_string(), "pick.png".to_string());
        avatar.resolve_success(Some("echoed".to_string()));
        assert_eq!(avatar.pending, None);
        assert_eq!(avatar.display_url(), Some("echoed"));

        // A response without an avatar field keeps the previous image.
        avatar.stage("local2".to_string(), "pick.png".to_string());
        avatar.resolve_success(None);
        assert_eq!(avatar.display_url(), Some("echoed"));
    }
}
