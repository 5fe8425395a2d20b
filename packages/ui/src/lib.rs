//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{replace_session_user, use_session, LogoutButton, SessionProvider, SessionState};

mod notifications;
pub use notifications::{
    notify_error, notify_success, use_notifications, Notice, NoticeLevel, NoticeStack,
    NotificationProvider,
};

mod progress;
pub use progress::{
    progress_finish, progress_start, use_progress, ProgressProvider, ProgressState,
};

pub mod profile;

pub mod views;
