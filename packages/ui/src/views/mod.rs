mod edit_profile;
pub use edit_profile::EditProfileView;

mod users;
pub use users::UsersView;

mod login;
pub use login::LoginView;
