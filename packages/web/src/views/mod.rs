mod login;
pub use login::Login;

mod users;
pub use users::AdminUsers;

mod edit_user;
pub use edit_user::EditUser;
