mod delete_user;
mod list_users;
mod login_user;
mod register_user;
mod update_user;

pub use delete_user::delete_user_handler;
pub use list_users::list_users_handler;
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponseDto};
pub use register_user::{__path_register_user_handler, register_user_handler, SignupRequestDto, SignupResponseDto};
pub use update_user::update_user_handler;
