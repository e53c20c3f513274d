mod create_user;
pub use create_user::*;

mod list_users;
pub use list_users::*;

mod create_exercise;
pub use create_exercise::*;

mod fetch_logs;
pub use fetch_logs::*;
