use const_format::concatcp;

pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

/// Name of the path parameter carrying a user id
pub const USER_ID_PARAM: &str = "_id";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
    Ping,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:", USER_ID_PARAM, "/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:", USER_ID_PARAM, "/logs"),
            Ping => concatcp!(API_BASE_PATH, "ping"),
        }
    }
}
