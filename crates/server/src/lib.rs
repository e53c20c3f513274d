pub mod cli;
pub mod db;
pub mod extract;
pub mod routes;
pub mod store;

mod state;
pub use state::*;

pub use routes::router;
