mod state;
pub use state::*;

mod args;
pub use args::*;

mod from_ref;
