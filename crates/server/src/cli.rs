use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "8")]
    pub database_pool_size: usize,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Largest request body accepted, in bytes
    #[clap(long, env, default_value = "16384")]
    pub max_body_bytes: usize,

    /// Respond 404 when a user id doesn't exist instead of an empty object
    #[arg(long, env, default_value = "false")]
    pub strict_not_found: bool,
}
