use clap::Parser;
use std::path::PathBuf;

/// Travel planning assistant: routed specialists, flight and hotel search, weather
#[derive(Parser, Debug, Clone)]
#[command(name = "wayfarer", version, about, long_about = None)]
pub struct Cli {
    /// Settings file; prompt overrides are read from `config/agents/` next to it
    #[arg(short, long, env = "WAYFARER_CONFIG", default_value = "wayfarer.toml")]
    pub config: PathBuf,

    /// Address to bind (overrides `server.host`)
    #[arg(long, env = "WAYFARER_HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(long, env = "WAYFARER_PORT")]
    pub port: Option<u16>,

    /// Completion model (overrides `llm.model`)
    #[arg(short, long, env = "WAYFARER_MODEL")]
    pub model: Option<String>,
}
