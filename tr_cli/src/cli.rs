use clap::Parser;
use clap::Subcommand;
use tr_core::server::default_config::DEFAULT_CLI_BACKEND_URL;

#[derive(Parser, Debug)]
#[command(version, about = "Client for the trickle streaming server", long_about = None)]
pub struct Cli {
    /// Base url of the backend
    #[arg(short, long, global = true, default_value = DEFAULT_CLI_BACKEND_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a prompt and print the reply as it streams in
    Stream {
        #[arg()]
        prompt: String,
        /// Extra per-character delay when printing, in milliseconds
        #[arg(short, long, default_value_t = 0)]
        typewriter_ms: u64,
    },
    /// Check that the backend is up
    Health,
    /// Show backend stream counters
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stream_command() {
        let cli = Cli::parse_from(["cli-trickle", "stream", "hello", "-t", "5"]);
        assert_eq!(cli.url, DEFAULT_CLI_BACKEND_URL);
        match cli.command {
            Commands::Stream {
                prompt,
                typewriter_ms,
            } => {
                assert_eq!(prompt, "hello");
                assert_eq!(typewriter_ms, 5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_url_after_subcommand() {
        let cli = Cli::parse_from(["cli-trickle", "health", "--url", "http://10.0.0.2:9090"]);
        assert_eq!(cli.url, "http://10.0.0.2:9090");
        assert!(matches!(cli.command, Commands::Health));
    }
}
