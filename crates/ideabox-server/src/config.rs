use std::net::SocketAddr;

use clap::Parser;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,ideabox=debug";

#[derive(Parser, Debug, Clone)]
#[command(name = "ideabox-server")]
#[command(about = "Marketing-copy generation API over DeepSeek and Tongyi", version)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "IDEABOX_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Deployment label reported by `/api/health`.
    #[arg(long, env = "IDEABOX_ENV", default_value = "development")]
    pub environment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = ServerArgs::try_parse_from([
            "ideabox-server",
            "--bind",
            "0.0.0.0:8080",
            "--environment",
            "production",
        ])
        .unwrap();
        assert_eq!(args.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(args.environment, "production");
    }

    #[test]
    fn rejects_bad_address() {
        assert!(ServerArgs::try_parse_from(["ideabox-server", "--bind", "nope"]).is_err());
    }
}
