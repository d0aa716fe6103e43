//! Paste API server entrypoint.

use pastebin_server::{config::Config, serve_router, AppState, DEFAULT_PORT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliFlags {
    help: bool,
    test_mode: bool,
}

fn parse_cli_flags(args: &[String]) -> anyhow::Result<CliFlags> {
    let mut flags = CliFlags::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" => flags.help = true,
            "--test-mode" => flags.test_mode = true,
            value if value.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
            value => {
                anyhow::bail!(
                    "Unexpected positional argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(flags)
}

fn apply_cli_flags(mut config: Config, flags: CliFlags) -> Config {
    if flags.test_mode {
        config.test_mode = true;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pastebin=info,pastebin_server=info,pastebin_core=info,tower_http=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli_flags = parse_cli_flags(&args)?;

    if cli_flags.help {
        print_help();
        return Ok(());
    }

    let config = apply_cli_flags(Config::from_env(), cli_flags);
    if config.test_mode {
        tracing::warn!(
            "Test mode enabled - the {} header overrides the clock for expiry checks",
            pastebin_server::constants::TEST_NOW_HEADER
        );
    }

    let state = AppState::new(config.clone());

    let allow_public = pastebin_server::config::env_flag_enabled("ALLOW_PUBLIC_ACCESS");
    if allow_public {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_addr = pastebin_server::resolve_bind_address(&config, allow_public);
    if !bind_addr.ip().is_loopback() {
        tracing::warn!(
            "Binding to non-localhost address: {} - ensure proper security measures are in place",
            bind_addr
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("Pastebin running at http://{}", actual_addr);
    tracing::info!("Paste database will open at {} on first use", config.db_path);

    let store = state.store.clone();
    serve_router(listener, state, allow_public, shutdown_signal()).await?;

    if store.is_connected() {
        tracing::info!("Server stopped; closing paste database");
    } else {
        tracing::info!("Server stopped before the paste database was opened");
    }
    drop(store);

    Ok(())
}

fn print_help() {
    println!("Pastebin Server\n");
    println!("Usage: pastebin [OPTIONS]\n");
    println!("Options:");
    println!("  --test-mode       Honor the x-test-now-ms header for expiry checks");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  DB_PATH           Database directory (default: ~/.cache/pastebin-lite/db)");
    println!(
        "  PORT              Server port (default: {})",
        DEFAULT_PORT
    );
    println!("  MAX_PASTE_SIZE    Maximum paste size in bytes (default: 10MB)");
    println!("  TEST_MODE         Same as --test-mode when set to 1/true/yes/on");
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin");
    println!(
        "  BIND              Override bind address (e.g. 0.0.0.0:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_cli_flags, parse_cli_flags, CliFlags};
    use pastebin_server::config::Config;

    fn config(test_mode: bool) -> Config {
        Config {
            db_path: String::from("/tmp/pastebin-db"),
            port: 4040,
            max_paste_size: 1024,
            test_mode,
        }
    }

    #[test]
    fn parse_cli_flags_rejects_unknown_and_positional_arguments() {
        let cases = [
            (
                vec!["pastebin".to_string(), "--test-mod".to_string()],
                "Unknown option",
            ),
            (
                vec!["pastebin".to_string(), "serve".to_string()],
                "Unexpected positional argument",
            ),
        ];

        for (args, expected_fragment) in cases {
            let err = parse_cli_flags(&args).expect_err("invalid args should be rejected");
            assert!(err.to_string().contains(expected_fragment));
        }
    }

    #[test]
    fn parse_cli_flags_accepts_supported_options() {
        let args = vec![
            "pastebin".to_string(),
            "--test-mode".to_string(),
            "--help".to_string(),
        ];
        let flags = parse_cli_flags(&args).expect("known options should parse");
        assert_eq!(
            flags,
            CliFlags {
                help: true,
                test_mode: true,
            }
        );
    }

    #[test]
    fn test_mode_flag_only_turns_test_mode_on() {
        let forced = apply_cli_flags(config(false), CliFlags { test_mode: true, ..CliFlags::default() });
        assert!(forced.test_mode);

        let from_env = apply_cli_flags(config(true), CliFlags::default());
        assert!(from_env.test_mode);

        let off = apply_cli_flags(config(false), CliFlags::default());
        assert!(!off.test_mode);
    }
}
