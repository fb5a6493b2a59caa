use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notetaker_core::logging::{Sink, init_logging};
use notetaker_core::{Config, Role};
use notetaker_providers::{Backend, BackendFactory, HttpBackend};
use notetaker_ui::{App, ChatView, Controller, InputState};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Physician Notetaker - terminal client for the consultation backend
#[derive(Parser, Debug)]
#[command(name = "notetaker")]
#[command(about = "Chat with the physician notetaker backend from the terminal", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to notetaker.toml (default: ./notetaker.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write an example config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Start the interactive chat TUI
    Chat {
        /// Answer from a scripted mock backend instead of HTTP
        #[arg(long, value_name = "FILE")]
        mock: Option<PathBuf>,
    },
    /// Send one message and print the transcript and panels
    Send {
        #[arg(required = true, value_name = "MESSAGE")]
        message: String,

        /// Answer from a scripted mock backend instead of HTTP
        #[arg(long, value_name = "FILE")]
        mock: Option<PathBuf>,
    },
    /// Show configuration and backend health
    Status,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("notetaker.toml"));

    if let Commands::Init { force } = cli.command {
        return cmd_init(&config_path, force);
    }

    let mut config = load_or_create_config(&config_path)?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
    }

    let sink = match cli.command {
        Commands::Chat { .. } => Sink::FileOnly,
        _ => Sink::Stderr,
    };
    let _guard = init_logging(&config.logging, sink).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Chat { mock } => cmd_chat(&config, mock.as_deref()).await,
        Commands::Send { message, mock } => cmd_send(&config, message, mock.as_deref()).await,
        Commands::Status => cmd_status(&config, cli.verbose).await,
    }
}

/// Load config from file, applying env overrides, or create it from the example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path)
            .and_then(Config::with_env_overrides)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        println!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());
        println!("{} Creating config from example...", "Info:".blue().bold());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        println!(
            "{} Created config at {}. Check the backend URL and run again.",
            "Success:".green().bold(),
            path.display()
        );

        anyhow::bail!("Please review {} and run again", path.display())
    }
}

/// Write the example config
fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(path, Config::example()).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote {}", "Success:".green().bold(), path.display());
    Ok(())
}

fn backend_label(config: &Config, mock: Option<&Path>) -> String {
    match mock {
        Some(path) => format!("mock:{}", path.display()),
        None => config.backend.chat_url(),
    }
}

/// Run the interactive TUI
async fn cmd_chat(config: &Config, mock: Option<&Path>) -> Result<()> {
    let backend = BackendFactory::create(&config.backend, mock).context("Failed to create backend")?;
    let mut app = App::new(backend, backend_label(config, mock), config.logging.mask_patient_text);

    notetaker_ui::app::run(&mut app).await.context("TUI failed")?;
    Ok(())
}

/// One exchange through the controller; returns the resulting view
async fn send_once(config: &Config, message: String, mock: Option<&Path>) -> Result<ChatView> {
    let backend = BackendFactory::create(&config.backend, mock).context("Failed to create backend")?;
    let mut controller = Controller::new(config.logging.mask_patient_text);
    let mut view = ChatView { input: InputState::with_text(message), ..ChatView::default() };

    if !controller.exchange(&mut view, backend.as_ref()).await {
        anyhow::bail!("Message is empty");
    }
    Ok(view)
}

/// Send one message and print the result
async fn cmd_send(config: &Config, message: String, mock: Option<&Path>) -> Result<()> {
    let view = send_once(config, message, mock).await?;

    for msg in view.transcript.messages() {
        let label = match msg.role() {
            Role::Patient => msg.role().as_str().blue().bold().to_string(),
            Role::Physician => msg.role().as_str().purple().bold().to_string(),
        };
        println!("{} {}: {}", msg.time_label().dimmed(), label, msg.text());
    }

    if view.transcript.len() < 2 {
        println!("{} No reply received (details are in the log)", "Warning:".yellow().bold());
        return Ok(());
    }

    println!();
    println!("{}", view.panels_text());
    Ok(())
}

/// Show configuration and backend health
async fn cmd_status(config: &Config, verbose: bool) -> Result<()> {
    println!("{}", "Notetaker Status".green().bold().underline());
    println!();

    println!("{} Configuration", "Info:".blue().bold());
    println!("  Chat endpoint: {}", config.backend.chat_url().cyan());
    match config.backend.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }
    println!("  Log level: {}", config.logging.level.cyan());
    println!("  Patient text masked in logs: {}", config.logging.mask_patient_text);

    if verbose {
        println!("  Log format: {}", config.logging.format);
        if config.logging.file.enabled {
            let dir = notetaker_core::logging::log_dir().context("Failed to resolve log directory")?;
            println!("  Log file: {}/{}.log.*", dir.display(), config.logging.file.prefix);
        }
    }

    println!();
    let backend = HttpBackend::new(&config.backend).context("Failed to create backend")?;
    let health = backend.health().await;
    if health.healthy {
        println!(
            "{} Backend reachable ({} ms)",
            "Success:".green().bold(),
            health.latency_ms.to_string().cyan()
        );
    } else {
        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            health.error.unwrap_or_else(|| "Backend unreachable".to_string())
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["notetaker", "status"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_cli_with_config_and_verbose() {
        let cli = Cli::try_parse_from(["notetaker", "--config", "/etc/notetaker.toml", "-v", "status"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/notetaker.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_chat_command() {
        let cli = Cli::try_parse_from(["notetaker", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat { mock: None }));

        let cli = Cli::try_parse_from(["notetaker", "chat", "--mock", "replies.toml"]).unwrap();
        if let Commands::Chat { mock } = cli.command {
            assert_eq!(mock, Some(PathBuf::from("replies.toml")));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_send_command() {
        let cli = Cli::try_parse_from(["notetaker", "send", "I have a headache"]).unwrap();
        if let Commands::Send { message, mock } = cli.command {
            assert_eq!(message, "I have a headache");
            assert!(mock.is_none());
        } else {
            panic!("Expected Send command");
        }

        assert!(Cli::try_parse_from(["notetaker", "send"]).is_err());
    }

    #[test]
    fn test_cli_init_command() {
        let cli = Cli::try_parse_from(["notetaker", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }

    #[test]
    fn test_load_or_create_config_existing() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("notetaker.toml");
        std::fs::write(&config_path, Config::example()).unwrap();

        let config = load_or_create_config(&config_path).unwrap();
        assert_eq!(config.backend.chat_path, "/chat");
    }

    #[test]
    fn test_load_or_create_config_not_existing() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("notetaker.toml");

        assert!(load_or_create_config(&config_path).is_err());
        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[backend]"));
        assert!(content.contains("[logging]"));
    }

    #[test]
    fn test_load_or_create_config_invalid() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("notetaker.toml");
        std::fs::write(&config_path, "invalid toml").unwrap();

        let err = load_or_create_config(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_cmd_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("notetaker.toml");
        std::fs::write(&config_path, "# mine").unwrap();

        assert!(cmd_init(&config_path, false).is_err());
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine");

        cmd_init(&config_path, true).unwrap();
        assert!(Config::from_file(&config_path).is_ok());
    }

    #[test]
    fn test_backend_label() {
        let config = Config::default();
        assert_eq!(backend_label(&config, None), "http://127.0.0.1:5000/chat");
        assert_eq!(backend_label(&config, Some(Path::new("m.toml"))), "mock:m.toml");
    }

    #[tokio::test]
    async fn test_send_once_with_mock() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("mock.toml");
        std::fs::write(
            &script,
            r#"
[[responses]]
type = "reply"
body = { physician_reply = "Noted.", sentiment = "Anxious" }
"#,
        )
        .unwrap();

        let view = send_once(&Config::default(), "  I have a headache ".to_string(), Some(&script))
            .await
            .unwrap();

        assert_eq!(view.transcript.pairs(), vec![(Role::Patient, "I have a headache"), (Role::Physician, "Noted.")]);
        assert_eq!(view.sentiment.text, "Anxious");
        assert_eq!(view.summary.text, "No summary available.");
    }

    #[tokio::test]
    async fn test_send_once_rejects_blank_message() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("mock.toml");
        std::fs::write(&script, "responses = []\n").unwrap();

        let err = send_once(&Config::default(), "   ".to_string(), Some(&script)).await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
