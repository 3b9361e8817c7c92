use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use giftchat::cli::run_terminal_chat;
use giftchat::connector::http;
use giftchat::connector::Router;
use giftchat::{
    AssistantBackend, Commands, Container, ContainerConfig, HttpBackend, PromptLocale,
};

#[derive(Parser)]
#[command(name = "giftchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// User profile text file, consulted on every chat completion
    #[arg(long, global = true, default_value = "data/user-profile.txt")]
    profile: PathBuf,

    /// Language of the system prompt and fixed chat messages (en, pl)
    #[arg(long, global = true, default_value = "en")]
    locale: PromptLocale,

    /// Model identifier (overrides OPENROUTER_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Use canned offline replies instead of calling the provider
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        profile_path: cli.profile,
        locale: cli.locale,
        mock_llm: cli.mock_llm,
        model: cli.model,
    });

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                Ipv4Addr::UNSPECIFIED
            } else {
                Ipv4Addr::LOCALHOST
            };
            let listener = tokio::net::TcpListener::bind(SocketAddr::from((ip, port))).await?;
            info!(
                "Relaying to model {} (profile: {})",
                container.model(),
                container.profile_path().display()
            );
            http::serve(listener, Arc::new(container), async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down");
            })
            .await?;
        }
        Commands::Chat { server } => {
            let backend: Box<dyn AssistantBackend> = match server {
                Some(url) => {
                    info!("Using chat server at {}", url);
                    Box::new(HttpBackend::new(url))
                }
                None => Box::new(container.local_backend()),
            };
            run_terminal_chat(backend.as_ref(), container.locale()).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
