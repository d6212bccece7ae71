// TransLingua - AI-powered multilingual translation backed by Google Gemini
// Author: kelexine (https://github.com/kelexine)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use translingua::cli::{Args, Command};
use translingua::config::AppConfig;
use translingua::gemini::{GeminiClient, CONNECTIVITY_PROMPT};
use translingua::models::{TranslationResult, TranslationStats};
use translingua::server::create_router;
use translingua::translation::Translator;
use translingua::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Phase 1: Pick up GOOGLE_API_KEY and friends from .env
    dotenv::dotenv().ok();

    // Phase 2: Parse CLI arguments and load configuration
    let args = Args::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;

    // Phase 3: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting translingua v{}", env!("CARGO_PKG_VERSION"));

    match args.subcommand() {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Translate {
            source_language,
            target_language,
            text,
        } => translate_once(&config, &source_language, &target_language, text).await,
        Command::Models => list_models(&config).await,
        Command::Check => check(&config).await,
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn gemini_client(config: &AppConfig) -> Result<GeminiClient> {
    // Missing key is fatal before anything reaches the pipeline
    config.require_api_key()?;
    Ok(GeminiClient::new(&config.gemini, &config.logging)?)
}

async fn serve(config: AppConfig) -> Result<()> {
    let client = gemini_client(&config)?;
    info!("Using Gemini model {}", client.model());
    let translator = Translator::new(Arc::new(client));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    let app = create_router(config, translator);

    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn translate_once(
    config: &AppConfig,
    source_language: &str,
    target_language: &str,
    text: Option<String>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let translator = Translator::new(Arc::new(gemini_client(config)?));
    match translator.translate(&text, source_language, target_language).await {
        TranslationResult::Success { translated_text } => {
            println!("{}", translated_text);
            let stats = TranslationStats::compute(&text, &translated_text);
            eprintln!(
                "Source characters: {} | Translated characters: {} | Words: {}",
                stats.source_characters, stats.translated_characters, stats.words
            );
            Ok(())
        }
        TranslationResult::Failure { kind, message } => bail!("{} ({})", message, kind),
    }
}

async fn list_models(config: &AppConfig) -> Result<()> {
    let client = gemini_client(config)?;
    let models = client.list_models().await?;

    println!("Available models:");
    for model in models.iter().filter(|m| m.supports_generate_content()) {
        println!("{}", model.name);
    }
    Ok(())
}

async fn check(config: &AppConfig) -> Result<()> {
    let client = gemini_client(config)?;
    info!("Sending \"{}\" to {}", CONNECTIVITY_PROMPT, client.model());

    let (latency, reply) = client.check_connectivity().await?;
    println!("SUCCESS ({} ms)", latency.as_millis());
    println!("{}", reply.trim());
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
