use std::env;
use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use hubullu_config::Config;
use hubullu_core::Vocabulary;
use hubullu_source_sanakirja::SanakirjaTranslator;
use hubullu_translator::Translator;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod io;
pub mod prompt;
pub mod render;
pub mod state;

use self::render::Renderer;
use self::state::Session;

#[derive(Parser)]
#[command(name = "hubullu")]
#[command(version)]
#[command(about = "A CLI for looking up words")]
struct Cli {
    /// Language to translate from, as a code (de) or English name (german)
    #[arg(value_name = "SOURCE_LANG")]
    source_lang: Option<String>,

    /// Language to translate into
    #[arg(value_name = "TARGET_LANG")]
    target_lang: Option<String>,

    /// File to load/save vocabulary
    #[arg(short = 'v', long)]
    vocab: Option<PathBuf>,

    /// Config file (default is $HOME/.hubullu.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Command line flags take precedence over config file and environment
    fn apply(&self, mut config: Config) -> Config {
        if let Some(lang) = &self.source_lang {
            config.translator.source_lang = Some(lang.clone());
        }
        if let Some(lang) = &self.target_lang {
            config.translator.target_lang = Some(lang.clone());
        }
        if let Some(vocab) = &self.vocab {
            config.vocabulary.file = Some(vocab.clone());
        }
        if self.no_color {
            config.ui.color = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.apply(Config::load(cli.config.as_deref())?);

    // Load failures must surface before the prompt starts
    let vocabulary = match &config.vocabulary.file {
        Some(path) => Vocabulary::load(path)
            .with_context(|| format!("could not open vocabulary {}", path.display()))?,
        None => Vocabulary::new(),
    };

    let translators = build_translators(&config)?;

    let color = config.ui.color && atty::is(atty::Stream::Stdout);
    colored::control::set_override(color);
    let renderer = Renderer::new(color, config.ui.max_backtranslations);

    let mut session = Session::new(
        vocabulary,
        translators,
        config.vocabulary.directory.clone(),
        renderer,
    );

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown requested");
        ctrl_c.cancel();
    });

    let lines = io::spawn_stdin_reader();
    prompt::run(&mut session, lines, cancel, &mut stdout()).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr);

    if env::var("HUBULLU_LOG_FORMAT").is_ok_and(|v| v == "json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_translators(config: &Config) -> anyhow::Result<Vec<Arc<dyn Translator>>> {
    let (source, target) = config.language_pair()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.network.timeout_seconds))
        .user_agent(config.network.user_agent.as_str())
        .build()
        .context("failed to build HTTP client")?;

    let sanakirja = SanakirjaTranslator::from_codes(
        client,
        &config.translator.sanakirja_url,
        source,
        target,
    )?;
    tracing::info!("Translating {source} -> {target} via {}", sanakirja.name());

    let sanakirja: Arc<dyn Translator> = Arc::new(sanakirja);
    Ok(vec![sanakirja])
}

#[cfg(test)]
mod tests;
