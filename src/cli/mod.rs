//! Command-line interface for repurpose.
//!
//! Provides console generation, the interactive web form, and a
//! configuration dump.

use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::{OpenAiAdapter, TavilyAdapter};
use crate::config::ResolvedConfig;
use crate::core::ContentPipeline;
use crate::domain::ContentBundle;
use crate::web;

/// repurpose - research a topic, write a blog post, and repurpose it
#[derive(Parser, Debug)]
#[command(name = "repurpose")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a blog post, tweet thread, caption, and video script
    Generate {
        /// Blog topic (prompted for on stdin if not provided)
        topic: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Serve the interactive web form
    Serve {
        /// Address to bind to (overrides config)
        #[arg(short, long)]
        address: Option<SocketAddr>,
    },

    /// Show resolved configuration
    Config,
}

/// How console output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled text sections
    Text,

    /// The full run as JSON
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self, config: ResolvedConfig) -> Result<()> {
        match self.command {
            Commands::Generate { topic, format } => {
                let pipeline = build_pipeline(&config);
                let stdin = io::stdin();
                let stdout = io::stdout();
                generate(&pipeline, topic, format, &mut stdin.lock(), &mut stdout.lock()).await
            }
            Commands::Serve { address } => {
                let pipeline = Arc::new(build_pipeline(&config));
                web::serve(pipeline, address.unwrap_or(config.bind)).await
            }
            Commands::Config => {
                print!("{}", describe_config(&config));
                Ok(())
            }
        }
    }
}

/// Construct both service clients once and hand them to the pipeline
pub fn build_pipeline(config: &ResolvedConfig) -> ContentPipeline {
    let search = TavilyAdapter::with_base_url(
        config.secrets.tavily_api_key.clone(),
        config.search_base_url.clone(),
    );
    let model = OpenAiAdapter::with_options(
        config.secrets.openai_api_key.clone(),
        config.model_base_url.clone(),
        config.model.clone(),
    );

    ContentPipeline::from_adapters(Arc::new(search), Arc::new(model))
        .with_derivative_mode(config.derivatives)
}

/// Run the pipeline once and write the result.
///
/// The topic is read from `input` when not given. Artifacts are written to
/// `output` only after the whole run succeeds, so a failed run leaves nothing
/// but the prompt behind.
pub async fn generate<R: BufRead, W: Write>(
    pipeline: &ContentPipeline,
    topic: Option<String>,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let topic = match topic {
        Some(topic) => topic,
        None => read_topic(input, output)?,
    };

    let bundle = pipeline
        .run(&topic)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let rendered = match format {
        OutputFormat::Text => render_console(&bundle),
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&bundle).context("Failed to serialize run")?
        ),
    };
    output
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    output.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Prompt for and read a single line
fn read_topic<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Enter a blog topic: ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read topic from stdin")?;

    Ok(line)
}

/// Render the four artifacts as labeled sections, blog first
pub fn render_console(bundle: &ContentBundle) -> String {
    let mut out = String::new();
    for artifact in bundle.artifacts() {
        out.push('\n');
        out.push_str(artifact.kind.console_header());
        out.push_str("\n\n");
        out.push_str(&artifact.content);
        out.push('\n');
    }
    out
}

/// Human-readable configuration summary (secrets are never shown)
fn describe_config(config: &ResolvedConfig) -> String {
    let config_file = config
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    format!(
        "Config file:      {}\n\
         Model:            {}\n\
         Model endpoint:   {}\n\
         Search endpoint:  {}\n\
         Derivatives:      {:?}\n\
         Web bind address: {}\n\
         OPENAI_API_KEY:   set\n\
         TAVILY_API_KEY:   set\n",
        config_file,
        config.model,
        config.model_base_url,
        config.search_base_url,
        config.derivatives,
        config.bind,
    )
}
