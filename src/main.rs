#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tracing_subscriber::{fmt, EnvFilter};

use mindvest::assistant::{create_assistant, Assistant};
use mindvest::selector::{default_templates, quick_questions};
use mindvest::session::{Message, Role, Topic};
use mindvest::Config;

/// `MindVest` - health, finance, and study coaching in your terminal.
#[derive(Parser, Debug)]
#[command(name = "mindvest")]
#[command(version)]
#[command(about = "Personal assistant for health, finance, and study questions.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a chat session
    #[command(long_about = "\
Start a chat session.

Opens an interactive conversation with the assistant. Use --message \
for a single exchange without entering interactive mode.

Examples:
  mindvest chat                         # interactive session
  mindvest chat -m \"budget tips?\"       # single exchange
  mindvest chat -m \"exam prep\" --json   # transcript as JSON")]
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,

        /// Print the transcript as JSON when the session ends
        #[arg(long)]
        json: bool,
    },

    /// List response topics and their trigger keywords
    Topics,

    /// Show system status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging - respects RUST_LOG env var, defaults to INFO
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::load_or_init().await?;

    match cli.command {
        Commands::Chat { message, json } => run_chat(&config, message, json).await,

        Commands::Topics => {
            println!("Response topics:\n");
            for template in default_templates() {
                println!(
                    "  {:<8} triggers: {}",
                    template.category.as_str(),
                    template.keywords.join(", ")
                );
            }
            println!("  {:<8} fallback when nothing else matches", "general");
            Ok(())
        }

        Commands::Status => {
            println!("MindVest Status");
            println!();
            println!("Version:      {}", env!("CARGO_PKG_VERSION"));
            println!("Config:       {}", config.config_path.display());
            println!("Reply delay:  {} ms", config.assistant.reply_delay_ms);
            println!(
                "Greeting:     {}",
                if config.assistant.seed_greeting { "on" } else { "off" }
            );
            println!("Templates:    {}", default_templates().len());
            Ok(())
        }
    }
}

fn topic_label(topic: Topic) -> console::StyledObject<&'static str> {
    let label = topic.as_str();
    match topic {
        Topic::Health => style(label).red(),
        Topic::Finance => style(label).yellow(),
        Topic::Study => style(label).green(),
        Topic::General => style(label).cyan(),
    }
}

fn print_assistant_message(message: &Message) {
    let topic = message.category.unwrap_or(Topic::General);
    println!("[{}] {}\n", topic_label(topic), message.content);
}

async fn print_latest_reply(assistant: &Assistant) -> Result<()> {
    let reply = assistant
        .messages()
        .await?
        .into_iter()
        .rev()
        .find(|m| m.role == Role::Assistant);
    if let Some(reply) = reply {
        print_assistant_message(&reply);
    }
    Ok(())
}

async fn print_transcript_json(assistant: &Assistant) -> Result<()> {
    let messages = assistant.messages().await?;
    println!("{}", serde_json::to_string_pretty(&messages)?);
    Ok(())
}

async fn run_chat(config: &Config, message: Option<String>, json: bool) -> Result<()> {
    let assistant = create_assistant(&config.assistant).await?;

    // Single exchange mode
    if let Some(message) = message {
        if !assistant.submit_user_text(&message).await? {
            anyhow::bail!("message must not be empty");
        }
        assistant.flush().await?;
        assistant.close().await?;
        if json {
            print_transcript_json(&assistant).await?;
        } else {
            print_latest_reply(&assistant).await?;
        }
        return Ok(());
    }

    for greeting in assistant.messages().await? {
        print_assistant_message(&greeting);
    }
    println!("{}", style("Try asking:").dim());
    for quick in quick_questions() {
        println!("  {} {}", style("-").dim(), quick.question);
    }
    println!("{}\n", style("Type /quit to leave.").dim());

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = line.trim();
        if trimmed == "/quit" || trimmed == "/exit" {
            break;
        }
        if !assistant.submit_user_text(trimmed).await? {
            continue;
        }
        assistant.flush().await?;
        print_latest_reply(&assistant).await?;
    }

    assistant.close().await?;
    if json {
        print_transcript_json(&assistant).await?;
    }
    Ok(())
}
