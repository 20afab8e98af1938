mod dispatch;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workflow::{DEFAULT_WEBHOOK_URL, DeliveryMode, EmailForm, Notice, NoticeLevel};

use dispatch::ReqwestTransport;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read content: {0}")]
    ReadContent(#[from] io::Error),
    #[error("http client build failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mailhook-cli", about = "Trigger the email workflow webhook from a terminal")]
struct Cli {
    #[arg(long, env = "MAILHOOK_WEBHOOK_URL", default_value = DEFAULT_WEBHOOK_URL)]
    webhook_url: String,

    #[arg(long, env = "MAILHOOK_DELIVERY_MODE", default_value_t = DeliveryMode::Checked)]
    mode: DeliveryMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post one subject + content pair to the webhook.
    Send(SendArgs),
}

#[derive(Args, Debug)]
struct SendArgs {
    #[arg(long)]
    subject: String,

    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    content: Option<String>,

    #[arg(long, help = "Read content from a file, or - for stdin")]
    content_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(notice) => {
            let text = format_notice(&notice);
            if notice.is_success() {
                println!("{text}");
            } else {
                eprintln!("{text}");
            }
            ExitCode::from(exit_status(notice.level))
        }
        Err(e) => {
            tracing::error!(error = %e, "mailhook-cli failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Notice, CliError> {
    match cli.command {
        Command::Send(args) => {
            let content = resolve_content(&args)?;
            let transport = ReqwestTransport::new(cli.webhook_url)?;
            tracing::debug!(url = transport.url(), mode = %cli.mode, "sending");

            let mut form = EmailForm::new();
            form.set_subject(args.subject);
            form.set_content(content);
            Ok(dispatch::submit(&mut form, &transport, cli.mode).await)
        }
    }
}

fn resolve_content(args: &SendArgs) -> Result<String, CliError> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    match args.content_file.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}

fn format_notice(notice: &Notice) -> String {
    let mut out = format!("{}: {}", notice.level.as_str(), notice.title);
    if let Some(description) = &notice.description {
        out.push_str("\n  ");
        out.push_str(description);
    }
    out
}

fn exit_status(level: NoticeLevel) -> u8 {
    match level {
        NoticeLevel::Success => 0,
        NoticeLevel::Error => 1,
        NoticeLevel::Warning => 2,
    }
}
