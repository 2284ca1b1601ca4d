// src/bin/view.rs

use anyhow::Context;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::EnvFilter;
use url::Url;

use portfolio_api::clipboard::{self, CopyOutcome};
use portfolio_api::content::PROFILE;
use portfolio_api::view::{self, BackendStatus};

/// Terminal rendition of the portfolio page, with a one-shot backend
/// status check.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the status server
    #[arg(
        long,
        env = "PORTFOLIO_API_URL",
        default_value = "http://localhost:4000"
    )]
    api_url: Url,

    /// Copy the contact email to the clipboard
    #[arg(long)]
    copy_email: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_api=info".into()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let client = Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    // Kick off the health check before rendering so it overlaps the output.
    let mut status = view::mount(client, args.api_url.clone());

    render_portfolio();

    println!("Backend status: {}", status.status().summary());
    let settled = status.settled().await;
    println!("Backend status: {}", settled.summary());
    if let BackendStatus::Error(err) = &settled {
        println!("  ({err})");
        println!("  Tip: start the backend with `cargo run --bin portfolio-api` (it runs on port 4000).");
    }

    if args.copy_email {
        match clipboard::copy_with_defaults(PROFILE.email) {
            CopyOutcome::Copied { via } => println!("Email copied to clipboard ({via})"),
            CopyOutcome::Manual(text) => println!("Copy this email: {text}"),
        }
    }

    Ok(())
}

fn render_portfolio() {
    println!("Hi, I'm {} 👋", PROFILE.name);
    println!("{}", PROFILE.tagline);
    println!();

    println!("About Me");
    println!("  {}", PROFILE.about);
    println!();

    println!("Skills");
    for skill in PROFILE.skills {
        println!("  - {skill}");
    }
    println!();

    println!("Projects");
    for project in PROFILE.projects {
        println!("  {} — {}", project.title, project.summary);
    }
    println!();

    println!("Contact");
    println!("  Email:    {}", PROFILE.email);
    println!("  GitHub:   {}", PROFILE.github);
    println!("  LinkedIn: {}", PROFILE.linkedin);
    println!();
}
