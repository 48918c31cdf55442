// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::ConfigManager;
use crate::core::ServiceClient;
use crate::types::Platform;
use crate::view::{AnalysisHolder, Lang, Panel, PanelUpdate, ViewController};
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "jobguardian")]
#[command(about = "Job posting fraud checks against the JobGuardian backend")]
pub struct Cli {
    /// Backend base URL, overriding config.yaml and BACKEND_URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Label language for printed results (en, hi, bn)
    #[arg(long, global = true, default_value = "en")]
    pub lang: Lang,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the web UI (default)
    Serve,
    /// Analyze pasted job posting text
    AnalyzeText {
        text: String,
        /// Save the PDF report of this analysis
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Extract a job posting from a URL and analyze it
    AnalyzeUrl {
        url: String,
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Look a company up in the fraud database
    SearchCompany { name: String },
    /// Analyze a LinkedIn, Indeed or Glassdoor posting
    Platform {
        platform: Platform,
        url: String,
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let config = match cli.backend_url {
        Some(url) => config.with_backend_url(url)?,
        None => config,
    };

    let lang = cli.lang;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config).await,
        Command::AnalyzeText { text, export } => {
            let session = OneShot::new(&config)?;
            let update = session.view.analyze_text(lang, &session.holder, &text).await;
            session.finish(update, export).await
        }
        Command::AnalyzeUrl { url, export } => {
            let session = OneShot::new(&config)?;
            let update = session.view.analyze_url(lang, &session.holder, &url).await;
            session.finish(update, export).await
        }
        Command::SearchCompany { name } => {
            let session = OneShot::new(&config)?;
            let update = session.view.search_company(lang, &name).await;
            session.finish(update, None).await
        }
        Command::Platform {
            platform,
            url,
            export,
        } => {
            let session = OneShot::new(&config)?;
            let update = session
                .view
                .analyze_platform(lang, &session.holder, platform, &url)
                .await;
            session.finish(update, export).await
        }
    }
}

/// A single command-line action with its own throwaway session
struct OneShot {
    view: ViewController,
    holder: AnalysisHolder,
}

impl OneShot {
    fn new(config: &ConfigManager) -> Result<Self> {
        let client = ServiceClient::new(&config.backend.url, config.backend.timeout_seconds)?;
        let view = ViewController::new(Arc::new(client))
            .with_linkedin_dedicated_endpoint(config.backend.linkedin_dedicated_endpoint);

        Ok(Self {
            view,
            holder: AnalysisHolder::new(),
        })
    }

    /// Print the fragment, then save the report when asked to
    async fn finish(self, update: PanelUpdate, export: Option<PathBuf>) -> Result<()> {
        print_update(&update)?;

        let Some(path) = export else {
            return Ok(());
        };

        let download = match self
            .view
            .export_report(&self.holder, Panel::JobAnalysis)
            .await
        {
            Ok(download) => download,
            Err(failure) => return print_update(&failure),
        };
        tokio::fs::write(&path, &download.bytes)
            .await
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        info!("Saved report to {}", path.display());
        println!("Report saved to {}", path.display());
        Ok(())
    }
}

fn print_update(update: &PanelUpdate) -> Result<()> {
    print!("{}", update.html());
    if update.is_error() {
        anyhow::bail!("{:?} action failed", update.panel);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_command() {
        let cli = Cli::try_parse_from([
            "jobguardian",
            "--backend-url",
            "http://backend:5000",
            "platform",
            "glassdoor",
            "https://www.glassdoor.com/job/1",
            "--export",
            "report.pdf",
        ])
        .unwrap();

        assert_eq!(cli.backend_url.as_deref(), Some("http://backend:5000"));
        assert_eq!(cli.lang, Lang::En);
        match cli.command {
            Some(Command::Platform {
                platform,
                url,
                export,
            }) => {
                assert_eq!(platform, Platform::Glassdoor);
                assert_eq!(url, "https://www.glassdoor.com/job/1");
                assert_eq!(export, Some(PathBuf::from("report.pdf")));
            }
            _ => panic!("expected platform command"),
        }
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["jobguardian"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_lang_option() {
        let cli = Cli::try_parse_from(["jobguardian", "search-company", "fakecorp", "--lang", "hi"])
            .unwrap();
        assert_eq!(cli.lang, Lang::Hi);
        assert!(Cli::try_parse_from(["jobguardian", "--lang", "fr"]).is_err());
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!(Cli::try_parse_from(["jobguardian", "platform", "monster", "https://x"]).is_err());
    }
}
