//! Landing Leads - command-line driver.
//!
//! Runs one visitor submission through the real form controller, with the
//! terminal standing in for the browser:
//!
//! ```text
//! landing-leads <name> <phone> [--mobile] [--user-agent <ua>] [--no-popups]
//! ```

use anyhow::{bail, Result};
use landing_leads::client::{AsyncLeadClient, AsyncLeadClientImpl};
use landing_leads::controller::is_mobile_user_agent;
use landing_leads::diagnostics::{log_credential_report, JwtInspector};
use landing_leads::{
    Browser, Config, FormController, LeadApiClient, LeadSubmitterImpl, SubmitReport,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Browser stand-in that prints what a real page would do.
struct TerminalBrowser {
    popups_blocked: bool,
}

impl Browser for TerminalBrowser {
    fn set_location(&self, url: &str) {
        println!("redirect: {}", url);
    }

    fn open_window(&self, url: &str) -> bool {
        if self.popups_blocked {
            return false;
        }
        println!("open window: {}", url);
        true
    }

    fn alert(&self, message: &str) {
        println!("alert: {}", message);
    }
}

#[derive(Debug)]
struct CliArgs {
    name: String,
    phone: String,
    is_mobile: bool,
    popups_blocked: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut is_mobile = false;
    let mut popups_blocked = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mobile" => is_mobile = true,
            "--no-popups" => popups_blocked = true,
            "--user-agent" => match args.next() {
                Some(ua) => is_mobile = is_mobile_user_agent(&ua),
                None => bail!("--user-agent needs a value"),
            },
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            other => positional.push(other.to_string()),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([name, phone]) => Ok(CliArgs {
            name,
            phone,
            is_mobile,
            popups_blocked,
        }),
        Err(_) => bail!(
            "usage: landing-leads <name> <phone> [--mobile] [--user-agent <ua>] [--no-popups]"
        ),
    }
}

/// `RUST_LOG` wins; otherwise the configured log level.
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let loaded = Config::from_env();
    let log_level = match &loaded {
        Ok(cfg) => cfg.log_level.as_str(),
        Err(_) => "info",
    };

    // Logs go to stderr, stdout carries the navigation output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Lead API ({}): {}", config.api_environment, config.lead_api_url);
    log_credential_report(&JwtInspector, config.lead_api_token.as_deref());

    let client = AsyncLeadClientImpl::new(LeadApiClient::new(&config));
    let http_metrics = client.inner().metrics().clone();
    let client = Arc::new(client) as Arc<dyn AsyncLeadClient>;

    let submitter = Arc::new(LeadSubmitterImpl::new(&config, client));
    let status = submitter.configuration_status();
    info!(
        "Lead API configured: {} (token: {})",
        status.fully_configured, status.token_configured
    );

    let browser = Arc::new(TerminalBrowser {
        popups_blocked: args.popups_blocked,
    });
    let mut form = FormController::new(&config, submitter.clone(), browser, args.is_mobile);
    form.on_name_input(&args.name);
    form.on_phone_input(&args.phone);

    let report = form.submit().await;

    let http = http_metrics.summary();
    let leads = submitter.metrics().summary();
    tracing::debug!(
        "HTTP requests: {} ({} errors, avg {:.1} ms); leads accepted: {}, rejected: {}, network failures: {}, not configured: {}",
        http.http_requests_total,
        http.http_errors_total,
        http.http_duration_avg_ms,
        leads.leads_accepted_total,
        leads.leads_rejected_total,
        leads.leads_network_failed_total,
        leads.leads_not_configured_total
    );

    match report {
        SubmitReport::Redirected { integration, .. } => {
            info!("Lead flow finished: {:?}", integration);
            Ok(())
        }
        SubmitReport::Rejected(e) => bail!("Form rejected: {}", e),
        SubmitReport::Busy => bail!("A submission was already in progress"),
    }
}
