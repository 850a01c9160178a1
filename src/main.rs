//! Slashbot entrypoint: handles the webhook event of one workflow run.

use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use slashbot::{
    ActorContext, ActorRegistry, BotError, DingTalkNotifier, Dispatcher, OctocrabIssueGateway,
    PersonalAccessToken, SlashbotConfig, read_event_payload, telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BotError> {
    let config = load_config()?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let event_name = config.resolve_event_name()?;
    let event_path = config.resolve_event_path()?;
    let api_url = config.resolve_api_url()?;

    let gateway = OctocrabIssueGateway::for_token(&token, &api_url)?;
    let notifier = DingTalkNotifier::new(config.dingtalk_config());
    let context = ActorContext::new(Arc::new(gateway), Arc::new(notifier));
    let dispatcher = Dispatcher::new(ActorRegistry::standard(), context);

    let payload = read_event_payload(&event_path)?;
    let report = dispatcher.dispatch(&event_name, &payload).await?;
    if report.is_unclaimed() {
        tracing::info!("{} event needed no action", report.event_type);
    } else {
        tracing::info!(
            "{} event handled by {}",
            report.event_type,
            report.handled_by.join(", ")
        );
    }
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BotError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<SlashbotConfig, BotError> {
    SlashbotConfig::load().map_err(|error| BotError::Configuration {
        message: error.to_string(),
    })
}
