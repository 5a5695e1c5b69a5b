use anyhow::Context;
use sentinel_analysis::OllamaClient;
use sentinel_inspect::{CollectionCoordinator, InspectionOrchestrator};
use sentinel_ssh::{SessionSettings, SshConnector};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::RunProgress;

/// Handle `sentinel inspect`.
pub async fn handle(args: &InspectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let devices = ctx.service.list_devices().await?;
    let battery = ctx.battery()?;

    let model = resolve_model(args.model.as_deref(), devices.is_empty(), &ctx.ollama).await;

    let coordinator = CollectionCoordinator::new(
        SshConnector::new(),
        SessionSettings::from_config(&ctx.config.ssh),
        ctx.config.inspection.workers,
    );
    let orchestrator = InspectionOrchestrator::new(coordinator, ctx.ollama.clone(), &ctx.service);

    let progress = RunProgress::new(devices.len());
    let summary = match orchestrator.run(devices, battery, &model, &progress).await {
        Ok(summary) => summary,
        Err(error) => {
            progress.finish_err("inspection aborted");
            return Err(error).context("inspection run failed");
        }
    };

    output(&summary, flags.format)
}

/// An explicit `--model` wins, otherwise the first listed model. The list is
/// not fetched for an empty inventory.
async fn resolve_model(requested: Option<&str>, no_devices: bool, ollama: &OllamaClient) -> String {
    if let Some(model) = requested {
        return model.to_string();
    }
    if no_devices {
        return String::new();
    }
    ollama.list_models().await.into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sentinel_config::OllamaConfig;

    fn unroutable_client() -> OllamaClient {
        let config = OllamaConfig {
            // TEST-NET-1: any request would hang until the tags timeout.
            base_url: "http://192.0.2.1:11434".into(),
            ..OllamaConfig::default()
        };
        OllamaClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn empty_inventory_skips_model_listing() {
        let client = unroutable_client();
        let started = std::time::Instant::now();
        let model = resolve_model(None, true, &client).await;
        assert_eq!(model, "");
        assert!(started.elapsed() < std::time::Duration::from_millis(500));
    }

    #[tokio::test]
    async fn explicit_model_is_used_as_given() {
        let client = unroutable_client();
        assert_eq!(resolve_model(Some("qwen2.5:7b"), false, &client).await, "qwen2.5:7b");
    }
}
