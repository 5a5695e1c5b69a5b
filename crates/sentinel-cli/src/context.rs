use anyhow::Context;
use sentinel_analysis::OllamaClient;
use sentinel_config::SentinelConfig;
use sentinel_core::battery::CommandBattery;
use sentinel_db::service::SentinelService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SentinelService,
    pub config: SentinelConfig,
    pub ollama: OllamaClient,
}

impl AppContext {
    pub async fn init(config: SentinelConfig) -> anyhow::Result<Self> {
        let service = SentinelService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let ollama = OllamaClient::new(&config.ollama).context("failed to build Ollama client")?;

        tracing::debug!(
            db = %config.database.path,
            ollama = %ollama.base_url(),
            "application context ready"
        );
        Ok(Self {
            service,
            config,
            ollama,
        })
    }

    /// The diagnostic battery for this run: configured commands, or the
    /// built-in Huawei set.
    pub fn battery(&self) -> anyhow::Result<CommandBattery> {
        CommandBattery::from_config(&self.config.inspection.commands)
            .context("invalid inspection.commands")
    }

    pub fn shutdown(self) {
        self.service.close();
    }
}
