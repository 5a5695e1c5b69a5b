use anyhow::Context;
use sentinel_config::SentinelConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SentinelConfig> {
    let Some(path) = &flags.config else {
        return SentinelConfig::load_with_dotenv().context("failed to load configuration");
    };
    if !path.is_file() {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }
    SentinelConfig::load_from_file(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}
