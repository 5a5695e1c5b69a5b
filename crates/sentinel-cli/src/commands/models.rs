use sentinel_core::responses::ModelListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `sentinel models`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let models = ctx.ollama.list_models().await;
    if models.is_empty() {
        ui::notice(
            flags,
            &format!(
                "Ollama offline or no matching model at {}; run `ollama serve` and pull a model",
                ctx.ollama.base_url()
            ),
        );
    }
    output(
        &ModelListResponse {
            online: !models.is_empty(),
            models,
        },
        flags.format,
    )
}
