pub mod ask;
pub mod chat;
pub mod divine;
pub mod list;
pub mod prompt;
pub mod show;

use yj_core::{Diviner, DivinerConfig, GenerationError, TextGenerator};
use yj_llm::{LlmConfig, OpenAiClient};

use crate::LlmArgs;

/// Where interpretations come from.
enum Backend {
    /// Echo the prompt back instead of calling the API.
    DryRun,
    OpenAi(OpenAiClient),
}

impl TextGenerator for Backend {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Backend::DryRun => Ok(format!("[dry run] prompt:\n{prompt}")),
            Backend::OpenAi(client) => client.generate(prompt),
        }
    }
}

/// Merge command-line flags over the environment.
fn llm_config(args: &LlmArgs) -> LlmConfig {
    let mut config = LlmConfig::from_env();
    if let Some(key) = &args.api_key {
        config = config.with_api_key(key);
    }
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url);
    }
    config
}

/// Build a diviner for the given flags.
fn build_diviner(args: &LlmArgs) -> Result<Diviner, String> {
    let backend = if args.dry_run {
        Backend::DryRun
    } else {
        let config = llm_config(args);
        tracing::info!(model = %config.model, endpoint = %config.endpoint(), "using chat completions");
        Backend::OpenAi(OpenAiClient::new(config).map_err(|e| e.to_string())?)
    };

    let mut config = DivinerConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(Diviner::new(backend, config))
}
