use clap::Parser;
use halalscan_core::domain::common::{HalalScanConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "halalscan-api", about = "Real-time halal ingredient classification relay")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma-separated CORS origins. Empty allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// A missing key is not rejected at startup; it surfaces as an
    /// external-service failure on the first classification call.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

impl From<Args> for HalalScanConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
