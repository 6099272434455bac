/// Configuration for tracing initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub json_format: bool,
    pub verbose: bool,
}

impl TracingConfig {
    /// Reads `LOG_FORMAT` from the environment; `verbose` comes from the
    /// command line.
    pub fn from_env(verbose: bool) -> Self {
        Self {
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            verbose,
        }
    }

    pub fn default_directive(&self) -> &'static str {
        if self.verbose {
            "info,kia_metadata=debug"
        } else {
            "info,kia_metadata=info"
        }
    }
}
