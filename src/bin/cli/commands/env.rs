use anyhow::{Context, Result};

use flashdrill_lib::config::DrillConfig;
use flashdrill_lib::host::{self, EnvHost, STANDALONE_LABEL};

use crate::OutputFormat;

pub fn run(config: &DrillConfig, format: &OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let host = EnvHost::new(config.host_env_var.clone());

    let mut label = STANDALONE_LABEL.to_string();
    let mode = runtime.block_on(host::announce(&host, Some(&mut label)));

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "label": label,
                "detected": mode.is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", label);
        }
    }

    Ok(())
}
