use crate::cli::SchemaArgs;
use crate::config::Config;
use anyhow::Context;
use schemars::schema_for;
use tracing::info;

/// Emit the config schema, for editor validation of `unimported.yaml`
pub fn execute(args: SchemaArgs) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&schema_for!(Config))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            info!("Schema written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
