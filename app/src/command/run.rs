use std::path::PathBuf;

use tracing::info;

/// Strategy for applying a configured rule and printing the bound record.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

#[derive(Debug, Clone)]
pub struct RunInput {
    pub rule: String,
    pub text: String,
    pub config: Option<PathBuf>,
}

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let rule = config
            .rule(&input.rule)
            .ok_or_else(|| anyhow::anyhow!("Rule not found: {}", input.rule))?;

        let pattern = rule.compile(&config.options)?;
        let table = pattern.table(&input.text);
        if table.is_empty() {
            info!("Rule '{}' did not match, fields keep their zero values", rule.name);
        }

        let mut record = rule.record();
        record.bind(&table)?;

        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}
