use capture_core::{Pattern, PatternOptions};
use tracing::info;

/// Strategy for printing the capture table of one pattern against one text.
#[derive(Debug, Clone, Copy)]
pub struct TableStrategy;

#[derive(Debug, Clone)]
pub struct TableInput {
    pub pattern: String,
    pub text: String,
    pub ignore_case: bool,
}

impl super::CommandStrategy for TableStrategy {
    type Input = TableInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let options = PatternOptions {
            case_insensitive: input.ignore_case,
            ..PatternOptions::default()
        };
        let pattern = Pattern::with_options(&input.pattern, &options)?;
        let table = pattern.table(&input.text);
        info!("Captured {} group(s)", table.len());

        println!("{}", serde_json::to_string_pretty(&table)?);
        Ok(())
    }
}
