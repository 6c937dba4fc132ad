use std::path::PathBuf;

/// Strategy for listing the rules of a config file.
#[derive(Debug, Clone, Copy)]
pub struct RulesStrategy;

impl super::CommandStrategy for RulesStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.as_deref())?;

        println!("=== capture rules ===\n");
        for rule in &config.rules {
            println!("{}:", rule.name);
            println!("  Pattern: {}", rule.pattern);
            for field in &rule.fields {
                println!("  {} <- {} ({})", field.name, field.group(), field.kind);
            }
            println!();
        }
        Ok(())
    }
}
