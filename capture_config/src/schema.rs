use capture_core::{DynamicRecord, FieldSpec, Pattern, PatternOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub options: PatternOptions,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// A named pattern and the record its groups are bound into.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Rule {
    pub fn compile(&self, options: &PatternOptions) -> capture_core::Result<Pattern> {
        Pattern::with_options(&self.pattern, options)
    }

    /// A fresh, zeroed record for this rule's fields.
    #[must_use]
    pub fn record(&self) -> DynamicRecord {
        DynamicRecord::new(self.fields.iter().cloned())
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("capture"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'capture init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        info!(
            "Loaded {} rule(s) from {}",
            config.rules.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        for rule in &config.rules {
            rule.compile(&config.options)
                .map_err(|e| anyhow::anyhow!("Rule '{}': {e}", rule.name))?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Add your own rules next to the 'reminder' example");
        println!("   2. Run 'capture run --rule reminder --text \"remind John to buy milk\"'");
        println!();
        println!("🔧 Field kinds:");
        println!("   text, integer, boolean, float, and optional_<kind> of each");
        println!();
        Ok(config_path)
    }

    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        std::fs::write(config_path, TEMPLATE)?;
        Ok(())
    }
}

const TEMPLATE: &str = r#"{
  "options": {
    "case_insensitive": false
  },
  "rules": [
    {
      "name": "reminder",
      "pattern": "remind (?P<who>\\w+)(?: on the (?P<day>\\d{1,2})(?:st|nd|rd|th)?)? to (?P<message>.*)",
      "fields": [
        { "name": "who", "kind": "text" },
        { "name": "day", "kind": "optional_integer" },
        { "name": "message", "kind": "text" }
      ]
    }
  ]
}"#;
