use crate::BLIND;
use crate::Chips;
use crate::SHOWDOWN_DELAY;
use crate::STACK;
use crate::gameplay::who::Who;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Table parameters. Missing fields fall back to the crate defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Small blind; the big blind is twice this.
    pub blind: Chips,
    /// Stacks each player starts (and rebuys) with.
    pub stacks: [Chips; 2],
    /// Who posts the big blind on the first hand.
    pub button: Who,
    /// Pause after a settled hand, in milliseconds.
    pub showdown: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            blind: BLIND,
            stacks: [STACK; 2],
            button: Who::Two,
            showdown: SHOWDOWN_DELAY,
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json).context("parse table config")?;
        config.validate()?;
        Ok(config)
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read table config {}", path.display()))?;
        Self::from_json(&json)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.blind == 0 {
            anyhow::bail!("blind must be positive");
        }
        let big = self.blind.checked_mul(2).context("big blind overflows")?;
        self.stacks[0]
            .checked_add(self.stacks[1])
            .context("table chips overflow")?;
        for who in Who::all() {
            if self.stacks[who.index()] <= big {
                anyhow::bail!("stack of player {} must exceed the big blind", who);
            }
        }
        Ok(())
    }
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.showdown)
    }
}
