use std::{borrow::Cow, env, path::PathBuf};

pub const EXPORT_VAR: &str = "TALLY_EXPORT";
pub const GROUP_VAR: &str = "TALLY_GROUP";
const TRANSACTIONS_FLAG: &str = "--transactions";
const USAGE: &str = "Usage: tally-interpreter [--transactions] <export.json> [group-id] (or set TALLY_EXPORT)";

/// Command-line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub export_path: PathBuf,
    pub group_id: Option<String>,
    pub show_transactions: bool,
}

impl AppConfig {
    /// Reads arguments, falling back to the environment (and `.env`).
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_sources(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn from_sources<I, F>(args: I, lookup: F) -> Result<Self, Cow<'static, str>>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut show_transactions = false;
        let mut positional = Vec::new();
        for arg in args {
            if arg == TRANSACTIONS_FLAG {
                show_transactions = true;
            } else {
                positional.push(arg);
            }
        }

        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut positional = positional.into_iter();
        let export_path = positional
            .next()
            .or_else(|| lookup(EXPORT_VAR))
            .map(PathBuf::from)
            .ok_or(USAGE)?;
        let group_id = positional.next().or_else(|| lookup(GROUP_VAR));
        if let Some(extra) = positional.next() {
            return Err(format!("Unexpected argument '{extra}'\n{USAGE}").into());
        }

        Ok(Self {
            export_path,
            group_id,
            show_transactions,
        })
    }
}
