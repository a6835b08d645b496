#![warn(clippy::uninlined_format_args)]

mod config;

use std::{borrow::Cow, error::Error, io, process};

use config::AppConfig;
use tally_domain::{Group, SettlementCalculator};
use tally_infrastructure::{into_groups, read_export};
use tally_presentation::{ReportPresenter, TransactionsPresenter};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env()?;

    let data = read_export(&config.export_path).map_err(describe)?;
    let groups = into_groups(data).map_err(describe)?;
    let selected = select_groups(&groups, config.group_id.as_deref())?;

    print!("{}", render_groups(&selected, config.show_transactions));
    Ok(())
}

fn select_groups<'a>(groups: &'a [Group], group_id: Option<&str>) -> CliResult<Vec<&'a Group>> {
    match group_id {
        Some(id) => groups
            .iter()
            .find(|group| group.id() == id)
            .map(|group| vec![group])
            .ok_or_else(|| format!("No group with id '{id}' in the export").into()),
        None => Ok(groups.iter().collect()),
    }
}

fn render_groups(groups: &[&Group], show_transactions: bool) -> String {
    let calculator = SettlementCalculator;
    let mut out = String::new();

    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let settlement = calculator.settle(group);
        tracing::info!(
            group_id = group.id(),
            member_count = group.members().len(),
            transfer_count = settlement.transfers.len(),
            "Group settled"
        );

        out.push_str(&ReportPresenter::render(group, &settlement));
        if show_transactions {
            out.push('\n');
            out.push_str(&TransactionsPresenter::render(group));
        }
    }

    out
}

/// Flattens an error and its sources into one line.
fn describe(err: impl Error) -> Cow<'static, str> {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message.into()
}
