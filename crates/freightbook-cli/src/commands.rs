//! Command handlers

use crate::cli::{Cli, Commands, EntryArgs};
use crate::output::{output_entry, output_ledger, output_summary};
use chrono::Utc;
use freightbook_app::app::{export_ledger, ExportOptions};
use freightbook_app::config::Config;
use freightbook_app::export::ExportFormat;
use freightbook_app::repository::open_ledger_store;
use freightbook_domain::service::calculate_amounts;
use freightbook_types::{EntryInput, OutputFormat, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(data_dir = ?config.data_dir, %output_format, "configuration loaded");

    match &cli.command {
        Commands::Add { fields } => cmd_add(&config, fields, output_format),

        Commands::Update { row, fields } => cmd_update(&config, *row, fields, output_format),

        Commands::Delete { row, yes } => cmd_delete(&config, *row, *yes),

        Commands::Clear { yes } => cmd_clear(&config, *yes),

        Commands::List => {
            let store = open_ledger_store(&config)?;
            output_ledger(output_format, &store.list()?)
        }

        Commands::Show { row } => {
            let store = open_ledger_store(&config)?;
            let entry = store.get(row_index(*row))?;
            output_entry(output_format, *row as usize, &entry)
        }

        Commands::Calc { fields } => {
            let input = form_input(&config, fields);
            output_summary(output_format, &calculate_amounts(&input))
        }

        Commands::Export { output, csv } => cmd_export(&config, output.clone(), *csv),

        Commands::Config {
            show,
            set_data_dir,
            set_export_dir,
            set_gst,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_data_dir.clone(),
            set_export_dir.clone(),
            set_gst.as_deref(),
            *set_output,
            *reset,
        ),
    }
}

/// Rows are numbered from 1 on screen; clap rejects 0
fn row_index(row: u64) -> usize {
    (row - 1) as usize
}

/// A fresh entry form overlaid with the given fields
fn form_input(config: &Config, fields: &EntryArgs) -> EntryInput {
    let mut input = EntryInput {
        gst: config.default_gst_percent,
        ..EntryInput::default()
    };
    input.apply_fields(fields.fields());
    input
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn cmd_add(config: &Config, fields: &EntryArgs, output_format: OutputFormat) -> Result<()> {
    let store = open_ledger_store(config)?;
    let (index, entry) = store.add(form_input(config, fields))?;
    let row = index + 1;

    if output_format == OutputFormat::Table {
        println!("Added entry #{}", row);
        println!("{}", entry.amounts);
    } else {
        output_entry(output_format, row, &entry)?;
    }
    Ok(())
}

fn cmd_update(
    config: &Config,
    row: u64,
    fields: &EntryArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_ledger_store(config)?;
    let index = row_index(row);

    // Pre-fill from the stored entry, then overlay what was given
    let mut input = store.get(index)?.input;
    let given = fields.fields();
    if given.is_empty() {
        eprintln!("No fields given; recalculating entry #{}", row);
    }
    input.apply_fields(given);

    let entry = store.update(index, input)?;

    if output_format == OutputFormat::Table {
        println!("Updated entry #{}", row);
        println!("{}", entry.amounts);
    } else {
        output_entry(output_format, row as usize, &entry)?;
    }
    Ok(())
}

fn cmd_delete(config: &Config, row: u64, yes: bool) -> Result<()> {
    let store = open_ledger_store(config)?;
    let index = row_index(row);
    let entry = store.get(index)?;

    let label = if entry.input.lr_no.is_empty() {
        format!("#{}", row)
    } else {
        format!("#{} (LR {})", row, entry.input.lr_no)
    };
    if !yes && !confirm(&format!("Delete entry {}?", label))? {
        println!("Cancelled");
        return Ok(());
    }

    store.delete(index)?;
    println!("Deleted entry {}", label);
    Ok(())
}

fn cmd_clear(config: &Config, yes: bool) -> Result<()> {
    let store = open_ledger_store(config)?;
    let count = store.len()?;

    if !yes && !confirm(&format!("Delete ALL {} entries?", count))? {
        println!("Cancelled");
        return Ok(());
    }

    store.clear()?;
    println!("Deleted {} entries", count);
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>, csv: bool) -> Result<()> {
    let store = open_ledger_store(config)?;
    let options = ExportOptions {
        output,
        format: if csv { ExportFormat::Csv } else { ExportFormat::Xlsx },
    };

    let path = export_ledger(&store, config, &options, Utc::now().date_naive())?;

    println!("Exported {} entries to: {}", store.len()?, path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_export_dir: Option<PathBuf>,
    set_gst: Option<&str>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    // Reload so a one-off --data-dir is not persisted
    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(export_dir) = set_export_dir {
        config.export_dir = Some(export_dir);
        modified = true;
    }

    if let Some(gst) = set_gst {
        config.set_default_gst(gst);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
