//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use freightbook_types::{EntryField, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freightbook")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Transport billing ledger with spreadsheet export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the ledger (overrides config for this run)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add {
        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Update an entry, keeping fields that are not given
    Update {
        /// Row number as shown by `list`
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        row: u64,

        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Delete an entry
    Delete {
        /// Row number as shown by `list`
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        row: u64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete all entries
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List all entries
    List,

    /// Show one entry in full
    Show {
        /// Row number as shown by `list`
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        row: u64,
    },

    /// Preview calculated amounts without saving
    Calc {
        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Export the ledger to a spreadsheet
    Export {
        /// Output file path (default: transport_bills_<date>.xlsx in the export dir)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write CSV instead of Excel
        #[arg(long)]
        csv: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set ledger data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set GST percent for new entries (text that is not a number becomes 0)
        #[arg(long, allow_hyphen_values = true)]
        set_gst: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Entry form fields. Values are raw text: numbers that do not parse become 0.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// LR (lorry receipt) number
    #[arg(long)]
    pub lr_no: Option<String>,

    /// Truck number
    #[arg(long)]
    pub truck_no: Option<String>,

    /// PAN number
    #[arg(long)]
    pub pan_no: Option<String>,

    /// Name on the PAN
    #[arg(long)]
    pub pan_name: Option<String>,

    /// Bank account details
    #[arg(long)]
    pub bank_detail: Option<String>,

    /// Transportation PO number
    #[arg(long)]
    pub transport_po: Option<String>,

    /// Supply PO number
    #[arg(long)]
    pub supply_po: Option<String>,

    /// Quantity
    #[arg(long, allow_hyphen_values = true)]
    pub qty: Option<String>,

    /// Rate per unit
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Unloading weight
    #[arg(long, allow_hyphen_values = true)]
    pub unloading_weight: Option<String>,

    /// Freight charge
    #[arg(long, allow_hyphen_values = true)]
    pub freight: Option<String>,

    /// GST percent
    #[arg(long, allow_hyphen_values = true)]
    pub gst: Option<String>,

    /// Advance paid as bunker fuel
    #[arg(long, allow_hyphen_values = true)]
    pub advance_bunker: Option<String>,

    /// Diesel charge
    #[arg(long, allow_hyphen_values = true)]
    pub diesel: Option<String>,

    /// Cash advance
    #[arg(long, allow_hyphen_values = true)]
    pub advance: Option<String>,

    /// Driver allowance
    #[arg(long, allow_hyphen_values = true)]
    pub allowance: Option<String>,

    /// Shortage charge (₹)
    #[arg(long, allow_hyphen_values = true)]
    pub shortage: Option<String>,

    /// Shortage weight (Kg), not deducted
    #[arg(long, allow_hyphen_values = true)]
    pub shortage_kg: Option<String>,

    /// TDS (₹)
    #[arg(long, allow_hyphen_values = true)]
    pub tds: Option<String>,

    /// Balance already paid
    #[arg(long, allow_hyphen_values = true)]
    pub paid_balance: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl EntryArgs {
    /// Fields given on the command line
    pub fn fields(&self) -> Vec<(EntryField, &str)> {
        let all = [
            (EntryField::LrNo, &self.lr_no),
            (EntryField::TruckNo, &self.truck_no),
            (EntryField::PanNo, &self.pan_no),
            (EntryField::PanName, &self.pan_name),
            (EntryField::BankDetail, &self.bank_detail),
            (EntryField::TransportPo, &self.transport_po),
            (EntryField::SupplyPo, &self.supply_po),
            (EntryField::Qty, &self.qty),
            (EntryField::Rate, &self.rate),
            (EntryField::UnloadingWeight, &self.unloading_weight),
            (EntryField::Freight, &self.freight),
            (EntryField::Gst, &self.gst),
            (EntryField::AdvanceBunker, &self.advance_bunker),
            (EntryField::Diesel, &self.diesel),
            (EntryField::Advance, &self.advance),
            (EntryField::Allowance, &self.allowance),
            (EntryField::Shortage, &self.shortage),
            (EntryField::ShortageKg, &self.shortage_kg),
            (EntryField::Tds, &self.tds),
            (EntryField::PaidBalance, &self.paid_balance),
            (EntryField::Notes, &self.notes),
        ];
        all.into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}
