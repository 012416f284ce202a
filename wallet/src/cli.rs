//! Command-line arguments, with environment variable fallbacks.

use crate::render::OutputFormat;
use crate::series::SumMethod;
use crate::swap::MAX_SWAP_AMOUNT;
use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FORMAT: &str = "table";
pub const DEFAULT_SUM_METHOD: &str = "all";
pub const DEFAULT_SWAP_DELAY_MS: u64 = 2_000;

/// Wallet balances toolkit
///
/// Sorts and prices wallet balances for display, quotes simulated currency
/// swaps from a token price list, and sums integer series.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Show wallet balances sorted by blockchain priority
    Balances(BalancesArgs),

    /// Quote and simulate a currency swap
    Swap(SwapArgs),

    /// Sum the integers 1..=n
    SumToN(SumToNArgs),
}

#[derive(Args, Debug)]
pub(crate) struct BalancesArgs {
    /// JSON array of {currency, amount, blockchain}; `-` reads stdin.
    /// Falls back to a built-in sample wallet when omitted.
    #[arg(
        long,
        env = "WALLET_BALANCES_FILE",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) balances: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) prices: PriceArgs,

    /// Output format (table | json)
    #[arg(
        long,
        env = "WALLET_OUTPUT_FORMAT",
        value_parser = parse_output_format,
        default_value = DEFAULT_OUTPUT_FORMAT
    )]
    pub(crate) format: OutputFormat,

    /// Re-read the inputs every N seconds and print again when they change
    #[arg(long = "watch-secs", env = "WALLET_WATCH_SECS")]
    pub(crate) watch_secs: Option<u64>,
}

/// Price list location, shared by the subcommands that need prices
#[derive(Args, Clone, Debug)]
pub(crate) struct PriceArgs {
    /// Price feed array or {symbol: price} object; `-` reads stdin.
    /// Falls back to built-in sample prices when omitted.
    #[arg(
        id = "prices",
        long = "prices",
        env = "WALLET_PRICES_FILE",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SwapArgs {
    #[command(flatten)]
    pub(crate) prices: PriceArgs,

    /// Token to sell
    #[arg(long, default_value = "")]
    pub(crate) from: String,

    /// Token to buy
    #[arg(long, default_value = "")]
    pub(crate) to: String,

    /// Amount of the `from` token, as typed
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) amount: String,

    /// Swap the from and to tokens before quoting
    #[arg(long, default_value_t = false)]
    pub(crate) switch: bool,

    /// Simulated settlement time in milliseconds
    #[arg(
        long = "delay-ms",
        env = "SWAP_DELAY_MS",
        default_value_t = DEFAULT_SWAP_DELAY_MS
    )]
    pub(crate) delay_ms: u64,

    /// Largest amount a single swap may move
    #[arg(
        long = "max-amount",
        env = "SWAP_MAX_AMOUNT",
        default_value_t = MAX_SWAP_AMOUNT
    )]
    pub(crate) max_amount: f64,
}

#[derive(Args, Debug)]
pub(crate) struct SumToNArgs {
    /// Upper bound of the sum
    #[arg(allow_negative_numbers = true)]
    pub(crate) n: i64,

    /// Which implementation to use (iterative | closed-form | recursive | all)
    #[arg(
        long,
        value_parser = parse_sum_method,
        default_value = DEFAULT_SUM_METHOD
    )]
    pub(crate) method: SumSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SumSelection {
    One(SumMethod),
    All,
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "table" | "text" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "invalid output format '{}'; expected one of: table, json",
            other
        )),
    }
}

fn parse_sum_method(s: &str) -> Result<SumSelection, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "iterative" | "loop" => Ok(SumSelection::One(SumMethod::Iterative)),
        "closed-form" | "formula" | "math" => Ok(SumSelection::One(SumMethod::ClosedForm)),
        "recursive" | "recursion" => Ok(SumSelection::One(SumMethod::Recursive)),
        "all" => Ok(SumSelection::All),
        other => Err(format!(
            "invalid method '{}'; expected one of: iterative, closed-form, recursive, all",
            other
        )),
    }
}
