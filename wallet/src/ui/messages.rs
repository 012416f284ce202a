use crate::series::SumMethod;
use crate::swap::{SwapError, SwapQuote, SwapReceipt};
use crate::utils::logging::PLAIN;
use dialoguer::console::style;
use tracing::info;

pub(crate) fn display_quote(quote: &SwapQuote) {
    info!(target: PLAIN,
        "{} {} {} → {} {}  {}",
        style("⇄").blue().bold(),
        quote.amount,
        style(&quote.from).bold(),
        quote.formatted_receive(),
        style(&quote.to).bold(),
        style(format!("(1 {} = {} {})", quote.from, quote.rate, quote.to)).dim(),
    );
}

pub(crate) fn display_receipt(receipt: &SwapReceipt) {
    info!(target: PLAIN,
        "{} {}\nYou received {} {}",
        style("✔").green(),
        style("Swap simulated!").bold(),
        receipt.quote.formatted_receive(),
        receipt.quote.to,
    );
    info!(target: PLAIN,
        "{}",
        style(format!("completed at {}", receipt.completed_at.to_rfc3339())).dim()
    );
}

pub(crate) fn display_swap_rejected(err: &SwapError) {
    info!(target: PLAIN, "{} {}", style("✘").red(), style(err).red());
    if !matches!(err, SwapError::AboveMaximum { .. }) {
        info!(target: PLAIN,
            "{}",
            style("Please select two different tokens and enter a valid amount.").dim()
        );
    }
}

pub(crate) fn display_sum(method: SumMethod, n: i64, total: i64) {
    let name: &'static str = method.into();
    info!(target: PLAIN, "{:>12}  sum_to_n({}) = {}", style(name).cyan(), n, total);
}
