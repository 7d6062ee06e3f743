use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use tickboard_core::{StockRecord, TradeStatus, ViewState};

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(state: &ViewState, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(state),
        OutputFormat::Table => {
            render_table(state);
            Ok(())
        }
    }
}

fn render_json(state: &ViewState) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(state)?);
    Ok(())
}

fn render_table(state: &ViewState) {
    let badge = if state.error.is_some() {
        "Error"
    } else if state.loading {
        "Loading"
    } else {
        "Live"
    };
    let now = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    println!("== tickboard [{badge}] {now} ==");
    if let Some(error) = &state.error {
        println!("   {}", error.message);
    }

    match &state.best {
        Some(best) => println!(
            "Stock of the day: {} {} {} ({}) [{}]",
            best.symbol,
            fmt_price(best.price),
            fmt_change(best.change_percent),
            if best.name.is_empty() { "-" } else { &best.name },
            best.status,
        ),
        None => println!("Stock of the day: none yet"),
    }

    let sample_rows;
    let (trending, stocks, watermark) = if state.trending.is_empty() && state.stocks.is_empty() {
        sample_rows = sample_catalog();
        (&sample_rows[..], &sample_rows[..], true)
    } else {
        (&state.trending[..], &state.stocks[..], false)
    };

    println!("Trending now:");
    for record in trending {
        print_row(record);
    }
    println!("Top stocks:");
    for record in stocks {
        print_row(record);
    }

    if watermark {
        println!("showing sample data - waiting for live updates");
    }
    println!();
}

fn print_row(record: &StockRecord) {
    println!(
        "  {:<8} {:>12} {:>9}  {:<12} {}",
        record.symbol,
        fmt_price(record.price),
        fmt_change(record.change_percent),
        record.status,
        if record.name.is_empty() { "-" } else { &record.name },
    );
}

fn fmt_price(price: f64) -> String {
    format!("\u{20b9}{price:.2}")
}

fn fmt_change(change_percent: f64) -> String {
    format!("{change_percent:+.2}%")
}

/// Placeholder rows shown before the first successful cycle.
fn sample_catalog() -> Vec<StockRecord> {
    [
        ("AAPL", "Apple Inc.", 176.54, 0.86),
        ("TSLA", "Tesla Inc.", 255.21, 1.45),
        ("NVDA", "NVIDIA Corp.", 438.76, -0.65),
        ("AMZN", "Amazon.com Inc.", 138.22, 0.32),
        ("MSFT", "Microsoft Corp.", 312.45, -0.12),
    ]
    .into_iter()
    .map(|(symbol, name, price, change_percent)| StockRecord {
        symbol: symbol.to_owned(),
        name: name.to_owned(),
        price,
        change_percent,
        volume: 0,
        status: TradeStatus::from_change(change_percent),
    })
    .collect()
}
