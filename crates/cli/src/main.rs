//! Command line interface for the yield swap calculator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use yieldswap_analytics::prelude::*;
use yieldswap_domain::market::{Market, implied_rate_from_price};
use yieldswap_domain::math::swap_quote;
use yieldswap_domain::{Amount, Token};

/// Demo reserve defaults: 1M base against 20M yield tokens, both 6 decimals.
const DEFAULT_RESERVE_BASE: u128 = 1_000_000_000_000;
const DEFAULT_RESERVE_QUOTE: u128 = 20_000_000_000_000;

#[derive(Parser)]
#[command(name = "yieldswap")]
#[command(about = "Swap quote and position risk calculator for yield swap markets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Trade side for the position commands.
#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Long,
    Short,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a swap against the current pool reserves
    Quote {
        /// Amount of the base asset to swap in
        #[arg(short, long, default_value = "1000")]
        amount: String,

        /// Base-asset reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_BASE)]
        reserve_base: u128,

        /// Yield-token reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_QUOTE)]
        reserve_quote: u128,

        /// Slippage tolerance in basis points
        #[arg(long, default_value_t = 50)]
        slippage_bps: u32,
    },
    /// Analyze breakeven and collateral for a position
    Analyze {
        /// Long or short the yield leg
        #[arg(short, long, value_enum, default_value_t = Side::Long)]
        side: Side,

        /// Amount of the base asset to swap in
        #[arg(short, long, default_value = "1000")]
        amount: String,

        /// Base-asset reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_BASE)]
        reserve_base: u128,

        /// Yield-token reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_QUOTE)]
        reserve_quote: u128,

        /// Days until the market matures
        #[arg(short, long, default_value_t = 365)]
        days: u64,

        /// Implied rate override in percent (derived from reserves if omitted)
        #[arg(long)]
        implied_rate: Option<f64>,

        /// Upfront short premium override in base units
        #[arg(long)]
        premium: Option<f64>,

        /// Emit JSON instead of the table view
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Sample position P&L across rate scenarios
    Scenarios {
        /// Long or short the yield leg
        #[arg(short, long, value_enum, default_value_t = Side::Long)]
        side: Side,

        /// Amount of the base asset to swap in
        #[arg(short, long, default_value = "1000")]
        amount: String,

        /// Base-asset reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_BASE)]
        reserve_base: u128,

        /// Yield-token reserve in smallest units
        #[arg(long, default_value_t = DEFAULT_RESERVE_QUOTE)]
        reserve_quote: u128,

        /// Days until the market matures
        #[arg(short, long, default_value_t = 365)]
        days: u64,

        /// Implied rate override in percent (derived from reserves if omitted)
        #[arg(long)]
        implied_rate: Option<f64>,

        /// Upfront short premium override in base units
        #[arg(long)]
        premium: Option<f64>,

        /// Comma-separated rates in percent to sample
        #[arg(short, long, value_delimiter = ',')]
        rates: Option<Vec<f64>>,

        /// Curve lower bound in percent
        #[arg(long, default_value_t = 1.0)]
        min_rate: f64,

        /// Curve upper bound in percent
        #[arg(long, default_value_t = 10.0)]
        max_rate: f64,

        /// Number of curve intervals
        #[arg(long, default_value_t = 18)]
        steps: u32,

        /// Emit JSON instead of the table view
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Quote {
            amount,
            reserve_base,
            reserve_quote,
            slippage_bps,
        } => run_quote(amount, *reserve_base, *reserve_quote, *slippage_bps)?,
        Commands::Analyze {
            side,
            amount,
            reserve_base,
            reserve_quote,
            days,
            implied_rate,
            premium,
            json,
        } => {
            let (market, position) = build_position(
                *side,
                amount,
                *reserve_base,
                *reserve_quote,
                *days,
                *implied_rate,
                *premium,
            )?;
            let analysis = analyze(&position);

            if *json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&market, &analysis);
            }
        }
        Commands::Scenarios {
            side,
            amount,
            reserve_base,
            reserve_quote,
            days,
            implied_rate,
            premium,
            rates,
            min_rate,
            max_rate,
            steps,
            json,
        } => {
            let (_, position) = build_position(
                *side,
                amount,
                *reserve_base,
                *reserve_quote,
                *days,
                *implied_rate,
                *premium,
            )?;

            let results = match rates {
                Some(rates) => sample(&position, &to_rates(rates)?),
                None => pnl_curve(&position, to_rate(*min_rate)?, to_rate(*max_rate)?, *steps),
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_scenarios(&position, &results);
            }
        }
    }

    Ok(())
}

/// Builds the position a command operates on from the raw flag values.
///
/// The quote runs on the exact integer path; the analytics layer then works
/// on display decimals derived from the same raw units.
fn build_position(
    side: Side,
    amount: &str,
    reserve_base: u128,
    reserve_quote: u128,
    days: u64,
    implied_rate: Option<f64>,
    premium: Option<f64>,
) -> Result<(Market, Position)> {
    let now = now_unix()?;
    let market = demo_market(days, now);
    let reserves = PoolReserves::new(
        TokenAmount::from(reserve_base),
        TokenAmount::from(reserve_quote),
        now,
    );

    let years = market.years_to_maturity(now);
    let implied = match implied_rate {
        Some(percent) => to_rate(percent)?,
        None => implied_rate_from_price(reserves.quote_token_price()?, years),
    };

    let amount_in = Amount::parse_input(amount, market.base.decimals);
    let quote_out = swap_quote::quote_exact_in(
        TokenAmount::new(amount_in.raw),
        reserves.reserve_base,
        reserves.reserve_quote,
    )?;

    debug!(amount_out = %quote_out, "Quoted exact input");

    let notional_in = amount_in.to_decimal();
    let quoted = Amount::new(quote_out.0, market.quote.decimals).to_decimal();

    let mut position = match side {
        Side::Long => Position::long(notional_in, quoted, implied, years),
        Side::Short => Position::short(notional_in, quoted, implied, years),
    };
    if let Some(premium) = premium {
        position = position.with_premium(
            Decimal::try_from(premium).context("Premium is not representable")?,
        );
    }

    Ok((market, position))
}

fn run_quote(amount: &str, reserve_base: u128, reserve_quote: u128, slippage_bps: u32) -> Result<()> {
    let now = now_unix()?;
    let base = Token::new("demo-usdc", "USDC", 6, "USD Coin");
    let quote_token = Token::new("demo-ytusdc", "ytUSDC", 6, "Yield Token USDC");
    let reserves = PoolReserves::new(
        TokenAmount::from(reserve_base),
        TokenAmount::from(reserve_quote),
        now,
    );

    let amount_in = Amount::parse_input(amount, base.decimals);
    let exact = swap_quote::quote_exact_in(
        TokenAmount::new(amount_in.raw),
        reserves.reserve_base,
        reserves.reserve_quote,
    )?;
    let min_out = swap_quote::min_amount_out(exact, slippage_bps)?;

    let reserve_base_dec = Amount::new(reserves.reserve_base.0, base.decimals).to_decimal();
    let reserve_quote_dec =
        Amount::new(reserves.reserve_quote.0, quote_token.decimals).to_decimal();
    let estimate = swap_quote::quote_display(
        amount_in.to_decimal(),
        reserve_base_dec,
        reserve_quote_dec,
    );

    println!("\n📈 Swap Quote");
    println!("════════════════════════════════════════");
    if !reserves.is_ready() {
        println!("Pool is not funded on both sides; quoting zero.");
    }
    println!(
        "{:<20} {:.2} {} / {:.2} {}",
        "Reserves:", reserve_base_dec, base.symbol, reserve_quote_dec, quote_token.symbol
    );
    println!(
        "{:<20} {:.6} {} per {}",
        "Spot price:",
        reserves.quote_token_price()?,
        base.symbol,
        quote_token.symbol
    );
    println!(
        "{:<20} {:.2} {}",
        "Amount in:",
        amount_in.to_decimal(),
        base.symbol
    );
    println!(
        "{:<20} {:.6} {}",
        "Amount out:",
        Amount::new(exact.0, quote_token.decimals).to_decimal(),
        quote_token.symbol
    );
    println!(
        "{:<20} {:.6} {}",
        "Display estimate:", estimate, quote_token.symbol
    );
    println!(
        "{:<20} {:.6} {}",
        format!("Min out ({slippage_bps} bps):"),
        Amount::new(min_out.0, quote_token.decimals).to_decimal(),
        quote_token.symbol
    );
    println!("════════════════════════════════════════");

    Ok(())
}

fn print_analysis(market: &Market, analysis: &PositionAnalysis) {
    let position = &analysis.position;
    let direction = match position.direction {
        Direction::Long => "Long",
        Direction::Short => "Short",
    };
    let maturity =
        chrono::DateTime::from_timestamp(market.maturity as i64, 0).unwrap_or_default();

    println!("\n📊 Position Analysis");
    println!("════════════════════════════════════════");
    println!("{:<18} {}", "Market:", market.address);
    println!("{:<18} {}", "Direction:", direction);
    println!(
        "{:<18} {:.2} {}",
        "Notional in:", position.notional_in, market.base.symbol
    );
    println!(
        "{:<18} {:.2} {}",
        "Quote out:", position.quote_out, market.quote.symbol
    );
    println!(
        "{:<18} {} ({:.2}y)",
        "Maturity:",
        maturity.format("%Y-%m-%d"),
        position.years_to_maturity
    );
    println!(
        "{:<18} {:.2}%",
        "Implied rate:",
        position.implied_rate.percent()
    );
    println!(
        "{:<18} {:.2}%",
        "Breakeven rate:",
        analysis.breakeven_rate.percent()
    );
    if position.direction == Direction::Short {
        println!(
            "{:<18} {:.2} {}",
            "Premium:", position.premium_received, market.base.symbol
        );
    }
    println!(
        "{:<18} {:.2} {}",
        "P&L @ implied:",
        analysis.pnl_at(position.implied_rate),
        market.base.symbol
    );
    if let Some(collateral) = &analysis.collateral {
        let verdict = if collateral.is_adequate {
            "✅ adequate"
        } else {
            "❌ insufficient"
        };
        println!(
            "{:<18} required {:.2}, supplied {:.2} ({})",
            "Collateral:", collateral.required_amount, collateral.supplied_amount, verdict
        );
    }
    println!(
        "{:<18} {}",
        "Can submit:",
        if analysis.can_submit() { "yes" } else { "no" }
    );
    println!("════════════════════════════════════════");
}

fn print_scenarios(position: &Position, results: &[ScenarioResult]) {
    println!("\n📈 Rate Scenarios");
    println!("════════════════════════════════════════");
    println!("{:<12} | {:<14}", "Rate", "P&L");
    println!("{}", "-".repeat(29));
    for result in results {
        println!(
            "{:<12} | {:<14.2}",
            format!("{:.2}%", result.sampled_rate.percent()),
            result.profit_and_loss
        );
    }
    println!("════════════════════════════════════════");
    println!("Breakeven: {:.2}%", breakeven_rate(position).percent());
}

/// Demo market standing in for an externally configured venue.
fn demo_market(days: u64, now: u64) -> Market {
    let base = Token::new("demo-usdc", "USDC", 6, "USD Coin");
    let quote = Token::new("demo-ytusdc", "ytUSDC", 6, "Yield Token USDC");
    Market::new("demo-pool", base, quote, 5, now + days * 86_400)
}

fn now_unix() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn to_rate(percent: f64) -> Result<Rate> {
    let value = Decimal::try_from(percent)
        .with_context(|| format!("Rate {percent} is not representable"))?;
    Ok(Rate::new(value))
}

fn to_rates(percents: &[f64]) -> Result<Vec<Rate>> {
    percents.iter().map(|p| to_rate(*p)).collect()
}
