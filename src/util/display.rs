/// Terminal rendering for token, wallet and listing reports

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::analytics::{SecurityBand, SecurityReport};
use crate::core::{ListingEntry, TokenProfile, TradeDirection, WalletProfile};

/// Compact magnitude with K/M/B suffix, two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_usd(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Dollar price with precision chosen by magnitude; dust prices go to scientific notation.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price == 0.0 {
        return "$0".to_string();
    }
    if price < 0.00001 {
        format!("${:.2e}", price)
    } else if price < 0.01 {
        format!("${:.6}", price)
    } else if price < 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.2}", price)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Inverse of `format_percent`; a trailing `%` is optional.
pub fn parse_percent(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    number.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn format_timestamp(seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(seconds, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "unknown".to_string(),
    }
}

fn colored_change(value: f64) -> colored::ColoredString {
    let text = format_change(value);
    if value >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

pub fn print_token_report(profile: &TokenProfile, report: &SecurityReport) {
    println!("\n{} {} ({})", "🪙", profile.name.bold(), profile.symbol.bold());
    println!("{}", "=".repeat(70));
    println!("   Mint: {}", profile.address);
    println!("   Decimals: {}   Supply: {}", profile.decimals, profile.supply);
    if let Some(created_at) = profile.created_at {
        println!("   Created: {}", format_timestamp(created_at));
    }

    println!("\n{}", "📈 MARKET:".bold());
    println!(
        "   Price: {} ({})",
        format_price(profile.price),
        colored_change(profile.price_change_24h)
    );
    println!("   Market Cap: {}", format_usd(profile.market_cap));
    println!("   Liquidity: {}", format_usd(profile.liquidity));
    println!("   Volume 24h: {}", format_usd(profile.volume_24h));
    println!("   Holders: {}", profile.holder_count);

    let score = format!("{}/100 {}", report.score, report.band.as_str().to_uppercase());
    let score = match report.band {
        SecurityBand::Safe => score.green(),
        SecurityBand::Warning => score.yellow(),
        SecurityBand::Danger => score.red(),
    };
    println!("\n{} {}", "🛡️  SECURITY:".bold(), score.bold());
    for check in &report.checks {
        if check.passed {
            println!("   {} {}", "✅", check.name);
        } else {
            println!("   {} {} (-{})", "❌", check.name, check.penalty);
        }
    }

    println!("\n{}", "🐋 TOP HOLDERS:".bold());
    println!(
        "   Top 10: {}   Top 20: {}",
        format_percent(profile.top10_concentration_percent),
        format_percent(profile.top20_concentration_percent)
    );
    for holder in &profile.top_holders {
        let label = holder
            .label
            .as_deref()
            .map(|l| format!(" [{}]", l).cyan().to_string())
            .unwrap_or_default();
        println!(
            "   {:>2}. {} {:>14} {:>8}{}",
            holder.rank,
            holder.address_short,
            format_number(holder.amount),
            format_percent(holder.percent_of_sampled_supply),
            label
        );
    }

    println!("\n   {} https://birdeye.so/token/{}?chain=solana", "🦅 Birdeye:", profile.address);
    println!("   {} https://solscan.io/token/{}", "🟪 Solscan:", profile.address);
    println!("{}", "=".repeat(70));
}

pub fn print_wallet_report(profile: &WalletProfile) {
    println!("\n{} {}", "👛", profile.address_short.bold());
    println!("{}", "=".repeat(70));
    println!("   Address: {}", profile.address);
    println!("   SOL Balance: {:.4} SOL", profile.sol_balance);

    println!("\n{}", "📊 PERFORMANCE:".bold());
    println!("   Trades: {}   Wins: {}   Losses: {}", profile.total_trades, profile.wins, profile.losses);
    println!("   Win Rate: {}", format_percent(profile.win_rate));
    println!(
        "   Total PnL: {} ({})",
        format_usd(profile.total_pnl),
        colored_change(profile.total_pnl_percent)
    );

    println!("\n{} ({})", "💼 HOLDINGS:".bold(), profile.holdings.len());
    for holding in &profile.holdings {
        println!("   {:<10} {:>14}  {}", holding.symbol, format_number(holding.amount), holding.mint);
    }

    println!("\n{}", "🔁 RECENT TRADES:".bold());
    if profile.recent_trades.is_empty() {
        println!("   No recent swaps");
    }
    for trade in &profile.recent_trades {
        let direction = match trade.direction {
            TradeDirection::Buy => "BUY ".green(),
            TradeDirection::Sell => "SELL".red(),
        };
        println!(
            "   {} {}  {}",
            direction,
            format_timestamp(trade.timestamp_seconds),
            trade.signature
        );
    }
    println!("{}", "=".repeat(70));
}

pub fn print_listings(title: &str, entries: &[ListingEntry]) {
    println!("\n{}", title.bold());
    println!("{}", "=".repeat(70));
    if entries.is_empty() {
        println!("   No tokens found");
    }
    for entry in entries {
        let change = entry
            .price_change_24h
            .map(|c| colored_change(c).to_string())
            .unwrap_or_default();
        println!(
            "   {:>2}. {:<10} {:<24} {:>12} {}",
            entry.rank,
            entry.symbol.bold(),
            entry.name,
            format_price(entry.price),
            change
        );
        println!(
            "       MCap {}  Liq {}  Vol {}",
            format_usd(entry.market_cap),
            format_usd(entry.liquidity),
            format_usd(entry.volume_24h)
        );
    }
    println!("{}", "=".repeat(70));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.5), "999.50");
        assert_eq!(format_number(1_500.0), "1.50K");
        assert_eq!(format_number(12_000_000.0), "12.00M");
        assert_eq!(format_number(1_500_000_000.0), "1.50B");
        assert_eq!(format_usd(2_500.0), "$2.50K");
    }

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(0.005), "$0.005000");
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(142.256), "$142.26");
        assert!(format_price(0.0000023).contains('e'));
    }

    #[test]
    fn test_percent_round_trip() {
        for value in [0.0, 12.5, 50.0, 99.99, 100.0] {
            let text = format_percent(value);
            assert_eq!(parse_percent(&text), Some(value));
        }
        assert_eq!(format_percent(100.0), "100.00%");
        assert_eq!(parse_percent("abc%"), None);
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(4.2), "+4.20%");
        assert_eq!(format_change(-4.2), "-4.20%");
        assert_eq!(format_change(0.0), "+0.00%");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
    }
}
