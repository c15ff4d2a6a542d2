//! `cryptodash` — render a dashboard page from a live backend as text.
//!
//! ```text
//! cryptodash [/] [coin] [minutes]
//! cryptodash /analytics [coin] [preset 0-3] [timestamp]
//! cryptodash /ml [coin] [horizon-minutes]
//! cryptodash /top-movers [minutes]
//! cryptodash /subscribe <email> [--unsubscribe]
//! cryptodash ask <question...>
//! cryptodash coins
//! ```

use cryptodash::config::ClientConfig;
use cryptodash::domain::analytics::time_range_presets;
use cryptodash::domain::ask::Transcript;
use cryptodash::domain::coin::CoinManager;
use cryptodash::domain::subscription::SubscriptionMode;
use cryptodash::logging::{init_logging, LoggingConfig};
use cryptodash::prelude::*;
use cryptodash::view::analytics::parse_instant;

use chrono::Local;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging(LoggingConfig::from_env())?;

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Using backend");
    let client = CryptoClient::from_config(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (head, rest) = match args.split_first() {
        Some((head, rest)) => (head.as_str(), rest),
        None => ("/", &[][..]),
    };

    match head {
        "ask" => ask(&client, &rest.join(" ")).await,
        "coins" => coins(&client).await,
        "-h" | "--help" | "help" => {
            print_usage();
            Ok(())
        }
        path => render_route(&client, path, rest).await,
    }
}

async fn render_route(
    client: &CryptoClient,
    path: &str,
    args: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::new();
    let route = shell.navigate(path);
    print_nav(&shell);

    match route {
        Route::Dashboard => {
            let page = &mut shell.dashboard;
            let mut fetch = match args.first() {
                Some(coin) => page.select_coin(coin.as_str()),
                None => page.begin_refresh(),
            };
            if let Some(minutes) = args.get(1) {
                fetch = page.set_time_range(minutes.parse()?);
            }
            page.run(client, fetch).await;
            let page = &shell.dashboard;
            if let Some(err) = page.error() {
                println!("! {err}");
            }
            println!("{}\n", page.price_card());
            println!("{}\n", page.chart_card());
            println!("{}", page.stats_card());
        }
        Route::Analytics => {
            if let Some(coin) = args.first() {
                shell.analytics.select_coin(coin.as_str());
            }
            let preset_index: usize = match args.get(1) {
                Some(i) => i.parse()?,
                None => 0,
            };
            let presets = time_range_presets();
            let preset = presets
                .get(preset_index)
                .ok_or_else(|| format!("preset must be 0..{}", presets.len() - 1))?;

            shell.refresh_active(client).await;
            shell.analytics.fetch_window(client, preset).await;
            if let Some(ts) = args.get(2) {
                shell.analytics.lookup_price_at(client, parse_instant(ts)?).await;
            }

            let page = &shell.analytics;
            println!("{} · {}", page.coin(), preset.label);
            if let Some(range) = page.selected_range() {
                println!("Selected: {range}\n");
            }
            for err in page.errors() {
                println!("! {err}");
            }
            for card in page.stat_cards() {
                println!("{card}\n");
            }
            println!("{}", page.movers_list());
        }
        Route::MlInsights => {
            let page = &mut shell.ml_insights;
            let (signals, mut prediction) = match args.first() {
                Some(coin) => page.select_coin(coin.as_str()),
                None => page.begin_mount(),
            };
            if let Some(h) = args.get(1) {
                prediction = page.set_horizon(h.parse()?);
            }
            page.run_all(client, signals, prediction).await;

            let page = &shell.ml_insights;
            match page.prediction_card() {
                Some(card) => println!("{card}\n"),
                None => println!(
                    "ML Price Prediction\n  {}\n",
                    page.prediction_error().unwrap_or("No prediction")
                ),
            }
            if let Some(err) = page.signals_error() {
                println!("! {err}");
            }
            if let Some(card) = page.trend_card() {
                println!("{card}\n");
            }
            if let Some(card) = page.volatility_card() {
                println!("{card}\n");
            }
            println!("{}", page.momentum_list());
        }
        Route::TopMovers => {
            if let Some(minutes) = args.first() {
                shell.top_movers.set_window(minutes.parse()?);
            }
            shell.refresh_active(client).await;
            let page = &shell.top_movers;
            if let Some(err) = page.error() {
                println!("! {err}");
            }
            println!("{}", page.list());
        }
        Route::Subscribe => {
            let email = args.first().ok_or("usage: cryptodash /subscribe <email>")?;
            let mode = if args.iter().any(|a| a == "--unsubscribe") {
                SubscriptionMode::Unsubscribe
            } else {
                SubscriptionMode::Subscribe
            };
            let form = &mut shell.subscribe;
            form.set_email(email.as_str());
            form.submit(client, mode).await;
            if let Some(msg) = form.message() {
                println!("{msg}");
            }
            if let Some(err) = form.error() {
                println!("! {err}");
            }
        }
    }
    Ok(())
}

async fn ask(client: &CryptoClient, question: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut transcript = Transcript::new();
    transcript.ask(client, question).await;
    let view = cryptodash::view::panels::TranscriptView::build(transcript.messages(), &Local);
    println!("{view}");
    Ok(())
}

async fn coins(client: &CryptoClient) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = CoinManager::new();
    manager.refresh(client).await;
    if let Some(err) = manager.error() {
        println!("! {err}");
    }
    println!("{}", manager.count_label());
    for id in manager.display_ids() {
        println!("  {id}");
    }
    Ok(())
}

fn print_nav(shell: &Shell) {
    let items: Vec<String> = shell
        .nav()
        .into_iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.title)
            } else {
                item.title.to_string()
            }
        })
        .collect();
    println!("{}\n", items.join("  "));
}

fn print_usage() {
    println!(
        "usage:\n  cryptodash [/] [coin] [minutes]\n  cryptodash /analytics [coin] [preset 0-3] [timestamp]\n  \
         cryptodash /ml [coin] [horizon-minutes]\n  cryptodash /top-movers [minutes]\n  \
         cryptodash /subscribe <email> [--unsubscribe]\n  cryptodash ask <question...>\n  cryptodash coins"
    );
}
