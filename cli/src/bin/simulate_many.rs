use clap::Parser;
use engine::api::{load_config, load_preset, setup_match, MatchConfig};
use engine::{DistributionPolicy, OpponentKind, Side, Verdict};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simulate-many")]
#[command(about = "Monte Carlo sim: many seeded card battles")]
struct Args {
    /// Optional match config (JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no config file is given
    #[arg(long, default_value = "classic")]
    preset: String,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Override total cards
    #[arg(long)]
    cards: Option<usize>,

    /// Policy: alternate | first-half | random-equal
    #[arg(long)]
    policy: Option<String>,

    /// Opponent: human | computer
    #[arg(long)]
    opponent: Option<String>,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn to_policy(s: &str) -> anyhow::Result<DistributionPolicy> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "alternate" => Ok(DistributionPolicy::Alternate),
        "first_half" | "first_half_second_half" => Ok(DistributionPolicy::FirstHalfSecondHalf),
        "random_equal" | "random" => Ok(DistributionPolicy::RandomEqual),
        other => anyhow::bail!("unknown policy '{}'", other),
    }
}

fn to_opponent(s: &str) -> anyhow::Result<OpponentKind> {
    match s.to_lowercase().as_str() {
        "human" => Ok(OpponentKind::Human),
        "computer" => Ok(OpponentKind::Computer),
        other => anyhow::bail!("unknown opponent '{}'", other),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let mut cfg: MatchConfig = if let Some(path) = args.config.as_ref() {
        load_config(path)?
    } else {
        load_preset(&args.preset)?
    };
    if let Some(cards) = args.cards {
        cfg.total_cards = cards;
    }
    if let Some(ref p) = args.policy {
        cfg.policy = to_policy(p)?;
    }
    if let Some(ref o) = args.opponent {
        cfg.opponent = to_opponent(o)?;
    }

    // Stats
    let mut first_wins = 0u32;
    let mut second_wins = 0u32;
    let mut draws = 0u32;
    let mut tie_rounds = 0u64;
    let mut total_rounds = 0u64;
    let mut margins: Vec<i64> = Vec::new();
    let mut total_cards = 0usize;

    for i in 0..args.trials {
        cfg.seed = args.seed.wrapping_add(i as u64);
        let mut game = setup_match(&cfg)?;
        total_cards = game.total_cards();
        for outcome in game.play_to_end() {
            if outcome.winner.is_none() {
                tie_rounds += 1;
            }
            total_rounds += 1;
        }
        match game.verdict() {
            Verdict::Winner(Side::First) => first_wins += 1,
            Verdict::Winner(Side::Second) => second_wins += 1,
            Verdict::Draw => draws += 1,
        }
        margins.push(game.first().score() as i64 - game.second().score() as i64);
    }

    margins.sort_unstable();
    let trials_f = args.trials.max(1) as f64;
    let tie_rate = if total_rounds == 0 {
        0.0
    } else {
        tie_rounds as f64 / total_rounds as f64
    };
    let median_margin = if margins.is_empty() {
        0
    } else {
        let m = margins.len() / 2;
        if margins.len() % 2 == 1 {
            margins[m]
        } else {
            (margins[m - 1] + margins[m]) / 2
        }
    };

    println!("simulate-many results");
    println!("---------------------");
    println!("trials:             {}", args.trials);
    println!("cards:              {}", total_cards);
    println!("policy:             {}", cfg.policy.as_str());
    println!(
        "seats:              {} vs {}",
        cfg.first_display_name(),
        cfg.second_display_name()
    );
    println!();
    println!("first win rate:     {:.1}%", first_wins as f64 / trials_f * 100.0);
    println!("second win rate:    {:.1}%", second_wins as f64 / trials_f * 100.0);
    println!("draw rate:          {:.1}%", draws as f64 / trials_f * 100.0);
    println!("tie rounds:         {:.1}%", tie_rate * 100.0);
    println!("median margin:      {:+}", median_margin);

    Ok(())
}
