use anyhow::bail;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use engine::api::{
    load_config, load_preset, parse_config, setup_match, simulate_match, simulate_match_many,
    ConfigFormat, MatchConfig,
};
use engine::content::builtin_presets;
use engine::{Contestant, DistributionPolicy, OpponentKind};
use std::path::PathBuf;

#[derive(Copy, Clone, ValueEnum)]
enum Policy {
    Alternate,
    FirstHalfSecondHalf,
    RandomEqual,
}

#[derive(Copy, Clone, ValueEnum)]
enum Opponent {
    Human,
    Computer,
}

#[derive(Args)]
struct MatchArgs {
    /// Built-in preset to start from
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,
    /// JSON or YAML match config to start from
    #[arg(long)]
    config: Option<PathBuf>,
    /// Total cards in the pool (even, at least 4; odd values drop by one)
    #[arg(long)]
    cards: Option<usize>,
    /// How the pool is split between the two decks
    #[arg(long, value_enum)]
    policy: Option<Policy>,
    /// Who sits in the second seat
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    /// First player's name
    #[arg(long)]
    name: Option<String>,
    /// Second player's name
    #[arg(long)]
    opponent_name: Option<String>,
    /// RNG seed for determinism
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Play a full match and print the round-by-round transcript
    Play {
        #[command(flatten)]
        setup: MatchArgs,
        /// Print the match report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate and deal a match, then show both decks in play order
    Deal {
        #[command(flatten)]
        setup: MatchArgs,
    },
    /// List the built-in presets
    Presets,
    /// Play many seeded matches and summarize the results
    Simulate {
        #[command(flatten)]
        setup: MatchArgs,
        /// Number of matches (match i uses seed+i)
        #[arg(long, default_value_t = 100)]
        samples: u32,
        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "cardbattle")]
#[command(about = "Two-player card battle harness")]
struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_policy(p: Policy) -> DistributionPolicy {
    match p {
        Policy::Alternate => DistributionPolicy::Alternate,
        Policy::FirstHalfSecondHalf => DistributionPolicy::FirstHalfSecondHalf,
        Policy::RandomEqual => DistributionPolicy::RandomEqual,
    }
}

fn to_opponent(o: Opponent) -> OpponentKind {
    match o {
        Opponent::Human => OpponentKind::Human,
        Opponent::Computer => OpponentKind::Computer,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &MatchArgs) -> anyhow::Result<MatchConfig> {
    let mut cfg = match (&args.preset, &args.config) {
        (Some(_), Some(_)) => bail!("--preset and --config cannot be combined"),
        (Some(id), None) => load_preset(id)?,
        (None, Some(path)) => load_config(path)?,
        (None, None) => MatchConfig::default(),
    };
    if let Some(cards) = args.cards {
        cfg.total_cards = cards;
    }
    if let Some(policy) = args.policy {
        cfg.policy = to_policy(policy);
    }
    if let Some(opponent) = args.opponent {
        cfg.opponent = to_opponent(opponent);
    }
    if let Some(name) = &args.name {
        cfg.first_name = name.clone();
    }
    if let Some(name) = &args.opponent_name {
        cfg.second_name = Some(name.clone());
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    Ok(cfg)
}

fn print_deck(player: &Contestant) {
    println!("{}'s current deck:", player.name());
    if !player.has_cards() {
        println!("  [No cards]");
    }
    for (i, card) in player.deck().enumerate() {
        println!("  {}. {}", i + 1, card);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Cmd::Play { setup, json } => {
            let report = simulate_match(build_config(&setup)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.log {
                    println!("{}", line);
                }
                println!();
                println!("{} score: {}", report.first_name, report.first_score);
                println!("{} score: {}", report.second_name, report.second_score);
                match &report.winner_name {
                    Some(name) => println!("WINNER: {}", name),
                    None => println!("MATCH DRAW"),
                }
            }
        }
        Cmd::Deal { setup } => {
            let cfg = build_config(&setup)?;
            let game = setup_match(&cfg)?;
            println!(
                "Decks are ready! policy={} cards={}",
                cfg.policy.as_str(),
                game.total_cards()
            );
            println!();
            print_deck(game.first());
            print_deck(game.second());
        }
        Cmd::Presets => {
            for (id, text) in builtin_presets() {
                let cfg = parse_config(text, ConfigFormat::Json)?;
                println!(
                    "{:<10} cards={:<3} policy={:<22} opponent={}",
                    id,
                    cfg.total_cards,
                    cfg.policy.as_str(),
                    cfg.second_display_name()
                );
            }
        }
        Cmd::Simulate {
            setup,
            samples,
            json,
        } => {
            let cfg = build_config(&setup)?;
            let first = cfg.first_display_name();
            let second = cfg.second_display_name();
            let stats = simulate_match_many(cfg, samples)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let total = f64::from(stats.samples);
                println!("samples:      {}", stats.samples);
                println!(
                    "{} wins:  {} ({:.1}%)",
                    first,
                    stats.first_wins,
                    f64::from(stats.first_wins) / total * 100.0
                );
                println!(
                    "{} wins:  {} ({:.1}%)",
                    second,
                    stats.second_wins,
                    f64::from(stats.second_wins) / total * 100.0
                );
                println!("draws:        {}", stats.draws);
                println!("avg rounds:   {:.2}", stats.avg_rounds);
            }
        }
    }
    Ok(())
}
