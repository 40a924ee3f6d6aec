use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::content::builtin_presets;
use crate::{
    distribute, generate_cards, normalize_card_count, Contestant, Dealer, DistributionPolicy,
    Match, OpponentKind, RoundOutcome, Side, Verdict,
};

const DEFAULT_TOTAL_CARDS: usize = 20;
const DEFAULT_FIRST_NAME: &str = "Player1";
const DEFAULT_HUMAN_OPPONENT: &str = "Player2";
const DEFAULT_COMPUTER_OPPONENT: &str = "Computer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MatchConfig {
    pub total_cards: usize,
    pub policy: DistributionPolicy,
    pub opponent: OpponentKind,
    pub first_name: String,
    pub second_name: Option<String>,
    pub seed: u64,
    pub preset_id: Option<String>,
    pub config_path: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_cards: DEFAULT_TOTAL_CARDS,
            policy: DistributionPolicy::default(),
            opponent: OpponentKind::default(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            second_name: None,
            seed: 0,
            preset_id: None,
            config_path: None,
        }
    }
}

impl MatchConfig {
    /// Name for the second seat, falling back on a label that matches the opponent kind.
    pub fn second_display_name(&self) -> String {
        match (&self.second_name, self.opponent) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, OpponentKind::Computer) => DEFAULT_COMPUTER_OPPONENT.to_string(),
            (_, OpponentKind::Human) => DEFAULT_HUMAN_OPPONENT.to_string(),
        }
    }

    pub fn first_display_name(&self) -> String {
        if self.first_name.trim().is_empty() {
            DEFAULT_FIRST_NAME.to_string()
        } else {
            self.first_name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchReport {
    pub winner: String,
    pub winner_name: Option<String>,
    pub first_name: String,
    pub second_name: String,
    pub rounds: u32,
    pub first_score: usize,
    pub second_score: usize,
    pub total_cards: usize,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchStats {
    pub samples: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub avg_rounds: f64,
    pub avg_first_score: f64,
}

pub fn parse_config(text: &str, format: ConfigFormat) -> Result<MatchConfig> {
    let cfg = match format {
        ConfigFormat::Json => {
            serde_json::from_str(text).context("failed to parse match config JSON")?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(text).context("failed to parse match config YAML")?
        }
    };
    Ok(cfg)
}

/// Read a text file, honouring a UTF-8/UTF-16 byte order mark when present.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

pub fn load_config(path: &Path) -> Result<MatchConfig> {
    let text = read_text_auto(path)
        .with_context(|| format!("failed to read match config: {}", path.display()))?;
    parse_config(&text, ConfigFormat::from_path(path))
        .with_context(|| format!("invalid match config: {}", path.display()))
}

pub fn load_preset(id: &str) -> Result<MatchConfig> {
    let presets = builtin_presets();
    let Some(text) = presets.get(id) else {
        let known: Vec<_> = presets.keys().copied().collect();
        bail!("unknown preset '{}' (known: {})", id, known.join(", "));
    };
    parse_config(text, ConfigFormat::Json).with_context(|| format!("builtin preset '{}'", id))
}

/// Replace `cfg` by the preset or file it points at, if any.
pub fn resolve_config(cfg: MatchConfig) -> Result<MatchConfig> {
    let mut resolved = match (&cfg.preset_id, &cfg.config_path) {
        (Some(_), Some(_)) => bail!("choose either preset_id or config_path, not both"),
        (Some(id), None) => load_preset(id)?,
        (None, Some(path)) => load_config(Path::new(path))?,
        (None, None) => return Ok(cfg),
    };
    resolved.preset_id = None;
    resolved.config_path = None;
    Ok(resolved)
}

/// Generate, shuffle and deal a fresh match from `cfg`. The first seat is always human.
pub fn setup_match(cfg: &MatchConfig) -> Result<Match> {
    let total = normalize_card_count(cfg.total_cards)?;
    let mut dealer = Dealer::from_seed(cfg.seed);
    let pool = generate_cards(total, &mut dealer)?;
    let (a, b) = distribute(pool, cfg.policy, &mut dealer)?;
    Ok(Match::new(
        Contestant::new(cfg.first_display_name(), OpponentKind::Human, a),
        Contestant::new(cfg.second_display_name(), cfg.opponent, b),
    ))
}

pub fn simulate_match(cfg: MatchConfig) -> Result<MatchReport> {
    let cfg = resolve_config(cfg)?;
    let mut game = setup_match(&cfg)?;
    let first_name = game.first().name().to_string();
    let second_name = game.second().name().to_string();
    let total_cards = game.total_cards();

    let mut logs = Vec::new();
    logs.push(format!(
        "[SETUP] {} vs {} ({}) | cards={} policy={} seed={}",
        first_name,
        second_name,
        opponent_label(cfg.opponent),
        total_cards,
        cfg.policy.as_str(),
        cfg.seed
    ));
    logs.push(format!(
        "[DEAL] {} has {} cards, {} has {} cards",
        first_name,
        game.first().remaining_count(),
        second_name,
        game.second().remaining_count()
    ));

    for outcome in game.play_to_end() {
        log_round(&mut logs, &first_name, &second_name, &outcome);
    }

    let (winner, winner_name) = match game.verdict() {
        Verdict::Winner(Side::First) => ("first", Some(first_name.clone())),
        Verdict::Winner(Side::Second) => ("second", Some(second_name.clone())),
        Verdict::Draw => ("draw", None),
    };
    let first_score = game.first().score();
    let second_score = game.second().score();
    logs.push(format!(
        "[END] winner={} score={}-{} rounds={}",
        winner_name.as_deref().unwrap_or("draw"),
        first_score,
        second_score,
        game.rounds_played()
    ));

    Ok(MatchReport {
        winner: winner.to_string(),
        winner_name,
        first_name,
        second_name,
        rounds: game.rounds_played(),
        first_score,
        second_score,
        total_cards,
        log: logs,
    })
}

/// Play `samples` matches, seeding match `i` with `seed + i`.
pub fn simulate_match_many(cfg: MatchConfig, samples: u32) -> Result<MatchStats> {
    if samples == 0 {
        bail!("samples must be at least 1");
    }
    let mut cfg = resolve_config(cfg)?;
    let base_seed = cfg.seed;

    let mut stats = MatchStats {
        samples,
        first_wins: 0,
        second_wins: 0,
        draws: 0,
        avg_rounds: 0.0,
        avg_first_score: 0.0,
    };
    let mut total_rounds = 0u64;
    let mut total_first_score = 0u64;
    for i in 0..samples {
        cfg.seed = base_seed.wrapping_add(u64::from(i));
        let mut game = setup_match(&cfg)?;
        game.play_to_end();
        match game.verdict() {
            Verdict::Winner(Side::First) => stats.first_wins += 1,
            Verdict::Winner(Side::Second) => stats.second_wins += 1,
            Verdict::Draw => stats.draws += 1,
        }
        total_rounds += u64::from(game.rounds_played());
        total_first_score += game.first().score() as u64;
    }
    stats.avg_rounds = total_rounds as f64 / f64::from(samples);
    stats.avg_first_score = total_first_score as f64 / f64::from(samples);
    Ok(stats)
}

fn opponent_label(kind: OpponentKind) -> &'static str {
    match kind {
        OpponentKind::Human => "human",
        OpponentKind::Computer => "computer",
    }
}

fn log_round(logs: &mut Vec<String>, first: &str, second: &str, outcome: &RoundOutcome) {
    logs.push(format!(
        "[ROUND] {}: {} plays {} vs {} plays {}",
        outcome.round, first, outcome.first, second, outcome.second
    ));
    let name_of = |side: Side| match side {
        Side::First => first,
        Side::Second => second,
    };
    match outcome.winner {
        Some(side) => logs.push(format!(
            "[WIN] {} takes both cards from {}",
            name_of(side),
            name_of(side.other())
        )),
        None => logs.push("[TIE] each keeps their own card".to_string()),
    }
}
