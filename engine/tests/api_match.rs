use engine::api::{
    load_config, load_preset, parse_config, resolve_config, setup_match, simulate_match,
    simulate_match_many, ConfigFormat, MatchConfig,
};
use engine::content::builtin_presets;
use engine::{DistributionPolicy, OpponentKind};

#[test]
fn quick_preset_plays_two_rounds() {
    let cfg = MatchConfig {
        preset_id: Some("quick".into()),
        ..MatchConfig::default()
    };
    let res = simulate_match(cfg).unwrap();
    assert_eq!(res.total_cards, 4);
    assert_eq!(res.rounds, 2);
    assert_eq!(res.first_score + res.second_score, 4);
    assert_eq!(res.second_name, "Computer");
    assert!(matches!(res.winner.as_str(), "first" | "second" | "draw"));
    assert!(res.log[0].starts_with("[SETUP] Player1 vs Computer (computer)"));
    assert!(res.log.last().unwrap().starts_with("[END]"));
}

#[test]
fn transcript_has_one_round_line_per_round() {
    let cfg = MatchConfig {
        total_cards: 12,
        policy: DistributionPolicy::RandomEqual,
        seed: 99,
        ..MatchConfig::default()
    };
    let res = simulate_match(cfg).unwrap();
    let round_lines = res.log.iter().filter(|l| l.starts_with("[ROUND]")).count();
    let result_lines = res
        .log
        .iter()
        .filter(|l| l.starts_with("[WIN]") || l.starts_with("[TIE]"))
        .count();
    assert_eq!(round_lines, 6);
    assert_eq!(result_lines, 6);
}

#[test]
fn same_config_same_report() {
    let cfg = MatchConfig {
        total_cards: 16,
        seed: 5,
        ..MatchConfig::default()
    };
    let a = simulate_match(cfg.clone()).unwrap();
    let b = simulate_match(cfg).unwrap();
    assert_eq!(a.log, b.log);
}

#[test]
fn odd_total_is_adjusted_and_tiny_total_fails() {
    let cfg = MatchConfig {
        total_cards: 7,
        ..MatchConfig::default()
    };
    assert_eq!(setup_match(&cfg).unwrap().total_cards(), 6);

    let cfg = MatchConfig {
        total_cards: 2,
        ..MatchConfig::default()
    };
    let err = simulate_match(cfg).unwrap_err();
    assert!(err.to_string().contains("invalid card count 2"));
}

#[test]
fn second_seat_name_follows_opponent_kind() {
    let mut cfg = MatchConfig {
        opponent: OpponentKind::Human,
        ..MatchConfig::default()
    };
    assert_eq!(cfg.second_display_name(), "Player2");
    cfg.opponent = OpponentKind::Computer;
    assert_eq!(cfg.second_display_name(), "Computer");
    cfg.second_name = Some("Grace".into());
    assert_eq!(cfg.second_display_name(), "Grace");
}

#[test]
fn many_summary_makes_sense() {
    let cfg = MatchConfig {
        preset_id: Some("classic".into()),
        ..MatchConfig::default()
    };
    let stats = simulate_match_many(cfg, 40).unwrap();
    assert_eq!(stats.samples, 40);
    assert_eq!(stats.first_wins + stats.second_wins + stats.draws, 40);
    assert!((stats.avg_rounds - 10.0).abs() < f64::EPSILON);
}

#[test]
fn zero_samples_is_an_error() {
    assert!(simulate_match_many(MatchConfig::default(), 0).is_err());
}

#[test]
fn every_builtin_preset_parses() {
    for id in builtin_presets().keys() {
        let cfg = load_preset(id).unwrap();
        assert!(cfg.total_cards >= 4, "{id}");
    }
    assert!(load_preset("nope").is_err());
}

#[test]
fn yaml_and_json_configs_agree() {
    let yaml = "total_cards: 10\npolicy: first_half_second_half\nopponent: human\nseed: 3\n";
    let json = r#"{"total_cards":10,"policy":"first_half_second_half","opponent":"human","seed":3}"#;
    let a = parse_config(yaml, ConfigFormat::Yaml).unwrap();
    let b = parse_config(json, ConfigFormat::Json).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.first_name, "Player1");
}

#[test]
fn preset_and_path_together_are_rejected() {
    let cfg = MatchConfig {
        preset_id: Some("quick".into()),
        config_path: Some("match.json".into()),
        ..MatchConfig::default()
    };
    assert!(resolve_config(cfg).is_err());
}

#[test]
fn config_file_is_loaded_from_disk() {
    let dir = std::env::temp_dir().join(format!("cardbattle-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("match.yml");
    std::fs::write(&path, "total_cards: 8\npolicy: random_equal\nseed: 11\n").unwrap();

    let cfg = MatchConfig {
        config_path: Some(path.to_string_lossy().into_owned()),
        ..MatchConfig::default()
    };
    let resolved = resolve_config(cfg).unwrap();
    assert_eq!(resolved.total_cards, 8);
    assert_eq!(resolved.policy, DistributionPolicy::RandomEqual);
    assert!(resolved.config_path.is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn win_lines_name_both_sides() {
    let cfg = MatchConfig {
        total_cards: 20,
        first_name: "Ada".into(),
        seed: 8,
        ..MatchConfig::default()
    };
    let res = simulate_match(cfg).unwrap();
    let wins: Vec<_> = res.log.iter().filter(|l| l.starts_with("[WIN]")).collect();
    assert!(!wins.is_empty());
    for line in wins {
        assert!(
            line == "[WIN] Ada takes both cards from Computer"
                || line == "[WIN] Computer takes both cards from Ada",
            "{line}"
        );
    }
}

#[test]
fn bom_prefixed_config_resolves_like_plain_utf8() {
    let dir = std::env::temp_dir().join(format!("cardbattle-bom-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let body = r#"{"total_cards":6,"policy":"random_equal","seed":4}"#;

    let utf8 = dir.join("utf8-bom.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(body.as_bytes());
    std::fs::write(&utf8, bytes).unwrap();

    let utf16 = dir.join("utf16-bom.json");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in body.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    std::fs::write(&utf16, bytes).unwrap();

    let expected = parse_config(body, ConfigFormat::Json).unwrap();
    for path in [&utf8, &utf16] {
        assert_eq!(load_config(path).unwrap(), expected);
        let cfg = MatchConfig {
            config_path: Some(path.to_string_lossy().into_owned()),
            ..MatchConfig::default()
        };
        assert_eq!(resolve_config(cfg).unwrap().total_cards, 6);
    }

    std::fs::remove_dir_all(&dir).ok();
}
