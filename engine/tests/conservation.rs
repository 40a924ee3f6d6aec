use engine::api::{setup_match, MatchConfig};
use engine::{DistributionPolicy, OpponentKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cards_are_conserved_every_round(
        seed in any::<u64>(),
        half in 2usize..30,
        policy in prop_oneof![
            Just(DistributionPolicy::Alternate),
            Just(DistributionPolicy::FirstHalfSecondHalf),
            Just(DistributionPolicy::RandomEqual),
        ],
    ) {
        let total = half * 2;
        let cfg = MatchConfig {
            total_cards: total,
            policy,
            opponent: OpponentKind::Computer,
            seed,
            ..MatchConfig::default()
        };
        let mut game = setup_match(&cfg).unwrap();
        prop_assert_eq!(game.total_cards(), total);

        let mut rounds = 0u32;
        while !game.is_finished() {
            let trophies_before = game.first().score() + game.second().score();
            game.play_round().unwrap();
            rounds += 1;
            prop_assert_eq!(game.total_cards(), total);
            prop_assert_eq!(game.first().score() + game.second().score(), trophies_before + 2);
            prop_assert_eq!(
                game.first().score() + game.second().score(),
                2 * rounds as usize
            );
        }

        prop_assert_eq!(rounds as usize, half);
        prop_assert_eq!(game.first().score() + game.second().score(), total);
    }
}
