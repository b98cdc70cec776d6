//! Property-based tests for the quest loop.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quest_core::{
    archetype_index, ending_index, shuffled_order, ChallengeSelector, Phase, QuestMachine, Session,
    StepCounter,
};
use quest_rules::{
    AnimationConfig, Category, Genre, QuestConfig, ScoreTable, SelectionStrategy, Verdict,
    STARTING_STEPS,
};

fn genre_strategy() -> impl Strategy<Value = Genre> {
    prop::sample::select(Genre::ALL.to_vec())
}

/// Strategy: a run of answers, each an option index 0-3.
fn answers_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..4usize, 1..40)
}

fn table_strategy() -> impl Strategy<Value = ScoreTable> {
    prop_oneof![Just(ScoreTable::standard()), Just(ScoreTable::gentle())]
}

proptest! {
    // 1. Steps left is always the starting pool minus everything deducted,
    //    and the quest ends exactly when the deductions reach the pool.
    #[test]
    fn pool_tracks_deductions(
        genre in genre_strategy(),
        seed in any::<u64>(),
        table in table_strategy(),
        answers in answers_strategy(),
    ) {
        let config = QuestConfig { score_table: table, ..QuestConfig::default() };
        let mut machine = QuestMachine::new(config);
        let mut rng = StdRng::seed_from_u64(seed);
        machine.start(genre, &mut rng).unwrap();

        let mut deducted = 0i64;
        for &choice in &answers {
            let resolution = machine.answer(choice).unwrap().clone();
            deducted += i64::from(resolution.steps_deducted);

            let session = machine.session().unwrap();
            prop_assert_eq!(i64::from(session.steps), i64::from(STARTING_STEPS) - deducted);
            prop_assert_eq!(i64::from(session.steps_spent), deducted);
            prop_assert_eq!(
                machine.phase() == Phase::Ended,
                deducted >= i64::from(STARTING_STEPS)
            );

            if machine.phase() == Phase::Ended {
                break;
            }
            machine.continue_quest().unwrap();
        }
    }

    // 2. Every answer lands in exactly one tally bucket.
    #[test]
    fn tally_counts_each_answer_once(
        genre in genre_strategy(),
        seed in any::<u64>(),
        answers in answers_strategy(),
    ) {
        let mut machine = QuestMachine::with_defaults();
        let mut rng = StdRng::seed_from_u64(seed);
        machine.start(genre, &mut rng).unwrap();

        let mut answered = 0u32;
        for &choice in &answers {
            let before = machine.session().unwrap().tally;
            let verdict = machine.answer(choice).unwrap().verdict;
            answered += 1;

            let session = machine.session().unwrap();
            let after = session.tally;
            let mut expected = before;
            match verdict {
                Verdict::Correct => expected.correct += 1,
                Verdict::Close => expected.close += 1,
                Verdict::Wrong => expected.wrong += 1,
            }
            prop_assert_eq!(after, expected, "verdict {:?}", verdict);
            prop_assert_eq!(after.answered(), answered);
            prop_assert_eq!(session.round, answered);

            if machine.phase() == Phase::Ended {
                break;
            }
            machine.continue_quest().unwrap();
        }
    }

    // 3. Ending and archetype indices never decrease with spend and stay in range.
    #[test]
    fn indices_monotone_and_capped(a in 0u32..5000, b in 0u32..5000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ending_index(lo, 3) <= ending_index(hi, 3));
        prop_assert!(archetype_index(lo, 3) <= archetype_index(hi, 3));
        prop_assert!(ending_index(hi, 3) <= 2);
        prop_assert!(archetype_index(hi, 3) <= 2);
    }

    // 4. The challenge order is always a permutation of 1..=5.
    #[test]
    fn order_is_permutation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = shuffled_order(&mut rng);
        order.sort_unstable();
        prop_assert_eq!(order, [1, 2, 3, 4, 5]);
    }

    // 5. Feature challenges appear on every third round until all six are used.
    #[test]
    fn feature_cadence(
        genre in genre_strategy(),
        seed in any::<u64>(),
        shuffled in any::<bool>(),
    ) {
        let strategy = if shuffled { SelectionStrategy::Shuffled } else { SelectionStrategy::Sequential };
        let selector = ChallengeSelector::new(strategy);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(genre, STARTING_STEPS, &mut rng);

        for round in 1..=30u32 {
            let challenge = selector.next_challenge(&mut session);
            let expect_feature = round % 3 == 0 && round <= 18;
            prop_assert_eq!(challenge.category == Category::Feature, expect_feature, "round {}", round);
            session.advance_round();
        }
        prop_assert_eq!(session.features_served, 6);
    }

    // 6. The counter always lands on its target and never overshoots.
    #[test]
    fn counter_lands_on_target(
        from in -2000i32..2000,
        to in -2000i32..2000,
        duration_ms in 0u64..2000,
        tick_ms in 1u64..100,
    ) {
        let timing = AnimationConfig { duration_ms, tick_ms };
        let frames: Vec<i32> = StepCounter::new(from, to, &timing).collect();

        prop_assert_eq!(frames.last().copied().unwrap_or(from), to);
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        prop_assert!(frames.iter().all(|f| (lo..=hi).contains(f)));
    }
}
