//! Challenge selection - decides which question each round serves.
//!
//! Every third round serves a feature challenge until the feature pool is
//! spent; all other rounds draw from the combined scale + conceptual pool.
//! The feature cursor lives on the `Session`, so a fresh session always
//! starts from the first feature question.

use quest_rules::{
    feature_challenge, regular_challenge, Challenge, ChallengeTemplate, SelectionStrategy,
    FEATURE_CADENCE, ORDER_SLOTS,
};
use tracing::debug;

use crate::session::Session;

/// Picks challenges according to a selection strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChallengeSelector {
    strategy: SelectionStrategy,
}

impl ChallengeSelector {
    /// Create a selector with the given strategy.
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Build the challenge for the session's current round.
    ///
    /// Serving a feature challenge advances `session.features_served`.
    pub fn next_challenge(&self, session: &mut Session) -> Challenge {
        let profile = session.genre.profile();

        if let Some(template) = self.feature_for(session) {
            session.features_served += 1;
            debug!(
                session = %session.id,
                round = session.round,
                key = template.key,
                "serving feature challenge"
            );
            return template.instantiate(profile.feature_prefix);
        }

        let (template, prefix) = match self.strategy {
            SelectionStrategy::Sequential => (
                regular_challenge(session.round as usize - 1),
                profile.round_prefix,
            ),
            SelectionStrategy::Shuffled => {
                let slot = (session.round as usize - 1) % ORDER_SLOTS;
                let template = regular_challenge(session.challenge_order[slot] - 1);
                if session.round as usize > ORDER_SLOTS {
                    (template, profile.continues_prefix)
                } else {
                    (template, profile.round_prefix)
                }
            }
        };

        debug!(
            session = %session.id,
            round = session.round,
            key = template.key,
            "serving regular challenge"
        );
        template.instantiate(prefix)
    }

    fn feature_for(&self, session: &Session) -> Option<&'static ChallengeTemplate> {
        if session.round % FEATURE_CADENCE == 0 {
            feature_challenge(session.features_served)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_rules::{Category, Genre, FEATURE_CHALLENGES, REGULAR_POOL_LEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(genre: Genre) -> Session {
        Session::new(genre, 1000, &mut StdRng::seed_from_u64(3))
    }

    fn play_rounds(selector: &ChallengeSelector, session: &mut Session, rounds: u32) -> Vec<Challenge> {
        let mut served = Vec::new();
        for _ in 0..rounds {
            served.push(selector.next_challenge(session));
            session.advance_round();
        }
        served
    }

    #[test]
    fn test_feature_every_third_round() {
        let selector = ChallengeSelector::new(SelectionStrategy::Sequential);
        let mut session = session(Genre::Fantasy);
        let served = play_rounds(&selector, &mut session, 9);

        for (i, challenge) in served.iter().enumerate() {
            let round = i + 1;
            assert_eq!(
                challenge.category == Category::Feature,
                round % 3 == 0,
                "round {}",
                round
            );
        }
        assert_eq!(served[2].key, FEATURE_CHALLENGES[0].key);
        assert_eq!(served[5].key, FEATURE_CHALLENGES[1].key);
        assert_eq!(served[8].key, FEATURE_CHALLENGES[2].key);
        assert_eq!(session.features_served, 3);
    }

    #[test]
    fn test_sequential_regular_rounds_use_round_index() {
        let selector = ChallengeSelector::new(SelectionStrategy::Sequential);
        let mut session = session(Genre::Scifi);
        let served = play_rounds(&selector, &mut session, 4);

        assert_eq!(served[0].key, regular_challenge(0).key);
        assert_eq!(served[1].key, regular_challenge(1).key);
        // round 3 is a feature round, round 4 keeps its own index
        assert_eq!(served[3].key, regular_challenge(3).key);
    }

    #[test]
    fn test_feature_pool_exhaustion_falls_back() {
        let selector = ChallengeSelector::new(SelectionStrategy::Sequential);
        let mut session = session(Genre::Mystery);
        let served = play_rounds(&selector, &mut session, 21);

        let features = served
            .iter()
            .filter(|c| c.category == Category::Feature)
            .count();
        assert_eq!(features, FEATURE_CHALLENGES.len());
        assert_eq!(session.features_served, FEATURE_CHALLENGES.len());

        // round 21 is a multiple of 3 but the pool is spent
        let last = &served[20];
        assert_ne!(last.category, Category::Feature);
        assert_eq!(last.key, regular_challenge(20 % REGULAR_POOL_LEN).key);
    }

    #[test]
    fn test_genre_prefixes() {
        let selector = ChallengeSelector::new(SelectionStrategy::Sequential);
        let mut session = session(Genre::Apocalyptic);
        let served = play_rounds(&selector, &mut session, 3);
        let profile = Genre::Apocalyptic.profile();

        assert!(served[0].story.starts_with(profile.round_prefix));
        assert!(served[2].story.starts_with(profile.feature_prefix));
    }

    #[test]
    fn test_shuffled_follows_order() {
        let selector = ChallengeSelector::new(SelectionStrategy::Shuffled);
        let mut session = session(Genre::Fantasy);
        let order = session.challenge_order;
        let served = play_rounds(&selector, &mut session, 11);
        let profile = Genre::Fantasy.profile();

        assert_eq!(served[0].key, regular_challenge(order[0] - 1).key);
        assert_eq!(served[1].key, regular_challenge(order[1] - 1).key);
        assert_eq!(served[3].key, regular_challenge(order[3] - 1).key);
        assert!(served[4].story.starts_with(profile.round_prefix));

        // slot is (round - 1) % 5, so round 7 reads slot 1
        assert_eq!(served[6].key, regular_challenge(order[1] - 1).key);
        assert!(served[6].story.starts_with(profile.continues_prefix));

        // round 11 is the first regular round back on slot 0
        assert_eq!(served[10].key, regular_challenge(order[0] - 1).key);
        assert!(served[10].story.starts_with(profile.continues_prefix));
    }

    #[test]
    fn test_new_session_resets_feature_cursor() {
        let selector = ChallengeSelector::default();
        let mut first = session(Genre::Fantasy);
        play_rounds(&selector, &mut first, 6);
        assert_eq!(first.features_served, 2);

        let mut second = session(Genre::Fantasy);
        let served = play_rounds(&selector, &mut second, 3);
        assert_eq!(served[2].key, FEATURE_CHALLENGES[0].key);
    }
}
