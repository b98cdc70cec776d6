//! Per-genre narrative content: openings, endings, archetypes.

use serde::Serialize;

/// Labels shown next to the three answer tallies on the ending screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsLabels {
    pub correct: &'static str,
    pub close: &'static str,
    pub wrong: &'static str,
}

/// A title awarded at the end of a quest.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

/// Everything a genre contributes to a session.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenreProfile {
    /// Shown above the first challenge.
    pub opening_story: &'static str,
    /// Ordered from least to most steps spent.
    pub endings: &'static [&'static str],
    pub stats_labels: StatsLabels,
    /// Ordered from least to most steps spent.
    pub archetypes: &'static [Archetype],
    pub final_message: &'static str,
    /// Prefixed to the story of feature challenges.
    pub feature_prefix: &'static str,
    /// Prefixed to the story of scale and conceptual challenges.
    pub round_prefix: &'static str,
    /// Prefixed to reused challenges once the shuffled order runs out.
    pub continues_prefix: &'static str,
}

impl GenreProfile {
    /// Ending text at `index`, clamped to the last ending.
    pub fn ending(&self, index: usize) -> &'static str {
        self.endings[index.min(self.endings.len() - 1)]
    }

    /// Archetype at `index`, clamped to the last archetype.
    pub fn archetype(&self, index: usize) -> &'static Archetype {
        &self.archetypes[index.min(self.archetypes.len() - 1)]
    }
}

pub static FANTASY: GenreProfile = GenreProfile {
    opening_story: "You stand at the entrance of the ancient Crystal Caverns, where legends speak of the Heart of Eternity—a gem said to grant wishes beyond mortal comprehension. The cave glows with an ethereal blue light, and you can hear distant whispers of ancient magic. Your quest has only just begun, brave adventurer. But beware: the cavern tests not just your strength, but your wisdom.",
    endings: &[
        "With the Heart of Eternity in hand, you emerge from the cavern as a legend. Songs are sung of your wisdom, and future generations shall speak of the hero who conquered the Crystal Caverns through cleverness rather than mere strength.",
        "Though you did not claim the Heart of Eternity, the ancient mages of the cavern recognized your wit and granted you a fraction of its power. You return to your village as a learned sorcerer, ready to protect your people with newfound magic.",
        "The cavern's final test revealed your true nature. You chose wisdom over greed, and the Crystal Caverns themselves bowed to your virtue. You become the Guardian of the Deep, keeper of ancient secrets.",
    ],
    stats_labels: StatsLabels {
        correct: "Spells Mastered",
        close: "Illusions Seen",
        wrong: "Traps Triggered",
    },
    archetypes: &[
        Archetype {
            name: "The Kilo Archmage",
            tagline: "A thousand truths revealed",
            description: "Your estimation magic is unmatched. You calculated your way through every puzzle the Crystal Caverns threw at you.",
        },
        Archetype {
            name: "The Kilo Trickster",
            tagline: "A thousand paths traversed",
            description: "Quick wits and quicker guesses. You navigated the cavern's tricks with cunning and courage.",
        },
        Archetype {
            name: "The Kilo Apprentice",
            tagline: "A thousand lessons learned",
            description: "Every wrong turn taught you something. Your journey has only just begun, but your potential is limitless.",
        },
    ],
    final_message: "May your estimates always be true, hero.",
    feature_prefix: "Ancient Kilo runes glow before you, revealing secrets of the platform's power...",
    round_prefix: "The Crystal Caverns shimmer with ancient wisdom...",
    continues_prefix: "The caverns wind ever deeper, and an old riddle echoes once more...",
};

pub static SCIFI: GenreProfile = GenreProfile {
    opening_story: "You're the pilot of the Starship Odyssey, drifting near the mysterious Nebula X-7. Your ship's AI has detected an alien artifact emitting impossible energy signatures. The Federation sent you here because you're their best—and your ship's systems need recalibration using estimation skills that could determine whether you can safely approach the anomaly.",
    endings: &[
        "You successfully extracted the alien technology, revolutionizing Federation science. Your name is etched in the Hall of Explorers, and future ships will bear the Odyssey-class designation in your honor.",
        "The artifact's data downloaded to your ship's computer, but you chose not to approach dangerously. The Federation commends your prudent judgment—you've provided invaluable data while keeping your crew safe.",
        "Your careful approach revealed the artifact to be a message from an ancient civilization. You become the first human to make contact with alien wisdom, thanks to your measured exploration.",
    ],
    stats_labels: StatsLabels {
        correct: "Calculations Perfect",
        close: "Readings Verified",
        wrong: "Anomalies Detected",
    },
    archetypes: &[
        Archetype {
            name: "The Kilo Navigator",
            tagline: "A thousand light-years bridged",
            description: "Your precision in the void is legendary. Every measurement, every calculation brought you closer to the stars.",
        },
        Archetype {
            name: "The Kilo Pioneer",
            tagline: "A thousand frontiers crossed",
            description: "Bold decisions and brave estimations. You charted unknown territories with nothing but your wits.",
        },
        Archetype {
            name: "The Kilo Cadet",
            tagline: "A thousand simulations run",
            description: "Your training has paid off. The Academy would be proud of your performance in the field.",
        },
    ],
    final_message: "Engage hyperdrive, Commander. The universe awaits.",
    feature_prefix: "Your ship's Kilo interface illuminates, offering technical wisdom...",
    round_prefix: "The Starship Odyssey's sensors detect an estimation challenge...",
    continues_prefix: "The nebula shifts, and the sensors replay a familiar reading...",
};

pub static MYSTERY: GenreProfile = GenreProfile {
    opening_story: "Detective, you've been called to Blackwood Manor. Lord Blackwood has been found unconscious in his study, and a peculiar antidote was found in his hand. The toxin was fast-acting, and only someone with keen observational skills can piece together what happened. The clock is ticking—the butler said the antidote only lasts 1,000 seconds before it's too late.",
    endings: &[
        "You solved the case before time ran out! Lord Blackwood awakens and, impressed by your deductive skills, makes you the head of the Blackwood Investigations Unit. Justice has been served, detective.",
        "You identified the culprit in time to save Lord Blackwood, though the case had more twists than expected. The newspapers call you 'The Clockwork Detective' for your ability to work under pressure.",
        "The case solved, you reflect that the truth was stranger than fiction. Your reputation as the sharpest detective in the city is now secured, and criminals everywhere sleep less easily.",
    ],
    stats_labels: StatsLabels {
        correct: "Cases Cracked",
        close: "Leads Followed",
        wrong: "Red Herrings",
    },
    archetypes: &[
        Archetype {
            name: "The Kilo Mastermind",
            tagline: "A thousand clues connected",
            description: "No riddle could withstand your scrutiny. Every piece fell into place under your brilliant deduction.",
        },
        Archetype {
            name: "The Kilo Sleuth",
            tagline: "A thousand suspects interviewed",
            description: "Your instincts are razor-sharp. You cut through deception to find the truth beneath.",
        },
        Archetype {
            name: "The Kilo Rookie",
            tagline: "A thousand files reviewed",
            description: "Every investigation starts somewhere. Your first case showed promise that could become legendary.",
        },
    ],
    final_message: "The city sleeps safer tonight, Detective.",
    feature_prefix: "Evidence points to Kilo's capabilities—you must deduce the truth...",
    round_prefix: "Lord Blackwood's study holds the key to this puzzle...",
    continues_prefix: "The investigation continues, and an old clue resurfaces...",
};

pub static APOCALYPTIC: GenreProfile = GenreProfile {
    opening_story: "Year 2, Day 476. You've found shelter in an abandoned research bunker. Your Geiger counter shows radiation levels spiking outside. The bunker's filtration system needs calibration—you have 1,000 seconds before the next wave of radiation hits. You need to estimate dosages, distances, and survival probabilities using only your wits and limited supplies.",
    endings: &[
        "You calibrated the filtration system just in time. The bunker is safe, and you've secured enough supplies to survive the next decade. In this new world, you've proven yourself a true survivor.",
        "Though the filtration system has minor issues, you've learned to adapt. Your reputation as a resourceful survivor spreads across the wasteland, and others seek your guidance.",
        "Your careful calculations revealed that the bunker has a hidden second level with preserved supplies. You didn't just survive—you thrived, thanks to your numerical intuition.",
    ],
    stats_labels: StatsLabels {
        correct: "Survival Calculated",
        close: "Risks Assessed",
        wrong: "Supplies Lost",
    },
    archetypes: &[
        Archetype {
            name: "The Kilo Survivor",
            tagline: "A thousand days endured",
            description: "Every calculation kept you alive. Your analytical mind is the reason you still draw breath in this harsh world.",
        },
        Archetype {
            name: "The Kilo Scavenger",
            tagline: "A thousand miles trekked",
            description: "Resources are scarce, but your estimations ensure nothing goes to waste. You're a legend in the wasteland.",
        },
        Archetype {
            name: "The Kilo Dreamer",
            tagline: "A thousand hopes kept alive",
            description: "Even in darkness, you see possibilities. Your optimism is as valuable as any skill.",
        },
    ],
    final_message: "The wasteland remembers your name.",
    feature_prefix: "A pre-war Kilo terminal still functions, dispensing crucial knowledge...",
    round_prefix: "The bunker's filtration system needs calibration...",
    continues_prefix: "The Geiger counter ticks on as the bunker poses another test...",
};
