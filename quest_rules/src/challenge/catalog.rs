//! The static challenge tables.

use super::{Category, ChallengeTemplate};

/// Real-world magnitude questions.
pub static SCALE_CHALLENGES: [ChallengeTemplate; 8] = [
    ChallengeTemplate {
        key: "scale-seconds",
        story: "You stand at the entrance of the ancient Crystal Caverns. The cave glows with an ethereal blue light, and whispers of ancient magic echo in the darkness.",
        question: "Roughly how long is 1,000 seconds?",
        options: [
            "About 5 minutes",
            "About 17 minutes",
            "About an hour",
            "About 3 hours",
        ],
        correct_index: 1,
        explanation: "1000 seconds divided by 60 gives approximately 16.67 minutes.",
        fun_fact: "The average pop song is about 3-4 minutes long, so 1,000 seconds is roughly 4 songs!",
        category: Category::Scale,
        close_indices: &[0, 2],
    },
    ChallengeTemplate {
        key: "scale-coins",
        story: "You press forward deeper into the unknown. The path ahead forks into three directions. Each seems to hold its own secrets, but only one leads closer to your goal.",
        question: "If you stack 1,000 coins (like quarters), how tall would the stack be?",
        options: [
            "About as tall as a coffee mug",
            "About as tall as an adult person",
            "About as tall as a two-story house",
            "About as tall as the Eiffel Tower",
        ],
        correct_index: 1,
        explanation: "A quarter is about 1.75mm thick. 1000 × 1.75mm = 1,750mm or about 1.75 meters—roughly the height of an adult.",
        fun_fact: "If you stacked 1,000,000 quarters, you'd have a tower about 1.75 km tall—taller than most mountains!",
        category: Category::Scale,
        close_indices: &[0, 2],
    },
    ChallengeTemplate {
        key: "scale-code-pages",
        story: "A challenge appears before you. The ancient ones left this test to prove one's worthiness. Answer wisely, for the cost of failure is steep.",
        question: "1,000 lines of code is roughly how many pages?",
        options: [
            "About 2-3 pages",
            "About 10-15 pages",
            "About 50-60 pages",
            "About 200+ pages",
        ],
        correct_index: 1,
        explanation: "With typical code formatting (30-50 lines per page), 1,000 lines fill roughly 20-33 pages.",
        fun_fact: "The original Pac-Man game had about 3,000 lines of code—a 'tiny' game by today's standards!",
        category: Category::Scale,
        close_indices: &[2],
    },
    ChallengeTemplate {
        key: "scale-steps",
        story: "The trial intensifies. Your mind must remain sharp, for the shadows of doubt creep ever closer with each passing moment.",
        question: "Roughly how far would you walk in 1,000 steps?",
        options: [
            "About the length of a school bus",
            "About the length of a basketball court",
            "About the length of a soccer field",
            "About the length of a marathon",
        ],
        correct_index: 1,
        explanation: "An average step is about 0.75 meters. 1,000 × 0.75m = 750 meters—roughly the length of 7-8 basketball courts!",
        fun_fact: "A marathon is 42,195 meters, so you'd need about 56,000 steps to complete one!",
        category: Category::Scale,
        close_indices: &[2],
    },
    ChallengeTemplate {
        key: "scale-reading",
        story: "Your final challenge awaits. The ancient guardians watch, waiting to see if you truly possess the wisdom to complete your quest.",
        question: "If you read 1,000 words per minute, how long would it take to read a typical novel (80,000 words)?",
        options: [
            "About 10 minutes",
            "About 80 minutes (1.5 hours)",
            "About 800 minutes (13+ hours)",
            "About 8,000 minutes (5+ days)",
        ],
        correct_index: 2,
        explanation: "80,000 words ÷ 1,000 words/minute = 80 minutes (1 hour and 20 minutes).",
        fun_fact: "The longest novel ever published, 'In Search of Lost Time,' has about 1.2 million words—it would take 20 hours to read at 1,000 wpm!",
        category: Category::Scale,
        close_indices: &[1],
    },
    ChallengeTemplate {
        key: "scale-photos",
        story: "You encounter a massive library filled with scrolls. The librarian asks: how much can 1GB really hold?",
        question: "Approximately how many photos can 1GB of storage hold?",
        options: [
            "About 50 photos",
            "About 200-300 photos",
            "About 1,000-2,000 photos",
            "About 10,000+ photos",
        ],
        correct_index: 2,
        explanation: "A typical smartphone photo is 0.5-1MB. So 1GB (1024MB) can hold roughly 200-2,000 photos depending on quality.",
        fun_fact: "The average person takes 1,500+ photos per year—that's about 1.5-3GB of storage!",
        category: Category::Scale,
        close_indices: &[1],
    },
    ChallengeTemplate {
        key: "scale-web-pages",
        story: "A futuristic display shows the world's data. You need to understand scale.",
        question: "Roughly how many web pages exist on the internet today?",
        options: [
            "About 1 million",
            "About 50 million",
            "About 1-2 billion",
            "About 100 billion+",
        ],
        correct_index: 2,
        explanation: "Google alone indexes over 1 billion web pages, with estimates suggesting 2-5 billion publicly accessible pages.",
        fun_fact: "If you spent just 1 second on each page, it would take 30+ years to see them all!",
        category: Category::Scale,
        close_indices: &[3],
    },
    ChallengeTemplate {
        key: "scale-heartbeats",
        story: "You face a temporal puzzle. Time itself seems to bend around this question.",
        question: "How many heartbeats does the average human have in a lifetime?",
        options: [
            "About 100 million",
            "About 500 million",
            "About 2-3 billion",
            "About 10 billion",
        ],
        correct_index: 2,
        explanation: "At 70 bpm × 60 × 24 × 365 × 80 years ≈ 2.9 billion beats.",
        fun_fact: "Your heart beats about 100,000 times per day—enough to fill a small swimming pool!",
        category: Category::Scale,
        close_indices: &[1],
    },
];

/// Growth, probability, and information-theory questions.
pub static CONCEPTUAL_CHALLENGES: [ChallengeTemplate; 6] = [
    ChallengeTemplate {
        key: "concept-doubling",
        story: "A wise sage appears, testing your understanding of computational intuition.",
        question: "If you doubled a number every day for 30 days, how large would it be compared to the starting number?",
        options: [
            "About 100 times larger",
            "About 1,000 times larger",
            "About 1 billion times larger",
            "About 1 trillion times larger",
        ],
        correct_index: 2,
        explanation: "2^30 = 1,073,741,824 ≈ 1 billion. Exponential growth is surprisingly powerful!",
        fun_fact: "This is why small habits compound dramatically—like how investing early pays off enormously.",
        category: Category::Conceptual,
        close_indices: &[3],
    },
    ChallengeTemplate {
        key: "concept-chessboard",
        story: "An ancient algorithm master challenges you with a classic problem.",
        question: "If you had a chessboard with 1 grain of rice on the first square, 2 on the second, 4 on the third (doubling each time), how many grains would be on the last square?",
        options: [
            "About 1 million grains",
            "About 100 million grains",
            "About 9×10^18 grains (9 quintillion)",
            "About 1×10^24 grains",
        ],
        correct_index: 2,
        explanation: "2^63 = 9,223,372,036,854,775,808 ≈ 9×10^18. This is the famous wheat and chessboard problem!",
        fun_fact: "9 quintillion grains of rice would cover the entire country of India about 1 meter deep!",
        category: Category::Conceptual,
        close_indices: &[1],
    },
    ChallengeTemplate {
        key: "concept-parameters",
        story: "You encounter a neural network visualization. Understanding scales of AI power is key.",
        question: "Modern large language models often have billions of parameters. Roughly how many 'connections' might a 100-billion parameter model have?",
        options: [
            "About 10 million",
            "About 1 billion",
            "About 100 billion",
            "About 10 trillion",
        ],
        correct_index: 2,
        explanation: "Each parameter is essentially a connection between neurons in the network—so 100B parameters = 100B connections.",
        fun_fact: "The human brain has about 100 trillion synapses—so we're still smaller than biological neural networks!",
        category: Category::Conceptual,
        close_indices: &[3],
    },
    ChallengeTemplate {
        key: "concept-qubits",
        story: "A quantum computing oracle poses a question about processing power.",
        question: "Quantum computers exploit superposition. A quantum bit (qubit) can represent multiple states at once. How might 50 qubits compare to a classical computer's representation?",
        options: [
            "About 50 times more powerful",
            "About 1,000 times more powerful",
            "About 1 quadrillion times more powerful",
            "Cannot be directly compared",
        ],
        correct_index: 2,
        explanation: "50 qubits can represent 2^50 ≈ 1 quadrillion states simultaneously—a quantum advantage.",
        fun_fact: "This is why quantum computers could solve certain problems (like cryptography) exponentially faster!",
        category: Category::Conceptual,
        close_indices: &[3],
    },
    ChallengeTemplate {
        key: "concept-birthday",
        story: "You face a probability paradox that challenges your intuition.",
        question: "In a group of 23 people, what's the probability that at least two share the same birthday?",
        options: ["Less than 1%", "About 25%", "About 50%", "Over 50%"],
        correct_index: 3,
        explanation: "Surprisingly, with 23 people, the probability is about 50.7%! This is the famous birthday paradox.",
        fun_fact: "With 70 people, the probability jumps to 99.9%!",
        category: Category::Conceptual,
        close_indices: &[2],
    },
    ChallengeTemplate {
        key: "concept-compression",
        story: "A master of data compression challenges your understanding of information theory.",
        question: "What's the theoretical limit of lossless data compression?",
        options: [
            "50% reduction",
            "90% reduction",
            "No theoretical limit—you can always compress more",
            "You cannot compress random data at all",
        ],
        correct_index: 3,
        explanation: "Random data is incompressible—it has no patterns to exploit. This is a fundamental information theory result.",
        fun_fact: "This is why compression works great on documents and images but poorly on already-compressed files!",
        category: Category::Conceptual,
        close_indices: &[],
    },
];

/// Platform feature questions.
pub static FEATURE_CHALLENGES: [ChallengeTemplate; 6] = [
    ChallengeTemplate {
        key: "feature-app-builder",
        story: "You discover a Kilo-powered terminal glowing with blue light. A holographic guide appears, offering wisdom about the platform's capabilities.",
        question: "What is Kilo's App Builder primarily designed to help developers do?",
        options: [
            "Write complex algorithms from scratch",
            "Create full-stack web and mobile applications without extensive coding",
            "Manage database migrations manually",
            "Deploy raw server infrastructure",
        ],
        correct_index: 1,
        explanation: "Kilo's App Builder helps developers create full-stack applications with minimal manual coding, handling much of the boilerplate automatically.",
        fun_fact: "App Builder can generate complete application scaffolds in seconds, handling both frontend and backend components.",
        category: Category::Feature,
        close_indices: &[0],
    },
    ChallengeTemplate {
        key: "feature-cloud-agents",
        story: "A sleek Kilo interface displays the Cloud Agents panel. The agents are humming with activity, each handling different tasks autonomously.",
        question: "Which best describes what Kilo's Cloud Agents provide?",
        options: [
            "Physical server maintenance",
            "Autonomous AI-powered tasks that handle complex workflows without constant supervision",
            "Manual code review services",
            "Hardware rental services",
        ],
        correct_index: 1,
        explanation: "Cloud Agents are AI-powered autonomous workers that can manage complex tasks and workflows independently.",
        fun_fact: "Cloud Agents can handle everything from data processing to customer support automation without human intervention.",
        category: Category::Feature,
        close_indices: &[0],
    },
    ChallengeTemplate {
        key: "feature-managed-indexing",
        story: "You find a Kilo dashboard showing Managed Indexing. Vectors are being organized automatically, optimizing search and retrieval.",
        question: "What problem does Kilo's Managed Indexing solve for developers?",
        options: [
            "Manually configuring server clusters",
            "Automatically organizing and optimizing vector databases for efficient AI retrieval",
            "Writing SQL queries by hand",
            "Managing DNS settings",
        ],
        correct_index: 1,
        explanation: "Managed Indexing automates the complex task of organizing vector data for optimal AI-powered search and retrieval.",
        fun_fact: "With Managed Indexing, you can set up enterprise-grade vector search in minutes instead of weeks.",
        category: Category::Feature,
        close_indices: &[0],
    },
    ChallengeTemplate {
        key: "feature-one-click-deploy",
        story: "The Kilo deployment panel shows a single button glowing with potential. One click and entire applications go live.",
        question: "What is the main benefit of Kilo's one-click deploy feature?",
        options: [
            "Reducing deployment to a single mouse click, eliminating complex configuration",
            "Automatically writing all your code",
            "Replacing your entire development team",
            "Eliminating the need for testing",
        ],
        correct_index: 0,
        explanation: "One-click deploy dramatically simplifies the deployment process, turning complex multi-step deployments into a single action.",
        fun_fact: "What traditionally takes hours of DevOps work can be accomplished with a single button press.",
        category: Category::Feature,
        close_indices: &[1],
    },
    ChallengeTemplate {
        key: "feature-ai-coding",
        story: "You access the Kilo coding environment. AI assistance is everywhere, suggesting improvements and catching bugs in real-time.",
        question: "How does AI-assisted coding in Kilo help developers?",
        options: [
            "Replacing developers entirely",
            "Providing intelligent suggestions, code completion, and bug detection while you code",
            "Automatically deleting problematic code",
            "Writing documentation only",
        ],
        correct_index: 1,
        explanation: "AI-assisted coding augments developers with smart suggestions, autocompletion, and real-time error detection.",
        fun_fact: "AI-assisted coding can increase developer productivity by 2-3x by handling repetitive patterns and catching errors early.",
        category: Category::Feature,
        close_indices: &[0],
    },
    ChallengeTemplate {
        key: "feature-platform",
        story: "A Kilo wizard appears, offering to test your understanding of the platform's ecosystem.",
        question: "Which of the following best describes Kilo's overall platform approach?",
        options: [
            "A comprehensive AI development platform combining app building, autonomous agents, and intelligent deployment",
            "A simple code editor with basic syntax highlighting",
            "A hardware manufacturing service",
            "A social network for developers",
        ],
        correct_index: 0,
        explanation: "Kilo provides an integrated platform with multiple AI-powered tools for the full application development lifecycle.",
        fun_fact: "Kilo's platform combines 5+ major features into one cohesive environment for AI-powered development.",
        category: Category::Feature,
        close_indices: &[],
    },
];

/// Size of the combined scale + conceptual pool.
pub const REGULAR_POOL_LEN: usize = SCALE_CHALLENGES.len() + CONCEPTUAL_CHALLENGES.len();

/// Scale questions followed by conceptual questions, wrapping at the pool length.
pub fn regular_challenge(index: usize) -> &'static ChallengeTemplate {
    let index = index % REGULAR_POOL_LEN;
    if index < SCALE_CHALLENGES.len() {
        &SCALE_CHALLENGES[index]
    } else {
        &CONCEPTUAL_CHALLENGES[index - SCALE_CHALLENGES.len()]
    }
}

/// Feature question at `index`, or `None` once the pool is spent.
pub fn feature_challenge(index: usize) -> Option<&'static ChallengeTemplate> {
    FEATURE_CHALLENGES.get(index)
}

/// Every template in the catalog, regular pool first.
pub fn all_templates() -> impl Iterator<Item = &'static ChallengeTemplate> {
    SCALE_CHALLENGES
        .iter()
        .chain(CONCEPTUAL_CHALLENGES.iter())
        .chain(FEATURE_CHALLENGES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(REGULAR_POOL_LEN, 14);
        assert_eq!(FEATURE_CHALLENGES.len(), 6);
        assert_eq!(all_templates().count(), 20);
    }

    #[test]
    fn test_regular_pool_order_and_wrap() {
        assert_eq!(regular_challenge(0).key, "scale-seconds");
        assert_eq!(regular_challenge(8).key, "concept-doubling");
        assert_eq!(regular_challenge(13).key, "concept-compression");
        assert_eq!(regular_challenge(14).key, "scale-seconds");
    }

    #[test]
    fn test_feature_pool_is_finite() {
        assert!(feature_challenge(5).is_some());
        assert!(feature_challenge(6).is_none());
    }

    #[test]
    fn test_tables_are_well_formed() {
        let mut keys = HashSet::new();
        for template in all_templates() {
            assert!(keys.insert(template.key), "duplicate key {}", template.key);
            assert!(template.correct_index < template.options.len());
            assert!(
                !template.close_indices.contains(&template.correct_index),
                "{} lists its correct answer as close",
                template.key
            );
            assert!(template.close_indices.iter().all(|i| *i < template.options.len()));
        }
    }

    #[test]
    fn test_categories_match_tables() {
        assert!(SCALE_CHALLENGES.iter().all(|t| t.category == Category::Scale));
        assert!(CONCEPTUAL_CHALLENGES
            .iter()
            .all(|t| t.category == Category::Conceptual));
        assert!(FEATURE_CHALLENGES.iter().all(|t| t.category == Category::Feature));
    }
}
