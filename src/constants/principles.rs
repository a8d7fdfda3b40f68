use crate::models::domain::Principle;

/// The evaluation criteria, in the order results are reported.
pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Chunk-Level Retrieval",
        description: "Is each section self-contained and focused on one topic?",
        prompt: "Analyze if the content contains semantically complete chunks that are self-contained and independently understandable. Does each section focus on a single idea? Rate 0-10 and explain.",
    },
    Principle {
        title: "Answer Synthesis Optimization",
        description: "Is the answer easy to extract and fit into multi-source AI answers?",
        prompt: "Evaluate if the content is structured with a summary followed by elaboration, plain tone, and Q&A format. Rate 0-10 and explain.",
    },
    Principle {
        title: "Citation-Worthiness",
        description: "Does the content look trustworthy and fact-based?",
        prompt: "Check if content includes citations, author credentials, accurate claims, and timestamps. Rate 0-10 and explain.",
    },
    Principle {
        title: "Topical Breadth & Depth",
        description: "Does the site use hub-cluster model to fully cover a topic?",
        prompt: "Assess if the content follows a pillar-and-cluster approach, linking to detailed subtopics. Rate 0-10 and explain.",
    },
    Principle {
        title: "Multi-Modal Support",
        description: "Are visuals and tables machine-readable and helpful?",
        prompt: "Evaluate if the content uses HTML tables, descriptive alt text, <figure> markup, and captions for images. Rate 0-10 and explain.",
    },
    Principle {
        title: "Authoritativeness Signals",
        description: "Is there clear EEAT (expertise, authority, trust) in the content?",
        prompt: "Check for expert bylines, original data, external mentions, structured metadata, and citations. Rate 0-10 and explain.",
    },
    Principle {
        title: "Personalization Resilience",
        description: "Does the content serve diverse intents, personas, or regions?",
        prompt: "Analyze if content targets multiple personas, intents, and locales with segmented sections. Rate 0-10 and explain.",
    },
    Principle {
        title: "AI Crawlability & Indexability",
        description: "Is the content accessible and indexable by AI bots?",
        prompt: "Evaluate if content is server-rendered, allows AI bots via robots.txt, and avoids noindex/nosnippet. Rate 0-10 and explain.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_eight_principles() {
        assert_eq!(PRINCIPLES.len(), 8);
    }

    #[test]
    fn test_catalog_order() {
        let titles: Vec<_> = PRINCIPLES.iter().map(|p| p.title).collect();
        assert_eq!(titles.first(), Some(&"Chunk-Level Retrieval"));
        assert_eq!(titles.last(), Some(&"AI Crawlability & Indexability"));
    }

    #[test]
    fn test_titles_are_unique() {
        let titles: HashSet<_> = PRINCIPLES.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PRINCIPLES.len());
    }

    #[test]
    fn test_every_prompt_asks_for_a_rating() {
        for principle in PRINCIPLES {
            assert!(
                principle.prompt.ends_with("Rate 0-10 and explain."),
                "prompt for '{}' does not ask for a rating",
                principle.title
            );
            assert!(!principle.description.is_empty());
        }
    }
}
