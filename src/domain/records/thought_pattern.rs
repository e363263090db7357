//! Reference library of cognitive distortions.

use once_cell::sync::Lazy;

use crate::domain::foundation::ThoughtPatternId;

/// One named distortion with examples and ways to answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtPattern {
    pub id: ThoughtPatternId,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub reframe_strategies: &'static [&'static str],
}

/// The curated catalog, ids starting at 1 in declaration order.
pub static THOUGHT_PATTERNS: Lazy<Vec<ThoughtPattern>> = Lazy::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, &(name, description, examples, reframe_strategies))| ThoughtPattern {
            id: ThoughtPatternId::new(i as u64 + 1),
            name,
            description,
            examples,
            reframe_strategies,
        })
        .collect()
});

type Entry = (&'static str, &'static str, &'static [&'static str], &'static [&'static str]);

const CATALOG: &[Entry] = &[
    (
        "Catastrophizing",
        "Expecting the worst possible outcome and treating it as likely.",
        &["If I make a mistake in this meeting, I'll get fired.", "This headache must be something serious."],
        &["What is the most likely outcome?", "How have similar situations actually turned out?"],
    ),
    (
        "Mind Reading",
        "Assuming you know what others think, usually that it is negative.",
        &["She didn't reply, so she must be angry with me.", "They think I'm boring."],
        &["What evidence do I have for what they think?", "What else could explain their behaviour?"],
    ),
    (
        "All-or-Nothing Thinking",
        "Seeing things in black and white with no middle ground.",
        &["If it isn't perfect, it's a failure.", "I ate one cookie, so my diet is ruined."],
        &["Where does this sit on a scale from 0 to 100?", "What would partial success look like?"],
    ),
    (
        "Overgeneralization",
        "Drawing a broad conclusion from a single event.",
        &["I failed this test, I always fail.", "Nobody ever listens to me."],
        &["Is this always true, or only this time?", "Can I recall a counterexample?"],
    ),
    (
        "Mental Filter",
        "Focusing on one negative detail and ignoring everything else.",
        &["The whole day was ruined by that one comment."],
        &["What went well that I am overlooking?", "Would a neutral observer weigh it the same way?"],
    ),
    (
        "Disqualifying the Positive",
        "Dismissing good experiences as not counting.",
        &["They only complimented me to be nice.", "I just got lucky."],
        &["What would it mean to accept this at face value?", "Would I dismiss it if a friend achieved it?"],
    ),
    (
        "Should Statements",
        "Holding rigid rules about how you or others must behave.",
        &["I should never feel anxious.", "They should know what I need."],
        &["Replace 'should' with 'I would prefer'.", "Where did this rule come from, and does it help?"],
    ),
    (
        "Labeling",
        "Attaching a global negative label instead of describing a behaviour.",
        &["I'm an idiot.", "He's a total loser."],
        &["Describe the specific action instead of the person.", "Would one event define anyone else?"],
    ),
    (
        "Personalization",
        "Taking responsibility for events outside your control.",
        &["The party was a flop because of me.", "My friend is sad, it must be my fault."],
        &["What other factors contributed?", "How much of this was actually in my control?"],
    ),
    (
        "Emotional Reasoning",
        "Treating feelings as proof of facts.",
        &["I feel like a failure, so I am one.", "I'm scared, so it must be dangerous."],
        &["Feelings are real but not evidence. What are the facts?", "Have I felt this way before when it wasn't true?"],
    ),
    (
        "Fortune Telling",
        "Predicting that things will turn out badly as if it were certain.",
        &["I won't enjoy the party anyway.", "This will never get better."],
        &["What would I need to see to know for sure?", "What are three other ways this could go?"],
    ),
];

/// Looks up a pattern by id.
pub fn find_thought_pattern(id: ThoughtPatternId) -> Option<&'static ThoughtPattern> {
    THOUGHT_PATTERNS.iter().find(|p| p.id == id)
}
