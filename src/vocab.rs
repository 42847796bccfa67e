//! Labels for the topic-generation scene.

/// Topic labels, in topic-index order.
pub const TOPIC_LABELS: [&str; 2] = ["food", "animals"];

/// The concatenated vocabulary: the first block belongs to topic 0, the second to topic 1.
pub const WORDS: [&str; 10] = [
    "banana",
    "kiwi",
    "lemon",
    "strawberry",
    "tomato",
    "chicken",
    "piggy",
    "sheep",
    "crocodile",
    "zebra",
];

/// Label for a topic index, falling back to `topic N`.
pub fn topic_label(topic: usize) -> String {
    TOPIC_LABELS
        .get(topic)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("topic {topic}"))
}

/// Label for a word index, falling back to `word N`.
pub fn word_label(word: usize) -> String {
    WORDS
        .get(word)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("word {word}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_past_the_builtin_vocabulary() {
        assert_eq!(topic_label(1), "animals");
        assert_eq!(topic_label(4), "topic 4");
        assert_eq!(word_label(9), "zebra");
        assert_eq!(word_label(10), "word 10");
    }
}
