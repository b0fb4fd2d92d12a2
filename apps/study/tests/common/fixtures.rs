//! Test fixtures for flashcard content.

/// The deck from the built-in format example.
pub const CAPITALS: &str = "Question: 1
What is the capital of France?
Answer: Paris is the capital of France.

Question: 2
What is the largest planet in our solar system?
Answer: Jupiter is the largest planet.
";

/// Generate content with a specified number of cards.
///
/// # Arguments
/// * `num_cards` - Number of cards to generate
/// * `with_ids` - Whether to write the numeric label after `Question:`
pub fn sample_content(num_cards: usize, with_ids: bool) -> String {
    (0..num_cards)
        .map(|i| {
            if with_ids {
                format!(
                    "Question: {}\nQuestion {}?\nAnswer: Answer {}.\n",
                    i + 1,
                    i + 1,
                    i + 1
                )
            } else {
                format!("Question: Question {}?\nAnswer: Answer {}.\n", i + 1, i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
