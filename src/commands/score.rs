//! Score a single guess against a chosen secret

use crate::core::{Feedback, Word, WordError};

/// A guess scored against a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either input is not a five-letter word.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_guess_valid() {
        let result = score_guess("trace", "CRANE").unwrap();
        assert_eq!(result.guess.text(), "TRACE");
        assert_eq!(result.secret.text(), "CRANE");
        assert_eq!(result.feedback.to_emoji(), "⬜🟩🟨🟨🟩");
    }

    #[test]
    fn score_guess_invalid_input() {
        assert!(score_guess("tra", "crane").is_err());
        assert!(score_guess("trace", "cr4ne").is_err());
    }
}
