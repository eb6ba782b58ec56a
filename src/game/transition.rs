//! Pure state transitions
//!
//! `reduce` takes the current state and one player action and returns the
//! next state together with the effects a front end should render.

use super::state::{GameState, GuessSlot, MAX_GUESSES, Phase, normalize_draft};
use crate::core::{Feedback, LetterHistory, Word};
use crate::dictionary::Dictionary;
use derive_more::Display;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Something the player did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the active slot's draft
    Edit(String),
    /// Submit a guess for the active slot
    Submit(String),
    /// Start over with a new secret
    Replay,
}

/// Why a submission was turned down
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Rejection {
    #[display("INVALID WORD! {word} is not in the word list")]
    NotInDictionary { word: String },
    #[display("Game is over. Replay to start a new one")]
    GameOver,
}

/// Render command emitted by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the active slot's letters
    DraftChanged { slot: usize, draft: String },
    /// Show a transient notice; state is unchanged
    Rejected(Rejection),
    /// Lock a slot and color its tiles
    RevealGuess {
        slot: usize,
        word: Word,
        feedback: Feedback,
    },
    /// Redraw the alphabet strip
    HistoryChanged(LetterHistory),
    /// Enable input on a slot
    ActivateSlot(usize),
    /// Disable input and show the replay control
    GameOver {
        won: bool,
        secret: Word,
        guesses: usize,
    },
    /// Clear every slot after a replay
    BoardReset,
}

/// Result of applying one action
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: GameState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn rejected(state: GameState, rejection: Rejection) -> Self {
        Self {
            state,
            effects: vec![Effect::Rejected(rejection)],
        }
    }
}

/// Apply an action to a state
///
/// Only `Action::Replay` draws from `rng`. Submissions that are not
/// dictionary words, and any submission after the game is over, leave the
/// state untouched and emit `Effect::Rejected`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordgame::core::Word;
/// use wordgame::dictionary::Dictionary;
/// use wordgame::game::{Action, GameState, Phase, reduce};
///
/// let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
/// let state = GameState::new(Word::new("crane").unwrap());
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let next = reduce(state, Action::Submit("trace".into()), &dictionary, &mut rng);
/// assert_eq!(next.state.phase(), Phase::AwaitingInput { slot: 1 });
/// ```
#[instrument(skip(state, dictionary, rng), fields(phase = ?state.phase))]
pub fn reduce<R: Rng>(
    state: GameState,
    action: Action,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Transition {
    match action {
        Action::Edit(text) => edit(state, &text),
        Action::Submit(text) => submit(state, &text, dictionary),
        Action::Replay => replay(dictionary, rng),
    }
}

fn edit(mut state: GameState, text: &str) -> Transition {
    let Phase::AwaitingInput { slot } = state.phase else {
        return Transition::unchanged(state);
    };

    let draft = normalize_draft(text);
    if state.slots[slot].text() == draft {
        return Transition::unchanged(state);
    }

    state.slots[slot] = GuessSlot::Active {
        draft: draft.clone(),
    };
    Transition {
        state,
        effects: vec![Effect::DraftChanged { slot, draft }],
    }
}

fn submit(mut state: GameState, text: &str, dictionary: &Dictionary) -> Transition {
    let Phase::AwaitingInput { slot } = state.phase else {
        debug!("Submission after game over ignored");
        return Transition::rejected(state, Rejection::GameOver);
    };

    let word = match Word::new(text) {
        Ok(word) if dictionary.contains(&word) => word,
        _ => {
            let word = text.trim().to_uppercase();
            debug!(%word, slot, "Rejected guess not in dictionary");
            return Transition::rejected(state, Rejection::NotInDictionary { word });
        }
    };

    let feedback = Feedback::calculate(&word, &state.secret);
    state.history.record(&word, &feedback);
    state.slots[slot] = GuessSlot::Finalized {
        word: word.clone(),
        feedback,
    };
    debug!(%word, %feedback, slot, "Guess scored");

    let mut effects = vec![
        Effect::RevealGuess {
            slot,
            word,
            feedback,
        },
        Effect::HistoryChanged(state.history),
    ];

    let guesses = slot + 1;
    if feedback.is_perfect() {
        state.phase = Phase::GameOver { won: true };
    } else if guesses == MAX_GUESSES {
        state.phase = Phase::GameOver { won: false };
    } else {
        let next = slot + 1;
        state.slots[next] = GuessSlot::Active {
            draft: String::new(),
        };
        state.phase = Phase::AwaitingInput { slot: next };
        effects.push(Effect::ActivateSlot(next));
        return Transition { state, effects };
    }

    let won = feedback.is_perfect();
    info!(won, guesses, secret = %state.secret, "Game over");
    effects.push(Effect::GameOver {
        won,
        secret: state.secret.clone(),
        guesses,
    });
    Transition { state, effects }
}

fn replay<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Transition {
    let secret = dictionary.random(rng).clone();
    debug!(%secret, "New secret drawn");
    info!("New game started");

    let state = GameState::new(secret);
    let effects = vec![
        Effect::BoardReset,
        Effect::HistoryChanged(state.history),
        Effect::ActivateSlot(0),
    ];
    Transition { state, effects }
}
