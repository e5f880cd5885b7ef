//! 5-4-3-2-1 grounding exercise.
//!
//! The player names things they can currently see, hear, touch, smell,
//! and taste. Each level asks for fewer items per sense; phases whose
//! requirement drops to zero are skipped entirely. Finishing the last
//! non-empty phase of level 3 completes the exercise.

use thiserror::Error;

/// The five senses, walked in this order within each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    See,
    Hear,
    Touch,
    Smell,
    Taste,
}

impl Sense {
    pub const ALL: [Sense; 5] = [
        Sense::See,
        Sense::Hear,
        Sense::Touch,
        Sense::Smell,
        Sense::Taste,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sense::See => "see",
            Sense::Hear => "hear",
            Sense::Touch => "touch",
            Sense::Smell => "smell",
            Sense::Taste => "taste",
        }
    }
}

const FIRST_LEVEL: u8 = 1;
const LAST_LEVEL: u8 = 3;
const PHASE_SCORE: u32 = 50;

/// Number of answers required for a sense at a level.
pub fn required_answers(level: u8, sense: Sense) -> usize {
    let row: [usize; 5] = match level {
        1 => [5, 4, 3, 2, 1],
        2 => [4, 3, 2, 1, 0],
        3 => [3, 2, 1, 0, 0],
        _ => [0, 0, 0, 0, 0],
    };
    match sense {
        Sense::See => row[0],
        Sense::Hear => row[1],
        Sense::Touch => row[2],
        Sense::Smell => row[3],
        Sense::Taste => row[4],
    }
}

/// Prompt shown for the answer slot at `index` within a sense phase.
pub fn prompt_for(sense: Sense, index: usize) -> &'static str {
    let prompts: &[&'static str] = match sense {
        Sense::See => &[
            "List a vehicle you see",
            "List an animal you see",
            "List an electronic item you see",
            "List a color you see",
            "List a shape you see",
        ],
        Sense::Hear => &[
            "List a sound you hear",
            "List a word you hear",
            "List a melody you hear",
            "List a noise you hear",
        ],
        Sense::Touch => &[
            "List a texture you feel",
            "List a surface you touch",
            "List a material you recognize by touch",
        ],
        Sense::Smell | Sense::Taste => &[],
    };
    prompts.get(index).copied().unwrap_or("Enter an item")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroundingError {
    #[error("Answer must not be empty")]
    EmptyAnswer,

    #[error("You cannot repeat the same answer")]
    DuplicateAnswer,

    #[error("This phase already has all {0} answers")]
    PhaseFull(usize),

    #[error("This phase needs {needed} answers, only {given} given")]
    PhaseIncomplete { needed: usize, given: usize },

    #[error("The exercise is already complete")]
    AlreadyComplete,
}

/// One run of the grounding exercise.
#[derive(Debug)]
pub struct GroundingGame {
    level: u8,
    sense: Sense,
    answers: Vec<String>,
    score: u32,
    completed: bool,
}

impl Default for GroundingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GroundingGame {
    pub fn new() -> Self {
        Self {
            level: FIRST_LEVEL,
            sense: Sense::See,
            answers: Vec::new(),
            score: 0,
            completed: false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Answers accepted so far in the current phase.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Prompt for the next empty answer slot.
    pub fn current_prompt(&self) -> &'static str {
        prompt_for(self.sense, self.answers.len())
    }

    fn required(&self) -> usize {
        required_answers(self.level, self.sense)
    }

    /// Records one answer for the current phase.
    ///
    /// Answers are normalized (trimmed, lowercased) before the duplicate
    /// check, so "Chair" and " chair " count as the same answer. The
    /// duplicate check only spans the current phase; answers reset when
    /// the phase advances.
    pub fn submit_answer(&mut self, text: &str) -> Result<(), GroundingError> {
        if self.completed {
            return Err(GroundingError::AlreadyComplete);
        }

        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(GroundingError::EmptyAnswer);
        }
        if self.answers.contains(&normalized) {
            return Err(GroundingError::DuplicateAnswer);
        }
        if self.answers.len() >= self.required() {
            return Err(GroundingError::PhaseFull(self.required()));
        }

        self.answers.push(normalized);
        Ok(())
    }

    /// Whether the current phase has all its answers.
    pub fn phase_complete(&self) -> bool {
        self.answers.len() >= self.required()
    }

    /// Moves to the next phase, awarding the phase score.
    ///
    /// Skips senses whose requirement is zero at the current level and
    /// rolls over to the next level after the last one. Completes the
    /// exercise only once the final non-empty phase of the last level is
    /// done.
    pub fn advance_phase(&mut self) -> Result<(), GroundingError> {
        if self.completed {
            return Err(GroundingError::AlreadyComplete);
        }
        let needed = self.required();
        if self.answers.len() < needed {
            return Err(GroundingError::PhaseIncomplete {
                needed,
                given: self.answers.len(),
            });
        }

        self.score += PHASE_SCORE;
        self.answers.clear();

        let current = Sense::ALL
            .iter()
            .position(|&s| s == self.sense)
            .unwrap_or(0);
        let next = Sense::ALL[current + 1..]
            .iter()
            .copied()
            .find(|&s| required_answers(self.level, s) > 0);

        match next {
            Some(sense) => self.sense = sense,
            None if self.level < LAST_LEVEL => {
                self.level += 1;
                self.sense = Sense::See;
            }
            None => self.completed = true,
        }
        Ok(())
    }
}
