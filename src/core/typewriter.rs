use super::constants::{
    DEFAULT_PHRASES, DELETE_SPEED_MS, DWELL_MS, STARTUP_DELAY_MS, TYPE_SPEED_MS, WORD_PAUSE_MS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub dwell_ms: u32,
    pub word_pause_ms: u32,
    pub startup_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            type_speed_ms: TYPE_SPEED_MS,
            delete_speed_ms: DELETE_SPEED_MS,
            dwell_ms: DWELL_MS,
            word_pause_ms: WORD_PAUSE_MS,
            startup_delay_ms: STARTUP_DELAY_MS,
        }
    }
}

impl TypewriterConfig {
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Outcome of one tick: what to display and when to tick again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Two-state typing automaton over a cyclic phrase list.
///
/// Counts are in chars, so a prefix never splits a code point. The machine
/// knows nothing about timers; callers schedule the returned delay.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_count: usize,
    phase: Phase,
    type_speed_ms: u32,
    delete_speed_ms: u32,
    dwell_ms: u32,
    word_pause_ms: u32,
    startup_delay_ms: u32,
}

impl Typewriter {
    /// Empty phrases are dropped; returns `None` when nothing is left to type.
    pub fn new(config: TypewriterConfig) -> Option<Self> {
        let phrases: Vec<Vec<char>> = config
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            phase: Phase::Typing,
            type_speed_ms: config.type_speed_ms,
            delete_speed_ms: config.delete_speed_ms,
            dwell_ms: config.dwell_ms,
            word_pause_ms: config.word_pause_ms,
            startup_delay_ms: config.startup_delay_ms,
        })
    }

    pub fn startup_delay_ms(&self) -> u32 {
        self.startup_delay_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].len()
    }

    pub fn visible_text(&self) -> String {
        self.phrases[self.phrase_index][..self.char_count]
            .iter()
            .collect()
    }

    pub fn tick(&mut self) -> Tick {
        let len = self.current_len();
        let mut delay = match self.phase {
            Phase::Typing => {
                self.char_count = (self.char_count + 1).min(len);
                self.type_speed_ms
            }
            Phase::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                self.delete_speed_ms
            }
        };
        let text = self.visible_text();

        match self.phase {
            Phase::Typing if self.char_count == len => {
                self.phase = Phase::Deleting;
                delay = self.dwell_ms;
            }
            Phase::Deleting if self.char_count == 0 => {
                self.phase = Phase::Typing;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                delay = self.word_pause_ms;
            }
            _ => {}
        }

        Tick {
            text,
            next_delay_ms: delay,
        }
    }
}
