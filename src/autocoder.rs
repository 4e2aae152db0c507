//! Periodic random mutation of the program in the editor.

use crate::foundation::error::LiveResult;
use crate::lexer::{Lexer, emit, token};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Minimum spacing between two mutations.
pub const AUTOCODER_INTERVAL_MS: f64 = 1000.0;

/// Loaded into an empty editor when autocoding starts ("cubes and spikes").
pub const DEFAULT_SEED_PROGRAM: &str = "simpleGradient fuchsia,color(100,200,200),yellow
scale 2.1
5 times ->
\trotate 0,1,time/5000
\tbox 0.1,0.1,0.1
\tmove 0,0.1,0.1
\t3 times ->
\t\trotate 0,1,1
\t\tbox 0.01,0.01,1";

#[derive(Debug)]
pub struct Autocoder {
    lexer: Lexer,
    rng: StdRng,
    active: bool,
    last_mutation_ms: Option<f64>,
}

impl Autocoder {
    pub fn new(seed: Option<u64>) -> LiveResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            lexer: Lexer::autocoder()?,
            rng,
            active: false,
            last_mutation_ms: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the state, or flip it with `None`. Returns the new state.
    pub fn toggle(&mut self, forced: Option<bool>) -> bool {
        self.active = forced.unwrap_or(!self.active);
        self.last_mutation_ms = None;
        tracing::debug!(active = self.active, "autocoder toggled");
        self.active
    }

    /// Whether a mutation is due at `now_ms`. The first poll after activation only starts
    /// the interval.
    pub fn due(&mut self, now_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        match self.last_mutation_ms {
            Some(last) if now_ms - last < AUTOCODER_INTERVAL_MS => false,
            Some(_) => {
                self.last_mutation_ms = Some(now_ms);
                true
            }
            None => {
                self.last_mutation_ms = Some(now_ms);
                false
            }
        }
    }

    /// Mutate one mutable token of `source`, chosen uniformly.
    ///
    /// `None` when the text does not tokenize or has nothing to mutate.
    pub fn mutate(&mut self, source: &str) -> Option<String> {
        let mut tokens = match self.lexer.lex(source) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(error = %e, "autocoder skipped: source does not tokenize");
                return None;
            }
        };
        let mutable: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_mutable())
            .map(|(i, _)| i)
            .collect();
        let Some(&pick) = mutable.choose(&mut self.rng) else {
            tracing::debug!("autocoder skipped: nothing to mutate");
            return None;
        };
        let mutated = token::mutate(&tokens[pick], &mut self.rng);
        tracing::trace!(from = %tokens[pick].text, to = %mutated.text, "token mutated");
        tokens[pick] = mutated;
        Some(emit(&tokens))
    }
}
