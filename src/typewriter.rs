//! Type / pause / delete rotation over a fixed list of roles.
//!
//! The state machine is pure: `tick` mutates the state and returns how long
//! the caller should wait before the next tick. Scheduling lives in
//! [`crate::schedule`].

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    /// Hold at the fully typed role.
    pub pause_ms: u32,
    /// Extra hold after switching to deleting, before the first character goes.
    pub delete_delay_ms: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one role")]
    NoRoles,

    #[error("role at index {index} is empty")]
    EmptyRole { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterSnapshot {
    pub role_index: usize,
    pub char_count: usize,
    pub deleting: bool,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    lengths: Vec<usize>,
    timing: TypewriterTiming,
    role_index: usize,
    char_count: usize,
    phase: Phase,
    speed_ms: u32,
}

impl Typewriter {
    pub fn new<I, S>(roles: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();

        if roles.is_empty() {
            return Err(TypewriterError::NoRoles);
        }

        if let Some(index) = roles.iter().position(|role| role.is_empty()) {
            return Err(TypewriterError::EmptyRole { index });
        }

        let lengths = roles.iter().map(|role| role.chars().count()).collect();

        Ok(Self {
            roles,
            lengths,
            timing,
            role_index: 0,
            char_count: 0,
            phase: Phase::Typing,
            speed_ms: timing.typing_ms,
        })
    }

    /// Advances one step and returns the delay before the next one.
    pub fn tick(&mut self) -> u32 {
        let length = self.lengths[self.role_index];

        match self.phase {
            Phase::Typing if self.char_count < length => {
                self.char_count += 1;
                self.speed_ms = self.timing.typing_ms;
            }
            Phase::Typing => {
                self.phase = Phase::Paused;
                self.speed_ms = self.timing.pause_ms;
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
                self.speed_ms = self.timing.delete_delay_ms;
            }
            Phase::Deleting if self.char_count > 0 => {
                self.char_count -= 1;
                self.speed_ms = self.timing.deleting_ms;
            }
            Phase::Deleting => {
                self.phase = Phase::Typing;
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.speed_ms = self.timing.typing_ms;
            }
        }

        self.speed_ms
    }

    /// Leading `char_count` characters of the current role.
    pub fn display(&self) -> &str {
        let role = &self.roles[self.role_index];
        let end = role
            .char_indices()
            .nth(self.char_count)
            .map(|(offset, _)| offset)
            .unwrap_or(role.len());
        &role[..end]
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            role_index: self.role_index,
            char_count: self.char_count,
            deleting: self.deleting(),
        }
    }

    pub fn deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Ticks needed to go from the start of a role back to the start of the
    /// same role after rotating through every role once.
    pub fn cycle_ticks(&self) -> usize {
        // Per role: type each char, pause, switch to deleting, delete each
        // char, advance.
        self.lengths.iter().map(|length| 2 * length + 3).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TIMING: TypewriterTiming = TypewriterTiming {
        typing_ms: 150,
        deleting_ms: 50,
        pause_ms: 2_000,
        delete_delay_ms: 1_500,
    };

    fn snapshot(role_index: usize, char_count: usize, deleting: bool) -> TypewriterSnapshot {
        TypewriterSnapshot {
            role_index,
            char_count,
            deleting,
        }
    }

    #[test]
    fn rejects_empty_role_list() {
        let result = Typewriter::new(Vec::<String>::new(), TIMING);
        assert_eq!(result.err(), Some(TypewriterError::NoRoles));
    }

    #[test]
    fn rejects_empty_role_at_construction() {
        let result = Typewriter::new(["Developer", ""], TIMING);
        assert_eq!(result.err(), Some(TypewriterError::EmptyRole { index: 1 }));
    }

    #[test]
    fn starts_at_first_role_with_nothing_typed() {
        let typewriter = Typewriter::new(["A", "BB"], TIMING).expect("valid roles");

        assert_eq!(typewriter.snapshot(), snapshot(0, 0, false));
        assert_eq!(typewriter.display(), "");
        assert_eq!(typewriter.speed_ms(), 150);
    }

    #[test]
    fn two_role_trace_types_pauses_deletes_and_advances() {
        let mut typewriter = Typewriter::new(["A", "BB"], TIMING).expect("valid roles");
        let mut trace = Vec::new();

        for _ in 0..12 {
            let delay = typewriter.tick();
            trace.push((typewriter.snapshot(), typewriter.display().to_string(), delay));
        }

        assert_eq!(
            trace,
            vec![
                (snapshot(0, 1, false), "A".to_string(), 150),
                (snapshot(0, 1, false), "A".to_string(), 2_000),
                (snapshot(0, 1, true), "A".to_string(), 1_500),
                (snapshot(0, 0, true), "".to_string(), 50),
                (snapshot(1, 0, false), "".to_string(), 150),
                (snapshot(1, 1, false), "B".to_string(), 150),
                (snapshot(1, 2, false), "BB".to_string(), 150),
                (snapshot(1, 2, false), "BB".to_string(), 2_000),
                (snapshot(1, 2, true), "BB".to_string(), 1_500),
                (snapshot(1, 1, true), "B".to_string(), 50),
                (snapshot(1, 0, true), "".to_string(), 50),
                (snapshot(0, 0, false), "".to_string(), 150),
            ]
        );
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut typewriter =
            Typewriter::new(["Software Developer", "Full-Stack Engineer", "Mobile"], TIMING)
                .expect("valid roles");
        let start = typewriter.snapshot();

        for _ in 0..typewriter.cycle_ticks() {
            typewriter.tick();
        }

        assert_eq!(typewriter.snapshot(), start);
        assert_eq!(typewriter.speed_ms(), TIMING.typing_ms);
    }

    #[test]
    fn singleton_list_cycles_to_itself() {
        let mut typewriter = Typewriter::new(["X"], TIMING).expect("valid roles");

        for _ in 0..3 {
            assert_eq!(typewriter.tick(), 150);
            assert_eq!(typewriter.snapshot(), snapshot(0, 1, false));
            assert_eq!(typewriter.tick(), 2_000);
            assert_eq!(typewriter.tick(), 1_500);
            assert!(typewriter.deleting());
            assert_eq!(typewriter.tick(), 50);
            assert_eq!(typewriter.snapshot(), snapshot(0, 0, true));
            assert_eq!(typewriter.tick(), 150);
            assert_eq!(typewriter.snapshot(), snapshot(0, 0, false));
        }
    }

    #[test]
    fn char_count_never_exceeds_role_length() {
        let mut typewriter = Typewriter::new(["ab", "cde", "f"], TIMING).expect("valid roles");

        for _ in 0..200 {
            typewriter.tick();
            let length = typewriter.roles()[typewriter.role_index()].chars().count();
            assert!(typewriter.char_count() <= length);
        }
    }

    #[test]
    fn display_counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new(["héllo"], TIMING).expect("valid roles");

        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.display(), "hé");

        for _ in 0..3 {
            typewriter.tick();
        }
        assert_eq!(typewriter.display(), "héllo");
    }
}
