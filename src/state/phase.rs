//! Traffic light phases

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three light phases, cycling green → yellow → red → green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Green,
    Yellow,
    Red,
}

impl Phase {
    /// The phase that follows this one in the fixed cycle
    pub fn next(self) -> Phase {
        match self {
            Phase::Green => Phase::Yellow,
            Phase::Yellow => Phase::Red,
            Phase::Red => Phase::Green,
        }
    }

    /// Lowercase name for display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Green => "green",
            Phase::Yellow => "yellow",
            Phase::Red => "red",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_closed() {
        assert_eq!(Phase::Green.next(), Phase::Yellow);
        assert_eq!(Phase::Yellow.next(), Phase::Red);
        assert_eq!(Phase::Red.next(), Phase::Green);
    }

    #[test]
    fn three_steps_return_to_start() {
        for phase in [Phase::Green, Phase::Yellow, Phase::Red] {
            assert_eq!(phase.next().next().next(), phase);
        }
    }
}
