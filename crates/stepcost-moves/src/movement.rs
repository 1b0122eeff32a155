use std::fmt;

/// Outcome of evaluating a single step.
///
/// A blocked move is a normal answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// The step may be taken at the given traversal cost.
    Allowed { cost: f64 },
    /// The step is forbidden.
    Blocked,
}

impl Movement {
    /// Whether the step may be taken.
    #[inline]
    pub fn allowed(self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Traversal cost, only defined for allowed steps.
    #[inline]
    pub fn cost(self) -> Option<f64> {
        match self {
            Self::Allowed { cost } => Some(cost),
            Self::Blocked => None,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed { cost } => write!(f, "{cost}"),
            Self::Blocked => write!(f, "impossible"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let m = Movement::Allowed { cost: 5.0 };
        assert!(m.allowed());
        assert_eq!(m.cost(), Some(5.0));
        assert!(!Movement::Blocked.allowed());
        assert_eq!(Movement::Blocked.cost(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Movement::Allowed { cost: 1.0 }.to_string(), "1");
        assert_eq!(Movement::Blocked.to_string(), "impossible");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let m = Movement::Allowed { cost: 5.0 };
        let json = serde_json::to_string(&m).unwrap();
        let back: Movement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
