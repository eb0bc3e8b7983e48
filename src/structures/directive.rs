//! Values of external atoms and modifiers of heuristic directives.

/// The value of an external atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// The atom is external and has no fixed value.
    Free,

    /// The atom is external and assumed true.
    True,

    /// The atom is external and assumed false.
    False,

    /// The atom is no longer external.
    Release,
}

impl Value {
    /// The code used for the value in an assign external record.
    ///
    /// Release has no such code, as released atoms are written with a record of their own.
    pub fn assign_code(self) -> Option<u32> {
        match self {
            Self::False => Some(0),
            Self::True => Some(1),
            Self::Free => Some(2),
            Self::Release => None,
        }
    }

    /// The value of an assign external code, if the code is valid.
    pub fn from_assign_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::False),
            1 => Some(Self::True),
            2 => Some(Self::Free),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// The modifier of a heuristic directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicModifier {
    Level,
    Sign,
    Factor,
    Init,
    True,
    False,
}

impl std::str::FromStr for HeuristicModifier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(Self::Level),
            "sign" => Ok(Self::Sign),
            "factor" => Ok(Self::Factor),
            "init" => Ok(Self::Init),
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for HeuristicModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level => write!(f, "level"),
            Self::Sign => write!(f, "sign"),
            Self::Factor => write!(f, "factor"),
            Self::Init => write!(f, "init"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
        }
    }
}
