/*!
Heads and the types of rule records.

A rule is a head together with a body.
The head is given by a [HeadKind] and a (possibly empty) sequence of atoms:

| kind        | atoms | reading                                  |
|-------------|-------|------------------------------------------|
| Disjunctive | 0     | integrity constraint                     |
| Disjunctive | 1     | normal rule                              |
| Disjunctive | n > 1 | disjunctive rule                         |
| Choice      | n     | choice rule                              |

Rule records in the smodels format begin with a numeric code, the [RuleType].
Codes 90 to 92 belong to the extension for incremental programs and external atoms.
*/

/// The kind of a head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadKind {
    /// A disjunction of the head atoms.
    Disjunctive,

    /// A choice over the head atoms.
    Choice,
}

impl std::fmt::Display for HeadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disjunctive => write!(f, "disjunctive"),
            Self::Choice => write!(f, "choice"),
        }
    }
}

/// The numeric codes which begin a rule record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// Terminates the rule section.
    End = 0,

    /// A rule with a single atom head and a normal body.
    Basic = 1,

    /// A rule with a single atom head and a cardinality body.
    Cardinality = 2,

    /// A choice rule with a normal body.
    Choice = 3,

    /// A rule with a single atom head and a weight body.
    Weight = 5,

    /// A minimize statement.
    Optimize = 6,

    /// A disjunctive rule with a normal body.
    Disjunctive = 8,

    /// Marks the start of a step of an incremental program.
    ClaspIncrement = 90,

    /// Assigns a value to an external atom.
    ClaspAssignExt = 91,

    /// Releases an external atom.
    ClaspReleaseExt = 92,
}

impl RuleType {
    /// The code of the rule type.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// A name for records of the type.
    pub fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Basic => "basic",
            Self::Cardinality => "cardinality",
            Self::Choice => "choice",
            Self::Weight => "weight",
            Self::Optimize => "minimize",
            Self::Disjunctive => "disjunctive",
            Self::ClaspIncrement => "step marker (90)",
            Self::ClaspAssignExt => "assign external (91)",
            Self::ClaspReleaseExt => "release external (92)",
        }
    }

    /// Whether the rule type requires the clasp extension.
    pub fn is_extension(self) -> bool {
        matches!(
            self,
            Self::ClaspIncrement | Self::ClaspAssignExt | Self::ClaspReleaseExt
        )
    }
}

impl TryFrom<u32> for RuleType {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::End),
            1 => Ok(Self::Basic),
            2 => Ok(Self::Cardinality),
            3 => Ok(Self::Choice),
            5 => Ok(Self::Weight),
            6 => Ok(Self::Optimize),
            8 => Ok(Self::Disjunctive),
            90 => Ok(Self::ClaspIncrement),
            91 => Ok(Self::ClaspAssignExt),
            92 => Ok(Self::ClaspReleaseExt),
            unknown => Err(unknown),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
