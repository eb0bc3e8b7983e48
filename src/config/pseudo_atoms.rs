/// The names which mark pseudo-atoms.
///
/// An atom whose name is, e.g., `_edge(a,b)` is a pseudo-atom standing for an edge directive from `a` to `b`.
/// Names are matched by prefix, and the arguments following the prefix are parsed by the [reader](crate::reader).
///
/// | name                        | directive                      |
/// |-----------------------------|--------------------------------|
/// | `{edge}(U,V)`               | edge from `U` to `V`           |
/// | `{acyc}ID_U_V`              | edge from `U` to `V`           |
/// | `{heuristic}(A,M,B)`        | heuristic for `A`              |
/// | `{heuristic}(A,M,B,P)`      | heuristic for `A`, priority P  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PseudoAtomNames {
    /// The functor of edge atoms in term form.
    pub edge: String,

    /// The prefix of edge atoms in flat form.
    pub acyc: String,

    /// The functor of heuristic atoms.
    pub heuristic: String,
}

impl Default for PseudoAtomNames {
    fn default() -> Self {
        PseudoAtomNames {
            edge: "_edge".to_string(),
            acyc: "_acyc_".to_string(),
            heuristic: "_heuristic".to_string(),
        }
    }
}
