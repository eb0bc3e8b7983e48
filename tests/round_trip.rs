use lp_smodels::{
    config::{ReaderConfig, WriterConfig},
    dispatch::Dispatch,
    structures::{
        atom::Atom,
        directive::Value,
        literal::{IntLiteral, Literal},
        rule::HeadKind,
        weight::{Weight, WeightLiteral},
    },
};
use rand::{Rng, SeedableRng};

mod common;
use common::{pcg::MinimalPCG32, program, read_events, rewrite, write_events};

const ATOMS: Atom = 24;

/// Literals over distinct atoms, with negative literals before positive literals.
fn random_literals(rng: &mut MinimalPCG32, max: usize) -> Vec<IntLiteral> {
    let size = rng.random_range(0..=max);
    let mut atoms: Vec<Atom> = Vec::default();
    while atoms.len() < size {
        let atom = rng.random_range(1..=ATOMS);
        if !atoms.contains(&atom) {
            atoms.push(atom);
        }
    }
    let negative = rng.random_range(0..=size);
    atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| IntLiteral::new(*atom, index >= negative))
        .collect()
}

fn random_weighted(rng: &mut MinimalPCG32, max: usize, unit: bool) -> Vec<WeightLiteral> {
    random_literals(rng, max)
        .into_iter()
        .map(|literal| match unit {
            true => WeightLiteral::unit(literal),
            false => WeightLiteral::new(literal, rng.random_range(0..=9)),
        })
        .collect()
}

fn random_head(rng: &mut MinimalPCG32, max: usize) -> Vec<Atom> {
    let size = rng.random_range(1..=max);
    let mut head: Vec<Atom> = Vec::default();
    while head.len() < size {
        let atom = rng.random_range(1..=ATOMS);
        if !head.contains(&atom) {
            head.push(atom);
        }
    }
    head
}

/// A random step of a program, which includes external declarations if `externals` is true.
fn random_step(rng: &mut MinimalPCG32, externals: bool) -> Vec<Dispatch> {
    let mut step = vec![Dispatch::BeginStep];
    let mut priority: Weight = 0;

    for _ in 0..rng.random_range(1..=12) {
        let dispatch = match rng.random_range(0..7) {
            0 => Dispatch::Rule {
                kind: HeadKind::Disjunctive,
                head: random_head(rng, 1),
                body: random_literals(rng, 5),
            },

            1 => Dispatch::Rule {
                kind: HeadKind::Disjunctive,
                head: random_head(rng, 4),
                body: random_literals(rng, 3),
            },

            2 => Dispatch::Rule {
                kind: HeadKind::Choice,
                head: random_head(rng, 4),
                body: random_literals(rng, 3),
            },

            3 | 4 => {
                let unit = rng.random_range(0..2) == 0;
                let body = random_weighted(rng, 5, unit);
                let total: Weight = body.iter().map(|w| w.weight).sum();
                Dispatch::SumRule {
                    kind: HeadKind::Disjunctive,
                    head: random_head(rng, 1),
                    bound: rng.random_range(0..=total),
                    body,
                }
            }

            5 => {
                let literals = random_weighted(rng, 5, false);
                priority += 1;
                Dispatch::Minimize {
                    priority: priority - 1,
                    literals,
                }
            }

            _ if externals => {
                let value = match rng.random_range(0..4) {
                    0 => Value::Free,
                    1 => Value::True,
                    2 => Value::False,
                    _ => Value::Release,
                };
                Dispatch::External {
                    atom: rng.random_range(1..=ATOMS),
                    value,
                }
            }

            _ => Dispatch::Rule {
                kind: HeadKind::Choice,
                head: random_head(rng, 2),
                body: vec![],
            },
        };
        step.push(dispatch);
    }

    for _ in 0..rng.random_range(0..4) {
        let atom = rng.random_range(1..=ATOMS);
        step.push(Dispatch::Output {
            name: format!("p({atom})"),
            condition: vec![atom as IntLiteral],
        });
    }

    let mut literals = random_literals(rng, 4);
    if !literals.is_empty() {
        // Positive literals are read before negative literals.
        literals.sort_by_key(|literal| !literal.polarity());
        step.push(Dispatch::Assume { literals });
    }

    step.push(Dispatch::EndStep);
    step
}

mod random {
    use super::*;

    #[test]
    fn single_steps() {
        let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..200 {
            let events = random_step(&mut rng, false);
            let written = write_events(&events, false, WriterConfig::default()).expect("writable");
            let read = read_events(&written, &ReaderConfig::default()).expect("readable");
            assert_eq!(events, read, "{written}");
        }
    }

    #[test]
    fn incremental_steps() {
        let mut rng = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut config = ReaderConfig::default();
        config.enable_clasp_ext();

        for _ in 0..50 {
            let mut events = Vec::default();
            for _ in 0..rng.random_range(1..=4) {
                events.extend(random_step(&mut rng, true));
            }
            let written =
                write_events(&events, true, WriterConfig::new(true, 0)).expect("writable");
            let read = read_events(&written, &config).expect("readable");
            assert_eq!(events, read, "{written}");
        }
    }
}

mod fixed {
    use super::*;

    #[test]
    fn rewrite_is_identity() {
        let input = program(&[
            "1 1 2 1 3 2",
            "2 4 3 1 2 5 1 2",
            "3 2 6 7 1 0 1",
            "5 8 3 2 1 2 3 2 4",
            "6 0 2 1 2 3 5 7",
            "8 2 9 10 0 0",
            "0",
            "1 a",
            "4 b(1,\"x\")",
            "0",
            "B+",
            "1",
            "0",
            "B-",
            "2",
            "0",
            "1",
        ]);
        let written = rewrite(&input, &ReaderConfig::default(), WriterConfig::default());
        assert_eq!(written.ok(), Some(input));
    }

    #[test]
    fn external_section_as_records() {
        let input = program(&["1 1 0 0", "0", "0", "B+", "1", "0", "B-", "0", "E", "2", "0", "1"]);
        let mut config = ReaderConfig::default();
        config.enable_clasp_ext();

        let written = rewrite(&input, &config, WriterConfig::new(true, 0));
        assert_eq!(
            written.ok(),
            Some(program(&["1 1 0 0", "91 2 2", "0", "0", "B+", "1", "0", "B-", "0", "1"]))
        );
    }

    #[test]
    fn rule_order_is_normalised() {
        let events = vec![
            Dispatch::BeginStep,
            Dispatch::Rule {
                kind: HeadKind::Disjunctive,
                head: vec![1],
                body: vec![2, -3, 4, -5],
            },
            Dispatch::EndStep,
        ];
        let written = write_events(&events, false, WriterConfig::default()).expect("writable");
        let read = read_events(&written, &ReaderConfig::default()).expect("readable");

        assert_eq!(
            read[1],
            Dispatch::Rule {
                kind: HeadKind::Disjunctive,
                head: vec![1],
                body: vec![-3, -5, 2, 4],
            }
        );
    }
}
