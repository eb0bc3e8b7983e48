use lp_smodels::{
    config::{PseudoAtomNames, ReaderConfig},
    dispatch::Dispatch,
    structures::{directive::HeuristicModifier, rule::HeadKind},
    symbols::{AtomTable, NameTable},
};

mod common;
use common::{program, read_events, read_events_with_table};

fn edge_config(drop: bool) -> ReaderConfig {
    let mut config = ReaderConfig::default();
    config.convert_edges();
    if drop {
        config.drop_converted();
    }
    config
}

fn heuristic_config(drop: bool) -> ReaderConfig {
    let mut config = ReaderConfig::default();
    config.convert_heuristic();
    if drop {
        config.drop_converted();
    }
    config
}

/// A program with the given rules and symbols, and no compute statement.
fn with_symbols(rules: &[&str], symbols: &[&str]) -> String {
    let mut lines = rules.to_vec();
    lines.push("0");
    lines.extend_from_slice(symbols);
    lines.extend_from_slice(&["0", "B+", "0", "B-", "0", "1"]);
    program(&lines)
}

mod edges {
    use super::*;

    #[test]
    fn edge_atoms_are_dropped() {
        let input = with_symbols(&["1 1 1 0 2", "3 1 2 0 0"], &["1 a", "2 _edge(1,2)"]);
        let mut table = NameTable::default();
        let (events, _) =
            read_events_with_table(&input, &edge_config(true), &mut table).expect("valid program");

        assert_eq!(
            events,
            vec![
                Dispatch::BeginStep,
                Dispatch::Rule {
                    kind: HeadKind::Disjunctive,
                    head: vec![1],
                    body: vec![2]
                },
                Dispatch::Rule {
                    kind: HeadKind::Choice,
                    head: vec![2],
                    body: vec![]
                },
                Dispatch::Output {
                    name: "a".to_string(),
                    condition: vec![1]
                },
                Dispatch::AcycEdge {
                    source: 0,
                    target: 1,
                    condition: vec![2]
                },
                Dispatch::EndStep,
            ]
        );

        assert_eq!(table.find("_edge(1,2)"), Some(2));
        assert_eq!(table.output_count(), 1);
    }

    #[test]
    fn edge_atoms_are_kept() {
        let input = with_symbols(&["3 1 1 0 0"], &["1 _edge(x,y)"]);
        let events = read_events(&input, &edge_config(false)).expect("valid program");

        assert!(events.contains(&Dispatch::Output {
            name: "_edge(x,y)".to_string(),
            condition: vec![1]
        }));
        assert!(events.contains(&Dispatch::AcycEdge {
            source: 0,
            target: 1,
            condition: vec![1]
        }));
    }

    #[test]
    fn nodes_are_shared() {
        let input = with_symbols(
            &["3 3 1 2 3 0 0"],
            &["1 _edge(u,v)", "2 _edge(v,w)", "3 _edge(w,u)"],
        );
        let events = read_events(&input, &edge_config(true)).expect("valid program");

        let edges = events
            .iter()
            .filter_map(|event| match event {
                Dispatch::AcycEdge { source, target, .. } => Some((*source, *target)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn acyc_atoms() {
        let input = with_symbols(&["3 1 4 0 0"], &["4 _acyc_1_5_7"]);
        let events = read_events(&input, &edge_config(true)).expect("valid program");

        assert!(events.contains(&Dispatch::AcycEdge {
            source: 5,
            target: 7,
            condition: vec![4]
        }));
    }

    #[test]
    fn malformed_edges_are_symbols() {
        let input = with_symbols(&["3 1 1 0 0"], &["1 _edge(1)"]);
        let events = read_events(&input, &edge_config(true)).expect("valid program");

        assert!(events.contains(&Dispatch::Output {
            name: "_edge(1)".to_string(),
            condition: vec![1]
        }));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Dispatch::AcycEdge { .. })));
    }

    #[test]
    fn no_conversion_by_default() {
        let input = with_symbols(&["3 1 1 0 0"], &["1 _edge(1,2)"]);
        let events = read_events(&input, &ReaderConfig::default()).expect("valid program");
        assert_eq!(events.len(), 4);
        assert!(matches!(events[2], Dispatch::Output { .. }));
    }

    #[test]
    fn configured_prefix() {
        let mut config = edge_config(true);
        config.names = PseudoAtomNames {
            edge: "arc".to_string(),
            ..Default::default()
        };
        let input = with_symbols(&["3 2 1 2 0 0"], &["1 arc(a,b)", "2 _edge(a,b)"]);
        let events = read_events(&input, &config).expect("valid program");

        assert!(events.contains(&Dispatch::AcycEdge {
            source: 0,
            target: 1,
            condition: vec![1]
        }));
        assert!(events.contains(&Dispatch::Output {
            name: "_edge(a,b)".to_string(),
            condition: vec![2]
        }));
    }
}

mod heuristics {
    use super::*;

    #[test]
    fn target_named_later() {
        let input = with_symbols(&["3 2 1 2 0 0"], &["1 _heuristic(a,level,-2)", "2 a"]);
        let events = read_events(&input, &heuristic_config(false)).expect("valid program");

        assert_eq!(
            events[2..],
            [
                Dispatch::Output {
                    name: "_heuristic(a,level,-2)".to_string(),
                    condition: vec![1]
                },
                Dispatch::Output {
                    name: "a".to_string(),
                    condition: vec![2]
                },
                Dispatch::Heuristic {
                    atom: 2,
                    modifier: HeuristicModifier::Level,
                    bias: -2,
                    priority: 2,
                    condition: vec![1]
                },
                Dispatch::EndStep,
            ]
        );
    }

    #[test]
    fn dropped_with_priority() {
        let input = with_symbols(&["3 2 1 2 0 0"], &["2 p(1)", "1 _heuristic(p(1),sign,1,5)"]);
        let events = read_events(&input, &heuristic_config(true)).expect("valid program");

        assert_eq!(
            events[2..],
            [
                Dispatch::Output {
                    name: "p(1)".to_string(),
                    condition: vec![2]
                },
                Dispatch::Heuristic {
                    atom: 2,
                    modifier: HeuristicModifier::Sign,
                    bias: 1,
                    priority: 5,
                    condition: vec![1]
                },
                Dispatch::EndStep,
            ]
        );
    }

    #[test]
    fn unknown_target_is_ignored() {
        let input = with_symbols(&["3 1 1 0 0"], &["1 _heuristic(b,true,1)"]);
        let events = read_events(&input, &heuristic_config(true)).expect("valid program");
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn attached_table_resolves_targets() {
        let input = with_symbols(&["3 2 1 2 0 0"], &["2 b", "1 _heuristic(b,factor,3)"]);
        let mut table = NameTable::default();
        let (events, info) = read_events_with_table(&input, &heuristic_config(true), &mut table)
            .expect("valid program");

        assert!(events.contains(&Dispatch::Heuristic {
            atom: 2,
            modifier: HeuristicModifier::Factor,
            bias: 3,
            priority: 3,
            condition: vec![1]
        }));
        assert_eq!(info.symbols, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.output_count(), 1);
    }
}
