use lp_smodels::{
    config::{ReaderConfig, WriterConfig},
    dispatch::Dispatch,
    program::ProgramSink,
    structures::{directive::Value, rule::HeadKind, weight::WeightLiteral},
    types::err::{ErrorKind, UsageError},
    writer::SmodelsWriter,
};

mod common;
use common::{program, read_events, written_by};

fn usage_error(result: Result<(), ErrorKind>) -> Option<UsageError> {
    match result {
        Err(ErrorKind::Usage(e)) => Some(e),
        _ => None,
    }
}

mod format {
    use super::*;

    #[test]
    fn empty_step() {
        let written = written_by(WriterConfig::default(), |w| {
            w.begin_step()?;
            w.end_step()
        });
        assert_eq!(written.ok(), Some(program(&["0", "0", "B+", "0", "B-", "0", "1"])));
    }

    #[test]
    fn rules() {
        let written = written_by(WriterConfig::default(), |w| {
            w.begin_step()?;
            w.rule(HeadKind::Disjunctive, &[1], &[2, -3, -4])?;
            w.rule(HeadKind::Choice, &[2, 3], &[])?;
            w.rule(HeadKind::Disjunctive, &[5, 6], &[-1])?;
            w.sum_rule(
                HeadKind::Disjunctive,
                &[7],
                1,
                &[WeightLiteral::unit(1), WeightLiteral::unit(-2)],
            )?;
            w.sum_rule(
                HeadKind::Disjunctive,
                &[8],
                3,
                &[WeightLiteral::new(1, 2), WeightLiteral::new(-2, 3)],
            )?;
            w.minimize(4, &[WeightLiteral::new(3, 1), WeightLiteral::new(-4, 2)])?;
            w.end_step()
        });

        assert_eq!(
            written.ok(),
            Some(program(&[
                "1 1 3 2 3 4 2",
                "3 2 2 3 0 0",
                "8 2 5 6 1 1 1",
                "2 7 2 1 1 2 1",
                "5 8 3 2 1 2 1 3 2",
                "6 0 2 1 4 3 2 1",
                "0",
                "0",
                "B+",
                "0",
                "B-",
                "0",
                "1",
            ]))
        );
    }

    #[test]
    fn symbols_and_compute() {
        let written = written_by(WriterConfig::default(), |w| {
            w.begin_step()?;
            w.rule(HeadKind::Choice, &[1, 2], &[])?;
            w.output("p(1)", &[1])?;
            w.output("q", &[2])?;
            w.assume(&[-1, 2])?;
            w.end_step()
        });

        assert_eq!(
            written.ok(),
            Some(program(&[
                "3 2 1 2 0 0",
                "0",
                "1 p(1)",
                "2 q",
                "0",
                "B+",
                "2",
                "0",
                "B-",
                "1",
                "0",
                "1",
            ]))
        );
    }
}

mod ordering {
    use super::*;

    #[test]
    fn output_before_rules() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert_eq!(
            usage_error(writer.output("a", &[1])),
            Some(UsageError::OutputBeforeRules)
        );
    }

    #[test]
    fn repeated_assume() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(writer.rule(HeadKind::Disjunctive, &[1], &[]).is_ok());
        assert!(writer.assume(&[1]).is_ok());
        assert_eq!(
            usage_error(writer.assume(&[-1])),
            Some(UsageError::RepeatedAssume)
        );
    }

    #[test]
    fn output_after_compute() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(writer.rule(HeadKind::Disjunctive, &[1], &[]).is_ok());
        assert!(writer.assume(&[]).is_ok());
        assert_eq!(
            usage_error(writer.output("a", &[1])),
            Some(UsageError::OutputAfterCompute)
        );
    }

    #[test]
    fn rule_after_symbols() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(writer.rule(HeadKind::Disjunctive, &[1], &[]).is_ok());
        assert!(writer.output("a", &[1]).is_ok());
        assert_eq!(
            usage_error(writer.rule(HeadKind::Disjunctive, &[2], &[])),
            Some(UsageError::RuleAfterRules)
        );
    }

    #[test]
    fn steps_must_be_open() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert_eq!(
            usage_error(writer.rule(HeadKind::Disjunctive, &[1], &[])),
            Some(UsageError::NoOpenStep)
        );
        assert_eq!(usage_error(writer.end_step()), Some(UsageError::NoOpenStep));

        assert!(writer.begin_step().is_ok());
        assert_eq!(
            usage_error(writer.begin_step()),
            Some(UsageError::StepAlreadyOpen)
        );
    }

    #[test]
    fn single_step_without_increment() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(writer.end_step().is_ok());
        assert_eq!(usage_error(writer.begin_step()), Some(UsageError::SingleStep));
        assert_eq!(writer.steps(), 1);
    }

    #[test]
    fn output_conditions() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(writer.rule(HeadKind::Disjunctive, &[1], &[]).is_ok());
        assert_eq!(
            usage_error(writer.output("a", &[-1])),
            Some(UsageError::UnsupportedOutput)
        );
        assert_eq!(
            usage_error(writer.output("a", &[1, 2])),
            Some(UsageError::UnsupportedOutput)
        );
        assert_eq!(
            usage_error(writer.output("a", &[])),
            Some(UsageError::UnsupportedOutput)
        );
    }
}

mod representation {
    use super::*;

    #[test]
    fn integrity_constraints_use_the_false_atom() {
        let written = written_by(WriterConfig::new(false, 10), |w| {
            w.begin_step()?;
            w.rule(HeadKind::Disjunctive, &[], &[1, -2])?;
            w.sum_rule(HeadKind::Disjunctive, &[], 2, &[WeightLiteral::unit(1), WeightLiteral::unit(2)])?;
            w.assume(&[3, -4])?;
            w.end_step()
        });

        assert_eq!(
            written.ok(),
            Some(program(&[
                "1 10 2 1 2 1",
                "2 10 2 0 2 1 2",
                "0",
                "0",
                "B+",
                "3",
                "0",
                "B-",
                "4",
                "10",
                "0",
                "1",
            ]))
        );
    }

    #[test]
    fn integrity_constraints_without_false_atom() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert_eq!(
            usage_error(writer.rule(HeadKind::Disjunctive, &[], &[1])),
            Some(UsageError::EmptyHeadWithoutFalseAtom)
        );
        assert!(!writer.false_atom_used());
    }

    #[test]
    fn empty_choice_is_skipped() {
        let written = written_by(WriterConfig::default(), |w| {
            w.begin_step()?;
            w.rule(HeadKind::Choice, &[], &[1])?;
            w.end_step()
        });
        assert_eq!(written.ok(), Some(program(&["0", "0", "B+", "0", "B-", "0", "1"])));
    }

    #[test]
    fn unrepresentable_sums() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        let body = [WeightLiteral::unit(1)];
        assert_eq!(
            usage_error(writer.sum_rule(HeadKind::Choice, &[2], 1, &body)),
            Some(UsageError::NotRepresentable)
        );
        assert_eq!(
            usage_error(writer.sum_rule(HeadKind::Disjunctive, &[2, 3], 1, &body)),
            Some(UsageError::NotRepresentable)
        );
        assert_eq!(
            usage_error(writer.sum_rule(HeadKind::Disjunctive, &[2], 1, &[])),
            Some(UsageError::NotRepresentable)
        );
        assert_eq!(
            usage_error(writer.minimize(0, &[WeightLiteral::new(-3, -1)])),
            Some(UsageError::NegativeWeight(3))
        );
    }

    #[test]
    fn names_read_back_unchanged() {
        for name in ["", "  ", " a", "a\t", "a\nb"] {
            let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
            assert!(writer.begin_step().is_ok());
            assert!(writer.rule(HeadKind::Disjunctive, &[1], &[]).is_ok());
            assert_eq!(
                usage_error(writer.output(name, &[1])),
                Some(UsageError::UnsupportedOutput),
                "{name:?}"
            );
        }

        let written = written_by(WriterConfig::default(), |w| {
            w.begin_step()?;
            w.rule(HeadKind::Disjunctive, &[1], &[])?;
            w.output("p(a, b)", &[1])?;
            w.end_step()
        })
        .expect("writable");
        let read = read_events(&written, &ReaderConfig::default()).expect("readable");
        assert!(read.contains(&Dispatch::Output {
            name: "p(a, b)".to_string(),
            condition: vec![1]
        }));
    }

    #[test]
    fn directives_are_unsupported() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
        assert!(writer.begin_step().is_ok());
        assert!(matches!(
            usage_error(writer.acyc_edge(0, 1, &[1])),
            Some(UsageError::UnsupportedDirective(_))
        ));
    }
}

mod extension {
    use super::*;

    #[test]
    fn gated() {
        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::new(false, 0));
        assert!(writer.begin_step().is_ok());
        assert_eq!(
            usage_error(writer.external(1, Value::True)),
            Some(UsageError::ExternalWithoutExtension)
        );

        let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::new(false, 0));
        assert_eq!(
            usage_error(writer.init_program(true)),
            Some(UsageError::IncrementalWithoutExtension)
        );
    }

    #[test]
    fn incremental_steps() {
        let written = written_by(WriterConfig::new(true, 0), |w| {
            w.init_program(true)?;
            w.begin_step()?;
            w.external(1, Value::Free)?;
            w.external(2, Value::False)?;
            w.rule(HeadKind::Disjunctive, &[3], &[1])?;
            w.end_step()?;
            w.begin_step()?;
            w.external(1, Value::True)?;
            w.external(2, Value::Release)?;
            w.end_step()
        });

        assert_eq!(
            written.ok(),
            Some(program(&[
                "90 0", "91 1 2", "91 2 0", "1 3 1 0 1", "0", "0", "B+", "0", "B-", "0", "1",
                "90 0", "91 1 1", "92 2", "0", "0", "B+", "0", "B-", "0", "1",
            ]))
        );
    }
}
