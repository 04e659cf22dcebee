use entail::builder::LineKind;
use entail::config::Config;
use entail::context::Context;
use entail::types::err::{ErrorKind, RuleError, ValidationError};

fn loaded(lines: &[(LineKind, &str)]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    ctx.load_lines(lines.iter().copied())
        .expect("well-formed lines");
    ctx
}

fn load_error(lines: &[(LineKind, &str)]) -> ErrorKind {
    let mut ctx = Context::from_config(Config::default());
    ctx.load_lines(lines.iter().copied())
        .expect_err("malformed lines")
}

mod registration {
    use super::*;

    #[test]
    fn report_counts() {
        let mut ctx = Context::from_config(Config::default());

        let report = ctx
            .load_lines([
                (LineKind::Rule, "A + B => C + D"),
                (LineKind::Rule, "C => E"),
                (LineKind::Comment, ""),
                (LineKind::Fact, "AB"),
                (LineKind::Query, "E"),
            ])
            .unwrap();

        assert_eq!(report.rules, 2);
        // A + B => C + D expands to one derivation per conclusion variable.
        assert_eq!(report.derivations, 3);
        assert_eq!(report.facts, 1);
        assert_eq!(report.queries, 1);
    }

    #[test]
    fn conjunctive_conclusion_splits() {
        let mut ctx = loaded(&[
            (LineKind::Rule, "A+B=>C+D"),
            (LineKind::Fact, "AB"),
            (LineKind::Query, "CD"),
        ]);

        assert!(ctx.evaluate_query('C'));
        assert!(ctx.evaluate_query('D'));

        let c_entry = ctx.definitions.entry('C').unwrap();
        let d_entry = ctx.definitions.entry('D').unwrap();
        // Independent trees, never a shared root.
        assert_ne!(c_entry.derivations()[0], d_entry.derivations()[0]);
    }

    #[test]
    fn rules_with_the_same_conclusion_compose() {
        let mut ctx = loaded(&[
            (LineKind::Rule, "A => C"),
            (LineKind::Rule, "B => C"),
            (LineKind::Fact, "B"),
            (LineKind::Query, "C"),
        ]);

        assert_eq!(ctx.definitions.entry('C').unwrap().derivations().len(), 2);
        assert!(ctx.evaluate_query('C'));
    }

    #[test]
    fn biconditional_resolves_like_implication() {
        let mut ctx = loaded(&[
            (LineKind::Rule, "A <=> B"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);

        assert!(ctx.evaluate_query('B'));
    }

    #[test]
    fn negated_conclusion_inverts_condition() {
        // A => !C registers the derivation !A for C.
        let mut ctx = loaded(&[
            (LineKind::Rule, "A => !C"),
            (LineKind::Fact, ""),
            (LineKind::Query, "C"),
        ]);
        assert!(ctx.evaluate_query('C'));

        let mut ctx = loaded(&[
            (LineKind::Rule, "A => !C"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "C"),
        ]);
        assert!(!ctx.evaluate_query('C'));
    }

    #[test]
    fn leaves_create_placeholder_entries() {
        let ctx = loaded(&[
            (LineKind::Rule, "A + B => C"),
            (LineKind::Fact, ""),
            (LineKind::Query, "C"),
        ]);

        let a_entry = ctx.definitions.entry('A').unwrap();
        assert!(a_entry.derivations().is_empty());
        assert!(!a_entry.is_fact());
    }

    #[test]
    fn repeated_facts_record_one_derivation() {
        let ctx = loaded(&[
            (LineKind::Rule, "A => B"),
            (LineKind::Fact, "A"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);

        let a_entry = ctx.definitions.entry('A').unwrap();
        assert!(a_entry.is_fact());
        assert_eq!(a_entry.derivations().len(), 1);
    }

    #[test]
    fn facts_are_lower_bounds() {
        // The fact augments B's rule-derived definition rather than replacing it.
        let mut ctx = loaded(&[
            (LineKind::Rule, "A => B"),
            (LineKind::Fact, "AB"),
            (LineKind::Query, "B"),
        ]);

        assert_eq!(ctx.definitions.entry('B').unwrap().derivations().len(), 2);
        assert!(ctx.evaluate_query('B'));
    }
}

mod registration_errors {
    use super::*;

    #[test]
    fn disjunctive_conclusion() {
        let e = load_error(&[
            (LineKind::Rule, "A => B|C"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::RightSideOperator));
    }

    #[test]
    fn exclusive_conclusion() {
        let e = load_error(&[
            (LineKind::Rule, "A => B^C"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::RightSideOperator));
    }

    #[test]
    fn malformed_implications() {
        for rule in ["A = B", "A B", "A => B => C", "A <= B", "=> B", "A =>"] {
            let e = load_error(&[
                (LineKind::Rule, rule),
                (LineKind::Fact, "A"),
                (LineKind::Query, "B"),
            ]);
            assert_eq!(e, ErrorKind::Rule(RuleError::Structure), "{rule}");
        }
    }

    #[test]
    fn sides_must_reduce_to_one_expression() {
        let e = load_error(&[
            (LineKind::Rule, "AB => C"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "C"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::Structure));
    }

    #[test]
    fn rule_charset() {
        let e = load_error(&[
            (LineKind::Rule, "a => B"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::InvalidCharacters));
    }

    #[test]
    fn fact_charset() {
        let e = load_error(&[
            (LineKind::Rule, "A => B"),
            (LineKind::Fact, "aB"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::InvalidCharacters));
    }

    #[test]
    fn query_charset_and_empty_queries() {
        for queries in ["b", ""] {
            let e = load_error(&[
                (LineKind::Rule, "A => B"),
                (LineKind::Fact, "A"),
                (LineKind::Query, queries),
            ]);
            assert_eq!(e, ErrorKind::Rule(RuleError::InvalidCharacters), "{queries:?}");
        }
    }

    #[test]
    fn duplicate_query() {
        let e = load_error(&[
            (LineKind::Rule, "A => B"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Rule(RuleError::DuplicateQuery('B')));
    }

    #[test]
    fn missing_sections() {
        let e = load_error(&[(LineKind::Fact, "A"), (LineKind::Query, "B")]);
        assert_eq!(e, ErrorKind::Validation(ValidationError::MissingRules));

        let e = load_error(&[(LineKind::Rule, "A => B"), (LineKind::Query, "B")]);
        assert_eq!(e, ErrorKind::Validation(ValidationError::MissingFacts));

        let e = load_error(&[(LineKind::Rule, "A => B"), (LineKind::Fact, "A")]);
        assert_eq!(e, ErrorKind::Validation(ValidationError::MissingQueries));
    }

    #[test]
    fn unknown_line() {
        let e = load_error(&[
            (LineKind::Rule, "A => B"),
            (LineKind::Unknown, "what is this"),
            (LineKind::Fact, "A"),
            (LineKind::Query, "B"),
        ]);
        assert_eq!(e, ErrorKind::Validation(ValidationError::UnknownLineKind));
    }
}
