//! Property-based tests for field argument parsing

#[cfg(test)]
mod tests {
    use crate::core::field::FieldSpec;
    use crate::core::printer::FieldPrinter;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_never_panics(arg in ".*") {
            let _ = FieldSpec::parse(&arg);
        }

        #[test]
        fn test_positive_numbers_are_positions(n in 1usize..100_000) {
            prop_assert_eq!(FieldSpec::parse(&n.to_string()).unwrap(), FieldSpec::Position(n));
        }

        #[test]
        fn test_ranges_parse(start in 1usize..1000, end in 1usize..1000) {
            let spec = FieldSpec::parse(&format!("{start}..{end}")).unwrap();
            prop_assert_eq!(spec, FieldSpec::Range { start, end: Some(end) });
        }

        #[test]
        fn test_non_numeric_text_is_literal(arg in "[a-zA-Z_=:/-][a-zA-Z0-9_=:/-]*") {
            prop_assert_eq!(FieldSpec::parse(&arg).unwrap(), FieldSpec::Literal(arg.clone()));
        }

        #[test]
        fn test_full_range_prints_every_token(
            tokens in prop::collection::vec("[a-z]{1,5}", 0..10),
        ) {
            let printer = FieldPrinter::new(vec![FieldSpec::parse("..").unwrap()]);
            prop_assert_eq!(printer.render(tokens.as_slice()), format!("{}\n", tokens.join(" ")));
        }

        #[test]
        fn test_closed_range_prints_fixed_count(
            tokens in prop::collection::vec("[a-z]{1,5}", 0..10),
            start in 1usize..6,
            len in 0usize..6,
        ) {
            let end = start + len;
            let printer = FieldPrinter::new(vec![FieldSpec::Range { start, end: Some(end) }]);
            let line = printer.render(tokens.as_slice());
            let count = line.trim_end_matches('\n').split(' ').count();
            prop_assert_eq!(count, len + 1);
        }
    }
}
