//! Custom assertion helpers for common test patterns

/// Asserts that `output` consists of exactly the `expected` lines, each
/// terminated by a newline.
pub fn assert_output_lines(output: &str, expected: &[&str]) {
    let actual: Vec<&str> = output.lines().collect();
    assert_eq!(
        actual, expected,
        "Output lines differ.\nActual output:\n{output}"
    );
    assert!(
        expected.is_empty() || output.ends_with('\n'),
        "Expected output to end with a newline: {output:?}"
    );
}

/// Asserts that every output line contains `separator` exactly `count` times.
pub fn assert_separator_count(output: &str, separator: &str, count: usize) {
    for line in output.lines() {
        assert_eq!(
            line.matches(separator).count(),
            count,
            "Expected {count} separators in line: {line:?}"
        );
    }
}
