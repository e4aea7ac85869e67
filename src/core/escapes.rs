//! Backslash escape translation for delimiter and separator arguments

/// Translates `\t`, `\f`, `\n`, `\r` and `\v` into control characters.
///
/// Any other escaped character stands for itself, so `\\` yields a single
/// backslash. A trailing lone backslash is dropped.
pub fn convert_escapes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut escaped = false;

    for c in input.chars() {
        if !escaped && c == '\\' {
            escaped = true;
            continue;
        }

        if escaped {
            output.push(match c {
                't' => '\t',
                'f' => '\x0c',
                'n' => '\n',
                'r' => '\r',
                'v' => '\x0b',
                other => other,
            });
        } else {
            output.push(c);
        }
        escaped = false;
    }

    output
}
