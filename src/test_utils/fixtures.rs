//! Sample inputs shared by tests and benchmarks

use crate::config::Settings;
use crate::core::FieldSpec;

/// Whitespace separated table, as printed by `ls -l` or `ps`.
pub const WHITESPACE_TABLE: &str = "\
-rw-r--r--  1 root  wheel   512 Jan  1 09:00 hosts
drwxr-xr-x  4 alice staff   128 Feb 12 17:45 projects
-rwxr-xr-x  1 bob   staff  2048 Mar  3 08:15 build.sh
";

/// Colon separated records in the style of `/etc/passwd`.
pub const PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
alice:x:1000:1000:Alice,,,:/home/alice:/bin/zsh
";

/// Comma separated values with an empty column and an escaped comma.
pub const CSV_WITH_GAPS: &str = "\
name,city,zip
ann,,12345
bob,Paris\\, France,
";

/// Settings with the given delimiters and field arguments, everything else
/// left at its default.
pub fn settings_for(delimiters: &str, fields: &[&str]) -> Settings {
    Settings {
        delimiters: delimiters.to_string(),
        fields: fields
            .iter()
            .map(|f| FieldSpec::parse(f))
            .collect::<crate::error::Result<_>>()
            .unwrap(),
        ..Settings::default()
    }
}
