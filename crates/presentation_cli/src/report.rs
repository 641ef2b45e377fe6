//! Human-readable report output
//!
//! Everything goes to one writer so the whole report can be captured in
//! tests. Fatal conditions become a single `Error: ...` line.

use std::io::{self, Write};

use application::{ApplicationError, UserDatabaseSource, ValidationEngine};
use domain::ValidationReport;
use tracing::debug;

const BANNER: &str = "*************************";

/// Run one check of `source` and write the report to `out`
///
/// Returns `false` when the run aborted on a fatal condition.
pub fn check_database(
    engine: &ValidationEngine,
    source: &dyn UserDatabaseSource,
    out: &mut impl Write,
) -> io::Result<bool> {
    write_banner(out, "Checking database")?;

    let size = match source.size_bytes() {
        Ok(size) => size,
        Err(e) => {
            writeln!(out, "{}", fatal_diagnostic(&e))?;
            return Ok(false);
        },
    };
    write_size(out, size)?;

    match engine.run(source, size) {
        Ok(report) => {
            writeln!(out)?;
            write_users(out, &report)?;
            write_statistics(out, &report)?;
            write_notices(out, &report)?;
            Ok(true)
        },
        Err(e) => {
            debug!(error = %e, "Validation aborted");
            writeln!(out, "{}", fatal_diagnostic(&e))?;
            Ok(false)
        },
    }
}

fn write_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{BANNER} {title} {BANNER}\n")
}

#[allow(clippy::cast_precision_loss)]
fn write_size(out: &mut impl Write, bytes: u64) -> io::Result<()> {
    let megabytes = bytes as f64 / (1024.0 * 1024.0);
    writeln!(out, "Database size: {bytes} Bytes ({megabytes:.5} MB)")
}

/// Section marker per user followed by that user's warnings
fn write_users(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    for user in report.users() {
        writeln!(out, "--- {}", user.name)?;
        for finding in &user.findings {
            writeln!(out, "{finding}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_statistics(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    let s = report.statistics();

    writeln!(out)?;
    write_banner(out, "Database statistics")?;
    writeln!(out, "- Total users: {}", s.users)?;
    writeln!(out, "- Total unique roles: {}", report.unique_roles())?;
    writeln!(
        out,
        "- Total passwords: {} (encrypted: {}, unencrypted: {}, duplicates: {})",
        s.passwords, s.passwords_encrypted, s.passwords_unencrypted, s.passwords_duplicate
    )?;
    writeln!(
        out,
        "- Total cardkeys: {} (invalid: {}, duplicates: {})",
        s.cardkeys, s.cardkeys_invalid, s.cardkeys_duplicate
    )
}

fn write_notices(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    writeln!(out)?;
    write_banner(out, "Important information")?;
    for notice in report.notices() {
        writeln!(out, "- {notice}")?;
    }
    Ok(())
}

/// Operator-facing line for a condition that aborts the run
fn fatal_diagnostic(error: &ApplicationError) -> String {
    match error {
        ApplicationError::Unparsable { kind, message } => match kind.diagnostic() {
            Some(diagnostic) => format!(
                "Error: {diagnostic}. Cannot parse database. Please fix and try again. Message: {message}"
            ),
            None => message.clone(),
        },
        ApplicationError::EmptyFile(_) => {
            "Error: File size is zero! Database is corrupted!".to_string()
        },
        ApplicationError::NoUsers => "Error: Database does not contain any users!".to_string(),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use domain::{ParseFailureKind, UserDatabase};
    use infrastructure::TomlUserDatabase;
    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_db(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn check(content: &str) -> (bool, String) {
        let file = create_temp_db(content);
        let source = TomlUserDatabase::new(file.path());
        let mut out = Vec::new();
        let passed = check_database(&ValidationEngine::default(), &source, &mut out).unwrap();
        (passed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn clean_database_report() {
        let (passed, output) = check(
            r#"
[alice]
roles = ["admin"]
passwd = "$argon2id$v=19$abc"
cardkey = "7d444840-9dc0-41fc-8a3c-5e3c4e3a9b2a"
"#,
        );

        assert!(passed);
        assert!(output.starts_with("************************* Checking database *************************\n"));
        assert!(output.contains("--- alice\n"));
        assert!(output.contains("- Total users: 1\n"));
        assert!(output.contains("- Total unique roles: 1\n"));
        assert!(output.contains(
            "- Total passwords: 1 (encrypted: 1, unencrypted: 0, duplicates: 0)\n"
        ));
        assert!(output.contains("- Total cardkeys: 1 (invalid: 0, duplicates: 0)\n"));
        assert!(!output.contains("Warning:"));
        assert!(!output.contains("warnings in total"));
    }

    #[test]
    fn warnings_are_listed_under_their_user() {
        let (passed, output) = check(
            r#"
[bob]
roles = ["a", "a"]
passwd = "plaintext"
shell = "/bin/sh"

[carol]
cardkey = "not-a-uuid"
"#,
        );

        assert!(passed);
        let bob = output.find("--- bob").unwrap();
        let carol = output.find("--- carol").unwrap();
        let unknown = output
            .find("Warning: User 'bob' contains unknown key 'shell'")
            .unwrap();
        let invalid = output
            .find("Warning: cardkey for user 'carol' contains invalid cardkey (no UUID v4)")
            .unwrap();
        assert!(bob < unknown && unknown < carol && carol < invalid);

        assert!(output.contains("- 1 unknown keys (will be ignored by BFFH server)"));
        assert!(output.contains("- 1 users without any roles."));
        assert!(output.contains("- 1 users with duplicate roles. Please clean up!"));
        assert!(output.contains("- 1 invalid cardkeys in your database."));
        assert!(output.contains("- 4 warnings in total."));
    }

    struct CountingSource {
        inner: TomlUserDatabase,
        size_calls: AtomicUsize,
    }

    impl UserDatabaseSource for CountingSource {
        fn location(&self) -> String {
            self.inner.location()
        }

        fn size_bytes(&self) -> Result<u64, ApplicationError> {
            self.size_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.size_bytes()
        }

        fn load(&self) -> Result<UserDatabase, ApplicationError> {
            self.inner.load()
        }
    }

    #[test]
    fn file_size_is_read_once() {
        let file = create_temp_db("[alice]\nroles = [\"admin\"]\n");
        let source = CountingSource {
            inner: TomlUserDatabase::new(file.path()),
            size_calls: AtomicUsize::new(0),
        };
        let mut out = Vec::new();

        assert!(check_database(&ValidationEngine::default(), &source, &mut out).unwrap());
        assert_eq!(source.size_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn size_line_uses_five_decimals() {
        let mut out = Vec::new();
        write_size(&mut out, 1_048_576).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Database size: 1048576 Bytes (1.00000 MB)\n"
        );
    }

    #[test]
    fn empty_file_aborts() {
        let (passed, output) = check("");
        assert!(!passed);
        assert!(output.contains("Database size: 0 Bytes (0.00000 MB)"));
        assert!(output.contains("Error: File size is zero! Database is corrupted!"));
        assert!(!output.contains("Database statistics"));
    }

    #[test]
    fn database_without_users_aborts() {
        let (passed, output) = check("# nothing here\n");
        assert!(!passed);
        assert!(output.contains("Error: Database does not contain any users!"));
    }

    #[test]
    fn unparsable_database_aborts() {
        let (passed, output) = check("[alice]\nroles [\"a\"]\n");
        assert!(!passed);
        assert!(!output.contains("--- alice"));
        assert!(!output.contains("Database statistics"));
        assert!(output.contains(
            "Error: Found an incorrect key/value mapping. Cannot parse database."
        ));
    }

    #[test]
    fn key_without_value_gets_friendly_text() {
        let (passed, output) = check("[alice]\npasswd = \n");
        assert!(!passed);
        assert!(output.contains(
            "Error: Some user contains a key without value (e.g. 'passwd = '). Cannot parse database."
        ));
    }

    #[test]
    fn missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlUserDatabase::new(dir.path().join("users.toml"));
        let mut out = Vec::new();

        let passed = check_database(&ValidationEngine::default(), &source, &mut out).unwrap();

        assert!(!passed);
        assert!(String::from_utf8(out).unwrap().contains("Error: Database not found"));
    }

    #[test]
    fn classified_parse_failure_gets_friendly_text() {
        let err = ApplicationError::unparsable(
            ParseFailureKind::DuplicateUser,
            "duplicate key `alice`",
        );
        assert_eq!(
            fatal_diagnostic(&err),
            "Error: found at least one duplicate user. Cannot parse database. Please fix and try again. Message: duplicate key `alice`"
        );
    }

    #[test]
    fn unclassified_parse_failure_is_verbatim() {
        let err = ApplicationError::unparsable(ParseFailureKind::Unclassified, "weird input");
        assert_eq!(fatal_diagnostic(&err), "weird input");
    }
}
