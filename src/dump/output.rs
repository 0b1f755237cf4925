//! Log file naming and rendering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::LOG_EXTENSION;
use crate::error_handling::DumpError;

use super::entry::Entry;

/// Derives the log path for a dump path.
///
/// Everything from the *first* `.` of the whole path string onwards is
/// replaced by `.log`: `data.v2.json` becomes `data.log`, and a path with no
/// dot at all just gains the extension. A leading `./` therefore yields
/// `.log`; pass plain relative or absolute paths without dots in directory
/// names.
///
/// # Errors
///
/// Returns `DumpError::NonUtf8Path` if the path is not valid UTF-8.
pub fn derive_log_path(dump_path: &Path) -> Result<PathBuf, DumpError> {
    let path = dump_path
        .to_str()
        .ok_or_else(|| DumpError::NonUtf8Path(dump_path.to_path_buf()))?;
    let stem = path.split_once('.').map_or(path, |(head, _)| head);
    Ok(PathBuf::from(format!("{stem}.{LOG_EXTENSION}")))
}

/// Renders one log line (without the trailing newline): the key, a space and
/// the members list in its Rust debug form.
///
/// Members are always double-quoted with Rust escapes (`["x\"y", "it's"]`).
/// Earlier logs of this data used single-quoted lists
/// (`['x"y', "it's"]`), so the two are not byte-for-byte comparable.
pub fn render_line(entry: &Entry) -> String {
    format!("{} {:?}", entry.key, entry.members)
}

/// Creates (or truncates) `log_path` and writes one line per entry, in the
/// order given.
pub fn write_log(log_path: &Path, entries: &[Entry]) -> Result<(), DumpError> {
    let write_err = |source| DumpError::Write {
        path: log_path.to_path_buf(),
        source,
    };

    let file = File::create(log_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{}", render_line(entry)).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_derive_log_path_truncates_at_first_dot() {
        assert_eq!(
            derive_log_path(Path::new("data.v2.json")).unwrap(),
            PathBuf::from("data.log")
        );
        assert_eq!(
            derive_log_path(Path::new("run.3.json")).unwrap(),
            PathBuf::from("run.log")
        );
        assert_eq!(
            derive_log_path(Path::new("dump.json")).unwrap(),
            PathBuf::from("dump.log")
        );
        assert_eq!(
            derive_log_path(Path::new("/var/dumps/memory.json")).unwrap(),
            PathBuf::from("/var/dumps/memory.log")
        );
    }

    #[test]
    fn test_derive_log_path_without_dot() {
        assert_eq!(
            derive_log_path(Path::new("dump")).unwrap(),
            PathBuf::from("dump.log")
        );
    }

    #[test]
    fn test_derive_log_path_dotted_directory() {
        assert_eq!(
            derive_log_path(Path::new("out.d/dump.json")).unwrap(),
            PathBuf::from("out.log")
        );
    }

    #[test]
    fn test_render_line() {
        let entry = Entry::new("3_7", vec!["01".to_string(), "10".to_string()]).unwrap();
        assert_eq!(render_line(&entry), r#"3_7 ["01", "10"]"#);

        let quoted = Entry::new("1", vec!["x\"y".to_string(), "it's".to_string()]).unwrap();
        assert_eq!(render_line(&quoted), r#"1 ["x\"y", "it's"]"#);

        let empty = Entry::new("0", Vec::new()).unwrap();
        assert_eq!(render_line(&empty), "0 []");
    }

    #[test]
    fn test_write_log_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("dump.log");
        std::fs::write(&log_path, "stale contents\nmore\n").expect("Failed to seed log");

        let entries = vec![Entry::new("1_1", vec!["x".to_string()]).unwrap()];
        write_log(&log_path, &entries).expect("write should succeed");

        let written = std::fs::read_to_string(&log_path).expect("Failed to read log");
        assert_eq!(written, "1_1 [\"x\"]\n");
    }

    #[test]
    fn test_write_log_into_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("nope").join("dump.log");

        let err = write_log(&log_path, &[]).unwrap_err();
        assert!(matches!(err, DumpError::Write { .. }));
    }
}
