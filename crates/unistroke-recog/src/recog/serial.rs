//! Template library persistence
//!
//! One gesture file per template, holding the stroke the template was
//! built from. Exported file names are
//! `{name}{counter:02}.xml`, where the counter restarts at 1 for every
//! name on each export call. Re-exporting into the same directory
//! therefore overwrites earlier files of the same name.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use unistroke_core::{GESTURE_FILE_EXTENSION, GestureRecord};

use crate::error::{RecogError, RecogResult};

use super::Recognizer;
use super::types::{ImportReport, SkippedFile};

impl Recognizer {
    /// Write every template to `dir`, one file each.
    ///
    /// The directory is created if needed. Returns the number of files
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Persistence`] if the directory cannot be
    /// created or a file cannot be written. Files written before the
    /// failure are left in place.
    pub fn export_templates(&self, dir: impl AsRef<Path>) -> RecogResult<usize> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| RecogError::Persistence {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut counters: HashMap<&str, u32> = HashMap::new();
        for template in &self.templates {
            let counter = counters.entry(template.name.as_str()).or_insert(0);
            *counter += 1;

            let record = GestureRecord::new(
                template.name.clone(),
                self.options.subject.clone(),
                *counter,
                template.source.clone(),
            );
            let path = dir.join(record.file_name());
            record.write_to_file(&path).map_err(|e| persistence_error(&path, e))?;
            tracing::debug!(path = %path.display(), "exported template");
        }

        tracing::info!(
            count = self.templates.len(),
            dir = %dir.display(),
            "exported templates"
        );
        Ok(self.templates.len())
    }

    /// Add every gesture file found in `dir` to the library.
    ///
    /// Files are parsed first and then added in `(name, number, file
    /// name)` order, so the result does not depend on directory listing
    /// order. Each template goes through [`add_template`](Self::add_template)
    /// and is normalized with the current options.
    ///
    /// Gesture files do not record library order, so an export/import
    /// round trip keeps the order within each name but sorts the names.
    /// A library exported as `[zeta, alpha]` comes back as
    /// `[alpha, zeta]`, which changes which template wins an exact tie
    /// in [`recognize`](Self::recognize).
    ///
    /// Files that fail to parse or hold a degenerate stroke are skipped
    /// and listed in the returned report, as are directory entries that
    /// cannot be read. A missing directory is logged and yields an empty
    /// report.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Persistence`] only if `dir` exists but cannot
    /// be listed.
    pub fn import_templates(&mut self, dir: impl AsRef<Path>) -> RecogResult<ImportReport> {
        let dir = dir.as_ref();
        let mut report = ImportReport::default();

        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "template directory does not exist");
            return Ok(report);
        }

        let mut records = Vec::new();
        for path in list_gesture_files(dir, &mut report)? {
            match GestureRecord::read_from_file(&path) {
                Ok(record) => records.push((path, record)),
                Err(e) => skip(&mut report, path, e.to_string()),
            }
        }

        records.sort_by(|(pa, a), (pb, b)| {
            a.name
                .cmp(&b.name)
                .then(a.number.cmp(&b.number))
                .then_with(|| pa.cmp(pb))
        });

        for (path, record) in records {
            match self.add_template(record.name, &record.stroke) {
                Ok(()) => report.loaded += 1,
                Err(e) => skip(&mut report, path, e.to_string()),
            }
        }

        tracing::info!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            dir = %dir.display(),
            "imported templates"
        );
        Ok(report)
    }
}

fn list_gesture_files(dir: &Path, report: &mut ImportReport) -> RecogResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| RecogError::Persistence {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(filter_gesture_files(
        dir,
        entries.map(|entry| entry.map(|e| e.path())),
        report,
    ))
}

/// Keep regular files with the gesture extension. Unreadable entries are
/// reported against `dir` and skipped.
fn filter_gesture_files(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
    report: &mut ImportReport,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                skip(report, dir.to_path_buf(), format!("unreadable directory entry: {e}"));
                continue;
            }
        };
        let is_gesture = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(GESTURE_FILE_EXTENSION));
        if is_gesture && path.is_file() {
            files.push(path);
        }
    }
    files
}

fn skip(report: &mut ImportReport, path: PathBuf, reason: String) {
    tracing::warn!(path = %path.display(), reason = %reason, "skipped template file");
    report.skipped.push(SkippedFile { path, reason });
}

fn persistence_error(path: &Path, err: unistroke_core::Error) -> RecogError {
    match err {
        unistroke_core::Error::Io(source) => RecogError::Persistence {
            path: path.to_path_buf(),
            source,
        },
        other => RecogError::Core(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecognizerOptions;
    use unistroke_core::Stroke;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unistroke-recog-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn vee() -> Stroke {
        [(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)].into_iter().collect()
    }

    #[test]
    fn test_export_file_names() {
        let dir = temp_dir("names");
        let mut r = Recognizer::new(RecognizerOptions::default()).unwrap();
        r.add_template("v", &vee()).unwrap();
        r.add_template("v", &vee()).unwrap();
        r.add_template("hook", &vee()).unwrap();
        assert_eq!(r.export_templates(&dir).unwrap(), 3);

        assert!(dir.join("v01.xml").is_file());
        assert!(dir.join("v02.xml").is_file());
        assert!(dir.join("hook01.xml").is_file());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unreadable_entry_is_skipped() {
        let dir = temp_dir("entries");
        let mut r = Recognizer::new(RecognizerOptions::default()).unwrap();
        r.add_template("v", &vee()).unwrap();
        r.add_template("w", &vee()).unwrap();
        r.export_templates(&dir).unwrap();

        let entries = vec![
            Ok(dir.join("v01.xml")),
            Err(io::Error::other("stale handle")),
            Ok(dir.join("w01.xml")),
            Ok(dir.join("missing01.xml")),
        ];
        let mut report = ImportReport::default();
        let files = filter_gesture_files(&dir, entries, &mut report);
        assert_eq!(files, vec![dir.join("v01.xml"), dir.join("w01.xml")]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, dir);
        assert!(report.skipped[0].reason.contains("stale handle"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_import_sorts_names() {
        let dir = temp_dir("order");
        let mut r = Recognizer::new(RecognizerOptions::default()).unwrap();
        r.add_template("zeta", &vee()).unwrap();
        r.add_template("alpha", &vee()).unwrap();
        r.add_template("zeta", &vee()).unwrap();
        r.export_templates(&dir).unwrap();

        let mut fresh = Recognizer::new(RecognizerOptions::default()).unwrap();
        fresh.import_templates(&dir).unwrap();
        let names: Vec<&str> = fresh.templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta", "zeta"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_import_missing_dir() {
        let mut r = Recognizer::new(RecognizerOptions::default()).unwrap();
        let report = r.import_templates(temp_dir("missing")).unwrap();
        assert_eq!(report, ImportReport::default());
        assert!(r.is_empty());
    }

    #[test]
    fn test_import_skips_bad_files() {
        let dir = temp_dir("bad");
        let mut r = Recognizer::new(RecognizerOptions::default()).unwrap();
        r.add_template("v", &vee()).unwrap();
        r.export_templates(&dir).unwrap();
        fs::write(dir.join("broken.xml"), "<Gesture Name=\"x01\">").unwrap();
        fs::write(dir.join("notes.txt"), "not a gesture").unwrap();

        let mut fresh = Recognizer::new(RecognizerOptions::default()).unwrap();
        let report = fresh.import_templates(&dir).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("broken.xml"));
        assert_eq!(fresh.template_names(), vec!["v"]);
        let _ = fs::remove_dir_all(&dir);
    }
}
