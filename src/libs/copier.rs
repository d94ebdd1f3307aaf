//! Library copier
//!
//! Replaces each library's output folder with a fresh copy of its `dist`
//! folder from `node_modules`. Each library is handled independently.

use super::descriptor::{LibraryDescriptor, LIBRARIES};
use super::error::CopyError;
use super::fs::{copy_dir_all, remove_if_exists};
use crate::config::FailurePolicy;
use crate::logger;
use std::path::{Path, PathBuf};

/// Output root used when no argument is given, relative to the working directory
pub const DEFAULT_OUTPUT_ROOT: &str = "./../wwwroot/";

/// Result of copying one library
#[derive(Debug)]
pub struct CopyOutcome {
    pub library: &'static str,
    pub source: String,
    pub destination: String,
    /// Number of files copied, or the failure
    pub result: Result<usize, CopyError>,
}

impl CopyOutcome {
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-library outcomes of one copier run, in table order
#[derive(Debug, Default)]
pub struct CopyReport {
    pub output_dir: String,
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(CopyOutcome::is_success)
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Copies the fixed library table into `<output root>lib`
#[derive(Debug, Clone)]
pub struct LibraryCopier {
    base_dir: PathBuf,
    output_dir: String,
    libraries: Vec<LibraryDescriptor>,
}

impl LibraryCopier {
    /// `base_dir` anchors relative paths; `output_root` overrides `./../wwwroot/`
    ///
    /// The output directory is `output_root` with `lib` appended verbatim, so
    /// `out/` yields `out/lib` and `out` yields `outlib`.
    pub fn new(base_dir: impl Into<PathBuf>, output_root: Option<&str>) -> Self {
        let output_dir = format!("{}lib", output_root.unwrap_or(DEFAULT_OUTPUT_ROOT));
        Self {
            base_dir: base_dir.into(),
            output_dir,
            libraries: LIBRARIES.to_vec(),
        }
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn libraries(&self) -> &[LibraryDescriptor] {
        &self.libraries
    }

    /// Copy every library, honoring `policy` when one fails
    pub fn run(&self, policy: FailurePolicy) -> CopyReport {
        logger::log_info(&format!("Output dir: {}", self.output_dir));

        let mut report = CopyReport {
            output_dir: self.output_dir.clone(),
            outcomes: Vec::with_capacity(self.libraries.len()),
        };

        for library in &self.libraries {
            let outcome = self.copy_library(library);
            match &outcome.result {
                Ok(_) => logger::log_library_copied(
                    outcome.library,
                    &outcome.source,
                    &outcome.destination,
                ),
                Err(e) => logger::log_library_failed(outcome.library, e),
            }

            let failed = !outcome.is_success();
            report.outcomes.push(outcome);
            if failed && policy == FailurePolicy::Abort {
                logger::log_warning("Stopping after first failure (on_failure = abort)");
                break;
            }
        }

        report
    }

    fn copy_library(&self, library: &LibraryDescriptor) -> CopyOutcome {
        let source = library.source_path();
        let destination = library.destination_path(&self.output_dir);

        let dest_path = self.resolve(&destination);
        remove_if_exists(&dest_path);
        let result = copy_dir_all(&self.resolve(&source), &dest_path);

        CopyOutcome {
            library: library.name,
            source,
            destination,
            result,
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // absolute paths replace the base on join
        self.base_dir.join(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn populate_sources(base: &Path, names: &[&str]) {
        for name in names {
            let dist = base.join("node_modules").join(name).join("dist");
            fs::create_dir_all(dist.join("js")).unwrap();
            fs::write(dist.join("js").join(format!("{name}.min.js")), name.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_default_output_dir() {
        let copier = LibraryCopier::new(".", None);
        assert_eq!(copier.output_dir(), "./../wwwroot/lib");
        assert_eq!(copier.libraries().len(), 4);
    }

    #[test]
    fn test_custom_output_root_is_concatenated() {
        assert_eq!(LibraryCopier::new(".", Some("public/")).output_dir(), "public/lib");
        assert_eq!(LibraryCopier::new(".", Some("public")).output_dir(), "publiclib");
    }

    #[test]
    fn test_copies_all_libraries() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("assets");
        let names: Vec<_> = LIBRARIES.iter().map(|l| l.name).collect();
        populate_sources(&base, &names);

        let report = LibraryCopier::new(&base, None).run(FailurePolicy::Continue);

        assert!(report.all_succeeded());
        assert_eq!(report.succeeded().count(), 4);
        for name in names {
            let copied = tmp.path().join("wwwroot/lib").join(name).join("dist/js");
            assert_eq!(fs::read(copied.join(format!("{name}.min.js"))).unwrap(), name.as_bytes());
        }
    }

    #[test]
    fn test_missing_library_does_not_stop_others() {
        let tmp = tempfile::tempdir().unwrap();
        populate_sources(tmp.path(), &["bootstrap", "jquery-validation", "jquery-validation-unobtrusive"]);

        let report = LibraryCopier::new(tmp.path(), Some("out/")).run(FailurePolicy::Continue);

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.succeeded().count(), 3);
        let failed: Vec<_> = report.failed().map(|o| o.library).collect();
        assert_eq!(failed, ["jquery"]);
        assert!(matches!(
            report.outcomes[1].result,
            Err(CopyError::SourceMissing(_))
        ));
        assert!(tmp.path().join("out/lib/jquery-validation-unobtrusive/dist").is_dir());
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let tmp = tempfile::tempdir().unwrap();
        populate_sources(tmp.path(), &["bootstrap", "jquery-validation"]);

        let report = LibraryCopier::new(tmp.path(), Some("out/")).run(FailurePolicy::Abort);

        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].is_success());
        assert!(!report.outcomes[1].is_success());
        assert!(!tmp.path().join("out/lib/jquery-validation").exists());
    }

    #[test]
    fn test_failed_copy_leaves_destination_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join("out/lib/jquery/dist");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.js"), b"old").unwrap();

        let report = LibraryCopier::new(tmp.path(), Some("out/")).run(FailurePolicy::Continue);

        assert!(!report.all_succeeded());
        assert!(!stale.exists());
    }

    #[test]
    fn test_second_run_replaces_output() {
        let tmp = tempfile::tempdir().unwrap();
        populate_sources(tmp.path(), &["bootstrap"]);
        let copier = LibraryCopier::new(tmp.path(), Some("out/"));

        copier.run(FailurePolicy::Continue);
        let extra = tmp.path().join("out/lib/bootstrap/dist/stale.css");
        fs::write(&extra, b"stale").unwrap();
        let report = copier.run(FailurePolicy::Continue);

        assert!(report.outcomes[0].is_success());
        assert!(!extra.exists());
        assert_eq!(
            fs::read(tmp.path().join("out/lib/bootstrap/dist/js/bootstrap.min.js")).unwrap(),
            b"bootstrap"
        );
    }
}
