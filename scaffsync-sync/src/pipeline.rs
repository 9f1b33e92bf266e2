//! Fail-fast pipeline runner.
//!
//! Interprets an ordered slice of [`SyncStep`] descriptors: each step runs
//! to completion before the next begins, and the first error aborts the
//! remainder. Prior steps' effects stay persisted — there is no rollback;
//! partial synchronization is an accepted failure mode.

use std::path::PathBuf;

use scaffsync_core::plan::SyncStep;

use crate::error::SyncError;
use crate::markup::Injection;
use crate::{gradle, manifest, markup, replace, tree};

/// Outcome of a single executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step mutated its destination artifact.
    Applied,
    /// The step found its effect already in place and wrote nothing.
    Skipped,
}

/// Per-step result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Destination artifact the step targeted.
    pub dest: PathBuf,
    pub outcome: StepOutcome,
}

/// Execute `plan` in order, fail-fast.
///
/// Returns one [`StepReport`] per completed step. On error, steps already
/// executed have already written their effects to disk.
pub fn run(plan: &[SyncStep]) -> Result<Vec<StepReport>, SyncError> {
    let mut reports = Vec::with_capacity(plan.len());

    for step in plan {
        tracing::debug!("running step for {}", step.dest().display());
        let outcome = execute(step)?;
        reports.push(StepReport {
            dest: step.dest().to_path_buf(),
            outcome,
        });
    }

    Ok(reports)
}

fn execute(step: &SyncStep) -> Result<StepOutcome, SyncError> {
    match step {
        SyncStep::Replace { source, dest } => {
            replace::replace_file(source, dest)?;
            Ok(StepOutcome::Applied)
        }
        SyncStep::ReplaceOrCreate { source, dest } => {
            replace::replace_or_create(source, dest)?;
            Ok(StepOutcome::Applied)
        }
        SyncStep::MergeTree { source, dest } => {
            tree::merge_tree(source, dest)?;
            Ok(StepOutcome::Applied)
        }
        SyncStep::InjectMarkup { dest, block } => match markup::inject_block(dest, block)? {
            Injection::Inserted => Ok(StepOutcome::Applied),
            Injection::AlreadyPresent => Ok(StepOutcome::Skipped),
        },
        SyncStep::PatchLine {
            dest,
            token,
            replacement,
        } => {
            gradle::patch_line(dest, token, replacement)?;
            Ok(StepOutcome::Applied)
        }
        SyncStep::MergeManifest {
            source,
            dest,
            project_name,
        } => {
            manifest::merge_manifest(source, dest, project_name)?;
            Ok(StepOutcome::Applied)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_plan_yields_empty_report() {
        let reports = run(&[]).expect("run");
        assert!(reports.is_empty());
    }

    #[test]
    fn reports_follow_plan_order() {
        let dir = TempDir::new().unwrap();
        let a_src = dir.path().join("a.src");
        let a_dst = dir.path().join("a.dst");
        let b_src = dir.path().join("b.src");
        let b_dst = dir.path().join("b.dst");
        write(&a_src, "a");
        write(&a_dst, "old");
        write(&b_src, "b");

        let plan = vec![
            SyncStep::Replace {
                source: a_src,
                dest: a_dst.clone(),
            },
            SyncStep::ReplaceOrCreate {
                source: b_src,
                dest: b_dst.clone(),
            },
        ];

        let reports = run(&plan).expect("run");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].dest, a_dst);
        assert_eq!(reports[1].dest, b_dst);
        assert!(reports.iter().all(|r| r.outcome == StepOutcome::Applied));
    }

    #[test]
    fn first_failure_aborts_remaining_steps() {
        let dir = TempDir::new().unwrap();
        let missing_dst = dir.path().join("never-created.js");
        let src = dir.path().join("later.src");
        let later_dst = dir.path().join("later.dst");
        write(&src, "content");

        let plan = vec![
            // Fails: plain replace requires the destination to pre-exist.
            SyncStep::Replace {
                source: src.clone(),
                dest: missing_dst,
            },
            SyncStep::ReplaceOrCreate {
                source: src,
                dest: later_dst.clone(),
            },
        ];

        let err = run(&plan).expect_err("should fail");
        assert!(matches!(err, SyncError::MissingArtifact { .. }));
        assert!(
            !later_dst.exists(),
            "steps after the failure must not run"
        );
    }

    #[test]
    fn skipped_markup_injection_is_reported_as_skipped() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("AndroidManifest.xml");
        write(&manifest, "<manifest>\n</manifest>");

        let block = vec!["<uses-permission android:name=\"p\" />".to_string()];
        let plan = vec![SyncStep::InjectMarkup {
            dest: manifest,
            block,
        }];

        let first = run(&plan).expect("first run");
        assert_eq!(first[0].outcome, StepOutcome::Applied);

        let second = run(&plan).expect("second run");
        assert_eq!(second[0].outcome, StepOutcome::Skipped);
    }
}
