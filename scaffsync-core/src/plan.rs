//! Sync plan — ordered step descriptors interpreted by the pipeline runner.
//!
//! A plan is a `Vec<SyncStep>`: each descriptor names one synchronizer kind
//! and carries its resolved paths and parameters. The runner in
//! `scaffsync-sync` executes descriptors in order, fail-fast. Keeping the
//! plan as data lets tests exercise each synchronizer and the ordering
//! independently.

use std::path::{Path, PathBuf};

use crate::config::SyncConfig;

// ---------------------------------------------------------------------------
// Step descriptors
// ---------------------------------------------------------------------------

/// One synchronizer invocation against a (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStep {
    /// Delete the destination file (which must exist) and copy the source
    /// file's bytes verbatim.
    Replace { source: PathBuf, dest: PathBuf },

    /// Like [`SyncStep::Replace`], but a missing destination is allowed:
    /// the copy proceeds without a prior delete.
    ReplaceOrCreate { source: PathBuf, dest: PathBuf },

    /// Recursively copy the source directory into the destination directory.
    /// Conflicting paths are overwritten; destination-only paths survive.
    MergeTree { source: PathBuf, dest: PathBuf },

    /// Insert `block` (joined with newlines) immediately after the first
    /// destination line containing `>`; skip when already present.
    InjectMarkup { dest: PathBuf, block: Vec<String> },

    /// Replace the first destination line containing `token` with
    /// `replacement`, whole-line.
    PatchLine {
        dest: PathBuf,
        token: String,
        replacement: String,
    },

    /// Copy dependency keys missing from the destination manifest, then set
    /// its `name` field to `project_name`.
    MergeManifest {
        source: PathBuf,
        dest: PathBuf,
        project_name: String,
    },
}

impl SyncStep {
    /// Destination path this step writes to. Used for reporting.
    pub fn dest(&self) -> &Path {
        match self {
            SyncStep::Replace { dest, .. }
            | SyncStep::ReplaceOrCreate { dest, .. }
            | SyncStep::MergeTree { dest, .. }
            | SyncStep::InjectMarkup { dest, .. }
            | SyncStep::PatchLine { dest, .. }
            | SyncStep::MergeManifest { dest, .. } => dest,
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical plan
// ---------------------------------------------------------------------------

/// Destination path of the Android manifest, relative to the scaffold root.
pub const ANDROID_MANIFEST: &str = "android/app/src/main/AndroidManifest.xml";

/// Destination path of the app build script, relative to the scaffold root.
pub const APP_BUILD_GRADLE: &str = "android/app/build.gradle";

/// Build the canonical eight-step plan for one (source, destination) pair.
///
/// Step order is fixed: entry point, source tree, manifest permissions,
/// package manifest merge, bundler config, platform-tooling config,
/// build-tooling config, build-script SDK patch.
pub fn canonical_plan(config: &SyncConfig, source_root: &Path, dest_root: &Path) -> Vec<SyncStep> {
    let pair = |name: &str| (source_root.join(name), dest_root.join(name));

    let (index_src, index_dest) = pair("index.js");
    let (tree_src, tree_dest) = pair("src");
    let (pkg_src, pkg_dest) = pair("package.json");
    let (metro_src, metro_dest) = pair("metro.config.js");
    let (rn_src, rn_dest) = pair("react-native.config.js");
    let (babel_src, babel_dest) = pair("babel.config.js");

    vec![
        SyncStep::Replace {
            source: index_src,
            dest: index_dest,
        },
        SyncStep::MergeTree {
            source: tree_src,
            dest: tree_dest,
        },
        SyncStep::InjectMarkup {
            dest: dest_root.join(ANDROID_MANIFEST),
            block: config.permissions.clone(),
        },
        SyncStep::MergeManifest {
            source: pkg_src,
            dest: pkg_dest,
            project_name: config.project_name.clone(),
        },
        SyncStep::Replace {
            source: metro_src,
            dest: metro_dest,
        },
        SyncStep::ReplaceOrCreate {
            source: rn_src,
            dest: rn_dest,
        },
        SyncStep::Replace {
            source: babel_src,
            dest: babel_dest,
        },
        SyncStep::PatchLine {
            dest: dest_root.join(APP_BUILD_GRADLE),
            token: config.sdk_version_token.clone(),
            replacement: config.sdk_version_line.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_plan_has_eight_steps_in_fixed_order() {
        let config = SyncConfig::default();
        let plan = canonical_plan(&config, Path::new("example"), Path::new("test_project"));

        assert_eq!(plan.len(), 8);
        assert!(matches!(plan[0], SyncStep::Replace { .. }));
        assert!(matches!(plan[1], SyncStep::MergeTree { .. }));
        assert!(matches!(plan[2], SyncStep::InjectMarkup { .. }));
        assert!(matches!(plan[3], SyncStep::MergeManifest { .. }));
        assert!(matches!(plan[4], SyncStep::Replace { .. }));
        assert!(matches!(plan[5], SyncStep::ReplaceOrCreate { .. }));
        assert!(matches!(plan[6], SyncStep::Replace { .. }));
        assert!(matches!(plan[7], SyncStep::PatchLine { .. }));
    }

    #[test]
    fn plan_paths_are_rooted_at_the_given_roots() {
        let config = SyncConfig::default();
        let plan = canonical_plan(&config, Path::new("/tpl"), Path::new("/scaffold"));

        match &plan[0] {
            SyncStep::Replace { source, dest } => {
                assert_eq!(source, Path::new("/tpl/index.js"));
                assert_eq!(dest, Path::new("/scaffold/index.js"));
            }
            other => panic!("unexpected first step: {other:?}"),
        }
        assert_eq!(
            plan[2].dest(),
            Path::new("/scaffold/android/app/src/main/AndroidManifest.xml")
        );
        assert_eq!(plan[7].dest(), Path::new("/scaffold/android/app/build.gradle"));
    }

    #[test]
    fn markup_step_carries_the_configured_block() {
        let mut config = SyncConfig::default();
        config.permissions = vec!["<uses-feature android:name=\"a\" />".into()];
        let plan = canonical_plan(&config, Path::new("s"), Path::new("d"));

        match &plan[2] {
            SyncStep::InjectMarkup { block, .. } => assert_eq!(block, &config.permissions),
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
