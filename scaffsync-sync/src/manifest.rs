//! ManifestMerger — key-level merge of the package manifest.
//!
//! Two sub-operations on the destination `package.json`, applied in
//! sequence:
//!
//! 1. Dependency merge: keys present in the source's `dependencies` /
//!    `devDependencies` mappings but absent from the destination's are
//!    copied over. Destination entries are never overwritten, even when the
//!    version specifiers disagree — a monotonic union.
//! 2. Identity override: the destination's `name` field is set
//!    unconditionally.
//!
//! The document is handled as untyped JSON because scaffolds carry
//! arbitrary extra top-level fields (scripts, jest config, ...) that must
//! round-trip untouched.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{io_err, SyncError};

/// The two dependency mappings the merge is defined over.
const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "devDependencies"];

/// Merge missing dependency keys from `source` into `dest`, then set the
/// destination's `name` to `project_name`, and rewrite `dest` with 2-space
/// indentation and a trailing newline.
pub fn merge_manifest(source: &Path, dest: &Path, project_name: &str) -> Result<(), SyncError> {
    let source_doc = load_object(source)?;
    let mut dest_doc = load_object(dest)?;

    for section in DEPENDENCY_SECTIONS {
        let source_deps = mapping(&source_doc, section, source)?;

        let dest_deps = dest_doc
            .entry(section)
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(dest_deps) = dest_deps.as_object_mut() else {
            return Err(SyncError::MissingSection {
                path: dest.to_path_buf(),
                section: section.to_owned(),
            });
        };

        for (name, version) in source_deps {
            if !dest_deps.contains_key(name) {
                tracing::info!("adding {section} entry '{name}'");
                dest_deps.insert(name.clone(), version.clone());
            }
        }
    }

    dest_doc.insert("name".to_owned(), Value::String(project_name.to_owned()));

    save_object(dest, &dest_doc)
}

fn load_object(path: &Path) -> Result<Map<String, Value>, SyncError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    // Deserializing straight into a Map rejects non-object top levels too.
    serde_json::from_str(&contents).map_err(|e| SyncError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn mapping<'a>(
    doc: &'a Map<String, Value>,
    section: &str,
    path: &Path,
) -> Result<&'a Map<String, Value>, SyncError> {
    doc.get(section)
        .and_then(Value::as_object)
        .ok_or_else(|| SyncError::MissingSection {
            path: path.to_path_buf(),
            section: section.to_owned(),
        })
}

fn save_object(path: &Path, doc: &Map<String, Value>) -> Result<(), SyncError> {
    let mut serialized = serde_json::to_string_pretty(doc).map_err(|e| SyncError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    serialized.push('\n');
    std::fs::write(path, serialized).map_err(|e| io_err(path, e))
}
