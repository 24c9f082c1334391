//! Sums regular-file sizes under a path.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::AggregationError;
use crate::model::{AggregationRequest, HiddenRootPolicy, PathEntry};
use crate::path::is_hidden_path;

/// Aggregate with the default policy for directly-named hidden files.
pub fn aggregate_path(
    path: &Path,
    recursive: bool,
    include_hidden: bool,
) -> Result<u64, AggregationError> {
    let request = AggregationRequest::new(path)
        .recursive(recursive)
        .include_hidden(include_hidden);
    aggregate(&request)
}

/// Total byte size of the regular files reachable from `request.path`.
///
/// The root is resolved following symbolic links and any failure there is
/// returned. Below the root, unreadable entries are skipped and logged.
pub fn aggregate(request: &AggregationRequest) -> Result<u64, AggregationError> {
    let root = request.path.as_path();
    let metadata = fs::metadata(root).map_err(|err| AggregationError::from_io(root, err))?;

    if metadata.is_dir() {
        directory_size(request)
    } else if metadata.is_file() {
        if request.hidden_root == HiddenRootPolicy::Skip
            && !request.include_hidden
            && is_hidden_path(root)
        {
            debug!("Skipping hidden file {}", root.display());
            return Ok(0);
        }
        Ok(metadata.len())
    } else {
        debug!("{} is not a regular file, counting 0", root.display());
        Ok(0)
    }
}

fn directory_size(request: &AggregationRequest) -> Result<u64, AggregationError> {
    let root = request.path.as_path();
    let mut walker = WalkDir::new(root);
    if !request.recursive {
        walker = walker.max_depth(1);
    }

    let mut total = 0u64;
    let mut walker = walker.into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(AggregationError::from_io(root, err.into()));
                }
                debug!("Skipping {:?}: {}", err.path(), err);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let path_entry = match PathEntry::from_dir_entry(&entry) {
            Ok(path_entry) => path_entry,
            Err(err) => {
                debug!("Skipping {}: {}", entry.path().display(), err);
                continue;
            }
        };

        if request.excludes(&path_entry) {
            debug!("Skipping hidden {}", path_entry.path.display());
            if path_entry.is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        if path_entry.is_file() {
            total = total.saturating_add(path_entry.size);
        }
    }

    Ok(total)
}
