//! Output path planning.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::EmitError;
use crate::config::OutputLayout;

/// Deepest directory containing every path's parent directory.
pub fn common_ancestor<'p>(paths: impl IntoIterator<Item = &'p Path>) -> PathBuf {
    let mut common: Option<Vec<Component<'p>>> = None;

    for path in paths {
        let dir: Vec<Component<'p>> = path
            .parent()
            .map(|parent| parent.components().collect())
            .unwrap_or_default();
        common = Some(match common {
            None => dir,
            Some(prefix) => prefix
                .into_iter()
                .zip(dir)
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a)
                .collect(),
        });
    }

    common.unwrap_or_default().into_iter().collect()
}

/// Map every module path to the file it is written to.
pub fn plan_outputs<'p>(
    modules: impl IntoIterator<Item = &'p Path> + Clone,
    out_dir: &Path,
    layout: OutputLayout,
) -> Result<IndexMap<PathBuf, PathBuf>, EmitError> {
    match layout {
        OutputLayout::Preserve => {
            let root = common_ancestor(modules.clone());
            Ok(modules
                .into_iter()
                .map(|path| {
                    let relative = path.strip_prefix(&root).unwrap_or(path);
                    (path.to_path_buf(), out_dir.join(relative))
                })
                .collect())
        }
        OutputLayout::Flatten => {
            let mut seen: FxHashMap<PathBuf, PathBuf> = FxHashMap::default();
            let mut planned = IndexMap::new();
            for path in modules {
                let name = path.file_name().unwrap_or(path.as_os_str());
                let target = out_dir.join(name);
                if let Some(first) = seen.insert(target.clone(), path.to_path_buf()) {
                    return Err(EmitError::OutputCollision {
                        target,
                        first,
                        second: path.to_path_buf(),
                    });
                }
                planned.insert(path.to_path_buf(), target);
            }
            Ok(planned)
        }
    }
}
