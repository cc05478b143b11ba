use std::fmt;
use std::path::PathBuf;

use crate::emit::ModuleOutcome;

/// Totals over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShakeStats {
    pub modules: usize,
    pub edges: usize,
    pub pruned_modules: usize,
    pub removed_declarations: usize,
    pub removed_specifiers: usize,
    /// Destructured names left in place.
    pub passthrough: usize,
    pub bytes_written: usize,
}

impl ShakeStats {
    pub fn from_outcomes(outcomes: &[ModuleOutcome], edges: usize) -> Self {
        let mut stats = Self {
            modules: outcomes.len(),
            edges,
            ..Self::default()
        };
        for outcome in outcomes {
            if outcome.pruned {
                stats.pruned_modules += 1;
            }
            stats.removed_declarations += outcome.report.removed_declarations.len();
            stats.removed_specifiers += outcome.report.removed_specifiers.len();
            stats.passthrough += outcome.report.passthrough.len();
            stats.bytes_written += outcome.bytes;
        }
        stats
    }
}

#[derive(Debug)]
pub struct ShakeResult {
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    /// One entry per module, in discovery order.
    pub modules: Vec<ModuleOutcome>,
    /// Bare specifiers that were not followed.
    pub external: Vec<String>,
    pub stats: ShakeStats,
}

impl ShakeResult {
    /// Outcome for the module read from `path`.
    pub fn module(&self, path: impl AsRef<std::path::Path>) -> Option<&ModuleOutcome> {
        self.modules
            .iter()
            .find(|outcome| outcome.source_path == path.as_ref())
    }

    /// Every declaration name removed, paired with its module.
    pub fn removed(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.modules.iter().flat_map(|outcome| {
            outcome
                .report
                .removed_declarations
                .iter()
                .map(move |name| (&outcome.source_path, name.as_str()))
        })
    }

    pub fn has_external(&self) -> bool {
        !self.external.is_empty()
    }
}

impl fmt::Display for ShakeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shake Result")?;
        writeln!(f, "============")?;
        writeln!(f, "Entry: {}", self.entry.display())?;
        writeln!(f, "Output: {}", self.out_dir.display())?;
        writeln!(f, "Modules: {} ({} pruned)", self.stats.modules, self.stats.pruned_modules)?;
        writeln!(f, "Import edges: {}", self.stats.edges)?;
        writeln!(f, "Removed declarations: {}", self.stats.removed_declarations)?;
        writeln!(f, "Removed export specifiers: {}", self.stats.removed_specifiers)?;
        writeln!(f, "Bytes written: {}", self.stats.bytes_written)?;

        if self.has_external() {
            writeln!(f, "\nExternal imports (not followed):")?;
            for specifier in &self.external {
                writeln!(f, "  - {}", specifier)?;
            }
        }

        let removed: Vec<_> = self.removed().collect();
        if !removed.is_empty() {
            writeln!(f, "\nRemoved:")?;
            for (module, name) in removed {
                writeln!(f, "  - {} ({})", name, module.display())?;
            }
        }

        Ok(())
    }
}
