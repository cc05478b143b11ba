use clap::ValueEnum;
use sift_analysis::{BindingScope, OutputLayout, UsageAnalysis};

/// How import usage is detected
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum UsageMode {
    /// Name-based: any same-named identifier outside the import counts
    #[value(name = "occurrence")]
    Occurrence,

    /// Scope-resolved: only references bound to the import count
    #[value(name = "scoped")]
    Scoped,
}

/// Which dependencies a used name is forwarded to
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ScopeMode {
    /// Every dependency receives every used name
    #[value(name = "shared")]
    Shared,

    /// A dependency only receives names imported from it
    #[value(name = "per-dependency")]
    PerDependency,
}

/// Where emitted files are placed
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum LayoutMode {
    /// Mirror the input directory structure
    #[value(name = "preserve")]
    Preserve,

    /// Write every module by basename
    #[value(name = "flatten")]
    Flatten,
}

impl From<UsageMode> for UsageAnalysis {
    fn from(mode: UsageMode) -> Self {
        match mode {
            UsageMode::Occurrence => UsageAnalysis::Occurrence,
            UsageMode::Scoped => UsageAnalysis::Scoped,
        }
    }
}

impl From<ScopeMode> for BindingScope {
    fn from(mode: ScopeMode) -> Self {
        match mode {
            ScopeMode::Shared => BindingScope::Shared,
            ScopeMode::PerDependency => BindingScope::PerDependency,
        }
    }
}

impl From<LayoutMode> for OutputLayout {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Preserve => OutputLayout::Preserve,
            LayoutMode::Flatten => OutputLayout::Flatten,
        }
    }
}
