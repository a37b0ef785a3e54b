mod loader;
mod merge;
mod model;

pub use loader::{
    ConfigResolver, FileConfigResolver, FileSystem, LOCAL_CONFIG_NAME, MAX_EXTENDS_DEPTH,
    RealFileSystem,
};
pub use merge::RESET_MARKER;
pub use model::{LintConfig, RuleConfig, RuleSeverity};
