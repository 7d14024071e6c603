//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::application::{DiffUseCase, InstallUseCase};
use crate::config::ProjectConfig;
use crate::domain::ports::{AutoConfirm, Confirm, RegistrySource};
use crate::infrastructure::{open_source, InteractiveConfirm, LocalFs};

/// Registry source for the project's configured location
pub fn create_registry_source(config: &ProjectConfig) -> Arc<dyn RegistrySource> {
    Arc::from(open_source(config.config.registry_location(), config.cwd()))
}

/// Confirmation strategy: a prompt on a terminal, auto-confirm otherwise.
pub fn create_confirm(interactive: bool) -> Arc<dyn Confirm> {
    if interactive && std::io::stdin().is_terminal() {
        Arc::new(InteractiveConfirm::new())
    } else {
        Arc::new(AutoConfirm)
    }
}

/// Create an install use case with all dependencies wired up
///
/// `interactive` is false for `--json` runs, which never prompt.
pub fn create_install_use_case(config: &ProjectConfig, interactive: bool) -> InstallUseCase {
    InstallUseCase::new(
        create_registry_source(config),
        Arc::new(LocalFs::new()),
        create_confirm(interactive),
    )
}

/// Create a diff use case with all dependencies wired up
pub fn create_diff_use_case(config: &ProjectConfig) -> DiffUseCase {
    DiffUseCase::new(create_registry_source(config), Arc::new(LocalFs::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::Path;

    #[test]
    fn registry_source_follows_config() {
        let mut config = Config::default();
        config.registry = Some("https://example.test/r/".to_string());
        let project = config.resolve(Path::new("/app"));
        assert_eq!(create_registry_source(&project).location(), "https://example.test/r");

        let mut config = Config::default();
        config.registry = Some("registry".to_string());
        let project = config.resolve(Path::new("/app"));
        assert_eq!(create_registry_source(&project).location(), "/app/registry");
    }

    #[test]
    fn non_interactive_confirm_proceeds() {
        let confirm = create_confirm(false);
        let pending = crate::domain::ports::PendingWrite {
            create: 1,
            update: 0,
            stylesheet: false,
        };
        assert!(confirm.confirm(&pending));
    }
}
