pub mod apply;
pub mod decode;
pub mod encode;
pub mod id;

use alertsync_core::Action;
use alertsync_resolver::ResourceData;

use crate::config::CliConfig;

/// Fill in the repository from configuration when the definition omits it.
pub(crate) fn resolve_repository(data: &mut ResourceData, config: &CliConfig) -> anyhow::Result<()> {
    if data.repository.is_empty() {
        let Some(repository) = &config.default_repository else {
            anyhow::bail!(
                "action {:?} names no repository; set `repository` in the definition, \
                 pass --repository or set ALERTSYNC_REPOSITORY",
                data.name
            );
        };
        data.repository.clone_from(repository);
    }
    Ok(())
}

/// One-line human summary of an action.
pub(crate) fn summary(action: &Action) -> String {
    if action.id.is_empty() {
        format!("{} ({})", action.name, action.action_type())
    } else {
        format!("{} ({}) id={}", action.name, action.action_type(), action.id)
    }
}
