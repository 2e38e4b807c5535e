//! Main organize command

use crate::guard;
use crate::scanner::organize_tree;
use crate::types::{OrganizeEvent, OrganizeStats, ShelveError};
use crate::ui::ProgressReporter;
use crate::Config;

/// Run the organize operation.
///
/// Validates both roots (fatal on failure, nothing copied), then walks the
/// source tree and reports every outcome through the progress reporter.
/// Recoverable per-entry failures are counted in the returned stats; only a
/// failed validation returns `Err`.
pub fn run(config: Config) -> Result<OrganizeStats, ShelveError> {
    let paths = guard::validate(&config.source, &config.destination)?;

    let reporter = ProgressReporter::new();
    let callback = |event: &OrganizeEvent| reporter.handle(event);
    let stats = organize_tree(&paths.source, &paths.destination, Some(&callback));
    reporter.finish(&stats);

    Ok(stats)
}
