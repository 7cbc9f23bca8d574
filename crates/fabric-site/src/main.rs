//! Main entry point for the Automation Fabric site preview.

use anyhow::Context;
use fabric_common::logging::init_logging;
use fabric_config::{ConfigCache, ConfigLoader};
use fabric_i18n::CopyCatalog;
use fabric_site::{HostBundle, Outcome, Preview, SiteApp};
use fabric_theme::{FileStore, MemoryStore, PreferenceStore};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    init_logging(config.logging_config()).context("failed to initialize logging")?;

    info!("Starting Automation Fabric site preview");

    let catalog = CopyCatalog::embedded().context("failed to load the copy catalog")?;

    // An unreadable preference file degrades to a store that keeps nothing
    let store: Arc<dyn PreferenceStore> = match FileStore::open(&config.storage.path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, "preference file unavailable, theme choices will not persist");
            Arc::new(MemoryStore::unavailable())
        }
    };

    let host = HostBundle::new("/", None);
    let config = Arc::new(ConfigCache::new(config));
    let app = SiteApp::mount(config, catalog, &host, store).context("failed to mount the site")?;
    let preview = Preview::new(app, host);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", preview.app().status())?;
    writeln!(stdout, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match preview.run_line(&line) {
            Ok(Outcome::Continue(text)) if text.is_empty() => {}
            Ok(Outcome::Continue(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                error!(error = %e, "command rejected");
                writeln!(stdout, "{e}")?;
            }
        }
    }

    info!("Preview finished");
    Ok(())
}
