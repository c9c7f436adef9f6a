use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};
use shelf_items::{ContentRegistry, FeatureSet};
use shelf_tabs::{BuildContext, TabCatalog};

use crate::report;

/// Blocks, reloading the content file on every change and rebuilding the
/// catalog when the resulting context differs from the cached one.
pub fn run(
    catalog: &TabCatalog,
    content: &Path,
    has_permissions: bool,
    features: impl Fn(&ContentRegistry) -> FeatureSet,
    selection: &report::Selection,
) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                    let _ = tx.send(());
                }
                _ => {}
            }
        }
    })?;
    watcher.watch(content, RecursiveMode::NonRecursive)?;
    log::info!("watching {} for changes", content.display());

    while rx.recv().is_ok() {
        // Editors emit bursts of events per save; collapse them.
        std::thread::sleep(Duration::from_millis(100));
        for _ in rx.try_iter() {}

        let registry = match ContentRegistry::load_from_path(content) {
            Ok(reg) => reg,
            Err(e) => {
                log::warn!("content reload failed ({}): {}", content.display(), e);
                continue;
            }
        };
        let next = BuildContext::new(features(&registry), has_permissions, Arc::new(registry));
        if catalog.try_rebuild(&next) {
            log::info!("content changed; catalog rebuilt");
            report::print(catalog, selection);
        } else {
            log::info!("content reloaded; catalog unchanged");
        }
    }
    Ok(())
}
