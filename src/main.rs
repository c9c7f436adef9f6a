use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use shelf_items::{ContentRegistry, FeatureSet};
use shelf_tabs::{BuildContext, TabCatalog};

mod assets;
mod report;
mod watch;

#[derive(Parser, Debug)]
#[command(name = "shelf", about = "Build and inspect the creative item catalog")]
struct Args {
    /// Directory containing `assets/catalog/content.toml`
    #[arg(long)]
    assets: Option<String>,
    /// Enable a content feature (repeatable). Defaults to the content file's list.
    #[arg(long = "feature")]
    features: Vec<String>,
    /// Build as a player with operator permissions
    #[arg(long)]
    op: bool,
    /// Print the stacks of one tab
    #[arg(long)]
    tab: Option<String>,
    /// Print the search index
    #[arg(long)]
    search: bool,
    /// Rebuild whenever the content file changes
    #[arg(long)]
    watch: bool,
}

impl Args {
    fn features(&self, registry: &ContentRegistry) -> FeatureSet {
        if self.features.is_empty() {
            registry.default_features.clone()
        } else {
            self.features.iter().cloned().collect()
        }
    }

    fn selection(&self) -> report::Selection {
        report::Selection {
            tab: self.tab.clone(),
            search: self.search,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let root = assets::resolve_assets_root(args.assets.clone());
    let content = assets::content_path(&root);
    let catalog = TabCatalog::standard()?;

    let registry = Arc::new(ContentRegistry::load_from_path(&content)?);
    log::info!("loaded content from {}", content.display());
    let ctx = BuildContext::new(args.features(&registry), args.op, registry);
    catalog.try_rebuild(&ctx);
    report::print(&catalog, &args.selection());

    if args.watch {
        watch::run(
            &catalog,
            &content,
            args.op,
            |registry| args.features(registry),
            &args.selection(),
        )?;
    }
    Ok(())
}
