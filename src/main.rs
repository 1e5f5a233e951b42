use clap::Parser;
use related_posts::utils::logger;
use related_posts::{CliArgs, ContentStore, InMemoryStore, PrefsFile, Selector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting related-posts CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let store = match InMemoryStore::from_json_file(&args.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to load store fixture '{}': {}", args.store, e);
            eprintln!("❌ Failed to load store fixture: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} items from {}", store.len(), args.store);

    let prefs = match PrefsFile::from_file(&args.prefs) {
        Ok(file) => file.into_preferences(),
        Err(e) => {
            tracing::error!("❌ Failed to load preferences '{}': {}", args.prefs, e);
            eprintln!("❌ Failed to load preferences: {}", e);
            std::process::exit(1);
        }
    };

    let selector = Selector::new(store);

    let source = match args.source_id {
        Some(id) => {
            let found = selector.store().find_published_by_id(id).await?;
            if found.is_none() {
                tracing::warn!("Source id {} not found or unpublished, running sourceless", id);
            }
            found
        }
        None => None,
    };

    let related = selector.select_related(source.as_ref(), &prefs).await?;

    if related.is_empty() {
        println!("No related items found");
        return Ok(());
    }

    // Titles resolve per content type; a manual pick of another type still
    // prints its bare id.
    let resolved = selector
        .store()
        .find_by_ids_preserving_order(&related, &prefs.content_type)
        .await?;

    println!("✅ {} related item(s):", related.len());
    for id in &related {
        match resolved.iter().find(|item| item.id == *id) {
            Some(item) => println!("  {}  {}", id, item.title),
            None => println!("  {}", id),
        }
    }

    Ok(())
}
