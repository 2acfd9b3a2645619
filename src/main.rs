use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use souk_market::config::MarketConfig;
use souk_market::format::CurrencyFormat;
use souk_market::market::seed::demo_listings;
use souk_market::market::{
    update, Action, AppState, CategoryFilter, FileImageReader, ListingStore, SortKey,
};
use souk_market::{Category, Condition, Field, Listing};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "souk")]
#[command(about = "Browse and post second-hand listings")]
struct Cli {
    /// Also write the visible listings to this file as JSON
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show listings matching the filters
    List(Filters),

    /// Post a new listing, then show the result
    Add {
        #[command(flatten)]
        listing: NewListingArgs,

        #[command(flatten)]
        filters: Filters,
    },

    /// Print the category, condition and sort choices
    Categories,
}

#[derive(Args)]
struct Filters {
    /// Text to look for in titles and descriptions
    #[arg(long, default_value = "")]
    search: String,

    /// Category key or label, or "all"
    #[arg(long, default_value = "all")]
    category: CategoryFilter,

    /// newest, price-asc or price-desc
    #[arg(long, default_value = "newest")]
    sort: SortKey,

    /// Minimum price
    #[arg(long, default_value = "")]
    min: String,

    /// Maximum price
    #[arg(long, default_value = "")]
    max: String,
}

#[derive(Args)]
struct NewListingArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    price: String,
    #[arg(long = "listing-category")]
    listing_category: String,
    #[arg(long)]
    condition: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    location: String,
    /// Image file to attach
    #[arg(long)]
    image: Option<PathBuf>,
    #[arg(long, default_value = "")]
    seller: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = MarketConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("Invalid log filter {:?}", config.log_filter))?,
        )
        .with_writer(std::io::stderr)
        .init();

    info!("🛒 Souk - second-hand marketplace");

    let listings = if config.seed_demo_listings {
        demo_listings(Utc::now())
    } else {
        Vec::new()
    };
    let mut state = AppState::new(ListingStore::new().with_listings(listings));
    let currency = CurrencyFormat::mad().with_symbol(config.currency_symbol.clone());

    match cli.command {
        Commands::Categories => {
            print_choices();
            return Ok(());
        }
        Commands::List(filters) => {
            state = apply_filters(state, filters);
        }
        Commands::Add { listing, filters } => {
            state = post_listing(state, listing, &config).await?;
            state = apply_filters(state, filters);
        }
    }

    let visible = state.visible();
    info!("✅ Showing {} of {} listings", visible.len(), state.store.len());
    print_listings(&visible, &currency);

    if let Some(path) = cli.json {
        let json = serde_json::to_string_pretty(&visible)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved visible listings to {}", path.display());
    }

    Ok(())
}

fn apply_filters(state: AppState, filters: Filters) -> AppState {
    let actions = vec![
        Action::SetSearch(filters.search),
        Action::SetCategory(filters.category),
        Action::SetSort(filters.sort),
        Action::SetMinPrice(filters.min),
        Action::SetMaxPrice(filters.max),
    ];
    actions.into_iter().fold(state, update)
}

async fn post_listing(state: AppState, args: NewListingArgs, config: &MarketConfig) -> Result<AppState> {
    let fields = [
        (Field::Title, args.title),
        (Field::Price, args.price),
        (Field::Category, args.listing_category),
        (Field::Condition, args.condition),
        (Field::Description, args.description),
        (Field::Location, args.location),
        (Field::SellerName, args.seller),
        (Field::SellerEmail, args.email),
        (Field::SellerPhone, args.phone),
    ];

    let mut state = update(state, Action::OpenForm);
    for (field, value) in fields {
        state = update(state, Action::SetFormField(field, value));
    }

    if let Some(path) = &args.image {
        let reader = FileImageReader::with_max_bytes(config.max_image_bytes);
        state = state.attach_image(&reader, path).await;
    }
    if !state.form.as_ref().is_some_and(|form| form.has_image()) {
        info!("No image attached, using a generated placeholder");
    }

    let state = update(state, Action::SubmitForm);
    if let Some(err) = &state.last_error {
        anyhow::bail!("{}", err);
    }
    Ok(state)
}

fn print_choices() {
    println!("Categories:");
    for c in Category::ALL {
        println!("  {:<16} {}", c.key(), c.label());
    }
    println!("Conditions:");
    for c in Condition::ALL {
        println!("  {:<16} {}", c.key(), c.label());
    }
    println!("Sort keys:");
    for s in SortKey::ALL {
        println!("  {:<16} {}", s.key(), s.label());
    }
}

fn print_listings(listings: &[&Listing], currency: &CurrencyFormat) {
    for (i, listing) in listings.iter().enumerate() {
        let heart = if listing.favorite { " ♥" } else { "" };
        println!("{}. {} ({}){}", i + 1, listing.title, currency.format(listing.price), heart);
        println!("   {} · {}", listing.category, listing.condition);
        if !listing.location.is_empty() {
            println!("   Location: {}", listing.location);
        }
        if !listing.description.is_empty() {
            println!("   {}", listing.description);
        }
        let contacts: Vec<&str> = [listing.seller.email.as_deref(), listing.seller.phone.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !contacts.is_empty() {
            println!("   Contact: {}", contacts.join(", "));
        }
        if let Some(image) = listing.cover_image() {
            println!("   Image: {}", image_kind(image));
        }
        println!("   ID: {}", listing.id);
        println!();
    }
}

/// Short description of a data URL, e.g. `image/png (1234 chars)`
fn image_kind(url: &str) -> String {
    let mime = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .unwrap_or("external");
    format!("{} ({} chars)", mime, url.len())
}
