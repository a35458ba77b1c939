use clap::{Args, Parser, Subcommand};
use color_harmony::{CatalogItem, Category, Color, Occasion, OutfitScorer, Season};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chroma_wardrobe::api;
use chroma_wardrobe::assets::{AssetCategory, AssetLoader};
use chroma_wardrobe::models::{AppConfig, Product, ProductId};
use chroma_wardrobe::server;
use chroma_wardrobe::services::parse_seed_catalog;

#[derive(Parser)]
#[command(name = "chroma-wardrobe")]
#[command(about = "ChromaWardrobe - clothing catalog API with color-harmony outfit suggestions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the harmony sets of a color
    Harmony {
        /// HEX color, e.g. "#FF5733" or "F53"
        color: String,
    },
    /// Rank seed catalog items against a product or an ad-hoc garment
    Suggest(SuggestArgs),
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract catalog.yaml
        #[arg(long)]
        catalog: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args)]
struct SuggestArgs {
    /// Seed catalog product id
    #[arg(long, conflicts_with = "color")]
    product_id: Option<String>,

    /// HEX color of an ad-hoc garment
    #[arg(long, requires_all = ["category", "season", "occasion"])]
    color: Option<String>,

    /// top, bottom or dress
    #[arg(long)]
    category: Option<Category>,

    /// spring, summer, fall, winter or all-season
    #[arg(long)]
    season: Option<Season>,

    /// casual, formal, business, party or athletic
    #[arg(long)]
    occasion: Option<Occasion>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChromaWardrobe API",
        description = "Clothing catalog with color-harmony outfit suggestions",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_health,
        api::handle_api_index,
        api::list_products,
        api::get_product,
        api::create_product,
        api::update_product,
        api::delete_product,
        api::suggest_outfit,
        api::color_compatibility,
        api::search_pins,
        api::board_pins,
    ),
    components(schemas(
        api::HealthResponse,
        api::ProductListResponse,
        api::ProductResponse,
        api::DeleteResponse,
        api::SuggestRequest,
        api::SuggestResponse,
        api::SuggestionEntry,
        api::SelectedProduct,
        api::ColorCompatibilityResponse,
        api::ProductColor,
        api::SearchRequest,
        api::BoardRequest,
        api::PinterestResponse,
        chroma_wardrobe::models::Product,
        chroma_wardrobe::models::CreateProduct,
        chroma_wardrobe::models::UpdateProduct,
        chroma_wardrobe::error::FieldError,
    )),
    tags(
        (name = "System", description = "Health and endpoint index"),
        (name = "Products", description = "Catalog management"),
        (name = "Outfits", description = "Color-harmony outfit suggestions"),
        (name = "Pinterest", description = "Rate-limited Pinterest proxy")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Harmony { color }) => {
            init_cli_logging();
            run_harmony_command(&color)
        }
        Some(Commands::Suggest(args)) => {
            init_cli_logging();
            run_suggest_command(args)
        }
        Some(Commands::Init {
            config,
            catalog,
            all,
            force,
            list,
        }) => run_init_command(config, catalog, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_wardrobe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Print harmony sets, neutral verdict, HSL and Lab for one color
fn run_harmony_command(input: &str) -> anyhow::Result<()> {
    let color: Color = input.parse()?;
    let hsl = color.to_hsl();
    let lab = color.to_lab();

    println!("Color:   {color}");
    println!("HSL:     h={:.1} s={:.1} l={:.1}", hsl.h, hsl.s, hsl.l);
    println!("Lab:     L={:.2} a={:.2} b={:.2}", lab.l, lab.a, lab.b);
    println!("Neutral: {}", if color.is_neutral() { "yes" } else { "no" });
    println!();

    for set in color.harmonies() {
        let colors: Vec<String> = set.colors.iter().map(ToString::to_string).collect();
        println!("{:<14} {}", format!("{}:", set.kind), colors.join(" "));
    }

    Ok(())
}

/// Score the seed catalog against a product or an ad-hoc garment
fn run_suggest_command(args: SuggestArgs) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let products = parse_seed_catalog(&loader.read_catalog_string()?)?;
    let scorer = OutfitScorer::new(config.outfit);

    let selected: CatalogItem = match (args.product_id, args.color) {
        (Some(id), _) => {
            let id = ProductId::parse(&id, "product-id")?;
            let product = products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("Product {id} not found in catalog"))?;
            println!("Selected: {} ({}, {})", product.name, product.category, product.color);
            CatalogItem::new(
                product.id.as_str(),
                product.color.as_str(),
                product.category,
                product.season,
                product.occasion,
            )
        }
        (None, Some(color)) => {
            // clap enforces the companions of --color
            let (Some(category), Some(season), Some(occasion)) =
                (args.category, args.season, args.occasion)
            else {
                anyhow::bail!("--color requires --category, --season and --occasion");
            };
            println!("Selected: {color} {category} ({season}, {occasion})");
            CatalogItem::new("cli", color, category, season, occasion)
        }
        (None, None) => anyhow::bail!("Pass --product-id or --color"),
    };

    let report = scorer.suggest(&selected, products.iter())?;

    println!(
        "\n{} of {} suggestions:\n",
        report.suggestions.len(),
        report.total_found
    );
    for suggestion in &report.suggestions {
        let product: &Product = suggestion.item;
        let reasons: Vec<&str> = suggestion.match_reasons.iter().map(|r| r.label()).collect();
        println!(
            "  {:>3}  {:<32} {:<7} {}  [{}]",
            suggestion.match_score,
            product.name,
            product.category.as_str(),
            product.color,
            reasons.join(", ")
        );
    }
    if report.suggestions.is_empty() {
        println!("  (none)");
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    catalog: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Config:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        println!("\nCatalog:");
        for f in AssetLoader::list_embedded(AssetCategory::Catalog) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || catalog {
        categories.push(AssetCategory::Catalog);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --config or --catalog");
        eprintln!("\nRun 'chroma-wardrobe init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env = |name: &str| std::env::var(name).ok();
    let token_state = match env("PINTEREST_ACCESS_TOKEN") {
        Some(t) if !t.trim().is_empty() => "(set)",
        _ => "(not set)",
    };

    println!("ChromaWardrobe v{VERSION}");
    println!("Clothing catalog API with color-harmony outfit suggestions\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR              = {}",
        env("BIND_ADDR").as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    for name in ["CONFIG_FILE", "CATALOG_FILE", "CORS_ORIGIN"] {
        println!(
            "  {name:<22} = {}",
            env(name).as_deref().unwrap_or("(not set)")
        );
    }
    println!("  PINTEREST_ACCESS_TOKEN = {token_state}");

    let loader = AssetLoader::from_env();
    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.describe_source(AssetCategory::Config));
    let catalog_count = loader
        .read_catalog_string()
        .ok()
        .and_then(|yaml| parse_seed_catalog(&yaml).ok())
        .map_or(0, |products| products.len());
    println!(
        "  Catalog: {} ({catalog_count} products)",
        loader.describe_source(AssetCategory::Catalog)
    );

    println!("\nCommands:");
    println!("  chroma-wardrobe serve      Start the HTTP server");
    println!("  chroma-wardrobe harmony    Show harmony sets for a color");
    println!("  chroma-wardrobe suggest    Rank catalog items for a garment");
    println!("  chroma-wardrobe init       Extract embedded assets");
    println!("\nRun 'chroma-wardrobe --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_wardrobe=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = %asset_loader.describe_source(AssetCategory::Config),
        catalog = %asset_loader.describe_source(AssetCategory::Catalog),
        "Asset sources configured"
    );

    // Seed if configured paths are missing
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                config = report.config_seeded,
                catalog = report.catalog_seeded,
                "Seeded missing files with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader)?;

    // OpenAPI documentation (production only)
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ChromaWardrobe server listening");

    // Peer addresses feed the rate limiter's client key
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
