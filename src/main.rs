use carscope::core::filters::PriceBounds;
use carscope::core::predict;
use carscope::domain::ports::ConfigProvider;
use carscope::utils::{logger, validation::Validate};
use carscope::{AppConfig, BrowseSession, CliConfig, Command, HttpBackend};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting carscope CLI");

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let provider: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => Box::new(config),
            Err(e) => {
                tracing::error!("Failed to load config file: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Box::new(cli.clone()),
    };

    let backend = HttpBackend::new(provider.api_endpoint(), provider.timeout())?;

    let outcome = match cli.command {
        Command::Browse {
            make,
            model,
            state,
            min_price,
            max_price,
            page,
        } => {
            run_browse(
                backend,
                provider.as_ref(),
                make,
                model,
                state,
                min_price,
                max_price,
                page,
            )
            .await
        }
        Command::Predict { description } => run_predict(backend, &description).await,
    };

    if let Err(e) = outcome {
        tracing::error!("Command failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_browse(
    backend: HttpBackend,
    provider: &dyn ConfigProvider,
    makes: Vec<String>,
    models: Vec<String>,
    states: Vec<String>,
    min_price: Option<u32>,
    max_price: Option<u32>,
    page: Option<u32>,
) -> carscope::Result<()> {
    let (floor, ceiling) = provider.price_bounds();
    let mut session = BrowseSession::new(
        backend,
        provider.per_page(),
        PriceBounds { floor, ceiling },
    );
    session.load_catalog().await?;

    for make in &makes {
        session.toggle_make(make).await?;
    }
    for model in &models {
        // Model toggles assume the owning make is selected; warn when it is not.
        let owner = session.catalog().owner_of(model).map(str::to_string);
        match owner {
            Some(owner) if session.filters().makes().contains(&owner) => {
                session.toggle_model(model).await?;
            }
            Some(owner) => {
                tracing::warn!("skipping model '{}': make '{}' is not selected", model, owner);
            }
            None => {
                tracing::warn!("skipping model '{}': not in the catalog", model);
            }
        }
    }
    for state in &states {
        session.toggle_state(state).await?;
    }

    let mut priced = false;
    if let (Some(min), Some(max)) = (min_price, max_price) {
        priced = session.set_price_range(min, max).await?;
        if !priced {
            tracing::warn!(
                "price range {}..{} rejected; keeping {:?}",
                min,
                max,
                session.filters().price()
            );
        }
    }

    // Mutations fetch reactively; an unfiltered browse needs one explicit fetch.
    let untouched = makes.is_empty() && models.is_empty() && states.is_empty() && !priced;
    if untouched {
        session.refresh().await?;
    }
    if let Some(n) = page {
        session.go_to_page(n).await?;
    }

    let pagination = session.pagination();
    println!(
        "Page {} of {} ({} cars total)",
        pagination.page(),
        pagination.total_pages(),
        pagination.total()
    );
    for listing in session.listings() {
        let score = listing
            .value
            .map(|v| format!("{} ({})", carscope::classify(v).label(), v))
            .unwrap_or_else(|| "unscored".to_string());
        println!(
            "- {} | {} {} | {} mi | {} | {} | {}",
            listing.title, listing.year, listing.model_title, listing.mileage, listing.price,
            listing.dealer, score
        );
    }
    Ok(())
}

async fn run_predict(backend: HttpBackend, description: &str) -> carscope::Result<()> {
    let outcome = predict::predict_score(&backend, description).await?;
    println!(
        "Score: {:.2} -> {} ({})",
        outcome.score,
        outcome.rating.label(),
        outcome.rating.color()
    );
    Ok(())
}
