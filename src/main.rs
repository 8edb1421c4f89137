use astra::Server;
use car_search::config::AppConfig;
use car_search::responses::error_to_response;
use car_search::router::handle;
use car_search::search::SearchService;
use car_search::store::SupabaseStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration (missing store settings are fine, bad values are not)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };

    // 2️⃣ Listing store + search service
    let store = match SupabaseStore::new(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "listing store client could not be built");
            std::process::exit(1);
        }
    };

    let search = SearchService::new(Box::new(store));
    if search.store_configured() {
        tracing::info!(table = %config.store.table, "listing store configured");
    } else {
        tracing::warn!("listing store not configured, searches will use sample listings");
    }

    // 3️⃣ Serve
    tracing::info!(addr = %config.bind_addr, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &search) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
