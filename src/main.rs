use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfarer::adapters::api_handler::ApiState;
use wayfarer::adapters::health_handler::HealthHandler;
use wayfarer::adapters::openweather::OpenWeatherClient;
use wayfarer::adapters::serpapi::SerpApiClient;
use wayfarer::adapters::tool_handler::TravelToolHandler;
use wayfarer::adapters::web_search::SerperClient;
use wayfarer::agents::llm::create_provider;
use wayfarer::agents::TravelAgentHandler;
use wayfarer::cli::Cli;
use wayfarer::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // API keys may live in a local .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Wayfarer travel assistant on {}:{}", host, port);

    let llm = create_provider(&settings.llm)?;
    info!(provider = llm.name(), model = llm.model(), "LLM provider ready");

    let search = Arc::new(SerpApiClient::new(&settings.tools.serpapi)?);
    let weather = Arc::new(OpenWeatherClient::new(&settings.tools.weather)?);
    let web = Arc::new(SerperClient::new(&settings.tools.web_search)?);

    let travel = Arc::new(TravelAgentHandler::new(
        llm.clone(),
        search.clone(),
        weather.clone(),
        &settings.agents,
    )?);
    let health_handler = Arc::new(HealthHandler::new(llm.name(), travel.roster()));
    let tools = Arc::new(TravelToolHandler::new(search, weather, web));

    let app = wayfarer::create_app(ApiState { travel, tools }, health_handler);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
