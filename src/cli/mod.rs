use crate::{
    config::PlannerConfig,
    core::{LocationOutcome, Planner, PlannerSession},
    error::PlannerError,
    render::{render_header, render_tab, ItineraryTab},
    services::loading_tip,
    share::strip_fragment,
    types::{TravelStyle, DEFAULT_DAYS},
};
use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::{path::PathBuf, time::Duration, time::Instant};
use tracing::{error, info};
use url::Url;

const DEFAULT_SHARE_BASE: &str = "https://evasion.app/";

fn command() -> Command {
    let tab = Arg::new("tab")
        .long("tab")
        .value_name("TAB")
        .help("Tab to print: itinerary, hotels, sites, practical, essentials")
        .default_value("itinerary");
    let pdf = Arg::new("pdf")
        .long("pdf")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write the PDF guide into this directory");

    Command::new("evasion")
        .version("0.1.0")
        .about("Plan a trip with an LLM, share it as a link, print it as a PDF")
        .subcommand_required(true)
        .subcommand(
            Command::new("generate")
                .about("Generate a new itinerary")
                .arg(
                    Arg::new("destination")
                        .help("Where to go")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("DAYS")
                        .value_parser(value_parser!(u32))
                        .help("Trip length, 1 to 21 days")
                        .default_value("3"),
                )
                .arg(
                    Arg::new("style")
                        .short('s')
                        .long("style")
                        .value_name("STYLE")
                        .help("Aventure, Détente, Culturel, Budget, Luxe or Famille")
                        .default_value(TravelStyle::default().as_str()),
                )
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Model name (or set EVASION_MODEL)"),
                )
                .arg(
                    Arg::new("api-key")
                        .short('k')
                        .long("api-key")
                        .value_name("KEY")
                        .help("API key (or set API_KEY / OPENAI_API_KEY)"),
                )
                .arg(
                    Arg::new("base-url")
                        .short('u')
                        .long("base-url")
                        .value_name("URL")
                        .help("OpenAI-compatible base URL (or set EVASION_BASE_URL)"),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECONDS")
                        .value_parser(value_parser!(u64))
                        .help("Request timeout in seconds (default: none)"),
                )
                .arg(
                    Arg::new("share-base")
                        .long("share-base")
                        .value_name("URL")
                        .help("Page address used to build the share link")
                        .default_value(DEFAULT_SHARE_BASE),
                )
                .arg(tab.clone())
                .arg(pdf.clone()),
        )
        .subcommand(
            Command::new("open")
                .about("Open a shared itinerary link")
                .arg(
                    Arg::new("link")
                        .help("Link containing #share=<token>")
                        .required(true)
                        .index(1),
                )
                .arg(tab)
                .arg(pdf),
        )
}

/// CLI entry point for the evasion tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();
    match matches.subcommand() {
        Some(("generate", sub)) => generate(sub).await,
        Some(("open", sub)) => open(sub),
        _ => Err(anyhow!("unknown command")),
    }
}

async fn generate(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut config = PlannerConfig::from_env();
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        config.api_key = api_key.clone();
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        config.timeout = Some(Duration::from_secs(*seconds));
    }

    let tab = parse_tab(matches)?;
    let share_base = matches
        .get_one::<String>("share-base")
        .map(String::as_str)
        .unwrap_or(DEFAULT_SHARE_BASE);
    let share_base = Url::parse(share_base).context("invalid --share-base URL")?;

    let mut session = PlannerSession::new(share_base);
    {
        let form = session.form_mut();
        form.destination = matches
            .get_one::<String>("destination")
            .cloned()
            .unwrap_or_default();
        form.days = matches.get_one::<u32>("days").copied().unwrap_or(DEFAULT_DAYS);
        if let Some(style) = matches.get_one::<String>("style") {
            form.style = style.parse().map_err(user_facing)?;
        }
    }

    info!("Using model: {}", config.model);
    let planner = Planner::new(config).map_err(user_facing)?;

    let ticker = tokio::spawn(async {
        let mut interval = tokio::time::interval(Duration::from_secs(2));
        for tick in 0usize.. {
            interval.tick().await;
            eprintln!("{}", loading_tip(tick));
        }
    });
    let outcome = session.submit(&planner).await.map(|_| ());
    ticker.abort();
    outcome.map_err(user_facing)?;

    print_session(&session, tab);

    if let Some(link) = session.share_url() {
        println!("\nLien de partage : {}", link.map_err(user_facing)?);
    }
    export_if_requested(&session, matches)?;
    Ok(())
}

fn open(matches: &ArgMatches) -> anyhow::Result<()> {
    let tab = parse_tab(matches)?;
    let link = matches
        .get_one::<String>("link")
        .ok_or_else(|| anyhow!("missing link"))?;
    let location = Url::parse(link).context("invalid link")?;

    let mut session = PlannerSession::new(strip_fragment(&location));
    match session.load_location(location) {
        LocationOutcome::Loaded => {}
        LocationOutcome::NoSharedState => {
            return Err(anyhow!("Ce lien ne contient aucun itinéraire partagé."));
        }
        LocationOutcome::Rejected => {
            let message = session.error().unwrap_or_default().to_string();
            error!("{}", message);
            return Err(anyhow!(message));
        }
    }

    for toast in session.active_toasts(Instant::now()) {
        eprintln!("✔ {}", toast.message);
    }
    print_session(&session, tab);
    println!("\nAdresse : {}", session.location());

    export_if_requested(&session, matches)
}

fn parse_tab(matches: &ArgMatches) -> anyhow::Result<ItineraryTab> {
    match matches.get_one::<String>("tab") {
        Some(tab) => tab.parse().map_err(user_facing),
        None => Ok(ItineraryTab::default()),
    }
}

fn print_session(session: &PlannerSession, tab: ItineraryTab) {
    let Some(itinerary) = session.itinerary() else {
        return;
    };
    println!("{}", render_header(itinerary, &session.form().to_request()));
    println!("{}", render_tab(itinerary, tab));
}

fn export_if_requested(session: &PlannerSession, matches: &ArgMatches) -> anyhow::Result<()> {
    let Some(dir) = matches.get_one::<PathBuf>("pdf") else {
        return Ok(());
    };
    if let Some(artifact) = session.export() {
        let artifact = artifact.map_err(user_facing)?;
        let path = artifact.write_to(dir).map_err(user_facing)?;
        println!("PDF : {} ({} pages)", path.display(), artifact.page_count);
    }
    Ok(())
}

fn user_facing(err: PlannerError) -> anyhow::Error {
    error!("{}", err);
    match err {
        PlannerError::Export(_) | PlannerError::Io(_) => anyhow!(err),
        _ => anyhow!(err.user_message()),
    }
}
