use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures::future::join_all;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use tokio::runtime::Handle;

use travelbook::api::{Category, TravelItem};
use travelbook::app::AppContainer;
use travelbook::core::config;
use travelbook::core::resource::Resource;
use travelbook::data::{NewTrip, Trip};
use travelbook::presentation::Observable;

#[derive(Parser)]
#[command(name = "travelbook", about = "Browse travel listings, bookmarks and planned trips")]
struct Args {
    /// Config file to use instead of ~/.travelbook/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Travel API base URL (overrides config and TRAVELBOOK_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List everything, or a single category
    List {
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },
    /// List bookmarked items
    Bookmarks,
    /// Bookmark an item, or clear its bookmark with --remove
    Bookmark {
        id: String,
        #[arg(long)]
        remove: bool,
    },
    /// List planned trips
    Trips,
    /// Plan a new trip
    TripAdd {
        #[arg(long)]
        title: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a planned trip
    TripDelete { id: String },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to travelbook.log in current directory.
    // The logger passes everything; the level from config is applied through
    // the global max level once config is resolved, so config loading is logged.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("travelbook.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(LevelFilter::Debug);

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::error!("Config error: {}", e);
        eprintln!("travelbook: {}", e);
        io::Error::other(e.to_string())
    })?;
    let resolved = config::resolve(&file_config, args.api_url.as_deref());
    log::set_max_level(resolved.log_filter());

    log::info!("Travelbook starting up against {}", resolved.api_base_url);

    let app = AppContainer::new(&resolved).map_err(|e| {
        eprintln!("travelbook: {}", e);
        io::Error::other(e.to_string())
    })?;

    run(&app, args.command).await;
    Ok(())
}

async fn run(app: &AppContainer, command: Command) {
    let runtime = Handle::current();
    match command {
        Command::List { category: None } => {
            let vm = app.home_view_model(runtime);
            let sections = [
                ("All", vm.all_list()),
                ("Flights", vm.flight_list()),
                ("Hotels", vm.hotel_list()),
                ("Transportation", vm.transportation_list()),
            ];
            let results = join_all(sections.iter().map(|(_, stream)| settle(stream))).await;
            for ((label, _), result) in sections.iter().zip(results) {
                print_items(label, result);
            }
        }
        Command::List {
            category: Some(category),
        } => {
            let vm = app.category_view_model(category, runtime);
            print_items(category.as_str(), settle(&vm.list()).await);
        }
        Command::Bookmarks => {
            let vm = app.trip_view_model(runtime);
            print_items("Bookmarks", settle(&vm.bookmark_list()).await);
        }
        Command::Bookmark { id, remove } => {
            let vm = app.detail_view_model(runtime);
            vm.update_data(&id, !remove);
            print_update(&vm.update_status(), &id).await;
        }
        Command::Trips => {
            let vm = app.trip_view_model(runtime);
            print_trips(settle(&vm.trip_list()).await);
        }
        Command::TripAdd {
            title,
            city,
            date,
            note,
        } => {
            let vm = app.trip_view_model(runtime);
            vm.add_trip(NewTrip {
                title,
                city,
                date,
                note,
            });
            match settle(&vm.trip_status()).await {
                Some(Resource::Success { data: Some(trip) }) => {
                    println!("Added trip {}", trip.id);
                    print_trip(&trip);
                }
                other => print_status(other),
            }
        }
        Command::TripDelete { id } => {
            let vm = app.trip_view_model(runtime);
            vm.delete_trip(&id);
            print_update(&vm.trip_status(), &id).await;
        }
    }
}

/// Waits for `stream` to settle, or gives up on Ctrl-C.
async fn settle<T: Clone>(stream: &Observable<T>) -> Option<Resource<T>> {
    tokio::select! {
        settled = stream.settled() => settled,
        _ = tokio::signal::ctrl_c() => {
            log::info!("Interrupted while waiting");
            None
        }
    }
}

async fn print_update<T: Clone>(status: &Observable<T>, id: &str) {
    // Nothing is published for an update that was never started
    if status.current().is_none() {
        println!("Nothing to update for id '{}'", id);
        return;
    }
    print_status(settle(status).await);
}

fn print_status<T>(result: Option<Resource<T>>) {
    match result {
        Some(Resource::Success { .. }) => println!("Done"),
        Some(Resource::Error { message, .. }) => eprintln!("Failed: {}", message),
        Some(Resource::Loading { .. }) | None => eprintln!("Interrupted"),
    }
}

fn print_items(label: &str, result: Option<Resource<Vec<TravelItem>>>) {
    println!("== {} ==", label);
    match result {
        Some(Resource::Success { data: Some(items) }) if items.is_empty() => println!("(empty)"),
        Some(Resource::Success { data: Some(items) }) => {
            for item in items {
                let mark = if item.is_bookmark { "*" } else { " " };
                println!("{} {:<10} {} ({}, {})", mark, item.id, item.title, item.city, item.country);
            }
        }
        other => print_status(other),
    }
}

fn print_trips(result: Option<Resource<Vec<Trip>>>) {
    println!("== Trips ==");
    match result {
        Some(Resource::Success { data: Some(trips) }) if trips.is_empty() => println!("(none planned)"),
        Some(Resource::Success { data: Some(trips) }) => trips.iter().for_each(print_trip),
        other => print_status(other),
    }
}

fn print_trip(trip: &Trip) {
    print!("  {}  {} in {} on {}", trip.id, trip.title, trip.city, trip.date);
    match &trip.note {
        Some(note) => println!(" - {}", note),
        None => println!(),
    }
}
