mod config;
mod logging;
mod session;

use std::process::ExitCode;

use config::AppConfig;
use paleo_snap_adapters::{
    map_embed_url, present_capture, present_position, present_recent_row, present_site_row,
    present_spot_row, BuiltinReferenceContent, EnvLocationProvider, FolderCamera,
    HtmlRenderTarget, SqlitePhotoStore, SystemClock, TITLE_PROMPT,
};
use paleo_snap_application::{
    ApplicationError, ApplicationService, CapturePhotoCommand, InitializeStoreCommand, MapEmbed,
    PreviewLocationCommand, ReferenceCardsQuery, ReferenceContent, ReloadGalleryCommand,
    SelectPhotoSpotCommand, MAP_ZOOM,
};
use paleo_snap_domain::DomainError;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    let mut service = build_application_service(&config);
    if let Err(error) = service.initialize_store(InitializeStoreCommand) {
        eprintln!("failed to initialize the photo store: {error}");
        return ExitCode::from(1);
    }

    let command = parse_command(&args);
    match run_command(command, &mut service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    let content = BuiltinReferenceContent;
    let target = HtmlRenderTarget::new(
        config.page_path.clone(),
        content.fossil_sites(),
        content.photo_spots(),
    );
    ApplicationService::new(
        Box::new(SqlitePhotoStore::new(config.db_path.clone())),
        Box::new(FolderCamera::new(config.frames_root.clone())),
        Box::new(EnvLocationProvider::new(None)),
        Box::new(SystemClock),
        Box::new(content),
        Box::new(target),
    )
}

#[derive(Debug, Clone)]
enum Command {
    Session,
    Capture { title: String },
    Gallery,
    Sites,
    Spots,
    Spot { index: usize },
    Locate,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Session);
    }

    match args[1].as_str() {
        "session" => Ok(Command::Session),
        "capture" => Ok(Command::Capture {
            title: args[2..].join(" "),
        }),
        "gallery" => Ok(Command::Gallery),
        "sites" => Ok(Command::Sites),
        "spots" => Ok(Command::Spots),
        "spot" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing spot index".to_string()));
            }
            let index = args[2]
                .parse::<usize>()
                .map_err(|_| CommandError::Usage(format!("invalid spot index: {}", args[2])))?;
            Ok(Command::Spot { index })
        }
        "locate" => Ok(Command::Locate),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &mut ApplicationService,
) -> Result<(), CommandError> {
    match command? {
        Command::Session => session::run(service).map_err(CommandError::Runtime),
        Command::Capture { title } => {
            let _ = service.start_stream();
            let _ = service.reload_gallery(ReloadGalleryCommand);
            match service.capture_photo(CapturePhotoCommand { title }) {
                Ok(report) => {
                    println!("{}", present_capture(&report));
                    Ok(())
                }
                Err(ApplicationError::Domain(DomainError::EmptyTitle)) => {
                    println!("{TITLE_PROMPT}");
                    Ok(())
                }
                Err(error) => Err(CommandError::Runtime(format!("capture failed: {error}"))),
            }
        }
        Command::Gallery => {
            let count = service
                .reload_gallery(ReloadGalleryCommand)
                .map_err(|error| CommandError::Runtime(format!("reload failed: {error}")))?;
            if count == 0 {
                println!("no photos in the gallery");
                return Ok(());
            }
            for (index, record) in service.recent_records().iter().enumerate() {
                println!("{}", present_recent_row(index, record));
            }
            Ok(())
        }
        Command::Sites => {
            let (sites, _spots) = service.reference_cards(ReferenceCardsQuery);
            for site in sites {
                println!("{}", present_site_row(&site));
            }
            Ok(())
        }
        Command::Spots => {
            let (_sites, spots) = service.reference_cards(ReferenceCardsQuery);
            for (index, spot) in spots.iter().enumerate() {
                println!("{}", present_spot_row(index, spot));
            }
            Ok(())
        }
        Command::Spot { index } => {
            let spot = service
                .select_photo_spot(SelectPhotoSpotCommand { index })
                .map_err(|error| CommandError::Runtime(error.to_string()))?;
            println!("{}", spot.title);
            println!("{}", present_position(&spot.location));
            println!(
                "{}",
                map_embed_url(&MapEmbed {
                    latitude: spot.location.latitude,
                    longitude: spot.location.longitude,
                    zoom: MAP_ZOOM,
                })
            );
            Ok(())
        }
        Command::Locate => {
            let position = service
                .preview_location(PreviewLocationCommand)
                .map_err(|error| CommandError::Runtime(error.to_string()))?;
            println!("{}", present_position(&position));
            println!(
                "{}",
                map_embed_url(&MapEmbed {
                    latitude: position.latitude,
                    longitude: position.longitude,
                    zoom: MAP_ZOOM,
                })
            );
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  paleo-snap session");
    println!("  paleo-snap capture <title>");
    println!("  paleo-snap gallery");
    println!("  paleo-snap sites");
    println!("  paleo-snap spots");
    println!("  paleo-snap spot <index>");
    println!("  paleo-snap locate");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_opens_a_session() {
        let args = vec!["paleo-snap".to_string()];
        let command = parse_command(&args).expect("session should parse");
        assert!(matches!(command, Command::Session));
    }

    #[test]
    fn parse_capture_joins_the_title_words() {
        let args = vec![
            "paleo-snap".to_string(),
            "capture".to_string(),
            "T-Rex".to_string(),
            "jaw".to_string(),
        ];
        let command = parse_command(&args).expect("capture should parse");
        match command {
            Command::Capture { title } => assert_eq!(title, "T-Rex jaw"),
            other => panic!("expected capture, got {other:?}"),
        }
    }

    #[test]
    fn parse_capture_without_a_title_keeps_it_empty() {
        let args = vec!["paleo-snap".to_string(), "capture".to_string()];
        let command = parse_command(&args).expect("capture should parse");
        assert!(matches!(command, Command::Capture { title } if title.is_empty()));
    }

    #[test]
    fn parse_spot_rejects_an_invalid_index() {
        let args = vec![
            "paleo-snap".to_string(),
            "spot".to_string(),
            "abc".to_string(),
        ];
        let command = parse_command(&args);
        assert!(matches!(command, Err(CommandError::Usage(_))));
    }
}
