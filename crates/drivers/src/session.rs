use std::io::{self, BufRead, Write};

use paleo_snap_adapters::{present_capture, TITLE_PROMPT};
use paleo_snap_application::{
    ApplicationError, ApplicationService, CapturePhotoCommand, ReloadGalleryCommand,
    SwitchDeviceCommand,
};
use paleo_snap_domain::DomainError;

// Interactive field session: every non-command line is a photo title.
pub fn run(service: &mut ApplicationService) -> Result<(), String> {
    let _ = service.start_stream();
    let _ = service.reload_gallery(ReloadGalleryCommand);

    println!("type a title to take a photo");
    println!("commands: switch, gallery, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|error| error.to_string())?;

        let Some(line) = lines.next() else { break };
        let line = line.map_err(|error| error.to_string())?;
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "switch" => match service.switch_device(SwitchDeviceCommand) {
                Ok(facing) => println!("camera facing: {}", facing.as_str()),
                Err(error) => println!("{error}"),
            },
            "gallery" => match service.reload_gallery(ReloadGalleryCommand) {
                Ok(count) => println!("{count} photos in the gallery"),
                Err(error) => println!("{error}"),
            },
            _ => match service.capture_photo(CapturePhotoCommand {
                title: input.to_string(),
            }) {
                Ok(report) => println!("{}", present_capture(&report)),
                Err(ApplicationError::Domain(DomainError::EmptyTitle)) => {
                    println!("{TITLE_PROMPT}");
                }
                Err(error) => println!("{error}"),
            },
        }
    }

    Ok(())
}
