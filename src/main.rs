use clap::{Parser, Subcommand};
use firemu::{start_emulator, stop_emulator, Settings};
use std::process;

#[derive(Parser)]
#[command(name = "firemu")]
#[command(about = "Start, track, and stop a local Firestore emulator for test runs")]
#[command(
    long_about = "Start, track, and stop a local Firestore emulator for test runs.\n\n\
        Without a subcommand, any previously started emulator is stopped, a fresh \
        instance is started in the background, and a shell export statement for \
        FIRESTORE_EMULATOR_HOST is printed to stdout for use with `source <(firemu)`."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stop the running emulator without starting a new one
    Stop,
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error resolving settings: {}", e);
            process::exit(1);
        }
    };

    // Both modes tear down any previous instance first
    if let Err(e) = stop_emulator(&settings) {
        eprintln!("Error stopping emulator: {}", e);
        process::exit(1);
    }

    match &cli.command {
        Some(Commands::Stop) => {}
        None => match start_emulator(&settings) {
            Ok(_) => {
                eprintln!("Run the following in any terminal before testing:\n");
                eprintln!("\t{}\n", settings.export_line());
                println!("{}", settings.export_line());
            }
            Err(e) => {
                eprintln!("Error starting emulator: {}", e);
                process::exit(1);
            }
        },
    }
}
