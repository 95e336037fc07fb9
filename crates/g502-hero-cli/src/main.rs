//! G502 Hero Control Tool
//!
//! CLI for controlling the lighting on a Logitech G502 Hero mouse.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use g502_hero_hw::{Channel, Driver, G502Hero, Mode, Rgb, StatusEntry};
use hidapi::HidApi;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "g502ctl")]
#[command(about = "Control tool for the Logitech G502 Hero")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List G502 Hero devices on the bus
    List,
    /// Initialize the device after power-on or resume
    Initialize,
    /// Show a status report
    Status,
    /// Set the color of a lighting zone
    Color {
        /// Zone: dpi, logo
        channel: String,

        /// Mode: off, fixed, breathing, rainbow
        mode: String,

        /// Colors in RRGGBB hex (fixed and breathing take exactly one)
        colors: Vec<String>,
    },
    /// Set a cooling channel to a fixed duty
    Speed {
        /// Channel name
        channel: String,

        /// Duty cycle in percent
        duty: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api = HidApi::new().context("Failed to initialize the HID backend")?;

    match cli.command {
        Commands::List => handle_list(&api),
        command => {
            let mouse = G502Hero::find(&api)
                .and_then(|mouse| mouse.connect(&api))
                .context("Failed to open G502 Hero. Is the mouse plugged in?")?;
            handle_command(command, mouse)
        }
    }
}

fn handle_list(api: &HidApi) -> Result<()> {
    let devices = G502Hero::find_all(api);
    if devices.is_empty() {
        println!("No G502 Hero devices found");
        return Ok(());
    }

    for (i, device) in devices.iter().enumerate() {
        println!("Device {}: {}", i, device.description());
        println!("  Address: {}", device.address());
    }

    Ok(())
}

fn handle_command(command: Commands, mut mouse: impl Driver) -> Result<()> {
    match command {
        // Handled in main before a device is opened
        Commands::List => {}
        Commands::Initialize => {
            let entries = mouse.initialize(None)?;
            print_entries(&entries);
            println!("Device initialized");
        }
        Commands::Status => {
            let entries = mouse.status()?;
            if entries.is_empty() {
                println!("No status readings available");
            } else {
                print_entries(&entries);
            }
        }
        Commands::Color {
            channel,
            mode,
            colors,
        } => {
            let channel: Channel = channel.parse()?;
            let mode: Mode = mode.parse()?;
            let colors = colors
                .iter()
                .map(|color| color.parse())
                .collect::<g502_hero_hw::Result<Vec<Rgb>>>()?;

            mouse.set_color(channel, mode, &colors, &[])?;
            println!("{} set to {}", channel, mode);
        }
        Commands::Speed { channel, duty } => {
            mouse.set_fixed_speed(&channel, duty)?;
            println!("{} set to {}%", channel, duty);
        }
    }

    Ok(())
}

fn print_entries(entries: &[StatusEntry]) {
    for entry in entries {
        println!("  {}: {} {}", entry.property, entry.value, entry.unit);
    }
}
