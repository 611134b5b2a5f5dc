//! CIX Drill CLI
//!
//! Usage:
//!   cix-drill [OPTIONS] [CONFIG]
//!
//! Options:
//!   -o, --output <FILE>   Output program path
//!   --stdout              Print the program instead of writing a file
//!   --sample-config       Print a sample TOML configuration
//!   -v, --verbose         Debug logging
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::debug;

use cix_drill::{generate, write_program, DrillConfig, DEFAULT_OUTPUT_FILE, SAMPLE_CONFIG};

#[derive(Parser)]
#[command(name = "cix-drill")]
#[command(about = "Generate CIX drill test programs from diameter/spindle layouts")]
struct Cli {
    /// Configuration file in TOML format (reads from stdin if not provided)
    config: Option<PathBuf>,

    /// Output program path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// X coordinate of the first hole of every row
    #[arg(long, allow_negative_numbers = true)]
    start_x: Option<f64>,

    /// Y coordinate of the first row
    #[arg(long, allow_negative_numbers = true)]
    start_y: Option<f64>,

    /// Distance between holes along X
    #[arg(long, allow_negative_numbers = true)]
    x_spacing: Option<f64>,

    /// Distance between rows along Y
    #[arg(long, allow_negative_numbers = true)]
    y_spacing: Option<f64>,

    /// Drill depth for all holes
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<f64>,

    /// Program name written to the header
    #[arg(long)]
    name: Option<String>,

    /// Units label written to the header
    #[arg(long)]
    units: Option<String>,

    /// Print the program to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print a sample configuration and exit
    #[arg(long)]
    sample_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut DrillConfig) {
        let layout = &mut config.layout;
        let overrides = [
            (&mut layout.start_x, self.start_x),
            (&mut layout.start_y, self.start_y),
            (&mut layout.x_spacing, self.x_spacing),
            (&mut layout.y_spacing, self.y_spacing),
            (&mut layout.depth, self.depth),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(name) = &self.name {
            config.program.name = name.clone();
        }
        if let Some(units) = &self.units {
            config.program.units = units.clone();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let env = if cli.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    if cli.sample_config {
        print!("{}", SAMPLE_CONFIG);
        return;
    }

    // No config file and nothing piped in: nothing to generate
    if cli.config.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let (source, filename) = match &cli.config {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut config = match DrillConfig::from_str(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);
    debug!("Effective configuration: {:?}", config);

    let program = match generate(&config) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.stdout {
        print!("{}", program);
        return;
    }

    match write_program(&cli.output, &program) {
        Ok(()) => println!("CIX drill test generated: {}", cli.output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"CIX Drill - drill test program generator

USAGE:
    cix-drill [OPTIONS] <CONFIG>
    cat drill.toml | cix-drill [OPTIONS]

OPTIONS:
    -o, --output <FILE>   Output path (default: {DEFAULT_OUTPUT_FILE})
    --start-x, --start-y  Position of the first hole
    --x-spacing           Distance between holes in a row
    --y-spacing           Distance between rows
    --depth               Drill depth for every hole
    --name, --units       Program header values
    --stdout              Print the program instead of writing it
    --sample-config       Print a sample configuration
    -v, --verbose         Debug logging
    -h, --help            Print help

QUICK START:
    cix-drill --sample-config > drill.toml
    cix-drill drill.toml

Each [[group]] in the configuration is one row of holes of one diameter,
drilled left to right by the listed spindles."#
    );
}
