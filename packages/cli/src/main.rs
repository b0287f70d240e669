//! `pumlld`: puml-ld command-line interface.
//!
//! Provides four subcommands for working with PlantUML documents:
//!
//! - **`detect`**: print the detected diagram type.
//! - **`parse`**: print the extracted diagram model as JSON.
//! - **`inspect`**: print a human-readable summary of the model.
//! - **`convert`**: print the JSON-LD graph document.
//!
//! All subcommands read PlantUML from a file path or from stdin (`-`).
//! Exit status is 0 on success, 1 when the document cannot be parsed or
//! converted, and 2 on usage or I/O errors.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use puml_ld::{detect_diagram_type, render_model, Context};

/// pumlld: PlantUML to JSON-LD
///
/// Detect, inspect, and convert PlantUML diagrams.
#[derive(Parser)]
#[command(name = "pumlld", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the diagram type of a PlantUML document.
    ///
    /// Pass `-` as FILE to read from stdin.
    Detect {
        /// Path to a PlantUML file, or `-` for stdin.
        file: PathBuf,
    },

    /// Extract the diagram model and print it as JSON.
    ///
    /// Pass `-` as FILE to read from stdin.
    Parse {
        /// Path to a PlantUML file, or `-` for stdin.
        file: PathBuf,
    },

    /// Print a human-readable summary of the diagram model.
    ///
    /// Pass `-` as FILE to read from stdin.
    Inspect {
        /// Path to a PlantUML file, or `-` for stdin.
        file: PathBuf,
    },

    /// Convert a PlantUML document to a JSON-LD graph document.
    ///
    /// Examples:
    ///   pumlld convert model.puml --context https://example.org/uml.jsonld \
    ///     --id https://example.org/diagrams/model
    ///   cat model.puml | pumlld convert - --context '{"@vocab":"https://example.org/uml#"}' \
    ///     --id urn:diagram:model
    Convert {
        /// Path to a PlantUML file, or `-` for stdin.
        file: PathBuf,

        /// JSON-LD context: an http(s):// IRI or inline JSON.
        #[arg(short = 'c', long, env = "PUML_LD_CONTEXT", value_name = "IRI_OR_JSON")]
        context: String,

        /// Base IRI for minted node identifiers.
        #[arg(short = 'i', long, env = "PUML_LD_ID", value_name = "IRI")]
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Detect { file } => {
            let source = read_input(&file);
            match detect_diagram_type(&source) {
                Ok(diagram_type) => println!("{}", diagram_type),
                Err(e) => fail(&e.to_string()),
            }
        }

        Command::Parse { file } => {
            let source = read_input(&file);
            let model = puml_ld::parse(&source).unwrap_or_else(|e| fail(&e.to_string()));
            let json = serde_json::to_string_pretty(&model)
                .unwrap_or_else(|e| fatal(&format!("failed to serialise model: {}", e)));
            println!("{}", json);
        }

        Command::Inspect { file } => {
            let source = read_input(&file);
            let model = puml_ld::parse(&source).unwrap_or_else(|e| fail(&e.to_string()));
            print!("{}", render_model(&model));
        }

        Command::Convert { file, context, id } => {
            let source = read_input(&file);
            let context = Context::from_header(&context)
                .unwrap_or_else(|e| fatal(&format!("invalid --context: {}", e)));
            let document = puml_ld::convert(&source, context, &id)
                .unwrap_or_else(|e| fail(&e.to_string()));
            println!("{}", document);
        }
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            fatal(&format!("failed to read {}: {}", path.display(), e))
        })
    }
}

/// The document was read but could not be parsed or converted: exit 1.
fn fail(msg: &str) -> ! {
    eprintln!("pumlld: {}", msg);
    process::exit(1);
}

/// Usage or I/O problem: exit 2.
fn fatal(msg: &str) -> ! {
    eprintln!("pumlld: {}", msg);
    process::exit(2);
}
