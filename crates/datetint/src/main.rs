//! datetint - demo harness for the date-picker styling engine
//!
//! Renders the built-in stories to CSS-like text on stdout so the compiled
//! sheets can be inspected, diffed, and spot-checked without a UI host.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use datetint_core::logging;
use datetint_core::picker::{DatePicker, RenderEnv};
use datetint_core::size::BreakpointContext;
use datetint_core::theme::PaletteOverrides;

use datetint::stories::{self, Story};

/// datetint - demo harness for the date-picker styling engine
#[derive(Parser, Debug)]
#[command(name = "datetint", version, about, long_about = None)]
struct Args {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available stories
    List,
    /// Render one story (or all of them) to stdout
    Render {
        /// Story name (see `list`)
        story: Option<String>,

        /// Render every story
        #[arg(long)]
        all: bool,

        /// Apply palette overrides from a TOML file
        #[arg(long)]
        theme_file: Option<PathBuf>,
    },
    /// Validate a palette-override file and exit (non-zero on errors)
    CheckTheme {
        /// Path to the TOML override file
        theme_file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    match args.command {
        Command::List => {
            for story in stories::all() {
                println!("{:<12} {}", story.name, story.description);
            }
            ExitCode::SUCCESS
        }
        Command::Render {
            story,
            all,
            theme_file,
        } => handle_render(story.as_deref(), all, theme_file.as_deref()),
        Command::CheckTheme { theme_file } => match PaletteOverrides::load(&theme_file) {
            Ok(_) => {
                println!("Theme file valid: {}", theme_file.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn handle_render(story: Option<&str>, all: bool, theme_file: Option<&Path>) -> ExitCode {
    let selected: Vec<Story> = if all {
        stories::all()
    } else {
        let Some(name) = story else {
            eprintln!("Error: pass a story name or --all (see `datetint list`)");
            return ExitCode::FAILURE;
        };
        match stories::find(name) {
            Some(found) => vec![found],
            None => {
                eprintln!("Error: unknown story '{}'", name);
                return ExitCode::FAILURE;
            }
        }
    };

    let overrides = match theme_file {
        Some(path) => match PaletteOverrides::load(path) {
            Ok(overrides) => {
                info!("Loaded palette overrides from {:?}", path);
                Some(overrides)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    for story in &selected {
        let mut config = story.config();
        if let Some(overrides) = &overrides {
            // File overrides replace any extender the story carries.
            config.extend_theme = Some(overrides.clone().into_extender());
        }

        let mut picker = DatePicker::new(config);

        // Mirror a host's first paint: one deferred pass without viewport
        // knowledge, then the real one.
        let ssr = RenderEnv::new(story.color_mode, BreakpointContext::unset());
        if picker.render(&ssr).is_none() {
            debug!("story {}: first pass deferred", story.name);
        }

        let env = RenderEnv::new(
            story.color_mode,
            BreakpointContext::with_viewport(story.viewport),
        );
        let Some(rendered) = picker.render(&env) else {
            eprintln!("Error: story '{}' failed to resolve a size", story.name);
            return ExitCode::FAILURE;
        };

        println!(
            "/* {} ({:?}, {}px, size {}) */",
            story.name,
            story.color_mode,
            story.viewport,
            rendered.size.as_str()
        );
        print!("{}", rendered.style.to_css());
        println!();
    }

    ExitCode::SUCCESS
}
