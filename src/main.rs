use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foliogen::{
    AppContext, AppError, FolioConfig, GenerationParameters, HttpTextGenerator, PipelineRequest,
    SleepPacer,
};

#[derive(Parser)]
#[command(name = "foliogen")]
#[command(version)]
#[command(
    about = "Generate multi-section portfolio pages through a generative text backend",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP generation endpoint
    Serve {
        /// Address to bind, host:port
        #[arg(long, default_value = "127.0.0.1:8787")]
        addr: String,
    },
    /// Run one pipeline invocation and print or write the composite artifact
    #[clap(visible_alias = "g")]
    Generate {
        /// Name shown on the generated page
        #[arg(long)]
        name: Option<String>,
        /// Professional title
        #[arg(long)]
        title: Option<String>,
        /// Short description woven into the prompts
        #[arg(long)]
        description: Option<String>,
        /// Pipeline preset: portfolio or landing
        #[arg(long, default_value = "portfolio")]
        pipeline: String,
        /// Force a refinement pass after assembly
        #[arg(long)]
        refine: bool,
        /// Write the composite artifact to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::default(),
    };
    config.validate()?;

    let generator = HttpTextGenerator::from_env(&config.backend)?;
    let ctx = AppContext::new(generator, SleepPacer, config.backend.model.clone());

    match cli.command {
        Commands::Serve { addr } => foliogen::serve(&addr, &ctx),
        Commands::Generate { name, title, description, pipeline, refine, out } => {
            let mut params = GenerationParameters::default();
            if let Some(name) = name {
                params.user_name = name;
            }
            if let Some(title) = title {
                params.title = title;
            }
            if let Some(description) = description {
                params.description = description;
            }

            let request = PipelineRequest {
                params,
                pipeline: Some(pipeline),
                refine: refine.then_some(true),
            };
            let output = foliogen::execute(&ctx, request)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, &output.complete_code)?;
                    println!("Wrote composite artifact to {}", path.display());
                }
                None => println!("{}", output.complete_code),
            }
            Ok(())
        }
    }
}
