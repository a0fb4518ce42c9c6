use clap::Parser;
use ftag::application::{init, ApplyTagsService, ListTagsService, QueryFilesService};
use ftag::cli::{format_lines, Cli, Commands};
use ftag::error::FtagError;
use ftag::infrastructure::TagRepository;

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for piping.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), FtagError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Tags { file } => {
            let repo = TagRepository::discover()?;
            let service = ListTagsService::new(repo.open_store()?);
            let tags = service.execute(&file)?;
            print!("{}", format_lines(&tags));
            Ok(())
        }
        Commands::Get { tags } => {
            let repo = TagRepository::discover()?;
            let service = QueryFilesService::new(repo.open_store()?);
            let keys = service.execute(&tags)?;
            print!("{}", format_lines(&keys));
            Ok(())
        }
        Commands::Set { file, tags } => {
            let repo = TagRepository::discover()?;
            let mut service = ApplyTagsService::new(repo.open_store()?);
            service.execute(&file, &tags)?;
            Ok(())
        }
    }
}
