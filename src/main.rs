use clap::{CommandFactory, Parser};
use pudding::application::{self, Invocation, Operation, RunOptions};
use pudding::cli::{self, Cli};
use pudding::error::PuddingError;
use pudding::infrastructure::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if cli::wants_usage(&raw) {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PUDDING_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), PuddingError> {
    let settings = Settings::discover(&std::env::current_dir()?)?;
    let invocation = Invocation::resolve(cli.into_request(), &settings)?;

    for warning in &invocation.warnings {
        println!("Warning: {}", warning);
    }

    let options = invocation.options;
    println!("{}", cli::format_configuration(&options));

    if options.safe {
        println!(
            "Copying {} to {}",
            options.target.path.display(),
            options.target.backup_path().display()
        );
        options.target.backup()?;
    }

    execute(&options)?;

    println!("Done.");
    Ok(())
}

fn execute(options: &RunOptions) -> Result<(), PuddingError> {
    match options.operation {
        Operation::Patch => {
            println!("Patching...");
            let mut rng = StdRng::from_entropy();
            let report =
                application::patch(&options.patch, &options.target, &options.separator, &mut rng)?;
            println!("{}", cli::format_patch_report(&report));
        }
        Operation::Unpatch => {
            println!("Unpatching...");
            let report = application::unpatch(&options.patch, &options.target, &options.separator)?;
            println!("{}", cli::format_unpatch_report(&report));
        }
        Operation::UnpatchAll => {
            println!("Unpatching...");
            let removed = application::unpatch_all(&options.target, &options.separator)?;
            println!("{}", cli::format_unpatch_all_report(removed));
        }
    }

    Ok(())
}
