use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use gt::areas::repository::Repository;
use gt::artifacts::config::Config;
use gt::errors::{EXIT_FAILURE, GtError, exit_code};
use log::info;
use std::process::ExitCode;

const BUILD_HINT: &str = "build gt before ($make)";

#[derive(Parser)]
#[command(
    name = "gt",
    version = "0.1.0",
    about = "A minimal version-control front end",
    long_about = "Stages files and seals the staged state into parent-linked commits. \
    Objects are built by the update-index, write-tree and commit-tree executables; \
    gt sequences them and keeps HEAD pointing at the latest commit.",
    disable_help_subcommand = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        default_value = "warn",
        help = "Log filter (env_logger syntax, RUST_LOG also works)"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command records the given files in the staging index. \
        At least one file is required."
    )]
    Add {
        #[arg(
            value_name = "FILE",
            help = "Files to stage",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        files: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Commit the staged files",
        long_about = "This command builds a tree from the staging index, commits it on top of HEAD \
        and advances HEAD. Without --message the commit message is read from stdin."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn usage() -> String {
    [
        "usage: gt <command> [<args>]",
        "",
        "Commands list:",
        "    add       Stage files for the next commit",
        "    commit    Commit the staged files",
    ]
    .join("\n")
}

fn exit_with(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<GtError>() {
        Some(GtError::Usage { message }) => println!("{message}"),
        Some(GtError::Preflight { .. }) => {
            println!("{BUILD_HINT}");
            eprintln!("{} {:#}", "error:".red().bold(), error);
        }
        // the primitive already explained itself on stderr
        Some(GtError::PrimitiveFailure { .. }) => info!("{:#}", error),
        _ => eprintln!("{} {:#}", "error:".red().bold(), error),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // stdout or stderr is gone; nothing else can be reported
            if error.print().is_err() {
                return exit_with(EXIT_FAILURE);
            }
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    println!("{}", usage());
                    exit_with(EXIT_FAILURE)
                }
            };
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let Some(command) = cli.command else {
        println!("{}", usage());
        return exit_with(EXIT_FAILURE);
    };

    let config = Config::from_env();
    let repository = Repository::open(&config, Box::new(std::io::stdout()));

    if let Err(error) = repository.primitives().preflight() {
        report(&error);
        return exit_with(exit_code(&error));
    }

    let outcome = match command {
        Commands::Add { files } => repository.add(&files).await,
        Commands::Commit { message } => repository.commit(message.as_deref()).await,
        Commands::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            Err(GtError::usage(format!("Unknown command '{name}'\n{}", usage())).into())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            exit_with(exit_code(&error))
        }
    }
}
