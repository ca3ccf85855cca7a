use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use pwd_forge::{analyze_password, generate_password, GeneratorOptions, PasswordReport};

#[derive(Parser)]
#[command(name = "pwd-forge", version, about = "Generate passwords and analyze their strength")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a password and report its strength
    Generate {
        /// Password length (values below 4 are raised to 4)
        #[arg(short, long, default_value_t = 12)]
        length: usize,
        /// Keep visually ambiguous characters (ilLI|1oO0) in the pools
        #[arg(long)]
        allow_lookalikes: bool,
    },
    /// Analyze a password read from a hidden prompt
    Check,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read password: {0}")]
    Prompt(#[from] std::io::Error),
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            length,
            allow_lookalikes,
        } => {
            let options = GeneratorOptions {
                exclude_lookalikes: !allow_lookalikes,
            };
            let password = generate_password(length, &options);
            let report = analyze_password(&password);

            println!("Generated password: {}", password.expose_secret());
            print_report(&report);
        }
        Command::Check => {
            let input = rpassword::prompt_password("Password to analyze: ")?;
            let report = analyze_password(&SecretString::from(input));
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &PasswordReport) {
    println!("Length: {}", report.length);
    println!("Lowercase: {}", yes_no(report.has_lowercase));
    println!("Uppercase: {}", yes_no(report.has_uppercase));
    println!("Digits: {}", yes_no(report.has_digit));
    println!("Symbols: {}", yes_no(report.has_symbol));
    println!("Estimated entropy: {:.2} bits", report.entropy_bits);
    println!("Strength: {}", report.tier);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
