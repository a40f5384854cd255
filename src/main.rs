use clap::Parser;
use img2ascii::cli::{self, Args, Command};
use img2ascii::config::Config;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Convert(convert) => {
            let config = match Config::load(args.config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            match cli::run_convert(&convert, &config) {
                Ok(report) => {
                    if convert.print {
                        println!("{}", report.text);
                    }
                    println!("ASCII art saved to {}", convert.output.display());
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Charsets => cli::list_charsets(),
        Command::Config { action } => cli::handle_config_action(action, args.config.as_deref()),
    }
}
