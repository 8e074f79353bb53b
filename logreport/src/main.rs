use clap::Parser;
use logreport_core::cli::{ReportArgs, print_config_error};
use logreport_core::conf::resolve_input;
use logreport_core::logging::init_logging;
use logreport_core::report::run_report;

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Summarize web server access logs: requests per method, busiest clients, slowest requests"
)]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,
}

fn main() {
    let cli = Cli::parse();
    let args = cli.args;

    init_logging(args.log_format);

    let input = match resolve_input(args.selection().as_ref()) {
        Ok(input) => input,
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_report(&input, args.json_path()) {
        eprintln!("report error: {e:#}");
        std::process::exit(1);
    }
}
