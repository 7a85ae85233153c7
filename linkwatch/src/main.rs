use clap;
use commands::command_argument_builder;
use linkwatch::handlers;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();

    let exit_code = match chosen_command.subcommand() {
        Some(("scan", scan_matches)) => handlers::handle_scan(scan_matches).await,
        _ => {
            // No subcommand provided, show usage
            let _ = command_argument_builder().print_help();
            0
        }
    };

    std::process::exit(exit_code);
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
