use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkwatch")
        .styles(CLAP_STYLING)
        .subcommand_required(false)
        .subcommand(
            command!("scan")
                .about(
                    "Check every markdown document under the root for dead links and \
                report the failures.",
                )
                .arg(
                    arg!(-r --"root" <DIR>)
                        .required(false)
                        .help("The directory to scan for markdown documents")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .default_value("."),
                )
                .arg(
                    arg!(-w --"allowlist" <PATH>)
                        .required(false)
                        .help(
                            "Path to a JSON allow-list of links that may be dead without \
                        failing the build",
                        ),
                )
                .arg(
                    arg!(--"reporter" <REPORTER>)
                        .required(false)
                        .help("Where the results go: plain console lines or TeamCity service messages")
                        .value_parser(["console", "teamcity"])
                        .default_value("console"),
                )
                .arg(
                    arg!(-c --"concurrency" <NUM_SCANS>)
                        .required(false)
                        .help("The maximum number of documents scanned in flight at once")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"changed-since" <REF>)
                        .required(false)
                        .help(
                            "Scan only markdown files that differ from the given git ref \
                        instead of the full tree",
                        ),
                ),
        )
}
