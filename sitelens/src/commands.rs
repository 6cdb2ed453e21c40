use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitelens")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitelens")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("build")
                .about(
                    "Build a semantic graph from a JSON entries file. Classifies every URL \
                along the hierarchy, category, date and asset-host dimensions.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(true)
                        .help("JSON entries file: an array of {\"url\": ..., \"images\": [...]}")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(true)
                        .help("Where to write the graph document")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"max-images" <N>)
                        .required(false)
                        .help("Image nodes emitted per page; further images are ignored")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4"),
                )
                .arg(
                    arg!(--"max-related" <N>)
                        .required(false)
                        .help("Cap on cross-link related edges per page")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    arg!(--"no-cross-links")
                        .required(false)
                        .help("Skip the related-edge cross-linking pass")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("roots")
                .about("List the nodes that may be picked as an exploration root")
                .arg(
                    arg!(-g --"graph" <PATH>)
                        .required(true)
                        .help("Graph document produced by `sitelens build`")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("explore")
                .about(
                    "Extract the bounded neighborhood of a node and emit per-element \
                visibility and scale for a renderer.",
                )
                .arg(
                    arg!(-g --"graph" <PATH>)
                        .required(true)
                        .help("Graph document produced by `sitelens build`")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-r --"root" <NODE_ID>)
                        .required(true)
                        .help("Root node id (see `sitelens roots`)"),
                )
                .arg(
                    arg!(-d --"depth" <HOPS>)
                        .required(false)
                        .help("Neighborhood depth in hops (clamped to 1-10)")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("2"),
                )
                .arg(
                    arg!(-m --"mode" <MODE>)
                        .required(false)
                        .help("What happens to elements outside the neighborhood")
                        .value_parser(["hide-outside", "dim-outside"])
                        .default_value("hide-outside"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save view document to file (default: print to stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
