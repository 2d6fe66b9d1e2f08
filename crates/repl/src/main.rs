//! Interactive explorer for blast route planning
use std::path::{Path, PathBuf};

use blast_core::graph::{node_index, Graph};
use blast_core::planner::BlastPlanner;
use blast_core::search::backtracking::BacktrackingSearch;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.num_nodes(),
        context.graph.num_edges()
    )))
}

/// Print the adjacency lists
fn show(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!("{}", context.graph)))
}

fn run_search(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();

    let mut search = BacktrackingSearch::new(&context.graph);
    let sp = search.search(node_index(src), node_index(dst));

    if let Some(sp) = sp {
        Ok(Some(format!("{}\nTook: {:?}", sp, search.stats.duration)))
    } else {
        Ok(Some("No path found".to_string()))
    }
}

fn measure_search(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let nodes = context.graph.sorted_nodes();
    let mut rng = rand::thread_rng();

    let mut res = String::new();
    // Run the exhaustive search for random pairs of nodes
    for _ in 0..n {
        let src = nodes[rng.gen_range(0..nodes.len())];
        let dst = nodes[rng.gen_range(0..nodes.len())];

        let mut search = BacktrackingSearch::new(&context.graph);
        let sp = search.search(src, dst);
        if sp.is_none() {
            continue;
        }
        res.push_str(&format!("{} -> {}: {:?}\n", src, dst, search.stats.duration));
    }

    Ok(Some(res))
}

fn run_blast(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let source = node_index(0);
    let target = node_index(context.graph.num_nodes().saturating_sub(1));

    let mut planner = BlastPlanner::new(&context.graph);
    match planner.run(source, target) {
        Ok(plan) => {
            let mut out = String::new();
            for leg in plan.legs(&context.graph) {
                out.push_str(&format!("{}\n", leg));
            }
            out.push_str(&format!(
                "Removed {} for a route of weight {} in {} milliseconds",
                plan.removed,
                plan.path.weight,
                planner.stats.millis()
            ));
            Ok(Some(out))
        }
        Err(e) => Ok(Some(format!("Planning failed: {}", e))),
    }
}

fn export(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let file = args.get_one::<String>("file").unwrap();

    match context.graph.export_csv(Path::new(file)) {
        Ok(()) => Ok(Some(format!("Wrote edge list to {}", file))),
        Err(e) => Ok(Some(format!("Export failed: {}", e))),
    }
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let path_to_csv = std::env::args().nth(1).expect("No path to edge list given");
    let graph = Graph::from_csv(Path::new(&path_to_csv)).expect("Failed to read edge list");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Last Chance")
        .with_version("v0.1.0")
        .with_description("Simple REPL to explore blast route planning")
        .with_banner("Welcome to Last Chance")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("show").about("Print the adjacency lists"), show)
        .with_command(
            Command::new("sp")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of source node"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of destination node"),
                )
                .about("Calculate shortest path using the exhaustive search"),
            run_search,
        )
        .with_command(
            Command::new("spm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest path calculations"),
            measure_search,
        )
        .with_command(
            Command::new("blast").about("Plan the best single vertex removal"),
            run_blast,
        )
        .with_command(
            Command::new("export")
                .arg(Arg::new("file").required(true).help("Output CSV file"))
                .about("Write the edge list as CSV"),
            export,
        );

    repl.run()
}
