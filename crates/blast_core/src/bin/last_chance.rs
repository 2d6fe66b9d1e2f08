use std::io::{self, BufRead};

use anyhow::Context;

use blast_core::graph::{node_index, Graph};
use blast_core::planner::BlastPlanner;
use blast_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let graph = match &cfg.edges {
        Some(path) => Graph::from_csv(path)
            .with_context(|| format!("Failed to read edge list from {}", path.display()))?,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read input line")?;
            Graph::from_tuple_line(&line).context("Failed to parse edge triples")?
        }
    };

    let source = node_index(0);
    let target = node_index(graph.num_nodes().saturating_sub(1));

    let mut planner = BlastPlanner::with_rule(&graph, cfg.rule);
    let plan = planner.run(source, target)?;

    for leg in plan.legs(&graph) {
        println!("{}", leg);
    }
    println!(
        "Reached Last Chance encountering {} zombie(s) in {} milliseconds.",
        plan.path.weight,
        planner.stats.millis()
    );

    Ok(())
}
