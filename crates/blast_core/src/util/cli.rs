use std::path::PathBuf;

use clap::Parser;

use crate::node_contraction::ShortcutWeight;

#[derive(Parser)]
#[command(version, about = "Plan the cheapest route after blasting one vertex", long_about = None)]
struct Cli {
    /// Path to a CSV edge list (source,target,weight). Reads a single
    /// "(u, v, w)" tuple line from stdin when omitted
    #[arg(long, value_name = "FILE")]
    edges: Option<PathBuf>,

    /// Weigh reconnection edges with both legs through the removed vertex
    /// instead of the classic first leg rule
    #[arg(long)]
    summed_shortcuts: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub edges: Option<PathBuf>,
    pub rule: ShortcutWeight,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    let rule = if cli.summed_shortcuts {
        ShortcutWeight::BothLegs
    } else {
        ShortcutWeight::FirstLeg
    };

    Cfg {
        edges: cli.edges,
        rule,
    }
}
