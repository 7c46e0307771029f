use crate::cycle::find_simple_cycles;
use crate::loader;
use crate::matrix::AdjacencyMatrix;
use crate::strata::{level_order, stratify};
use anyhow::{Result, bail};
use log::info;
use std::path::Path;

pub fn run(file: &Path, incidence: bool, json: bool) -> Result<()> {
    let adjacency = if incidence {
        let matrix = loader::load_incidence(file)?;
        crate::convert::convert(&matrix)?.adjacency
    } else {
        loader::load_adjacency(file)?
    };
    info!("stratifying {}-vertex graph", adjacency.size());

    let levels = match stratify(&adjacency) {
        Ok(levels) => levels,
        Err(err) => {
            // Point at the offending cycles instead of just refusing.
            let cycles: Vec<String> = find_simple_cycles(&adjacency)
                .iter()
                .map(|c| super::cycle_path(c))
                .collect();
            bail!("{err}: {}", cycles.join("; "));
        }
    };

    if json {
        print_json(&adjacency, &levels)?;
    } else {
        print_human(&adjacency, &levels);
    }
    Ok(())
}

fn print_json(adjacency: &AdjacencyMatrix, levels: &[Vec<usize>]) -> Result<()> {
    let order = level_order(levels);
    let permuted = adjacency.permuted(&order);

    let levels_output: Vec<_> = levels
        .iter()
        .enumerate()
        .map(|(k, level)| {
            serde_json::json!({
                "level": k,
                "vertices": level.iter().map(|&v| v + 1).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "levels": levels_output,
        "order": order.iter().map(|&v| v + 1).collect::<Vec<_>>(),
        "reordered_adjacency": permuted.rows(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(adjacency: &AdjacencyMatrix, levels: &[Vec<usize>]) {
    println!("Hierarchical levels:");
    for (k, level) in levels.iter().enumerate() {
        println!("  Level {k}: ({})", super::vertex_list(level));
    }

    let order = level_order(levels);
    let permuted = adjacency.permuted(&order);

    println!("\nAdjacency matrix in level order:");
    let labels: Vec<String> = order
        .iter()
        .enumerate()
        .map(|(pos, &orig)| format!("{}({})", pos + 1, orig + 1))
        .collect();
    println!("  columns: {}", labels.join(" "));
    for (pos, row) in super::matrix_rows(permuted.rows()).iter().enumerate() {
        println!("  {}: {row}", labels[pos]);
    }
}
