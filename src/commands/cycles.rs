use crate::cycle::{find_simple_cycles, is_acyclic};
use crate::loader;
use anyhow::Result;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let adjacency = loader::load_adjacency(file)?;
    let acyclic = is_acyclic(&adjacency);
    let cycles = find_simple_cycles(&adjacency);

    if json {
        let cycles_output: Vec<_> = cycles
            .iter()
            .map(|c| c.iter().map(|&v| v + 1).collect::<Vec<_>>())
            .collect();
        let output = serde_json::json!({
            "acyclic": acyclic,
            "cycle_count": cycles.len(),
            "cycles": cycles_output,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if acyclic {
        println!("Graph is acyclic.");
        return Ok(());
    }

    println!("Graph contains {} cycle(s):", cycles.len());
    for cycle in &cycles {
        println!("  {}", super::cycle_path(cycle));
    }
    Ok(())
}
