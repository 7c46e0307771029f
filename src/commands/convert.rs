use crate::convert::{Conversion, convert};
use crate::loader;
use anyhow::Result;
use log::info;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let incidence = loader::load_incidence(file)?;
    info!(
        "converting incidence matrix: {} vertices, {} edges",
        incidence.vertices(),
        incidence.edges()
    );
    let conversion = convert(&incidence)?;

    if json {
        print_json(&conversion)?;
    } else {
        print_human(&conversion);
    }
    Ok(())
}

fn print_json(conversion: &Conversion) -> Result<()> {
    let right_incidence: Vec<_> = conversion
        .right_incidence
        .iter()
        .enumerate()
        .map(|(v, succs)| {
            serde_json::json!({
                "vertex": v + 1,
                "successors": succs.iter().map(|&s| s + 1).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "adjacency": conversion.adjacency.rows(),
        "right_incidence": right_incidence,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(conversion: &Conversion) {
    println!("Adjacency matrix:");
    for row in super::matrix_rows(conversion.adjacency.rows()) {
        println!("  {row}");
    }

    println!("\nRight incidence:");
    for (v, succs) in conversion.right_incidence.iter().enumerate() {
        println!("  Vertex {}: {}", v + 1, super::vertex_list(succs));
    }
}
