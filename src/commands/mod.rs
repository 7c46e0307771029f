pub mod convert;
pub mod cycles;
pub mod decompose;
pub mod levels;

/// Renders a 0-based vertex list as 1-based, comma-separated; "none" when
/// empty.
pub(crate) fn vertex_list(vertices: &[usize]) -> String {
    if vertices.is_empty() {
        return "none".to_string();
    }
    vertices
        .iter()
        .map(|&v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a cycle as "1 -> 2 -> 1" (closed, 1-based).
pub(crate) fn cycle_path(cycle: &[usize]) -> String {
    let mut path: Vec<String> = cycle.iter().map(|&v| (v + 1).to_string()).collect();
    path.push((cycle[0] + 1).to_string());
    path.join(" -> ")
}

/// Renders matrix rows with single-space separators.
pub(crate) fn matrix_rows(rows: &[Vec<u32>]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_list_one_based() {
        assert_eq!(vertex_list(&[0, 2, 3]), "1, 3, 4");
        assert_eq!(vertex_list(&[]), "none");
    }

    #[test]
    fn test_cycle_path_closes_loop() {
        assert_eq!(cycle_path(&[0, 1]), "1 -> 2 -> 1");
        assert_eq!(cycle_path(&[2]), "3 -> 3");
    }

    #[test]
    fn test_matrix_rows_rendering() {
        assert_eq!(
            matrix_rows(&[vec![0, 1], vec![1, 0]]),
            vec!["0 1".to_string(), "1 0".to_string()]
        );
    }
}
