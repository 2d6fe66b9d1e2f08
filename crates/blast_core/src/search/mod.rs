pub mod backtracking;
pub mod shortest_path;

#[cfg(test)]
pub(crate) fn assert_path(
    expected_nodes: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Option<shortest_path::ShortestPath>,
) {
    let expected = shortest_path::ShortestPath::new(
        expected_nodes
            .into_iter()
            .map(crate::graph::node_index)
            .collect(),
        expected_weight,
    );
    assert_eq!(Some(expected), path);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<shortest_path::ShortestPath>) {
    assert_eq!(None, path);
}
