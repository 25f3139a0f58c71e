use crate::prelude::*;




/// The four-node diamond used across the test suite:
/// `A -> B` (1), `A -> C` (5), `B -> D` (1), `C -> D` (1), goal `D`.
pub fn diamond() -> ExplicitGraph {
    let mut b = ExplicitGraph::builder();
    b.edge("A", "B", "ab", 1.0).unwrap();
    b.edge("A", "C", "ac", 5.0).unwrap();
    b.edge("B", "D", "bd", 1.0).unwrap();
    b.edge("C", "D", "cd", 1.0).unwrap();
    b.start("A").goal("D");
    b.build().unwrap()
}
