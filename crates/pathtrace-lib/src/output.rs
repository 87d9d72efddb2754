use std::fmt::Write;

use serde::Serialize;

use crate::distance::Distance;
use crate::graph::NodeId;
use crate::path::SearchResult;

/// Presentation style for turning a [`ResultSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// Step along a found path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub node: NodeId,
    /// Distance from the start once this node is reached.
    pub distance: Distance,
}

/// Compact, serialisable view of a [`SearchResult`] for front ends.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResultSummary {
    pub start: NodeId,
    pub goal: NodeId,
    pub reachable: bool,
    pub hops: usize,
    pub total_distance: Distance,
    pub steps: Vec<PathStep>,
}

impl ResultSummary {
    pub fn from_result(result: &SearchResult) -> Self {
        let steps = result
            .path
            .iter()
            .enumerate()
            .map(|(index, node)| PathStep {
                index,
                node: node.clone(),
                distance: result.distance_to(node),
            })
            .collect();

        Self {
            start: result.start.clone(),
            goal: result.goal.clone(),
            reachable: result.is_reachable(),
            hops: result.hop_count(),
            total_distance: result.total_distance,
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if !self.reachable {
            let _ = writeln!(buffer, "No path between {} and {}", self.start, self.goal);
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, total distance: {})",
            self.start, self.goal, self.hops, self.total_distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({})",
                step.index, step.node, step.distance
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        if !self.reachable {
            let _ = writeln!(
                buffer,
                "**No path** from _{}_ to _{}_",
                self.start, self.goal
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, total distance: `{}`)",
            self.start, self.goal, self.hops, self.total_distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index, step.node, step.distance
            );
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::path::shortest_path;

    #[test]
    fn plain_lists_cumulative_distances() {
        let result = shortest_path(&Graph::example(), "A", "C");
        let text = ResultSummary::from_result(&result).render(RenderMode::PlainText);

        assert!(text.starts_with("Route: A -> C (2 hops, total distance: 11)"));
        assert!(text.contains("  1: B (5)"));
        assert!(text.contains("  2: C (11)"));
    }

    #[test]
    fn unreachable_summary_says_so() {
        let result = shortest_path(&Graph::example(), "J", "A");
        let summary = ResultSummary::from_result(&result);

        assert!(!summary.reachable);
        assert_eq!(summary.total_distance, Distance::Unreachable);
        assert_eq!(
            summary.render(RenderMode::PlainText),
            "No path between J and A\n"
        );
    }
}
