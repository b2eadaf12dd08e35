use crate::classifiers::decision_tree::Node;
use std::fmt::{Display, Formatter};

const INDENT: &str = "|   ";

/// Accumulates the textual form of a tree one branch line at a time.
struct TreeStringBuilder<'f, 'b> {
    f: &'f mut Formatter<'b>,
    lines: usize,
}

impl TreeStringBuilder<'_, '_> {
    fn start_line(&mut self, depth: usize) -> std::fmt::Result {
        if self.lines > 0 {
            self.f.write_str("\n")?;
        }
        self.lines += 1;
        for _ in 0..depth {
            self.f.write_str(INDENT)?;
        }
        Ok(())
    }

    fn branches(&mut self, node: &Node, depth: usize) -> std::fmt::Result {
        let Node::Inner(inner) = node else {
            return Ok(());
        };
        let attribute = inner.decision_attribute().name();
        for (value, child) in inner.children() {
            self.start_line(depth)?;
            write!(self.f, "{attribute} = {value}")?;
            match child {
                Node::Leaf(leaf) => write!(self.f, ": {}", leaf.value())?,
                Node::Inner(_) => self.branches(child, depth + 1)?,
            }
        }
        Ok(())
    }
}

/// Renders one line per branch, indented by depth:
///
/// ```text
/// outlook = sunny
/// |   humidity = high: no
/// |   humidity = normal: yes
/// outlook = overcast: yes
/// ```
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, ": {}", leaf.value()),
            Node::Inner(_) => TreeStringBuilder { f, lines: 0 }.branches(self, 0),
        }
    }
}
