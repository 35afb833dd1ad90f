//! Assembles the front matter and the statements produced by an engine into
//! one complete digraph document.

use super::ast::{AttrStmt, AttrStmtTarget, AttributeList, Graph, Stmt};
use super::printer;

/// The fixed block of graph-level settings at the top of a document.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    /// graph [ ... ]
    pub graph: AttributeList,
    /// node [ ... ]
    pub node: AttributeList,
    /// Top-level "key=value;" settings.
    pub settings: Vec<(String, String)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The settings used for port-record diagrams: record nodes, spline
    /// edges, laid out left to right.
    pub fn records() -> Self {
        Self::new()
            .node_attr("shape", "record")
            .setting("splines", "true")
            .setting("overlap", "false")
            .setting("rankdir", "LR")
    }

    pub fn graph_attr(mut self, key: &str, value: &str) -> Self {
        self.graph.add_attr_str(key, value);
        self
    }

    pub fn node_attr(mut self, key: &str, value: &str) -> Self {
        self.node.add_attr_str(key, value);
        self
    }

    pub fn setting(mut self, key: &str, value: &str) -> Self {
        self.settings.push((key.to_string(), value.to_string()));
        self
    }

    fn apply(&self, graph: &mut Graph) {
        if !self.graph.is_empty() {
            graph.push(Stmt::Attribute(AttrStmt::new(
                AttrStmtTarget::Graph,
                self.graph.clone(),
            )));
        }
        if !self.node.is_empty() {
            graph.push(Stmt::Attribute(AttrStmt::new(
                AttrStmtTarget::Node,
                self.node.clone(),
            )));
        }
        for (k, v) in &self.settings {
            graph.assign(k, v);
        }
    }
}

/// A digraph under construction. The text is only produced by `to_dot`, once
/// every statement is in place.
#[derive(Debug, Clone)]
pub struct DotDocument {
    graph: Graph,
}

impl DotDocument {
    pub fn new(name: &str, front: &FrontMatter) -> Self {
        let mut graph = Graph::new(name);
        front.apply(&mut graph);
        Self { graph }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.graph.push(stmt);
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn to_dot(&self) -> String {
        printer::to_dot(&self.graph)
    }
}
