//! A collection of methods for printing the AST as DOT source.
//!
//! Every identifier and value is written as a quoted string. Braces come from
//! the tree structure and are always balanced.

use super::ast;

const INDENT: usize = 4;

/// Quotes \p s as a DOT string. Double quotes are escaped. A backslash is
/// kept as is when it starts one of the label escapes `\n`, `\l` or `\r`,
/// and doubled otherwise.
pub fn quote(s: &str) -> String {
    let mut res = String::with_capacity(s.len() + 2);
    res.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => res.push_str("\\\""),
            '\\' if matches!(chars.peek(), Some('n' | 'l' | 'r')) => res.push(c),
            '\\' => res.push_str("\\\\"),
            _ => res.push(c),
        }
    }
    res.push('"');
    res
}

fn print_indent(out: &mut String, indent: usize) {
    out.push_str(&" ".repeat(indent * INDENT));
}

fn print_node_id(out: &mut String, n: &ast::NodeId) {
    out.push_str(&quote(&n.name));
    if let Option::Some(port) = &n.port {
        out.push(':');
        out.push_str(&quote(port));
    }
}
fn print_attribute_list(out: &mut String, ll: &ast::AttributeList) {
    if ll.is_empty() {
        return;
    }
    let body: Vec<String> = ll
        .iter()
        .map(|(k, v)| format!("{}={}", k, quote(v)))
        .collect();
    out.push_str(" [");
    out.push_str(&body.join(", "));
    out.push(']');
}
fn print_edge(out: &mut String, e: &ast::EdgeStmt, indent: usize) {
    print_indent(out, indent);
    print_node_id(out, &e.from);
    for dest in &e.to {
        out.push_str(" -> ");
        print_node_id(out, dest);
    }
    print_attribute_list(out, &e.list);
    out.push_str(";\n");
}
fn print_node(out: &mut String, n: &ast::NodeStmt, indent: usize) {
    print_indent(out, indent);
    print_node_id(out, &n.id);
    print_attribute_list(out, &n.list);
    out.push_str(";\n");
}
fn print_att(out: &mut String, att: &ast::AttrStmt, indent: usize) {
    print_indent(out, indent);

    match att.target {
        ast::AttrStmtTarget::Graph => {
            out.push_str("graph");
        }
        ast::AttrStmtTarget::Node => {
            out.push_str("node");
        }
    }
    print_attribute_list(out, &att.list);
    out.push_str(";\n");
}
fn print_assign(out: &mut String, key: &str, value: &str, indent: usize) {
    print_indent(out, indent);
    out.push_str(&format!("{}={};\n", key, quote(value)));
}

fn print_stmt(out: &mut String, stmt: &ast::Stmt, indent: usize) {
    match stmt {
        ast::Stmt::Edge(e) => {
            print_edge(out, e, indent);
        }
        ast::Stmt::Node(n) => {
            print_node(out, n, indent);
        }
        ast::Stmt::Attribute(a) => {
            print_att(out, a, indent);
        }
        ast::Stmt::Assign(k, v) => {
            print_assign(out, k, v, indent);
        }
        ast::Stmt::SubGraph(g) => {
            print_graph(out, g, indent);
        }
    }
}

fn print_graph(out: &mut String, graph: &ast::Graph, indent: usize) {
    print_indent(out, indent);
    match graph.kind {
        ast::GraphKind::Digraph => out.push_str("digraph "),
        ast::GraphKind::Subgraph => out.push_str("subgraph "),
    }
    out.push_str(&quote(&graph.name));
    out.push_str(" {\n");
    for stmt in &graph.list.list {
        print_stmt(out, stmt, indent + 1);
    }
    print_indent(out, indent);
    out.push_str("}\n");
}

/// Serializes the whole document.
pub fn to_dot(graph: &ast::Graph) -> String {
    let mut out = String::new();
    print_graph(&mut out, graph, 0);
    out
}
