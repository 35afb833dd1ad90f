//! An AST that represents the subset of the GraphViz file format that the
//! engines emit.

// "first" : "port"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeId {
    pub name: String,
    pub port: Option<String>,
}
impl NodeId {
    pub fn new(name: &str, port: &Option<String>) -> Self {
        Self {
            name: name.to_string(),
            port: port.clone(),
        }
    }

    pub fn plain(name: &str) -> Self {
        Self::new(name, &None)
    }

    pub fn with_port(name: &str, port: &str) -> Self {
        Self::new(name, &Some(port.to_string()))
    }
}

// [a=b, c=d, ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeList {
    pub list: Vec<(String, String)>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn add_attr_str(&mut self, from: &str, to: &str) {
        self.list.push((from.to_string(), to.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<(String, String)> {
        self.list.iter()
    }
}

impl Default for AttributeList {
    fn default() -> Self {
        Self::new()
    }
}

// (graph | node)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrStmtTarget {
    Graph,
    Node,
}
// (graph | node) [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrStmt {
    pub target: AttrStmtTarget,
    pub list: AttributeList,
}

impl AttrStmt {
    pub fn new(target: AttrStmtTarget, list: AttributeList) -> Self {
        Self { target, list }
    }
}

// node-name [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStmt {
    pub id: NodeId,
    pub list: AttributeList,
}

impl NodeStmt {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            list: AttributeList::new(),
        }
    }
}

// a -> b -> c [...]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStmt {
    pub from: NodeId,
    pub to: Vec<NodeId>,
    pub list: AttributeList,
}

impl EdgeStmt {
    pub fn new(from: NodeId) -> Self {
        Self {
            from,
            to: Vec::new(),
            list: AttributeList::new(),
        }
    }

    /// A single directed edge "from -> to".
    pub fn arrow(from: NodeId, to: NodeId) -> Self {
        let mut e = Self::new(from);
        e.insert(to);
        e
    }

    pub fn insert(&mut self, n: NodeId) {
        self.to.push(n);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Edge(EdgeStmt),
    Node(NodeStmt),
    Attribute(AttrStmt),
    // ID = ID
    Assign(String, String),
    SubGraph(Graph),
}

// { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtList {
    pub list: Vec<Stmt>,
}

impl StmtList {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }
}

impl Default for StmtList {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Digraph,
    Subgraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub kind: GraphKind,
    pub name: String,
    pub list: StmtList,
}

impl Graph {
    pub fn new(name: &str) -> Self {
        Self {
            kind: GraphKind::Digraph,
            name: name.to_string(),
            list: StmtList::new(),
        }
    }

    pub fn new_subgraph(name: &str) -> Self {
        Self {
            kind: GraphKind::Subgraph,
            name: name.to_string(),
            list: StmtList::new(),
        }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.list.list.push(stmt);
    }

    pub fn assign(&mut self, key: &str, value: &str) {
        self.push(Stmt::Assign(key.to_string(), value.to_string()));
    }

    /// Returns the nested subgraphs, in order.
    pub fn subgraphs(&self) -> impl Iterator<Item = &Graph> {
        self.list.list.iter().filter_map(|s| match s {
            Stmt::SubGraph(g) => Some(g),
            _ => None,
        })
    }

    /// Returns the node statements directly inside this graph.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeStmt> {
        self.list.list.iter().filter_map(|s| match s {
            Stmt::Node(n) => Some(n),
            _ => None,
        })
    }

    /// Returns the edge statements directly inside this graph.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeStmt> {
        self.list.list.iter().filter_map(|s| match s {
            Stmt::Edge(e) => Some(e),
            _ => None,
        })
    }
}
