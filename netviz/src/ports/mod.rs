//! The port-record engine. It draws one device as a single `record` node whose
//! label carries the device metadata followed by its ports, and connects each
//! cabled port to a node named after the device on the other end.
//!
//! The input table has one header row and then one row per port. Port `n` is
//! row `n`: numbering follows row order, never a port number found in the
//! data. Metadata lives at fixed cells that are given by an
//! [`InventoryLayout`].

mod paged;
pub mod section;
pub mod sectioned;

pub use section::{paginate, Section};

use crate::core::error::{Error, Result};
use crate::core::sanitize::{sanitize, sanitize_label};
use crate::gv::ast::{EdgeStmt, NodeId, NodeStmt, Stmt};
use crate::gv::{DotDocument, FrontMatter, RecordDef};
use crate::table::Table;

/// A (row, column) position in the table, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The columns that describe one side of a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortColumns {
    /// Port type, such as "Gi" or "Dante".
    pub kind: usize,
    /// The port number as printed on the device. Display only.
    pub number: usize,
    pub vlan: Option<usize>,
    /// The name of the connected device.
    pub peer: usize,
    /// A column whose text is put in front of the peer name.
    pub peer_prefix: Option<usize>,
}

/// How the port rows are turned into record cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortScheme {
    /// One cell per port, in pages of \p page_size ports.
    Paged {
        page_size: usize,
        columns: PortColumns,
    },
    /// Like Paged, but every port has an output and an input anchor, each
    /// described by its own columns.
    Duplex {
        page_size: usize,
        input: PortColumns,
        output: PortColumns,
    },
    /// Ports are grouped by category. Scanning the header from
    /// \p first_column, every \p marker cell starts a group: its column holds
    /// port numbers and the next column holds the peer, titled with the
    /// category name.
    Sectioned { marker: String, first_column: usize },
}

/// Where the metadata of the device is, and how to read its ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLayout {
    pub identity: Cell,
    pub model: Cell,
    pub location: Cell,
    pub serial: Cell,
    pub ip: Cell,
    pub hw_address: Cell,
    pub scheme: PortScheme,
    /// Static cells appended at the end of the record.
    pub trailer: Vec<String>,
}

impl InventoryLayout {
    /// A network switch export: type, number, VLAN and connected device per
    /// port, in pages of 12.
    pub fn switch() -> Self {
        Self {
            identity: Cell::new(1, 0),
            model: Cell::new(2, 1),
            location: Cell::new(3, 1),
            serial: Cell::new(4, 1),
            ip: Cell::new(5, 1),
            hw_address: Cell::new(6, 1),
            scheme: PortScheme::Paged {
                page_size: 12,
                columns: PortColumns {
                    kind: 2,
                    number: 3,
                    vlan: Some(4),
                    peer: 5,
                    peer_prefix: None,
                },
            },
            trailer: Vec::new(),
        }
    }

    /// An AV-over-IP (NAX) export: every port has an input and an output,
    /// in pages of 8.
    pub fn nax() -> Self {
        Self {
            identity: Cell::new(1, 1),
            model: Cell::new(0, 0),
            location: Cell::new(2, 1),
            serial: Cell::new(3, 1),
            ip: Cell::new(4, 1),
            hw_address: Cell::new(5, 1),
            scheme: PortScheme::Duplex {
                page_size: 8,
                input: PortColumns {
                    kind: 2,
                    number: 3,
                    vlan: None,
                    peer: 4,
                    peer_prefix: None,
                },
                output: PortColumns {
                    kind: 5,
                    number: 6,
                    vlan: None,
                    peer: 7,
                    peer_prefix: Some(8),
                },
            },
            trailer: Vec::new(),
        }
    }

    /// A control processor export: COM, IR, relay... ports grouped under
    /// "PORT" marker columns.
    pub fn processor() -> Self {
        Self {
            identity: Cell::new(1, 0),
            model: Cell::new(0, 0),
            location: Cell::new(3, 1),
            serial: Cell::new(4, 1),
            ip: Cell::new(5, 1),
            hw_address: Cell::new(6, 1),
            scheme: PortScheme::Sectioned {
                marker: String::from("PORT"),
                first_column: 2,
            },
            trailer: Vec::new(),
        }
    }

    /// Overrides the page size of the paged schemes. Sectioned layouts are
    /// not paginated and are returned unchanged.
    pub fn with_page_size(mut self, size: usize) -> Self {
        match &mut self.scheme {
            PortScheme::Paged { page_size, .. }
            | PortScheme::Duplex { page_size, .. } => *page_size = size,
            PortScheme::Sectioned { .. } => {
                log::warn!("Page size ignored for a sectioned layout");
            }
        }
        self
    }

    pub fn with_trailer(mut self, trailer: Vec<String>) -> Self {
        self.trailer = trailer;
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.scheme {
            PortScheme::Paged { page_size: 0, .. }
            | PortScheme::Duplex { page_size: 0, .. } => Err(Error::InvalidLayout(
                "the page size must be at least 1".to_string(),
            )),
            PortScheme::Sectioned { marker, .. } if marker.trim().is_empty() => Err(
                Error::InvalidLayout("the section marker must not be empty".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

/// The device described by the metadata cells of an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// The sanitized identity. This is the node name and the prefix of every
    /// port anchor.
    pub id: String,
    pub model: String,
    pub location: String,
    pub serial: String,
    pub ip: String,
    pub hw_address: String,
}

impl DeviceInfo {
    pub fn read(table: &Table, layout: &InventoryLayout) -> Self {
        let cell = |c: Cell| sanitize_label(table.cell(c.row, c.col));
        Self {
            id: sanitize(table.cell(layout.identity.row, layout.identity.col)),
            model: cell(layout.model),
            location: cell(layout.location),
            serial: cell(layout.serial),
            ip: cell(layout.ip),
            hw_address: cell(layout.hw_address),
        }
    }

    /// The metadata cells at the start of the record.
    pub fn record_cells(&self) -> Vec<RecordDef> {
        vec![
            RecordDef::new_text(&self.model),
            RecordDef::new_text(&format!("ID: {}", self.id)),
            RecordDef::new_text(&format!("LOC: {}", self.location)),
            RecordDef::new_text(&format!("SN: {}", self.serial)),
            RecordDef::new_text(&format!("IP: {}", self.ip)),
            RecordDef::new_text(&format!("HW: {}", self.hw_address)),
        ]
    }

    /// The endpoint of the port anchor \p anchor on this device.
    pub fn anchor(&self, anchor: &str) -> NodeId {
        NodeId::with_port(&self.id, anchor)
    }
}

/// The output of the engine: the device, its record and its edges.
#[derive(Debug, Clone)]
pub struct PortDiagram {
    pub device: DeviceInfo,
    pub record: RecordDef,
    pub edges: Vec<EdgeStmt>,
}

impl PortDiagram {
    /// The record label, flattened to a single line.
    pub fn label(&self) -> String {
        self.record.to_label().replace(['\n', '\r'], "")
    }

    pub fn into_document(self, front: &FrontMatter) -> DotDocument {
        let mut doc = DotDocument::new("structs", front);
        let mut node = NodeStmt::new(NodeId::plain(&self.device.id));
        node.list.add_attr_str("label", &self.label());
        doc.push(Stmt::Node(node));
        for e in self.edges {
            doc.push(Stmt::Edge(e));
        }
        doc
    }
}

/// Joins the non-empty parts with a space.
pub(crate) fn join_words(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Accumulates the record fields and the edges of one device while the
/// scheme walks the port rows.
pub(crate) struct RecordBuilder<'a> {
    pub table: &'a Table,
    pub device: &'a DeviceInfo,
    pub fields: Vec<RecordDef>,
    pub edges: Vec<EdgeStmt>,
}

impl<'a> RecordBuilder<'a> {
    fn new(table: &'a Table, device: &'a DeviceInfo) -> Self {
        Self {
            table,
            device,
            fields: device.record_cells(),
            edges: Vec::new(),
        }
    }

    /// The number of port rows.
    pub fn port_count(&self) -> usize {
        self.table.len().saturating_sub(1)
    }

    /// Adds a titled group of cells.
    pub fn add_section(&mut self, title: &str, cells: Vec<RecordDef>) {
        self.fields.push(RecordDef::Array(vec![
            RecordDef::new_text(title),
            RecordDef::Array(cells),
        ]));
    }

    /// Adds the edge "from -> to" labeled with \p label, if not empty.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, label: &str) {
        let mut e = EdgeStmt::arrow(from, to);
        if !label.is_empty() {
            e.list.add_attr_str("label", label);
        }
        self.edges.push(e);
    }
}

/// Lays out the device described by \p table.
pub fn layout_ports(table: &Table, layout: &InventoryLayout) -> Result<PortDiagram> {
    layout.validate()?;
    let device = DeviceInfo::read(table, layout);
    let mut builder = RecordBuilder::new(table, &device);
    log::info!("Device {} has {} ports", device.id, builder.port_count());

    match &layout.scheme {
        PortScheme::Paged { page_size, columns } => {
            paged::layout_simplex(&mut builder, *page_size, columns);
        }
        PortScheme::Duplex {
            page_size,
            input,
            output,
        } => {
            paged::layout_duplex(&mut builder, *page_size, input, output);
        }
        PortScheme::Sectioned {
            marker,
            first_column,
        } => {
            sectioned::layout_sections(&mut builder, marker, *first_column);
        }
    }

    let RecordBuilder {
        mut fields, edges, ..
    } = builder;
    for text in &layout.trailer {
        fields.push(RecordDef::new_text(&sanitize_label(text)));
    }

    Ok(PortDiagram {
        device,
        record: RecordDef::Array(fields),
        edges,
    })
}

/// Lays out the device described by \p table and returns the DOT document.
pub fn render_ports(table: &Table, layout: &InventoryLayout) -> Result<String> {
    let diagram = layout_ports(table, layout)?;
    Ok(diagram.into_document(&FrontMatter::records()).to_dot())
}
