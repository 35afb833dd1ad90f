//! The paged schemes: ports are numbered by row and split into pages of a
//! fixed size, each page rendered as one titled group of cells.

use super::{join_words, paginate, PortColumns, RecordBuilder, Section};
use crate::core::sanitize::sanitize_label;
use crate::gv::ast::NodeId;
use crate::gv::RecordDef;
use crate::table::Table;

fn section_title(section: &Section) -> String {
    format!("PORTS\\n{}", section.range_label())
}

/// The edge label of port row \p row: type, number and VLAN.
fn edge_label(table: &Table, row: usize, columns: &PortColumns) -> String {
    let kind = sanitize_label(table.cell(row, columns.kind));
    let number = sanitize_label(table.cell(row, columns.number));
    let vlan = match columns.vlan {
        Some(col) if !table.cell(row, col).is_empty() => {
            format!("VLAN{}", sanitize_label(table.cell(row, col)))
        }
        _ => String::new(),
    };
    join_words(&[&kind, &number, &vlan])
}

/// The name of the device cabled to port row \p row, or None.
fn peer_of(table: &Table, row: usize, columns: &PortColumns) -> Option<NodeId> {
    let peer = table.cell(row, columns.peer);
    if peer.is_empty() {
        return None;
    }
    let prefix = columns.peer_prefix.map_or("", |col| table.cell(row, col));
    let name = join_words(&[&sanitize_label(prefix), &sanitize_label(peer)]);
    Some(NodeId::plain(&name))
}

/// One cell per port, anchored at "{id}f{n}".
pub(crate) fn layout_simplex(
    builder: &mut RecordBuilder,
    page_size: usize,
    columns: &PortColumns,
) {
    let (table, device) = (builder.table, builder.device);
    for section in paginate(builder.port_count(), page_size) {
        log::debug!("Section {}", section.range_label());
        let mut cells = Vec::with_capacity(section.len());
        for n in section.ports() {
            let anchor = format!("{}f{}", device.id, n);
            cells.push(RecordDef::new_text_with_port(&n.to_string(), &anchor));

            if let Some(peer) = peer_of(table, n, columns) {
                let label = edge_label(table, n, columns);
                builder.add_edge(device.anchor(&anchor), peer, &label);
            }
        }
        builder.add_section(&section_title(&section), cells);
    }
}

/// Two cells per port: an output anchored at "{id}o{n}" and an input
/// anchored at "{id}i{n}". Output edges leave the device and input edges
/// enter it.
pub(crate) fn layout_duplex(
    builder: &mut RecordBuilder,
    page_size: usize,
    input: &PortColumns,
    output: &PortColumns,
) {
    let (table, device) = (builder.table, builder.device);
    for section in paginate(builder.port_count(), page_size) {
        log::debug!("Section {}", section.range_label());
        let mut cells = Vec::with_capacity(section.len() * 2);
        for n in section.ports() {
            let out_anchor = format!("{}o{}", device.id, n);
            let in_anchor = format!("{}i{}", device.id, n);
            cells.push(RecordDef::new_text_with_port(&format!("out {}", n), &out_anchor));
            cells.push(RecordDef::new_text_with_port(&format!("in {}", n), &in_anchor));

            if let Some(peer) = peer_of(table, n, output) {
                let label = edge_label(table, n, output);
                builder.add_edge(device.anchor(&out_anchor), peer, &label);
            }
            if let Some(peer) = peer_of(table, n, input) {
                let label = edge_label(table, n, input);
                builder.add_edge(peer, device.anchor(&in_anchor), &label);
            }
        }
        builder.add_section(&section_title(&section), cells);
    }
}
