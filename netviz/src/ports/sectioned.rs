//! The sectioned scheme, used by control processors whose COM, IR and relay
//! ports sit side by side in column pairs. The header cell of the number
//! column is a marker; the header of the peer column names the category.

use super::RecordBuilder;
use crate::core::sanitize::{sanitize, sanitize_label};
use crate::gv::ast::NodeId;
use crate::gv::RecordDef;

/// Returns the marker columns, scanning the header from \p first_column.
pub fn marker_columns(header: &[String], marker: &str, first_column: usize) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .skip(first_column)
        .filter(|(_, h)| h.as_str() == marker)
        .map(|(col, _)| col)
        .collect()
}

pub(crate) fn layout_sections(builder: &mut RecordBuilder, marker: &str, first_column: usize) {
    let (table, device) = (builder.table, builder.device);
    let columns = marker_columns(table.header().fields(), marker, first_column);
    if columns.is_empty() {
        log::warn!("No {} column found after column {}", marker, first_column);
    }

    for col in columns {
        let category = sanitize(table.cell(0, col + 1));
        let mut cells = Vec::new();
        for i in 1..=builder.port_count() {
            let number = table.cell(i, col);
            if number.is_empty() {
                continue;
            }
            let anchor = format!("{}{}{}", device.id, category, i);
            let text = format!("{}{}", category, i);
            cells.push(RecordDef::new_text_with_port(&text, &anchor));

            let peer = table.cell(i, col + 1);
            if !peer.is_empty() {
                let label = format!("{} {}", category, sanitize_label(number));
                let to = NodeId::plain(&sanitize_label(peer));
                builder.add_edge(device.anchor(&anchor), to, label.trim());
            }
        }
        log::debug!("Category {:?} has {} ports", category, cells.len());
        builder.add_section(&category, cells);
    }
}
