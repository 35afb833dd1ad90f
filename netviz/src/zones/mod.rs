//! The zone engine. It reads a multi-device inventory, nests every device in
//! a cluster for its zone inside a cluster for its location, and draws one
//! edge per uplink.
//!
//! Locations and zones keep the order in which they first appear in the
//! table. Cluster fill colors are derived from the names, so the same site
//! gets the same colors on every run.

pub mod options;
pub mod schema;

pub use options::{ClusterOptions, DuplicatePolicy, PaperSize};
pub use schema::{ClusterSchema, DeviceRow};

use crate::core::color::pastel;
use crate::core::error::{Error, Result};
use crate::core::sanitize::{sanitize, sanitize_label};
use crate::gv::ast::{EdgeStmt, Graph, NodeId, NodeStmt, Stmt};
use crate::gv::DotDocument;
use crate::table::Table;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The uplink value of devices that connect to the outside world.
pub const INTERNET: &str = "Internet";

/// Zone name to the indices of the devices placed in it.
pub type ZoneMap = IndexMap<String, Vec<usize>>;

/// The devices of an inventory, grouped by location and then by zone.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Every data row, in table order.
    pub rows: Vec<DeviceRow>,
    /// Location to zones. The indices point into `rows`, one per device.
    pub locations: IndexMap<String, ZoneMap>,
}

impl Topology {
    /// Groups the rows of \p table. The first row is the header.
    pub fn build(table: &Table, opts: &ClusterOptions) -> Result<Self> {
        let schema = ClusterSchema::resolve(table.header(), &opts.identity_column)?;
        let rows: Vec<DeviceRow> = table
            .body()
            .iter()
            .map(|r| schema.read(r, &opts.sentinel))
            .collect();

        let mut seen: IndexMap<&str, usize> = IndexMap::new();
        let mut locations: IndexMap<String, ZoneMap> = IndexMap::new();
        for (idx, device) in rows.iter().enumerate() {
            if let Some(first) = seen.get(device.name.as_str()) {
                match opts.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateDevice(device.name.clone()));
                    }
                    DuplicatePolicy::FirstMatch => {
                        log::warn!(
                            "Device {} is listed again on row {}, keeping row {}",
                            device.name,
                            idx + 2,
                            first + 2
                        );
                        continue;
                    }
                }
            }
            seen.insert(&device.name, idx);
            locations
                .entry(device.location.clone())
                .or_default()
                .entry(device.zone.clone())
                .or_default()
                .push(idx);
        }

        log::info!(
            "Grouped {} devices into {} locations",
            seen.len(),
            locations.len()
        );
        Ok(Self { rows, locations })
    }

    /// The number of distinct devices.
    pub fn device_count(&self) -> usize {
        self.locations
            .values()
            .flat_map(|zones| zones.values())
            .map(Vec::len)
            .sum()
    }
}

/// Hands out cluster ids. Different names can sanitize to the same id ("A B"
/// and "A_B"), so a taken id gets the first free "_2", "_3", ... suffix.
#[derive(Debug, Default)]
struct ClusterNames {
    taken: HashSet<String>,
}

impl ClusterNames {
    fn claim(&mut self, base: String) -> String {
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let name = format!("{}_{}", base, n);
            if self.taken.insert(name.clone()) {
                log::debug!("Cluster {} is taken, using {}", base, name);
                return name;
            }
            n += 1;
        }
    }
}

fn cluster(name: &str, label: &str, fill_key: &str) -> Graph {
    let mut g = Graph::new_subgraph(&format!("cluster_{}", name));
    g.assign("label", &sanitize_label(label));
    g.assign("style", "filled,rounded");
    g.assign("fillcolor", &pastel(fill_key).to_web_color());
    g
}

fn device_node(device: &DeviceRow) -> NodeStmt {
    let label = [
        sanitize_label(&device.name),
        sanitize_label(&device.model),
        format!("MAC: {}", sanitize_label(&device.mac)),
        format!("IP: {}", sanitize_label(&device.ip)),
    ]
    .join("\\n");
    let mut node = NodeStmt::new(NodeId::plain(&sanitize(&device.name)));
    node.list.add_attr_str("label", &label);
    node
}

/// Returns the uplink edge of \p device, or None if it has no uplink to
/// draw.
pub fn uplink_edge(device: &DeviceRow, opts: &ClusterOptions) -> Option<EdgeStmt> {
    if opts.is_missing(&device.uplink) || device.uplink == INTERNET {
        return None;
    }

    let port = |p: &str| (!opts.is_missing(p)).then(|| sanitize_label(p));
    let src_port = port(device.source_port.as_str());
    let dst_port = port(device.destination_port.as_str());

    let label = match (&src_port, &dst_port) {
        (Some(src), Some(dst)) => Some(format!("{} to {}", src, dst)),
        _ if !opts.is_missing(&device.label) => Some(sanitize_label(&device.label)),
        _ => opts.default_edge_label.clone(),
    };

    let from = NodeId::new(&sanitize(&device.name), &src_port);
    let to = NodeId::new(&sanitize(&device.uplink), &dst_port);
    let mut edge = EdgeStmt::arrow(from, to);
    if let Some(label) = label {
        edge.list.add_attr_str("label", &label);
    }
    Some(edge)
}

/// Builds the cluster diagram of \p topology.
pub fn layout_zones(topology: &Topology, opts: &ClusterOptions) -> DotDocument {
    let mut doc = DotDocument::new("NetworkDiagram", &opts.front_matter());
    let mut names = ClusterNames::default();

    for (location, zones) in &topology.locations {
        let location_id = names.claim(sanitize(location));
        let mut outer = cluster(&location_id, location, location);
        for (zone, devices) in zones {
            let zone_id = names.claim(format!("{}_{}", location_id, sanitize(zone)));
            let fill_key = format!("{}{}", location, zone);
            let mut inner = cluster(&zone_id, zone, &fill_key);
            for idx in devices {
                inner.push(Stmt::Node(device_node(&topology.rows[*idx])));
            }
            log::debug!("Zone {}/{} has {} devices", location, zone, devices.len());
            outer.push(Stmt::SubGraph(inner));
        }
        doc.push(Stmt::SubGraph(outer));
    }

    let mut edges = 0;
    for device in &topology.rows {
        if let Some(edge) = uplink_edge(device, opts) {
            doc.push(Stmt::Edge(edge));
            edges += 1;
        }
    }
    log::info!("Drew {} uplinks", edges);
    doc
}

/// Groups the devices of \p table and returns the DOT document.
pub fn render_zones(table: &Table, opts: &ClusterOptions) -> Result<String> {
    let topology = Topology::build(table, opts)?;
    Ok(layout_zones(&topology, opts).to_dot())
}
