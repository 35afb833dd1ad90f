//! The knobs of the zone engine and the front matter they produce.

use crate::gv::FrontMatter;
use std::fmt;
use std::str::FromStr;

/// The drawing sizes the diagram can be scaled to, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    Tabloid,
    ArchA,
    ArchB,
    ArchC,
    #[default]
    ArchD,
    ArchE1,
    ArchE,
}

impl PaperSize {
    pub const ALL: [PaperSize; 7] = [
        PaperSize::Tabloid,
        PaperSize::ArchA,
        PaperSize::ArchB,
        PaperSize::ArchC,
        PaperSize::ArchD,
        PaperSize::ArchE1,
        PaperSize::ArchE,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::Tabloid => "11x17",
            PaperSize::ArchA => "ARCH A",
            PaperSize::ArchB => "ARCH B",
            PaperSize::ArchC => "ARCH C",
            PaperSize::ArchD => "ARCH D",
            PaperSize::ArchE1 => "ARCH E1",
            PaperSize::ArchE => "ARCH E",
        }
    }

    /// The value of the graph "size" attribute.
    pub fn size_attr(&self) -> &'static str {
        match self {
            PaperSize::Tabloid => "11,17",
            PaperSize::ArchA => "9,12",
            PaperSize::ArchB => "12,18",
            PaperSize::ArchC => "18,24",
            PaperSize::ArchD => "24,36",
            PaperSize::ArchE1 => "30,42",
            PaperSize::ArchE => "36,48",
        }
    }

    /// Looks up a size by name. Unknown names fall back to ARCH D.
    pub fn from_name(name: &str) -> PaperSize {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown paper size {:?}, using {}", name, PaperSize::default());
            PaperSize::default()
        })
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaperSize::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("unknown paper size: {s:?}"))
    }
}

/// What to do when the same device name shows up on more than one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first row's placement and attributes and warn.
    #[default]
    FirstMatch,
    /// Fail with `Error::DuplicateDevice`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOptions {
    /// Stands in for empty cells and absent optional columns.
    pub sentinel: String,
    /// The header of the column that names each device.
    pub identity_column: String,
    /// The label of uplinks that have neither ports nor a label of their own.
    pub default_edge_label: Option<String>,
    pub splines: String,
    pub ratio: String,
    pub ranksep: String,
    pub paper: PaperSize,
    pub duplicates: DuplicatePolicy,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            sentinel: String::from("Unknown"),
            identity_column: String::from("Domotz Name"),
            default_edge_label: None,
            splines: String::from("ortho"),
            ratio: String::from("auto"),
            ranksep: String::from("1"),
            paper: PaperSize::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl ClusterOptions {
    /// The graph-level block of a zone diagram.
    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter::new()
            .graph_attr("splines", &self.splines)
            .graph_attr("ratio", &self.ratio)
            .graph_attr("size", self.paper.size_attr())
            .graph_attr("ranksep", &self.ranksep)
            .node_attr("shape", "box")
            .node_attr("style", "filled")
            .node_attr("fillcolor", "lightgrey")
            .node_attr("fontname", "Helvetica")
            .setting("nodesep", "1")
            .setting("compound", "true")
    }

    /// Returns true if \p value carries no information.
    pub fn is_missing(&self, value: &str) -> bool {
        value.is_empty() || value == self.sentinel
    }
}
