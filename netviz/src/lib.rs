/*!
This crate turns spreadsheet exports of network inventories into GraphViz
DOT documents. It has two engines that share the same primitives:

* The port-record engine ([`ports`]) draws one device as a single `record`
  node whose label lists every port, split into fixed-size sections, and
  connects each cabled port to the device on the other end.

* The zone engine ([`zones`]) groups many devices into location and zone
  clusters, colors every cluster deterministically, and draws the uplinks
  between devices.

The crate only produces text. Rendering the document is left to the external
`dot` program; see [`backends::graphviz`] for a thin wrapper around it.

# Example: draw a site from a CSV export

```rust
    use netviz::table::{Delimiter, Table};
    use netviz::zones::{render_zones, ClusterOptions};

    let csv = "Location,Zone,Domotz Name,Model,MAC,IP Address,Uplink\n\
               HQ,Core,core-sw,C9300,aa:bb,10.0.0.1,Internet\n\
               HQ,Floor 1,edge-sw,C9200,cc:dd,10.0.0.2,core-sw\n";

    let table = Table::parse(csv, Delimiter::Comma).unwrap();
    let dot = render_zones(&table, &ClusterOptions::default()).unwrap();
    assert!(dot.contains("subgraph \"cluster_HQ\""));
    assert!(dot.contains("\"edge-sw\" -> \"core-sw\""));
```

# Example: draw the ports of one switch

```rust
    use netviz::ports::{render_ports, InventoryLayout};
    use netviz::table::{Delimiter, Table};

    let tsv = "Switch\t\tType\tPort\tVLAN\tConnected\n\
               SW01\t\tGi\t1\t10\tcamera-1\n\
               Model\tC9200\tGi\t2\t\t\n";

    let table = Table::parse(tsv, Delimiter::Tab).unwrap();
    let dot = render_ports(&table, &InventoryLayout::switch()).unwrap();
    assert!(dot.contains("\"SW01\":\"SW01f1\" -> \"camera-1\""));
```

*/

pub mod backends;
pub mod core;
pub mod gv;
pub mod ports;
pub mod table;
pub mod zones;

pub use crate::core::error::{Error, Result};
