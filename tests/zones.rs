#[cfg(test)]
mod tests {
    use netviz::backends::graphviz::Renderer;
    use netviz::core::color::pastel;
    use netviz::gv::ast::{NodeId, Stmt};
    use netviz::table::{Delimiter, Table};
    use netviz::zones::{
        layout_zones, render_zones, uplink_edge, ClusterOptions, DuplicatePolicy, PaperSize,
        Topology,
    };
    use netviz::Error;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;
    use std::path::Path;

    const HEADER: &str =
        "Location,Zone,Domotz Name,Model,MAC,IP Address,Uplink,Source Port,Destination Port,Label";

    fn site(rows: &[&str]) -> Table {
        let mut text = format!("{}\n", HEADER);
        for r in rows {
            text.push_str(r);
            text.push('\n');
        }
        Table::parse(&text, Delimiter::Comma).unwrap()
    }

    fn two_sites() -> Table {
        site(&[
            "North,Core,A,M1,aa,10.0.0.1,B,1,2,",
            "North,Core,A2,M1,ab,10.0.0.2,Internet,,,",
            "South,Core,B,M2,ba,10.0.1.1,Internet,,,",
            "South,Core,B2,M2,bb,10.0.1.2,Unknown,,,",
        ])
    }

    #[test]
    fn cross_location_uplink() {
        let opts = ClusterOptions::default();
        let topology = Topology::build(&two_sites(), &opts).unwrap();
        assert_eq!(topology.device_count(), 4);
        let doc = layout_zones(&topology, &opts);
        let graph = doc.graph();

        let locations: Vec<_> = graph.subgraphs().collect();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "cluster_North");
        assert_eq!(locations[1].name, "cluster_South");
        for loc in &locations {
            let zones: Vec<_> = loc.subgraphs().collect();
            assert_eq!(zones.len(), 1);
            assert_eq!(zones[0].nodes().count(), 2);
        }
        assert_eq!(
            locations[0].subgraphs().next().unwrap().name,
            "cluster_North_Core"
        );

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, NodeId::with_port("A", "1"));
        assert_eq!(edges[0].to[0], NodeId::with_port("B", "2"));
        assert_eq!(edges[0].list.get("label"), Some("1 to 2"));

        let dot = doc.to_dot();
        assert!(dot.contains("    \"A\":\"1\" -> \"B\":\"2\" [label=\"1 to 2\"];\n"));
        assert_eq!(dot.matches('{').count(), dot.matches('}').count());
    }

    #[test]
    fn cluster_attributes() {
        let dot = render_zones(&two_sites(), &ClusterOptions::default()).unwrap();
        let north = format!(
            "    subgraph \"cluster_North\" {{\n        label=\"North\";\n        style=\"filled,rounded\";\n        fillcolor=\"{}\";\n",
            pastel("North").to_web_color()
        );
        assert!(dot.contains(&north), "{}", dot);
        let zone = format!(
            "subgraph \"cluster_South_Core\" {{\n            label=\"Core\";\n            style=\"filled,rounded\";\n            fillcolor=\"{}\";\n",
            pastel("SouthCore").to_web_color()
        );
        assert!(dot.contains(&zone), "{}", dot);
        assert!(dot.contains(
            "            \"A\" [label=\"A\\nM1\\nMAC: aa\\nIP: 10.0.0.1\"];\n"
        ));
    }

    #[test]
    fn front_matter() {
        let dot = render_zones(&two_sites(), &ClusterOptions::default()).unwrap();
        let expected = "digraph \"NetworkDiagram\" {
    graph [splines=\"ortho\", ratio=\"auto\", size=\"24,36\", ranksep=\"1\"];
    node [shape=\"box\", style=\"filled\", fillcolor=\"lightgrey\", fontname=\"Helvetica\"];
    nodesep=\"1\";
    compound=\"true\";
";
        assert_eq!(&dot[..expected.len()], expected);

        let opts = ClusterOptions {
            paper: PaperSize::from_name("ARCH E1"),
            splines: "curved".to_string(),
            ..ClusterOptions::default()
        };
        let dot = render_zones(&two_sites(), &opts).unwrap();
        assert!(dot.contains("graph [splines=\"curved\", ratio=\"auto\", size=\"30,42\""));
    }

    #[test]
    fn paper_sizes() {
        assert_eq!(PaperSize::from_name("11x17").size_attr(), "11,17");
        assert_eq!(PaperSize::from_name("arch a").size_attr(), "9,12");
        assert_eq!(PaperSize::from_name("ARCH E").size_attr(), "36,48");
        assert_eq!(PaperSize::from_name("poster"), PaperSize::ArchD);
        assert!("poster".parse::<PaperSize>().is_err());
        for p in PaperSize::ALL {
            assert_eq!(p.name().parse::<PaperSize>(), Ok(p));
        }
    }

    #[test]
    fn first_seen_order() {
        let table = site(&[
            "West,Lobby,w1,,,,,,,",
            "East,Core,e1,,,,,,,",
            "West,Core,w2,,,,,,,",
            "West,Lobby,w3,,,,,,,",
        ]);
        let topology = Topology::build(&table, &ClusterOptions::default()).unwrap();
        let locations: Vec<&String> = topology.locations.keys().collect();
        assert_eq!(locations, vec!["West", "East"]);
        let west = &topology.locations["West"];
        let zones: Vec<&String> = west.keys().collect();
        assert_eq!(zones, vec!["Lobby", "Core"]);
        let names: Vec<&str> = west["Lobby"]
            .iter()
            .map(|i| topology.rows[*i].name.as_str())
            .collect();
        assert_eq!(names, vec!["w1", "w3"]);
    }

    #[test]
    fn suppressed_uplinks() {
        let table = site(&[
            "HQ,Core,a,,,,Internet,,,",
            "HQ,Core,b,,,,Unknown,,,",
            "HQ,Core,c,,,,,,,",
            "HQ,Core,d,,,,a,,,",
            "HQ,Core,e,,,,ghost,,,",
        ]);
        let dot = render_zones(&table, &ClusterOptions::default()).unwrap();
        assert!(dot.contains("    \"d\" -> \"a\";\n"));
        // Targets that are not in the table still get an edge.
        assert!(dot.contains("    \"e\" -> \"ghost\";\n"));
        assert_eq!(dot.matches(" -> ").count(), 2);
    }

    #[test]
    fn edge_labels() {
        let opts = ClusterOptions {
            default_edge_label: Some("uplink".to_string()),
            ..ClusterOptions::default()
        };
        let table = site(&[
            "HQ,Core,a,,,,b,Gi1/0/1,,fiber",
            "HQ,Core,b,,,,c,,Te1,",
            "HQ,Core,c,,,,d,,,",
        ]);
        let topology = Topology::build(&table, &opts).unwrap();

        let e = uplink_edge(&topology.rows[0], &opts).unwrap();
        assert_eq!(e.from, NodeId::with_port("a", "Gi1_0_1"));
        assert_eq!(e.to[0], NodeId::plain("b"));
        assert_eq!(e.list.get("label"), Some("fiber"));

        let e = uplink_edge(&topology.rows[1], &opts).unwrap();
        assert_eq!(e.to[0], NodeId::with_port("c", "Te1"));
        assert_eq!(e.list.get("label"), Some("uplink"));

        let e = uplink_edge(&topology.rows[2], &ClusterOptions::default()).unwrap();
        assert!(e.list.is_empty());
    }

    #[test]
    fn sentinel_fills_missing_values() {
        let table = Table::parse(
            "Location,Zone,Domotz Name,Uplink\n,Core,a,\nHQ,,b,a\n",
            Delimiter::Comma,
        )
        .unwrap();
        let opts = ClusterOptions::default();
        let topology = Topology::build(&table, &opts).unwrap();
        assert!(topology.locations.contains_key("Unknown"));
        assert!(topology.locations["HQ"].contains_key("Unknown"));
        assert_eq!(topology.rows[0].model, "Unknown");

        let dot = layout_zones(&topology, &opts).to_dot();
        assert!(dot.contains("\"a\" [label=\"a\\nUnknown\\nMAC: Unknown\\nIP: Unknown\"];"));
        assert!(dot.contains("\"b\" -> \"a\";"));

        let opts = ClusterOptions {
            sentinel: "n/a".to_string(),
            ..ClusterOptions::default()
        };
        let topology = Topology::build(&table, &opts).unwrap();
        assert!(topology.locations.contains_key("n/a"));
    }

    #[test]
    fn missing_columns() {
        let table = Table::parse("Location,Zone,Domotz Name\nHQ,Core,a\n", Delimiter::Comma)
            .unwrap();
        let err = Topology::build(&table, &ClusterOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "Uplink"));

        let table = Table::parse("Location,Zone,Name,Uplink\nHQ,Core,a,b\n", Delimiter::Comma)
            .unwrap();
        let err = Topology::build(&table, &ClusterOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "Domotz Name"));

        let opts = ClusterOptions {
            identity_column: "Name".to_string(),
            ..ClusterOptions::default()
        };
        let dot = render_zones(&table, &opts).unwrap();
        assert!(dot.contains("\"a\" -> \"b\";"));
    }

    #[test]
    fn duplicate_devices() {
        let table = site(&[
            "HQ,Core,a,M1,,,b,,,",
            "Branch,Lobby,a,M2,,,c,,,",
            "HQ,Core,b,,,,,,,",
        ]);
        let opts = ClusterOptions::default();
        let topology = Topology::build(&table, &opts).unwrap();
        assert_eq!(topology.device_count(), 2);
        assert!(!topology.locations.contains_key("Branch"));

        let doc = layout_zones(&topology, &opts);
        let nodes: usize = doc
            .graph()
            .subgraphs()
            .flat_map(|loc| loc.subgraphs())
            .map(|zone| zone.nodes().count())
            .sum();
        assert_eq!(nodes, 2);
        // Every row still draws its uplink.
        assert_eq!(doc.graph().edges().count(), 2);
        assert!(doc.to_dot().contains("\"a\" [label=\"a\\nM1"));

        let strict = ClusterOptions {
            duplicates: DuplicatePolicy::Reject,
            ..ClusterOptions::default()
        };
        let err = Topology::build(&table, &strict).unwrap_err();
        assert!(matches!(err, Error::DuplicateDevice(ref d) if d == "a"));
    }

    #[test]
    fn names_are_sanitized() {
        let table = site(&["Main Hall,Rack 1/2,\"core, sw\",,,,\"Edge {1}\",,,"]);
        let opts = ClusterOptions::default();
        let doc = layout_zones(&Topology::build(&table, &opts).unwrap(), &opts);
        let loc = doc.graph().subgraphs().next().unwrap();
        assert_eq!(loc.name, "cluster_Main_Hall");
        let zone = loc.subgraphs().next().unwrap();
        assert_eq!(zone.name, "cluster_Main_Hall_Rack_1_2");
        assert!(zone
            .list
            .list
            .contains(&Stmt::Assign("label".to_string(), "Rack 1_2".to_string())));
        assert_eq!(zone.nodes().next().unwrap().id, NodeId::plain("core_sw"));
        let edge = doc.graph().edges().next().unwrap();
        assert_eq!(edge.to[0], NodeId::plain("Edge_1"));
    }

    #[test]
    fn distinct_clusters_for_colliding_names() {
        let table = site(&[
            "A B,Core,x,,,,,,,",
            "A_B,Core,y,,,,,,,",
            "a,b_c,p,,,,,,,",
            "a_b,c,q,,,,,,,",
        ]);
        let opts = ClusterOptions::default();
        let doc = layout_zones(&Topology::build(&table, &opts).unwrap(), &opts);
        let mut names = Vec::new();
        for loc in doc.graph().subgraphs() {
            names.push(loc.name.clone());
            for zone in loc.subgraphs() {
                assert_eq!(zone.nodes().count(), 1);
                names.push(zone.name.clone());
            }
        }
        assert_eq!(
            names,
            vec![
                "cluster_A_B",
                "cluster_A_B_Core",
                "cluster_A_B_2",
                "cluster_A_B_2_Core",
                "cluster_a",
                "cluster_a_b_c",
                "cluster_a_b",
                "cluster_a_b_c_2",
            ]
        );

        let dot = doc.to_dot();
        assert_eq!(dot.matches("subgraph \"cluster_A_B\" {").count(), 1);
        assert_eq!(dot.matches("subgraph \"cluster_a_b_c\" {").count(), 1);
    }

    #[test]
    fn renderer_arguments() {
        let r = Renderer::default();
        let dot = Path::new("/tmp/my site.dot");
        assert_eq!(
            r.args(dot),
            vec![
                OsString::from("-Tsvg"),
                OsString::from("/tmp/my site.dot"),
                OsString::from("-o"),
                OsString::from("/tmp/my site.svg"),
            ]
        );
        assert_eq!(
            Renderer::new("dot", "png").output_path(dot),
            Path::new("/tmp/my site.png")
        );

        let missing = Renderer::new("netviz-no-such-renderer", "svg");
        assert!(matches!(
            missing.render(dot),
            Err(Error::RenderSpawn { .. })
        ));
    }
}
