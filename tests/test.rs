#[cfg(test)]
mod tests {
    use netviz::core::color::{fnv1a, hue_of, pastel, pastel_from_hue, Color};
    use netviz::core::sanitize::{sanitize, sanitize_label};
    use netviz::core::utils::{save_to_file, sibling_path};
    use netviz::gv::ast::{EdgeStmt, NodeId, NodeStmt, Stmt};
    use netviz::gv::printer::quote;
    use netviz::gv::{parse_record_string, DotDocument, FrontMatter, RecordDef};
    use netviz::table::{Delimiter, Table};
    use netviz::Error;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    const FORBIDDEN: [char; 10] = ['"', ':', ',', '{', '}', '[', ']', '|', '<', '>'];

    fn samples() -> Vec<&'static str> {
        vec![
            "",
            "core-sw",
            "Rack 1/A: \"core\" {x}",
            "24 port",
            "a|b<c>\nd, e",
            "[IDF]\\2\r\n",
            "__already_clean__",
            "\t",
            "1",
        ]
    }

    #[test]
    fn sanitize_identifier() {
        assert_eq!(sanitize("Rack 1/A: \"core\" {x}"), "Rack_1_A-_'core'_x");
        assert_eq!(sanitize("24 port"), "_24_port");
        assert_eq!(sanitize("a\tb"), "a_b");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_label_keeps_spaces() {
        assert_eq!(sanitize_label("a|b<c>\nd, e"), "a_b_c_ d e");
        assert_eq!(sanitize_label("24 port"), "24 port");
        assert_eq!(sanitize_label("aa:bb:cc"), "aa-bb-cc");
        assert_eq!(sanitize_label(""), "");
    }

    #[test]
    fn sanitize_removes_structural_chars() {
        for s in samples() {
            let id = sanitize(s);
            let label = sanitize_label(s);
            for ch in FORBIDDEN {
                assert!(!id.contains(ch), "{:?} -> {:?}", s, id);
                assert!(!label.contains(ch), "{:?} -> {:?}", s, label);
            }
            assert!(!id.contains(' '));
            assert!(!id.starts_with(|c: char| c.is_ascii_digit()));
            assert!(!label.contains('\n'));
        }
    }

    #[test]
    fn sanitize_is_idempotent() {
        for s in samples() {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once);
            let once = sanitize_label(s);
            assert_eq!(sanitize_label(&once), once);
        }
    }

    #[test]
    fn fnv_digest() {
        assert_eq!(fnv1a(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn pastel_colors() {
        assert_eq!(pastel_from_hue(0.5).to_web_color(), "#a8efef");
        assert_eq!(Color::new(255, 0, 16).to_web_color(), "#ff0010");
        assert_eq!(Color::from_hls(0.0, 0.5, 0.0).to_web_color(), "#7f7f7f");

        for key in ["HQ", "HQCore", "Branch Office", ""] {
            let c = pastel(key).to_web_color();
            assert_eq!(c, pastel(key).to_web_color());
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert!(c[1..]
                .chars()
                .all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch)));
            let hue = hue_of(key);
            assert!((0.0..1.0).contains(&hue));
        }
    }

    #[test]
    fn quote_strings() {
        assert_eq!(quote("abc"), "\"abc\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("x\\"), "\"x\\\\\"");
        assert_eq!(quote("PORTS\\n1-12"), "\"PORTS\\n1-12\"");
        // An escaped quote in the input must not close the string.
        assert_eq!(quote("a\\\""), "\"a\\\\\\\"\"");
        assert_eq!(quote("C:\\temp"), "\"C:\\\\temp\"");
        assert_eq!(quote("left\\l"), "\"left\\l\"");
    }

    #[test]
    fn record_label() {
        let rec = RecordDef::Array(vec![
            RecordDef::new_text("a"),
            RecordDef::Array(vec![
                RecordDef::new_text_with_port("b", "p0"),
                RecordDef::new_text("c"),
            ]),
            RecordDef::Array(Vec::new()),
        ]);
        assert_eq!(rec.to_label(), "a | { <p0> b | c } | { }");
        assert_eq!(rec.ports(), vec!["p0".to_string()]);
    }

    #[test]
    fn parse_record_label() {
        let rec = RecordDef::Array(vec![
            RecordDef::new_text("model"),
            RecordDef::Array(vec![
                RecordDef::new_text("PORTS"),
                RecordDef::Array(vec![
                    RecordDef::new_text_with_port("1", "f1"),
                    RecordDef::new_text_with_port("2", "f2"),
                ]),
            ]),
        ]);
        assert_eq!(parse_record_string(&rec.to_label()), rec);

        if let RecordDef::Array(arr) = parse_record_string("<f0> foo") {
            assert_eq!(arr.len(), 1, "expecting one element");
            assert_eq!(arr[0], RecordDef::new_text_with_port("foo", "f0"));
        } else {
            panic!("expecting an array");
        }

        assert_eq!(
            parse_record_string("{ }"),
            RecordDef::Array(vec![RecordDef::Array(Vec::new())])
        );
        // A group that is never closed ends with the input.
        assert_eq!(
            parse_record_string("a | { b"),
            RecordDef::Array(vec![
                RecordDef::new_text("a"),
                RecordDef::Array(vec![RecordDef::new_text("b")]),
            ])
        );
    }

    #[test]
    fn print_document() {
        let mut doc = DotDocument::new("structs", &FrontMatter::records());
        let mut node = NodeStmt::new(NodeId::plain("a"));
        node.list.add_attr_str("label", "x");
        doc.push(Stmt::Node(node));
        let mut edge = EdgeStmt::arrow(NodeId::with_port("a", "p"), NodeId::plain("b"));
        edge.list.add_attr_str("label", "say \"hi\"");
        doc.push(Stmt::Edge(edge));

        let expected = r#"digraph "structs" {
    node [shape="record"];
    splines="true";
    overlap="false";
    rankdir="LR";
    "a" [label="x"];
    "a":"p" -> "b" [label="say \"hi\""];
}
"#;
        assert_eq!(doc.to_dot(), expected);
        assert_eq!(doc.graph().nodes().count(), 1);
        assert_eq!(doc.graph().edges().count(), 1);
    }

    #[test]
    fn load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Location\tZone\n HQ \tCore\n\nBranch\tLobby\n").unwrap();
        let table = Table::load(file.path(), Delimiter::Tab).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 2);
        assert_eq!(table.cell(1, 0), "HQ");
        assert_eq!(table.cell(2, 1), "Lobby");
        assert_eq!(table.cell(7, 7), "");
        assert_eq!(table.body().len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let err = Table::load("/nonexistent/inventory.tsv", Delimiter::Tab).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/inventory.tsv"));
    }

    #[test]
    fn reject_ragged_rows() {
        let err = Table::parse("a,b\nc\n", Delimiter::Comma).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn reject_empty_tables() {
        assert!(matches!(
            Table::parse("", Delimiter::Comma),
            Err(Error::EmptyTable { .. })
        ));
        assert!(matches!(
            Table::parse("\n\r\n\n", Delimiter::Tab),
            Err(Error::EmptyTable { .. })
        ));
    }

    #[test]
    fn quoted_fields() {
        let csv = "name,desc\n\"a,b\",\"say \"\"hi\"\"\"\n\"multi\nline\",x\n";
        let table = Table::parse(csv, Delimiter::Comma).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(1, 0), "a,b");
        assert_eq!(table.cell(1, 1), "say \"hi\"");
        assert_eq!(table.cell(2, 0), "multi\nline");

        let err = Table::parse("a,\"b\n", Delimiter::Comma).unwrap_err();
        assert!(matches!(err, Error::UnterminatedQuote { line: 1 }));
    }

    #[test]
    fn byte_order_mark_and_crlf() {
        let table = Table::parse("\u{feff}a;b\r\nc;d\r\n", Delimiter::Other(';')).unwrap();
        assert_eq!(table.cell(0, 0), "a");
        assert_eq!(table.cell(1, 1), "d");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn parse_delimiters() {
        assert_eq!("tab".parse::<Delimiter>(), Ok(Delimiter::Tab));
        assert_eq!("\\t".parse::<Delimiter>(), Ok(Delimiter::Tab));
        assert_eq!(",".parse::<Delimiter>(), Ok(Delimiter::Comma));
        assert_eq!(";".parse::<Delimiter>(), Ok(Delimiter::Other(';')));
        assert!("ab".parse::<Delimiter>().is_err());
        assert!("\"".parse::<Delimiter>().is_err());
    }

    #[test]
    fn save_and_sibling() {
        assert_eq!(
            sibling_path(Path::new("site/rack1.csv"), "dot"),
            PathBuf::from("site/rack1.dot")
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dot");
        save_to_file(&path, "digraph {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph {}\n");

        // Replacing a file leaves no temporary files around.
        save_to_file(&path, "digraph { a; }\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph { a; }\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let err = save_to_file(&dir.path().join("no/such/dir.dot"), "").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));

        // A failed save keeps the old content.
        let blocked = dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        assert!(save_to_file(&blocked, "digraph {}\n").is_err());
        assert!(blocked.is_dir());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph { a; }\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
