//! A collection of helpers that are related to records. Records are recursive
//! data-structures that contain boxes and labels. The engines build a record
//! as a tree and serialize it once into the label of a `shape=record` node.
//! The parser reads such a label back into the tree.

/// A record field: either a text cell with an optional port name, or a group
/// of fields. Nested groups flip between rows and columns when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDef {
    // Label, port:
    Text(String, Option<String>),
    Array(Vec<RecordDef>),
}

impl RecordDef {
    pub fn new_text(s: &str) -> Self {
        RecordDef::Text(s.to_string(), None)
    }

    pub fn new_text_with_port(s: &str, p: &str) -> Self {
        RecordDef::Text(s.to_string(), Some(p.to_string()))
    }

    /// Serializes the record into a label string. The outermost group is
    /// written without braces, as GraphViz expects.
    pub fn to_label(&self) -> String {
        match self {
            RecordDef::Array(arr) => Self::join(arr),
            _ => self.to_field(),
        }
    }

    fn join(arr: &[RecordDef]) -> String {
        let fields: Vec<String> = arr.iter().map(|f| f.to_field()).collect();
        fields.join(" | ")
    }

    fn to_field(&self) -> String {
        match self {
            RecordDef::Text(label, Some(port)) => format!("<{}> {}", port, label),
            RecordDef::Text(label, None) => label.clone(),
            RecordDef::Array(arr) if arr.is_empty() => String::from("{ }"),
            RecordDef::Array(arr) => format!("{{ {} }}", Self::join(arr)),
        }
    }

    /// Returns the port names in this record, in order.
    pub fn ports(&self) -> Vec<String> {
        let mut res = Vec::new();
        self.collect_ports(&mut res);
        res
    }

    fn collect_ports(&self, res: &mut Vec<String>) {
        match self {
            RecordDef::Text(_, Some(port)) => res.push(port.clone()),
            RecordDef::Text(_, None) => {}
            RecordDef::Array(arr) => {
                for elem in arr {
                    elem.collect_ports(res);
                }
            }
        }
    }
}

struct RecordParser {
    input: Vec<char>,
    pos: usize,
}

struct RecordParserFrame {
    label: String,
    arr: Vec<RecordDef>,
}

impl RecordParserFrame {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            arr: Vec::new(),
        }
    }

    /// Split a label such as "<f0> XXX" into the port part "f0" and the text
    /// part "XXX".
    fn split_label_to_text_and_port(str: &str) -> (String, Option<String>) {
        let str = str.trim();
        if let Some(rest) = str.strip_prefix('<') {
            if let Option::Some(idx) = rest.find('>') {
                let port = &rest[..idx];
                return (
                    rest[idx + 1..].trim().to_string(),
                    Option::Some(port.to_string()),
                );
            }
        }
        (str.to_string(), Option::None)
    }

    pub fn finalize_label(&mut self) {
        if !self.label.trim().is_empty() {
            let ret = Self::split_label_to_text_and_port(&self.label);
            let text = RecordDef::Text(ret.0, ret.1);
            self.arr.push(text);
        }
        self.label.clear();
    }

    pub fn finalize_record(&mut self) -> RecordDef {
        self.finalize_label();
        RecordDef::Array(std::mem::take(&mut self.arr))
    }
}

impl RecordParser {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn parse(&mut self) -> RecordDef {
        let mut frame = RecordParserFrame::new();
        // Stop at the end of the buffer, even if a group is left open.
        while let Some(&ch) = self.input.get(self.pos) {
            self.pos += 1;
            match ch {
                '{' => {
                    // Finalize the label.
                    frame.finalize_label();
                    // Parse the sub row:
                    let ret = self.parse();
                    frame.arr.push(ret);
                }
                '|' => {
                    // New record in the row.
                    frame.finalize_label();
                }
                '}' => {
                    // Finish the row.
                    return frame.finalize_record();
                }
                _ => {
                    // Handle regular chars. Add them to the current label.
                    frame.label.push(ch);
                }
            }
        }
        frame.finalize_record()
    }
}

/// Parses a record label into its tree. The result is always an Array; an
/// empty group parses to an empty Array.
pub fn parse_record_string(label: &str) -> RecordDef {
    RecordParser::new(label).parse()
}
