use super::Block;

/// Canonical, hash-stable encoding of a block.
///
/// Keys are emitted sorted by name with `", "` and `": "` separators and
/// strings are escaped to pure ASCII. The output must not depend on how
/// `Block` happens to be serialized for API responses, so this does not
/// go through serde.
pub fn encode_block(block: &Block) -> String {
    let mut out = String::with_capacity(96 + block.timestamp.len() + block.previous_hash.len());
    out.push_str("{\"index\": ");
    out.push_str(&block.index.to_string());
    out.push_str(", \"previous_hash\": ");
    push_str_literal(&mut out, &block.previous_hash);
    out.push_str(", \"proof\": ");
    out.push_str(&block.proof.to_string());
    out.push_str(", \"timestamp\": ");
    push_str_literal(&mut out, &block.timestamp);
    out.push('}');
    out
}

/// Append `s` as a quoted, ASCII-only string literal.
fn push_str_literal(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    out.push('"');
}
