//! Static dictionaries and corpora used across harnesses.

use kex_core::{Dictionary, SynonymNode};

/// The built-in music dictionary.
pub fn music() -> Dictionary {
    Dictionary::builtin()
}

/// The built-in seven-line sample corpus.
pub fn sample() -> Vec<String> {
    kex_core::builtin::sample_corpus()
}

/// A small gear dictionary in the on-disk JSON shape.
pub const GEAR_JSON: &str = r#"[
  { "names": ["pedal", "stompbox"], "children": [
    { "names": ["overdrive", "OD"], "children": [
      { "names": ["Tube Screamer", "TS9"] }
    ] },
    { "names": ["delay", "echo"] },
    { "names": ["Line ?6"] }
  ] },
  { "names": ["amp", "amplifier"] }
]"#;

/// Lines exercised against [`GEAR_JSON`].
pub const GEAR_CORPUS: &[&str] = &[
    "bought a TS9 yesterday",
    "the echo trails forever",
    "Line6 Helix on the board",
    "amp is a 1x12 combo",
    "stompbox pedalboard rebuild",
    "nothing to see here",
    "the echo trails forever",
];

/// Every name in the subtree rooted at `node`, collected with an explicit
/// stack rather than recursion, in pre-order.
pub fn subtree_names(node: &SynonymNode) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        out.extend(n.names.iter().cloned());
        stack.extend(n.children.iter().rev());
    }
    out
}

/// Every node in the dictionary, pre-order.
pub fn all_nodes(dict: &Dictionary) -> Vec<&SynonymNode> {
    fn walk<'d>(nodes: &'d [SynonymNode], out: &mut Vec<&'d SynonymNode>) {
        for n in nodes {
            out.push(n);
            walk(&n.children, out);
        }
    }
    let mut out = Vec::new();
    walk(dict.nodes(), &mut out);
    out
}
