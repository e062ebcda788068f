use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::term::{Term, TermCollection};

/// Parse an OBO flat file into a [`TermCollection`].
///
/// # Errors
/// Returns an error if the file cannot be read or a `[Term]` stanza is
/// missing its `id:` tag.
pub fn parse_file(path: &Path) -> Result<TermCollection> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse OBO flat-file text into a [`TermCollection`].
///
/// Recognised per-stanza tags:
/// - `id:`: the stanza identifier (required, first occurrence wins)
/// - `name:`: human-readable name
/// - `is_a:`: shorthand for an `is_a` relationship
/// - `relationship: <type> <target>`: a typed relationship
///
/// Trailing `! ...` comments are stripped from tag values. `[Typedef]` and
/// other non-`[Term]` stanzas are skipped, as are unrecognised tags; the
/// graph core only needs identifiers and relationships. Stanza order in the
/// file fixes collection positions, and positions are vertex identities for
/// every graph built from the result.
pub fn parse_str(contents: &str) -> Result<TermCollection> {
    let mut terms = Vec::new();
    let mut stanza: Option<StanzaState> = None;

    for (line_no, raw) in contents.lines().enumerate() {
        let line = raw.trim();

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if let Some(state) = stanza.take() {
                terms.push(state.finish()?);
            }
            if header == "Term" {
                stanza = Some(StanzaState::new(line_no + 1));
            }
            continue;
        }

        let Some(state) = stanza.as_mut() else {
            continue; // header block or a skipped stanza kind
        };

        let Some((tag, value)) = line.split_once(':') else {
            continue;
        };
        let value = strip_comment(value);

        match tag.trim() {
            "id" => {
                if state.id.is_none() {
                    state.id = Some(value.to_owned());
                }
            }
            "name" => {
                if state.name.is_none() {
                    state.name = Some(value.to_owned());
                }
            }
            "is_a" => state.relationships.push(("is_a".to_owned(), value.to_owned())),
            "relationship" => {
                // "relationship: part_of GO:0005575"
                if let Some((rel_type, target)) = value.split_once(char::is_whitespace) {
                    state
                        .relationships
                        .push((rel_type.to_owned(), target.trim().to_owned()));
                }
            }
            _ => {}
        }
    }

    if let Some(state) = stanza.take() {
        terms.push(state.finish()?);
    }

    Ok(TermCollection::new(terms))
}

/// Accumulates tag lines for one `[Term]` stanza until it is closed.
struct StanzaState {
    line: usize,
    id: Option<String>,
    name: Option<String>,
    relationships: Vec<(String, String)>,
}

impl StanzaState {
    fn new(line: usize) -> Self {
        Self {
            line,
            id: None,
            name: None,
            relationships: Vec::new(),
        }
    }

    fn finish(self) -> Result<Term> {
        let id = self
            .id
            .ok_or_else(|| anyhow!("[Term] stanza at line {} has no id tag", self.line))?;
        let mut term = Term::new(id);
        term.name = self.name;
        for (rel_type, target_id) in self.relationships {
            term = term.with_relationship(rel_type, target_id);
        }
        Ok(term)
    }
}

/// Strip a trailing `! comment` and surrounding whitespace from a tag value.
fn strip_comment(value: &str) -> &str {
    match value.find('!') {
        Some(pos) => value[..pos].trim(),
        None => value.trim(),
    }
}
