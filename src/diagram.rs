//! Diagram rendering for transition tables.
//!
//! Renders a validated table as a Mermaid `graph TD` flowchart (one edge per
//! record) or as pretty-printed JSON for machine consumption. Labels are
//! looked up by id; missing labels fall back to `s{n}` / `e{n}`.

use crate::core::{Event, StateId};
use crate::table::TransitionTable;

/// Render a table as a Mermaid `graph TD` diagram.
///
/// `state_labels` and `event_labels` are indexed by id. Ids without a label
/// render as `s{n}` / `e{n}`, so partial label sets are fine.
///
/// # Example
///
/// ```rust
/// use transit::diagram;
/// use transit::{Event, StateId, Transition, TransitionTable};
///
/// let table = TransitionTable::new(
///     vec![Transition { from: StateId(0), event: Event(0), to: StateId(1) }],
///     1,
/// ).unwrap();
///
/// let graph = diagram::mermaid(&table, &["idle", "running"], &["EV_START"]);
/// assert_eq!(graph, "graph TD\n  idle -->|EV_START| running\n");
/// ```
pub fn mermaid(table: &TransitionTable, state_labels: &[&str], event_labels: &[&str]) -> String {
    let mut graph = String::from("graph TD\n");
    for t in table.transitions() {
        graph.push_str(&format!(
            "  {} -->|{}| {}\n",
            state_label(state_labels, t.from),
            event_label(event_labels, t.event),
            state_label(state_labels, t.to),
        ));
    }
    graph
}

/// Serialize a table to pretty-printed JSON.
pub fn to_json(table: &TransitionTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

fn state_label(labels: &[&str], id: StateId) -> String {
    match labels.get(id.index()) {
        Some(label) => (*label).to_string(),
        None => id.to_string(),
    }
}

fn event_label(labels: &[&str], event: Event) -> String {
    match labels.get(usize::from(event.0)) {
        Some(label) => (*label).to_string(),
        None => event.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Transition;

    fn t(from: u16, event: u16, to: u16) -> Transition {
        Transition {
            from: StateId(from),
            event: Event(event),
            to: StateId(to),
        }
    }

    #[test]
    fn mermaid_emits_one_edge_per_record() {
        let table = TransitionTable::new(vec![t(0, 0, 1), t(1, 1, 0)], 2).unwrap();
        let graph = mermaid(&table, &["a", "b"], &["next", "back"]);

        assert_eq!(graph, "graph TD\n  a -->|next| b\n  b -->|back| a\n");
    }

    #[test]
    fn missing_labels_fall_back_to_ids() {
        let table = TransitionTable::new(vec![t(0, 0, 3)], 1).unwrap();
        let graph = mermaid(&table, &["a"], &[]);

        assert_eq!(graph, "graph TD\n  a -->|e0| s3\n");
    }

    #[test]
    fn json_export_contains_the_records() {
        let table = TransitionTable::new(vec![t(0, 0, 1)], 1).unwrap();
        let json = to_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["event_count"], 1);
        assert_eq!(value["transitions"][0]["to"], 1);
    }
}
