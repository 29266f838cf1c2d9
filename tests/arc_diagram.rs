//! Flattening parsed trees into arc diagrams

use deptree::arcs::{DependencyArc, Direction, Word};
use deptree::formats::{FormatParams, FormatRegistry};
use deptree::{convert, parse_tree, to_arc_diagram};
use std::fs;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).expect("Failed to read fixture")
}

fn word(tag: &str, text: &str) -> Word {
    Word {
        tag: tag.to_string(),
        text: text.to_string(),
    }
}

fn arc(dir: Direction, start: usize, end: usize, label: &str) -> DependencyArc {
    DependencyArc {
        dir,
        start,
        end,
        label: label.to_string(),
    }
}

#[test]
fn impressed_words_and_arcs() {
    let diagram = convert(&read_fixture("impressed.txt")).unwrap();

    assert_eq!(
        diagram.words,
        vec![
            word("PRP", "I"),
            word("VBP", "am"),
            word("RB", "very"),
            word("JJ", "impressed"),
            word(".", "."),
        ]
    );
    // The head "impressed" sits at 3: everything before it hangs to the left.
    assert_eq!(
        diagram.arcs,
        vec![
            arc(Direction::Left, 0, 3, "nsubj"),
            arc(Direction::Left, 1, 3, "cop"),
            arc(Direction::Left, 2, 3, "advmod"),
            arc(Direction::Right, 3, 4, "punct"),
        ]
    );
}

#[test]
fn impressed_json_snapshot() {
    let tree = parse_tree(&read_fixture("impressed.txt")).unwrap();
    let json = FormatRegistry::with_defaults()
        .serialize(&tree, "arcs", &FormatParams::new())
        .unwrap();

    insta::assert_snapshot!("impressed_arcs", json);
}

#[test]
fn nested_arcs_cover_every_edge() {
    let tree = parse_tree(&read_fixture("friend.txt")).unwrap();
    let diagram = to_arc_diagram(&tree).unwrap();

    assert_eq!(diagram.words.len(), tree.len());
    assert_eq!(diagram.arcs.len(), tree.len() - 1);

    for edge in tree.edges() {
        let (head, dependent) = (edge.parent.order, edge.child.order);
        let expected = arc(
            if head < dependent {
                Direction::Right
            } else {
                Direction::Left
            },
            head.min(dependent),
            head.max(dependent),
            &edge.child.role,
        );
        assert!(diagram.arcs.contains(&expected), "missing {expected:?}");
    }

    for (i, node) in tree.sentence_order().unwrap().iter().enumerate() {
        assert_eq!(diagram.words[i].text, node.word);
    }
}

#[test]
fn nested_arc_spans() {
    let diagram = convert(&read_fixture("pizza.txt")).unwrap();

    assert!(diagram.arcs.contains(&arc(Direction::Left, 2, 3, "det")));
    assert!(diagram.arcs.contains(&arc(Direction::Right, 4, 5, "pobj")));
    assert!(diagram.arcs.contains(&arc(Direction::Right, 1, 6, "punct")));
    assert!(diagram.arcs.iter().all(|a| a.start <= a.end));
}
