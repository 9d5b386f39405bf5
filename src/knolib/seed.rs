//! First-run seed document.
//!
//! When no data file exists (or the one on disk is unreadable), the store
//! materializes this library so the tree view is never empty.

use crate::model::{Example, Library, Topic};

pub fn default_library() -> Library {
    let mut library = Library::new(
        "My Library",
        "A personal knowledge base for things worth keeping",
    );

    let mut programming =
        Topic::new("Programming").with_content("Notes on languages and concepts");
    let mut python =
        Topic::new("Python").with_content("Everything I keep relearning about Python");
    let mut basics = Topic::new("Basics").with_content("Core syntax and concepts");

    let mut data_types = Topic::new("Data Types").with_content(
        "Python's built-in types:\n\n\
         ## Numeric\n\
         - **int**: whole numbers (42, -17)\n\
         - **float**: decimals (3.14, -2.5)\n\n\
         ## Text\n\
         - **str**: string data\n\n\
         ## Collections\n\
         - **list**: ordered, mutable\n\
         - **tuple**: ordered, immutable\n\
         - **dict**: key/value pairs\n\
         - **set**: unique elements",
    );
    data_types.tags.push("python".to_string());

    data_types.add_example(Example::new(
        "Integer arithmetic",
        "total = 10 + 5    # 15\n\
         quotient = 15 // 3  # 5 (floor division)\n\
         remainder = 17 % 5  # 2\n\
         power = 2 ** 3      # 8\n\
         print(f\"total: {total}\")",
        "python",
    ));
    data_types.add_example(Example::new(
        "String operations",
        "name = \"Ada\"\n\
         greeting = f\"Hello, {name}!\"\n\
         print(greeting.upper())  # HELLO, ADA!\n\
         print(len(name))         # 3",
        "python",
    ));

    let mut control_flow =
        Topic::new("Control Flow").with_content("Branching and repetition");
    control_flow.add_example(Example::new(
        "If/elif/else",
        "score = 85\n\
         if score >= 90:\n\
             grade = \"A\"\n\
         elif score >= 80:\n\
             grade = \"B\"\n\
         else:\n\
             grade = \"C\"\n\
         print(grade)",
        "python",
    ));

    basics.add_child(data_types);
    basics.add_child(control_flow);
    python.add_child(basics);
    programming.add_child(python);
    library.add_topic(programming);

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_nonempty() {
        let lib = default_library();
        assert!(!lib.topics.is_empty());
    }

    #[test]
    fn test_seed_has_nested_examples() {
        let lib = default_library();
        // at least one example attached somewhere below the root
        fn has_example(topic: &crate::model::Topic) -> bool {
            !topic.examples.is_empty() || topic.children.iter().any(has_example)
        }
        assert!(lib.topics.iter().any(has_example));
    }

    #[test]
    fn test_seed_parent_ids_are_consistent() {
        fn check(topic: &crate::model::Topic) {
            for child in &topic.children {
                assert_eq!(child.parent_id, Some(topic.id));
                check(child);
            }
        }
        let lib = default_library();
        for root in &lib.topics {
            assert_eq!(root.parent_id, None);
            check(root);
        }
    }
}
