//! Terminal rendering for the binary. The library hands back plain data;
//! everything about how it looks on screen lives here.

use console::style;
use knolib::model::{Library, Topic};
use knolib::views::{BreadcrumbItem, ExampleSummary, TopicHit};

pub fn print_tree(library: &Library) {
    if library.topics.is_empty() {
        println!("No topics yet.");
        return;
    }

    println!("{}", style(&library.name).bold());
    for topic in &library.topics {
        print_node(topic, 0);
    }
}

fn print_node(topic: &Topic, depth: usize) {
    let indent = "  ".repeat(depth);
    let examples = if topic.examples.is_empty() {
        String::new()
    } else {
        format!(" ({} examples)", topic.examples.len())
    };
    println!(
        "{}• {}{} {}",
        indent,
        style(&topic.title).bold(),
        style(examples).dim(),
        style(topic.id).dim()
    );
    for child in &topic.children {
        print_node(child, depth + 1);
    }
}

pub fn print_topic(topic: &Topic, breadcrumb: &[BreadcrumbItem], examples: &[ExampleSummary]) {
    let trail: Vec<&str> = breadcrumb.iter().map(|c| c.title.as_str()).collect();
    println!("{}", style(trail.join(" > ")).dim());
    println!("{}", style(&topic.title).bold());

    if !topic.tags.is_empty() {
        println!("{}", style(format!("tags: {}", topic.tags.join(", "))).dim());
    }
    if !topic.content.is_empty() {
        println!("\n{}", topic.content);
    }
    if !examples.is_empty() {
        println!();
        for summary in examples {
            println!(
                "  {} [{}] {} {}",
                style(&summary.name).bold(),
                summary.language,
                style(&summary.preview).dim(),
                style(summary.id).dim()
            );
        }
    }
}

pub fn print_hits(hits: &[TopicHit]) {
    if hits.is_empty() {
        println!("No matches.");
        return;
    }
    for hit in hits {
        let tags = if hit.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", hit.tags.join(", "))
        };
        println!(
            "{}{} {}",
            style(&hit.title).bold(),
            style(tags).dim(),
            style(hit.id).dim()
        );
        if !hit.preview.is_empty() {
            println!("  {}", style(&hit.preview).dim());
        }
    }
}

pub fn success(message: &str) {
    println!("{}", style(message).green());
}
