//! Pattern 3: Notification & Traversal
//! Example: Visitor — one operation carried across a heterogeneous tree
//!
//! Run with: cargo run --example p3_visitor

use composition_patterns::{PatternError, Registry, Reply, TraversalOrder};

fn main() -> Result<(), PatternError> {
    println!("=== Visitor: Exporting a Drawing ===\n");

    let mut registry = Registry::new();
    // The visit operation: render one node into an SVG-ish line.
    let export = registry.define_capability::<String, String>("svg-export")?;

    let circle = |r: f64| {
        export.register_variant(move |style: &String| {
            Reply::Handled(format!("<circle r=\"{r}\" style=\"{style}\"/>"))
        })
    };
    let rect = |w: f64, h: f64| {
        export.register_variant(move |style: &String| {
            Reply::Handled(format!("<rect w=\"{w}\" h=\"{h}\" style=\"{style}\"/>"))
        })
    };

    // Groups contribute nothing themselves; they only shape the traversal.
    let canvas = export.create_context();
    let badge = export.create_context();
    let dot = export.create_context_with(circle(2.0));
    let frame = export.create_context_with(rect(40.0, 40.0));
    let banner = export.create_context_with(rect(100.0, 20.0));

    export.add_child(canvas, badge)?;
    export.add_child(canvas, banner)?;
    export.add_child(badge, frame)?;
    export.add_child(badge, dot)?;

    let style = "stroke:black".to_string();
    println!("depth-first, node before children:");
    for line in export.traverse(canvas, &style, TraversalOrder::NodeFirst) {
        println!("  {line}");
    }

    // The same tree, visited with a different operation: area accounting.
    let area = registry.define_capability::<(), f64>("shape-area")?;
    let a_canvas = area.create_context();
    let a_frame = area.create_context_with(area.register_variant(|_: &()| Reply::Handled(1600.0)));
    let a_banner = area.create_context_with(area.register_variant(|_: &()| Reply::Handled(2000.0)));
    area.add_child(a_canvas, a_frame)?;
    area.add_child(a_canvas, a_banner)?;

    let total: f64 = area.traverse(a_canvas, &(), TraversalOrder::ChildrenFirst).iter().sum();
    println!("\ntotal inked area: {total:.0}");

    Ok(())
}
