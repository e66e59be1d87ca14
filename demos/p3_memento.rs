//! Pattern 3: Notification & Traversal
//! Example: Memento — external snapshots, restore by index
//!
//! Run with: cargo run --example p3_memento

use composition_patterns::{Caretaker, Originator, PatternError};

struct Editor {
    buffer: String,
}

impl Originator for Editor {
    type State = String;

    fn capture(&self) -> String {
        self.buffer.clone()
    }

    fn restore(&mut self, state: String) {
        self.buffer = state;
    }
}

fn main() {
    println!("=== Memento: Editor History ===\n");

    let mut editor = Editor { buffer: "S1".into() };
    let mut history: Caretaker<String> = Caretaker::new();

    // Type, sometimes save. S1 is typed over before anything is saved,
    // and S4 is never saved at all.
    editor.buffer = "S2".into();
    history.save(&editor);
    editor.buffer = "S3".into();
    history.save(&editor);
    editor.buffer = "S4".into();

    println!("current buffer: {}", editor.buffer);
    println!("snapshots held: {}\n", history.len());

    history.restore_into(0, &mut editor).expect("snapshot 0 exists");
    println!("after restore(0): {}", editor.buffer);
    history.restore_into(1, &mut editor).expect("snapshot 1 exists");
    println!("after restore(1): {}", editor.buffer);

    // Restoring the same snapshot again changes nothing.
    history.restore_into(1, &mut editor).expect("snapshot 1 exists");
    println!("after restore(1) again: {}", editor.buffer);

    // The caretaker refuses indexes it does not hold.
    match history.restore_into(7, &mut editor) {
        Err(e @ PatternError::IndexOutOfRange { .. }) => println!("\nrestore(7): {e}"),
        other => println!("\nunexpected: {other:?}"),
    }
    println!("buffer untouched: {}", editor.buffer);
}
