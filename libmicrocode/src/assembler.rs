use crate::{MicrocodeStore, Microword};

/// Renders microwords in the text resource format, one word per line.
pub fn assemble<I>(words: I) -> String
where
    I: IntoIterator<Item = Microword>,
{
    words.into_iter().fold(String::new(), |mut output, word| {
        output.push_str(&word.to_string());
        output.push('\n');
        output
    })
}

/// Renders a whole store with a comment header per instruction slot.
pub fn assemble_store(store: &MicrocodeStore) -> String {
    let mut output = String::new();

    for (slot, cycle, word) in store.iter() {
        if cycle == 0 {
            output.push_str(&format!("{} slot {}\n", crate::COMMENT_PREFIX, slot));
        }

        output.push_str(&word.to_string());
        output.push('\n');
    }

    output
}
