use std::{
    fmt::Display,
    io::{self, BufRead},
    ops::ControlFlow,
};

use crate::{Microword, COMMENT_PREFIX, CYCLES_PER_INSTRUCTION, INSTRUCTION_SLOTS};


type Slot = [Microword; CYCLES_PER_INSTRUCTION];

/// The 8×4 microcode table, addressed by `[RI][Rc]`. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MicrocodeStore {
    slots: [Slot; INSTRUCTION_SLOTS],
}

impl MicrocodeStore {
    pub const CAPACITY: usize = INSTRUCTION_SLOTS * CYCLES_PER_INSTRUCTION;

    /// Reads a microcode resource line by line, stopping as soon as the table is full.
    ///
    /// Lines that aren't valid UTF-8 are skipped like any other malformed line. Only
    /// errors from the reader itself are returned.
    pub fn load<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut filler = Filler::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let flow = match std::str::from_utf8(&line) {
                Ok(line) => filler.feed(index + 1, line),
                Err(e) => filler.skip(index + 1, e),
            };

            if flow.is_break() {
                break;
            }
        }

        Ok(filler.finish())
    }

    pub fn parse(text: &str) -> Self {
        let mut filler = Filler::default();

        for (index, line) in text.lines().enumerate() {
            if filler.feed(index + 1, line).is_break() {
                break;
            }
        }

        filler.finish()
    }

    /// Fills the table row-major from already decoded words. Words past capacity are ignored.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Microword>,
    {
        let mut store = Self::default();

        for (index, word) in words.into_iter().take(Self::CAPACITY).enumerate() {
            store.slots[index / CYCLES_PER_INSTRUCTION][index % CYCLES_PER_INSTRUCTION] = word;
        }

        store
    }

    pub fn lookup(&self, instruction: usize, cycle: usize) -> Microword {
        *self
            .slots
            .get(instruction)
            .and_then(|slot| slot.get(cycle))
            .expect("Out of bounds microcode access")
    }

    /// All words as `(slot, cycle, word)`, in addressing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Microword)> + '_ {
        self.slots.iter().enumerate().flat_map(|(instruction, slot)| {
            slot.iter()
                .enumerate()
                .map(move |(cycle, word)| (instruction, cycle, *word))
        })
    }

    pub fn words(&self) -> impl Iterator<Item = Microword> + '_ {
        self.iter().map(|(_, _, word)| word)
    }
}

#[derive(Default)]
struct Filler {
    store: MicrocodeStore,
    filled: usize,
    skipped: usize,
}

impl Filler {
    fn feed(&mut self, line_number: usize, line: &str) -> ControlFlow<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return ControlFlow::Continue(());
        }

        match line.parse::<Microword>() {
            Ok(word) => {
                let index = self.filled;
                self.store.slots[index / CYCLES_PER_INSTRUCTION][index % CYCLES_PER_INSTRUCTION] =
                    word;
                self.filled += 1;
            }
            Err(e) => return self.skip(line_number, e),
        }

        if self.filled == MicrocodeStore::CAPACITY {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn skip<E>(&mut self, line_number: usize, error: E) -> ControlFlow<()>
    where
        E: Display,
    {
        log::warn!("Skipping microcode line {}: {}", line_number, error);
        self.skipped += 1;

        ControlFlow::Continue(())
    }

    fn finish(self) -> MicrocodeStore {
        log::debug!(
            "Loaded {} of {} microwords, skipped {} malformed lines",
            self.filled,
            MicrocodeStore::CAPACITY,
            self.skipped
        );

        self.store
    }
}
