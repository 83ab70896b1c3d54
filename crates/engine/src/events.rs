//! Status events emitted while files are processed.
//!
//! The engine never prints. Front ends implement [`Reporter`] and decide what
//! to show for each [`Event`].

use crate::bom::Bom;
use crate::options::LineEnding;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A directory is about to be scanned (recursive runs only).
    DirectoryEntered(PathBuf),
    /// A text file is about to be processed.
    FileStarted(PathBuf),
    /// A file was left alone because it is not on the text allow-list.
    FileSkipped(PathBuf),
    /// The leading chunk of a file is being inspected.
    BomCheck,
    /// Result of a byte-order mark check.
    BomChecked(Option<Bom>),
    /// The file is now canonical UTF-8.
    Recoded(PathBuf),
    /// Line terminators were rewritten.
    LineEndingsChanged(LineEnding),
    /// Result of a `decode` action.
    Decoded { path: PathBuf, bom: Option<Bom> },
}

pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: Event) {}
}

/// Records events in order.
impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}
