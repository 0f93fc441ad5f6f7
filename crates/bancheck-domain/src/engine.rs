use crate::exempt::is_exempt;
use crate::model::{BanEntry, Occurrence, Violation};
use crate::policy::{BanPolicy, PolicyTable};
use std::slice;

/// Evaluate occurrences against a single table.
///
/// The result is lazy: occurrences are pulled only as violations are requested, and
/// dropping the iterator stops the pass. For each occurrence every non-exempt entry under
/// its identifier yields one violation, in the table's accumulation order.
pub fn evaluate<I>(table: &PolicyTable, occurrences: I) -> Violations<'_, I::IntoIter>
where
    I: IntoIterator<Item = Occurrence>,
{
    Violations::new(Lookup::Table(table), occurrences.into_iter())
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Lookup<'p> {
    Table(&'p PolicyTable),
    ByKind(&'p BanPolicy),
}

impl<'p> Lookup<'p> {
    fn entries_for(self, occurrence: &Occurrence) -> Option<&'p [BanEntry]> {
        let table = match self {
            Lookup::Table(t) => t,
            Lookup::ByKind(p) => p.table(occurrence.kind),
        };
        table.get(&occurrence.identifier)
    }
}

/// Lazy violation stream returned by [`evaluate`] and [`BanPolicy::evaluate`].
#[derive(Debug)]
pub struct Violations<'p, I> {
    lookup: Lookup<'p>,
    occurrences: I,
    pending: Option<(Occurrence, slice::Iter<'p, BanEntry>)>,
}

impl<'p, I> Violations<'p, I> {
    pub(crate) fn new(lookup: Lookup<'p>, occurrences: I) -> Self {
        Self {
            lookup,
            occurrences,
            pending: None,
        }
    }
}

impl<'p, I> Iterator for Violations<'p, I>
where
    I: Iterator<Item = Occurrence>,
{
    type Item = Violation<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((occurrence, entries)) = self.pending.as_mut() {
                for entry in entries.by_ref() {
                    if !is_exempt(entry, &occurrence.path) {
                        return Some(Violation {
                            occurrence: occurrence.clone(),
                            entry,
                        });
                    }
                }
                self.pending = None;
            }

            let occurrence = self.occurrences.next()?;
            if let Some(entries) = self.lookup.entries_for(&occurrence) {
                self.pending = Some((occurrence, entries.iter()));
            }
        }
    }
}
