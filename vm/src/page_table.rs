use std::fmt;

use crate::error::{PagingError, Result};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    pub valid: bool,
    /// Only meaningful while `valid` is set; stale otherwise.
    pub frame_number: usize,
}

impl PageTableEntry {
    /// The frame holding the page, if the page is resident.
    pub fn frame(&self) -> Option<usize> {
        self.valid.then_some(self.frame_number)
    }
}

/// One displayable row of the page table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageTableRow {
    pub page_number: usize,
    pub entry: PageTableEntry,
}

impl fmt::Display for PageTableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry.frame() {
            Some(frame_number) => {
                write!(f, "Page {} -> Frame {}", self.page_number, frame_number)
            }
            None => write!(f, "Page {} -> Not loaded in memory", self.page_number),
        }
    }
}

/// Residency record for every logical page of the process.
#[derive(Debug, Clone)]
pub struct PageTable {
    table: Vec<PageTableEntry>,
}

impl PageTable {
    pub fn new(page_count: usize) -> Self {
        PageTable {
            table: vec![PageTableEntry::default(); page_count],
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn slot(&self, page_number: usize) -> Result<&PageTableEntry> {
        self.table
            .get(page_number)
            .ok_or(PagingError::PageOutOfRange {
                page_number,
                page_count: self.table.len(),
            })
    }

    fn slot_mut(&mut self, page_number: usize) -> Result<&mut PageTableEntry> {
        let page_count = self.table.len();

        self.table
            .get_mut(page_number)
            .ok_or(PagingError::PageOutOfRange {
                page_number,
                page_count,
            })
    }

    pub fn is_resident(&self, page_number: usize) -> Result<bool> {
        Ok(self.slot(page_number)?.valid)
    }

    /// Returns the recorded frame number. Callers must check
    /// [`PageTable::is_resident`] first, the value is stale for unmapped pages.
    pub fn frame_of(&self, page_number: usize) -> Result<usize> {
        Ok(self.slot(page_number)?.frame_number)
    }

    pub fn get(&self, page_number: usize) -> Result<PageTableEntry> {
        self.slot(page_number).copied()
    }

    pub fn assign(&mut self, page_number: usize, frame_number: usize) -> Result<()> {
        *self.slot_mut(page_number)? = PageTableEntry {
            valid: true,
            frame_number,
        };

        Ok(())
    }

    pub fn invalidate(&mut self, page_number: usize) -> Result<()> {
        self.slot_mut(page_number)?.valid = false;

        Ok(())
    }

    pub fn resident_count(&self) -> usize {
        self.table.iter().filter(|entry| entry.valid).count()
    }

    pub fn entries(&self) -> impl Iterator<Item = PageTableRow> + '_ {
        self.table
            .iter()
            .enumerate()
            .map(|(page_number, entry)| PageTableRow {
                page_number,
                entry: *entry,
            })
    }
}
