use std::collections::VecDeque;

/// Evicts in load order. Hits never refresh a page's position.
#[derive(Debug, Clone, Default)]
pub struct FIFOPageReplacer {
    fifo: VecDeque<usize>,
}

impl FIFOPageReplacer {
    pub fn new() -> Self {
        FIFOPageReplacer {
            fifo: VecDeque::new(),
        }
    }

    pub fn page_loaded(&mut self, page_number: usize) {
        self.fifo.push_back(page_number)
    }

    /// Removes and returns the oldest-loaded page.
    pub fn pick_replacement_page(&mut self) -> Option<usize> {
        self.fifo.pop_front()
    }

    pub fn len(&self) -> usize {
        self.fifo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }

    /// Resident pages, next victim first.
    pub fn load_order(&self) -> Vec<usize> {
        self.fifo.iter().copied().collect()
    }
}
