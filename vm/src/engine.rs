use log::{debug, trace, warn};

use crate::{
    config::SimulationConfig,
    error::{PagingError, Result},
    frame_store::{Frame, FrameStore, Page},
    page_replacer::FIFOPageReplacer,
    page_table::PageTable,
};

/// A page that was pushed out of memory to make room for a faulting one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Eviction {
    pub page_number: usize,
    pub frame_number: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Hit,
    Fault { evicted: Option<Eviction> },
}

/// Where a logical address ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub logical_address: usize,
    pub page_number: usize,
    pub offset: usize,
    pub frame_number: usize,
    pub physical_address: usize,
    pub access: Access,
}

impl Translation {
    pub fn is_hit(&self) -> bool {
        self.access == Access::Hit
    }

    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    pub fn evicted(&self) -> Option<Eviction> {
        match self.access {
            Access::Fault { evicted } => evicted,
            Access::Hit => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub accesses: usize,
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

pub struct PagingEngine {
    page_size: usize,
    frames: FrameStore,
    page_table: PageTable,
    replacer: FIFOPageReplacer,
    stats: EngineStats,
}

impl PagingEngine {
    pub fn new(page_size: usize, memory_size: usize, page_count: usize) -> Result<Self> {
        Self::from_config(&SimulationConfig::new(page_size, memory_size, page_count))
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            "paging: {} pages of {} bytes over {} frames",
            config.page_count,
            config.page_size,
            config.frame_count()
        );

        Ok(PagingEngine {
            page_size: config.page_size,
            frames: FrameStore::new(config.frame_count()),
            page_table: PageTable::new(config.page_count),
            replacer: FIFOPageReplacer::new(),
            stats: EngineStats::default(),
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_table.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.capacity()
    }

    pub fn memory_size(&self) -> usize {
        self.frames.capacity() * self.page_size
    }

    pub fn process_size(&self) -> usize {
        self.page_size * self.page_table.len()
    }

    pub fn frames(&self) -> &[Frame] {
        self.frames.frames()
    }

    pub fn frame_store(&self) -> &FrameStore {
        &self.frames
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// Resident pages in eviction order.
    pub fn load_order(&self) -> Vec<usize> {
        self.replacer.load_order()
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Splits an address into (page number, offset).
    pub fn decompose(&self, address: usize) -> (usize, usize) {
        (address / self.page_size, address % self.page_size)
    }

    /// Translates `address`, faulting its page in if needed. An out-of-range
    /// address leaves the engine untouched, statistics included.
    pub fn access(&mut self, address: usize) -> Result<Translation> {
        let process_size = self.process_size();

        if address >= process_size {
            warn!(
                "paging: address {:#06X} rejected, process size is {} bytes",
                address, process_size
            );

            return Err(PagingError::AddressOutOfBounds {
                address,
                process_size,
            });
        }

        self.stats.accesses += 1;

        let mut fault: Option<Option<Eviction>> = None;

        // The fault handler always leaves the page resident, so the second
        // pass hits.
        for _ in 0..2 {
            let (page_number, offset) = self.decompose(address);

            trace!(
                "paging: addr {:#06X} page_num={:#X} page_offset={:#X}",
                address,
                page_number,
                offset
            );

            if self.page_table.is_resident(page_number)? {
                let frame_number = self.page_table.frame_of(page_number)?;

                let access = match fault {
                    Some(evicted) => Access::Fault { evicted },
                    None => {
                        debug!("paging: page hit, page {} in frame {}", page_number, frame_number);
                        self.stats.hits += 1;
                        Access::Hit
                    }
                };

                return Ok(Translation {
                    logical_address: address,
                    page_number,
                    offset,
                    frame_number,
                    physical_address: frame_number * self.page_size + offset,
                    access,
                });
            }

            if fault.is_some() {
                break;
            }

            debug!("paging: page fault on page {}", page_number);
            self.stats.faults += 1;
            fault = Some(self.handle_page_fault(page_number)?);
        }

        unreachable!("address {:#06X} still unmapped after its page fault", address)
    }

    fn handle_page_fault(&mut self, page_number: usize) -> Result<Option<Eviction>> {
        if self.replacer.len() < self.frames.capacity() {
            // Free frames are handed out in index order and never freed again.
            let frame_number = self.replacer.len();
            self.load_page(page_number, frame_number)?;

            return Ok(None);
        }

        let Some(victim) = self.replacer.pick_replacement_page() else {
            unreachable!("memory is full but no page is resident");
        };
        let frame_number = self.page_table.frame_of(victim)?;

        debug!(
            "paging: replacing page {} in frame {} with page {}",
            victim, frame_number, page_number
        );

        self.page_table.invalidate(victim)?;
        self.load_page(page_number, frame_number)?;
        self.stats.evictions += 1;

        Ok(Some(Eviction {
            page_number: victim,
            frame_number,
        }))
    }

    fn load_page(&mut self, page_number: usize, frame_number: usize) -> Result<()> {
        self.frames.place(frame_number, Page(page_number))?;
        self.page_table.assign(page_number, frame_number)?;
        self.replacer.page_loaded(page_number);

        debug!("paging: page {} loaded into frame {}", page_number, frame_number);

        Ok(())
    }
}
