//! Construction parameters for a simulated process.

use crate::error::{PagingError, Result};

/// Physical memory size used when a process is created from its size alone.
pub const DEFAULT_MEMORY_SIZE: usize = 16;

pub const DEFAULT_PAGE_SIZE: usize = 4;

pub const DEFAULT_PAGE_COUNT: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub page_size: usize,
    pub memory_size: usize,
    pub page_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            page_size: DEFAULT_PAGE_SIZE,
            memory_size: DEFAULT_MEMORY_SIZE,
            page_count: DEFAULT_PAGE_COUNT,
        }
    }
}

impl SimulationConfig {
    pub fn new(page_size: usize, memory_size: usize, page_count: usize) -> Self {
        SimulationConfig {
            page_size,
            memory_size,
            page_count,
        }
    }

    /// Splits a process of `process_size` bytes into pages, rounding the last
    /// partial page up.
    pub fn for_process(process_size: usize, page_size: usize, memory_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(PagingError::InvalidConstruction {
                reason: "page size must be positive".into(),
            });
        }

        let config = SimulationConfig {
            page_size,
            memory_size,
            page_count: process_size.div_ceil(page_size),
        };
        config.validate()?;

        Ok(config)
    }

    pub fn frame_count(&self) -> usize {
        self.memory_size / self.page_size
    }

    pub fn process_size(&self) -> usize {
        self.page_size * self.page_count
    }

    /// Rejects layouts the engine cannot model. Memory that is not a whole
    /// number of frames is an error, not truncated.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.page_size == 0 {
            "page size must be positive".to_string()
        } else if self.memory_size == 0 {
            "memory size must be positive".to_string()
        } else if self.page_count == 0 {
            "process must have at least one page".to_string()
        } else if self.memory_size % self.page_size != 0 {
            format!(
                "memory size {} is not a multiple of page size {}",
                self.memory_size, self.page_size
            )
        } else if self.page_size.checked_mul(self.page_count).is_none() {
            format!(
                "process of {} pages of {} bytes overflows the address space",
                self.page_count, self.page_size
            )
        } else {
            return Ok(());
        };

        Err(PagingError::InvalidConstruction { reason })
    }
}
