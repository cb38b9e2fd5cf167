use std::fmt;

use crate::error::{PagingError, Result};

/// A logical page. Carries nothing but its number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Page(pub usize);

impl Page {
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub page: Option<Page>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(f, "Frame {}: {}", self.index, page),
            None => write!(f, "Frame {}: Empty", self.index),
        }
    }
}

/// The simulated physical memory: a fixed pool of frames.
#[derive(Debug, Clone)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    pub fn new(frame_count: usize) -> Self {
        let frames = (0..frame_count)
            .map(|index| Frame { index, page: None })
            .collect();

        FrameStore { frames }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Overwrites whatever occupies `frame_number`. The previous occupant must
    /// already be unmapped in the page table.
    pub fn place(&mut self, frame_number: usize, page: Page) -> Result<()> {
        let frame_count = self.frames.len();

        let frame = self
            .frames
            .get_mut(frame_number)
            .ok_or(PagingError::FrameOutOfRange {
                frame_number,
                frame_count,
            })?;
        frame.page = Some(page);

        Ok(())
    }

    pub fn describe(&self, frame_number: usize) -> Option<&Frame> {
        self.frames.get(frame_number)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_empty()).count()
    }
}
