//! Demand-paging simulator.
//!
//! [`PagingEngine`] translates logical addresses of a single simulated
//! process into physical frames, faulting pages in on demand and evicting in
//! FIFO order once every frame is taken. The engine never prints; callers
//! inspect the returned [`Translation`] and the read-only views
//! ([`PagingEngine::frames`], [`PagingEngine::page_table`]) to show state.

pub mod config;
pub mod engine;
pub mod error;
pub mod frame_store;
pub mod page_replacer;
pub mod page_table;


pub use config::SimulationConfig;
pub use engine::{Access, EngineStats, Eviction, PagingEngine, Translation};
pub use error::{PagingError, Result};
