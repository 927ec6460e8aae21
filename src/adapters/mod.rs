pub mod delivery;
pub mod storage;
