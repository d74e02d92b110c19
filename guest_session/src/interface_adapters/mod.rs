pub mod clients;
pub mod clock;
pub mod protocol;
pub mod storage;
