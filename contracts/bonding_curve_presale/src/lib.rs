pub mod contract;

pub mod helpers;
pub mod math;
pub mod querier;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}
