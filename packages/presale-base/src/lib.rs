pub mod error;

pub mod presale {
    pub mod msg;
    pub mod state;
    pub mod types;
}
