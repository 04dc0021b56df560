#[cfg(test)]
pub mod purchase;
