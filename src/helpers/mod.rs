pub mod ewma;
pub mod p2;
