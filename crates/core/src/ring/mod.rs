pub mod ring;
pub mod weight;
