pub mod even_odd;
pub mod ext;
pub mod interval;
