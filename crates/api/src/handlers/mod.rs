pub mod preparation;
