pub mod realestate;
