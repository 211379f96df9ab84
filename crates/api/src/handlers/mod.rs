pub mod catalog;
pub mod journal;
pub mod pages;
pub mod photos;
