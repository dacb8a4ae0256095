pub mod excel;
pub mod postman;
