pub mod cli;
pub mod report;
pub mod scan;
pub mod wav;
